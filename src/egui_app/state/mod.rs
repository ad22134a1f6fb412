use std::time::Instant;

use tokio::runtime::Handle;

use crate::egui_app::{
    ApiClient, AppView, AuthOutcome, AuthWorkflow, Config, EditorOutcome, ListController, ListOutcome,
    MovieEditor, NoticeBoard,
};

/// Shown when a non-admin tries to open an admin-only view
pub const ADMIN_REQUIRED_MESSAGE: &str = "Admin access required.";

/// Central application state shared across egui views.
///
/// Owns the three controllers and routes their outcomes: notices for the
/// user, list reloads after mutations, navigation after auth.
pub struct AppState {
    pub config: Config,
    pub list: ListController,
    pub editor: MovieEditor,
    pub auth: AuthWorkflow,
    pub notices: NoticeBoard,
    pub current_view: AppView,
    pub email_input: String,
    pub password_input: String,
}

impl AppState {
    pub fn new(config: Config, api: ApiClient, handle: Handle) -> Self {
        let mut list = ListController::new(api.clone(), handle.clone(), &config);
        list.reload();
        tracing::info!(server = config.server_url(), "app state initialized");

        Self {
            list,
            editor: MovieEditor::new(api.clone(), handle.clone()),
            auth: AuthWorkflow::new(api, handle),
            config,
            notices: NoticeBoard::default(),
            current_view: AppView::MovieList,
            email_input: String::new(),
            password_input: String::new(),
        }
    }

    /// Derived from the current token on every call
    pub fn is_admin(&self) -> bool {
        self.auth.is_admin()
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth.is_logged_in()
    }

    /// Switch views, enforcing the admin gate
    pub fn navigate(&mut self, view: AppView) {
        let view = if view.requires_admin() && !self.is_admin() {
            tracing::warn!(%view, "admin-only view requested without admin role");
            self.notices.info(ADMIN_REQUIRED_MESSAGE);
            AppView::MovieList
        } else {
            view
        };
        if view == self.current_view {
            return;
        }

        tracing::debug!(from = %self.current_view, to = %view, "navigate");
        match self.current_view {
            AppView::MovieList => {
                self.list.reset();
                self.editor.close();
                self.editor.cancel_delete();
            }
            AppView::AddMovie => self.editor.close(),
            AppView::Login | AppView::Signup => {
                self.auth.clear_error();
                self.password_input.clear();
            }
        }

        self.current_view = view;
        match view {
            AppView::MovieList => {
                self.list.reload();
            }
            AppView::AddMovie => self.editor.open_for_create(),
            AppView::Login | AppView::Signup => self.auth.clear_error(),
        }
    }

    /// Re-run the role check and the list fetch after auth state changed
    pub fn reload_relevant_state(&mut self) {
        if self.current_view.requires_admin() && !self.is_admin() {
            self.navigate(AppView::MovieList);
            return;
        }
        if self.current_view == AppView::MovieList {
            self.list.reload();
        }
    }

    pub fn submit_login(&mut self) {
        let (email, password) = (self.email_input.clone(), self.password_input.clone());
        if let Err(e) = self.auth.login(&email, &password) {
            tracing::debug!(error = %e, "login rejected locally");
        }
    }

    pub fn submit_signup(&mut self) {
        let (email, password) = (self.email_input.clone(), self.password_input.clone());
        if let Err(e) = self.auth.signup(&email, &password) {
            tracing::debug!(error = %e, "signup rejected locally");
        }
    }

    pub fn submit_editor(&mut self) {
        if let Err(e) = self.editor.submit() {
            tracing::debug!(error = %e, "movie draft rejected");
            self.notices.error(e.to_string());
        }
    }

    pub fn logout(&mut self) {
        self.auth.logout();
        self.editor.close();
        self.editor.cancel_delete();
        self.notices.info("Logged out.");
        self.reload_relevant_state();
    }

    /// Drain every controller once; called at the start of each frame
    pub fn tick(&mut self) {
        for outcome in self.list.poll() {
            self.handle_list_outcome(outcome);
        }
        if let Some(outcome) = self.editor.poll() {
            self.handle_editor_outcome(outcome);
        }
        if let Some(outcome) = self.auth.poll() {
            self.handle_auth_outcome(outcome);
        }
        self.notices.expire(Instant::now());
    }

    pub fn handle_list_outcome(&mut self, outcome: ListOutcome) {
        if let ListOutcome::Failed { message, .. } = outcome {
            self.notices.error(message);
        }
    }

    pub fn handle_editor_outcome(&mut self, outcome: EditorOutcome) {
        if outcome.is_success() {
            self.notices.success(outcome.message());
        } else {
            self.notices.error(outcome.message());
        }

        if !outcome.needs_reload() {
            return;
        }
        match self.current_view {
            AppView::MovieList => {
                self.list.reload();
            }
            AppView::AddMovie if matches!(outcome, EditorOutcome::Created(_)) => {
                // Entering the list reloads it
                self.navigate(AppView::MovieList);
            }
            view => {
                tracing::debug!(%view, "list reload deferred until the list is shown again");
            }
        }
    }

    pub fn handle_auth_outcome(&mut self, outcome: AuthOutcome) {
        if outcome.is_success() {
            self.notices.success(outcome.message());
            self.password_input.clear();
            if self.current_view == AppView::MovieList {
                self.reload_relevant_state();
            } else {
                self.navigate(AppView::MovieList);
            }
        } else {
            self.notices.error(outcome.message());
        }
    }
}
