//! Edit/Create Workflow
//!
//! Holds the draft behind the "Edit Movie" dialog and the "Add New Movie"
//! form, submits it, and runs the delete confirmation. Requests run on the
//! tokio runtime; results come back through [`MovieEditor::poll`] (per frame)
//! or [`MovieEditor::wait`].
//!
//! Successful mutations ask for a list reload via [`EditorOutcome::needs_reload`].
//! Nothing is removed or inserted locally ahead of the server.

use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::egui_app::api::ApiClient;
use crate::shared::error::SharedError;
use crate::shared::movie::{Movie, NewMovie};

/// Editable movie fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieField {
    Title,
    BannerImage,
    Description,
    Year,
    Rating,
    RunTime,
}

impl MovieField {
    pub const ALL: [MovieField; 6] = [
        MovieField::Title,
        MovieField::BannerImage,
        MovieField::Description,
        MovieField::Year,
        MovieField::Rating,
        MovieField::RunTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MovieField::Title => "Title",
            MovieField::BannerImage => "Banner Image URL",
            MovieField::Description => "Description",
            MovieField::Year => "Year",
            MovieField::Rating => "Rating",
            MovieField::RunTime => "Run Time (mins)",
        }
    }

    /// Wire name, used in validation errors
    pub fn key(&self) -> &'static str {
        match self {
            MovieField::Title => "title",
            MovieField::BannerImage => "bannerImage",
            MovieField::Description => "description",
            MovieField::Year => "year",
            MovieField::Rating => "rating",
            MovieField::RunTime => "runTime",
        }
    }
}

/// Form state: every field as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieDraft {
    pub id: Option<String>,
    pub title: String,
    pub banner_image: String,
    pub description: String,
    pub year: String,
    pub rating: String,
    pub run_time: String,
}

impl MovieDraft {
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            id: Some(movie.id.clone()),
            title: movie.title.clone(),
            banner_image: movie.banner_image.clone(),
            description: movie.description.clone(),
            year: movie.year.to_string(),
            rating: movie.rating.to_string(),
            run_time: movie.run_time.to_string(),
        }
    }

    pub fn field(&self, field: MovieField) -> &str {
        match field {
            MovieField::Title => &self.title,
            MovieField::BannerImage => &self.banner_image,
            MovieField::Description => &self.description,
            MovieField::Year => &self.year,
            MovieField::Rating => &self.rating,
            MovieField::RunTime => &self.run_time,
        }
    }

    pub fn field_mut(&mut self, field: MovieField) -> &mut String {
        match field {
            MovieField::Title => &mut self.title,
            MovieField::BannerImage => &mut self.banner_image,
            MovieField::Description => &mut self.description,
            MovieField::Year => &mut self.year,
            MovieField::Rating => &mut self.rating,
            MovieField::RunTime => &mut self.run_time,
        }
    }

    /// Validate into a create payload
    pub fn to_new_movie(&self) -> Result<NewMovie, SharedError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(SharedError::validation(MovieField::Title.key(), "Title is required"));
        }

        let year: i32 = self
            .year
            .trim()
            .parse()
            .map_err(|_| SharedError::validation(MovieField::Year.key(), "Year must be a whole number"))?;

        let rating: f64 = self
            .rating
            .trim()
            .parse()
            .map_err(|_| SharedError::validation(MovieField::Rating.key(), "Rating must be a number"))?;
        if !(1.0..=5.0).contains(&rating) {
            return Err(SharedError::validation(
                MovieField::Rating.key(),
                "Rating must be between 1 and 5",
            ));
        }

        let run_time: u32 = self.run_time.trim().parse().map_err(|_| {
            SharedError::validation(MovieField::RunTime.key(), "Run time must be a whole number of minutes")
        })?;

        Ok(NewMovie {
            title: title.to_string(),
            banner_image: self.banner_image.trim().to_string(),
            description: self.description.trim().to_string(),
            year,
            rating,
            run_time,
        })
    }
}

/// Whether the editor is closed, creating, or editing an existing record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Closed,
    Create,
    Edit { id: String },
}

/// Result of a submission or deletion
#[derive(Debug, Clone, PartialEq)]
pub enum EditorOutcome {
    Created(Movie),
    CreateFailed(String),
    Updated(Movie),
    UpdateFailed(String),
    Deleted(String),
    DeleteFailed { id: String, error: String },
}

impl EditorOutcome {
    /// User-facing message
    pub fn message(&self) -> &'static str {
        match self {
            EditorOutcome::Created(_) => "Movie created successfully!",
            EditorOutcome::CreateFailed(_) => "Failed to create movie.",
            EditorOutcome::Updated(_) => "Movie updated successfully!",
            EditorOutcome::UpdateFailed(_) => "Failed to update movie.",
            EditorOutcome::Deleted(_) => "Movie deleted successfully!",
            EditorOutcome::DeleteFailed { .. } => "Failed to delete movie.",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            EditorOutcome::Created(_) | EditorOutcome::Updated(_) | EditorOutcome::Deleted(_)
        )
    }

    /// Successful mutations invalidate the list
    pub fn needs_reload(&self) -> bool {
        self.is_success()
    }
}

/// An in-flight operation and the editor mode it was started from
struct PendingOperation {
    origin: EditorMode,
    receiver: oneshot::Receiver<EditorOutcome>,
}

/// Draft, dialog and delete-confirmation state
pub struct MovieEditor {
    api: ApiClient,
    handle: Handle,
    mode: EditorMode,
    draft: MovieDraft,
    confirm_delete: Option<String>,
    pending: Option<PendingOperation>,
}

impl MovieEditor {
    pub fn new(api: ApiClient, handle: Handle) -> Self {
        Self {
            api,
            handle,
            mode: EditorMode::Closed,
            draft: MovieDraft::default(),
            confirm_delete: None,
            pending: None,
        }
    }

    /// Load a full copy of `movie` and open the dialog
    pub fn open_for_edit(&mut self, movie: &Movie) {
        self.draft = MovieDraft::from_movie(movie);
        self.mode = EditorMode::Edit { id: movie.id.clone() };
    }

    /// Start from an all-empty draft
    pub fn open_for_create(&mut self) {
        self.draft = MovieDraft::default();
        self.mode = EditorMode::Create;
    }

    /// Close the dialog and drop the draft
    pub fn close(&mut self) {
        self.mode = EditorMode::Closed;
        self.draft = MovieDraft::default();
    }

    /// Replace one field, keeping the rest
    pub fn set_field(&mut self, field: MovieField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
    }

    pub fn draft(&self) -> &MovieDraft {
        &self.draft
    }

    /// Direct access for text inputs bound to the draft
    pub fn draft_mut(&mut self) -> &mut MovieDraft {
        &mut self.draft
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditorMode::Closed
    }

    /// A submission or deletion is in flight
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the draft and send it.
    ///
    /// Create mode posts the draft without an id; edit mode puts the full
    /// record. Validation errors are returned without a request. A submit while
    /// another operation is in flight is ignored.
    pub fn submit(&mut self) -> Result<(), SharedError> {
        if self.is_busy() {
            tracing::debug!("submit ignored, operation in flight");
            return Ok(());
        }
        let payload = self.draft.to_new_movie()?;
        let api = self.api.clone();

        let task = match self.mode {
            EditorMode::Closed => {
                tracing::warn!("submit with no open editor");
                return Ok(());
            }
            EditorMode::Create => self.spawn(async move {
                match api.create_movie(&payload).await {
                    Ok(movie) => {
                        tracing::info!(id = %movie.id, "movie created");
                        EditorOutcome::Created(movie)
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "error creating movie");
                        EditorOutcome::CreateFailed(e.to_string())
                    }
                }
            }),
            EditorMode::Edit { ref id } => {
                let movie = Movie::from_new(id.clone(), payload);
                self.spawn(async move {
                    match api.update_movie(&movie).await {
                        Ok(updated) => {
                            tracing::info!(id = %updated.id, "movie updated");
                            EditorOutcome::Updated(updated)
                        }
                        Err(e) => {
                            tracing::error!(id = %movie.id, error = %e, "error updating movie");
                            EditorOutcome::UpdateFailed(e.to_string())
                        }
                    }
                })
            }
        };
        self.pending = Some(PendingOperation {
            origin: self.mode.clone(),
            receiver: task,
        });
        Ok(())
    }

    /// Ask for confirmation before deleting `id`
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.confirm_delete = Some(id.into());
    }

    /// Id awaiting confirmation, if any
    pub fn pending_confirmation(&self) -> Option<&str> {
        self.confirm_delete.as_deref()
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    /// Send the confirmed delete. Returns false if nothing awaited confirmation.
    pub fn confirm_delete(&mut self) -> bool {
        if self.is_busy() {
            tracing::debug!("delete ignored, operation in flight");
            return false;
        }
        let Some(id) = self.confirm_delete.take() else {
            return false;
        };

        let api = self.api.clone();
        let task = self.spawn(async move {
            match api.delete_movie(&id).await {
                Ok(()) => {
                    tracing::info!(id = %id, "movie deleted");
                    EditorOutcome::Deleted(id)
                }
                Err(e) => {
                    tracing::error!(id = %id, error = %e, "error deleting movie");
                    EditorOutcome::DeleteFailed {
                        id,
                        error: e.to_string(),
                    }
                }
            }
        });
        self.pending = Some(PendingOperation {
            origin: self.mode.clone(),
            receiver: task,
        });
        true
    }

    /// Collect a finished operation, without blocking
    pub fn poll(&mut self) -> Option<EditorOutcome> {
        let pending = self.pending.as_mut()?;
        match pending.receiver.try_recv() {
            Ok(outcome) => {
                let origin = pending.origin.clone();
                self.pending = None;
                Some(self.apply(&origin, outcome))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                tracing::error!("editor task ended without a result");
                self.pending = None;
                None
            }
        }
    }

    /// Wait for the in-flight operation, if any
    pub async fn wait(&mut self) -> Option<EditorOutcome> {
        let pending = self.pending.take()?;
        match pending.receiver.await {
            Ok(outcome) => Some(self.apply(&pending.origin, outcome)),
            Err(_) => {
                tracing::error!("editor task ended without a result");
                None
            }
        }
    }

    fn apply(&mut self, origin: &EditorMode, outcome: EditorOutcome) -> EditorOutcome {
        // Create and update close the form they came from; failures keep the draft as typed
        let closes = matches!(outcome, EditorOutcome::Created(_) | EditorOutcome::Updated(_));
        if closes && &self.mode == origin {
            self.close();
        } else if closes {
            tracing::debug!(?origin, current = ?self.mode, "editor moved on, leaving it open");
        }
        outcome
    }

    fn spawn<F>(&self, operation: F) -> oneshot::Receiver<EditorOutcome>
    where
        F: std::future::Future<Output = EditorOutcome> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        self.handle.spawn(async move {
            let _ = tx.send(operation.await);
        });
        rx
    }
}
