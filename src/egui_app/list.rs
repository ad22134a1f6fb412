//! # List Controller
//!
//! Keeps the rendered movie list consistent with `{search, sort, order, page}`
//! while keeping redundant requests down during fast typing.
//!
//! ## Event model
//!
//! The controller is only mutated from the UI thread. Debounce timers and list
//! requests run as tokio tasks and report back as [`ListEvent`]s on a channel:
//!
//! - [`ListController::poll`] drains the channel without blocking (once per frame)
//! - [`ListController::next_event`] awaits a single event (headless drivers, tests)
//!
//! ## Ordering
//!
//! Every fetch gets a sequence number. Only the response to the most recently
//! issued fetch is applied; earlier responses that arrive late are discarded.
//!
//! ## Usage
//!
//! ```rust,no_run
//! # use movie_catalog::egui_app::{ApiClient, Config, ListController, TokenStore};
//! # use movie_catalog::shared::SortField;
//! # async fn example(api: ApiClient, config: Config) {
//! let mut list = ListController::new(api, tokio::runtime::Handle::current(), &config);
//! list.reload();
//! list.set_sort(SortField::Rating);
//! list.set_search("alien");
//!
//! while list.is_fetching() || list.search_pending() {
//!     list.next_event().await;
//! }
//! # }
//! ```

use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::egui_app::api::{ApiClient, ApiError};
use crate::egui_app::config::Config;
use crate::egui_app::debounce::Debouncer;
use crate::shared::movie::{Movie, MoviePage, Pagination};
use crate::shared::query::{ListQuery, SortField, SortOrder};

/// Message shown when a list fetch fails
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load movies.";

/// Events posted back to the controller by its background tasks
#[derive(Debug)]
pub enum ListEvent {
    /// The debounce window of the search edit numbered `generation` elapsed
    SearchSettled { generation: u64 },
    /// A list request completed
    Fetched {
        seq: u64,
        result: Result<MoviePage, ApiError>,
    },
}

/// What handling an event did to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    /// A settled search issued a fetch
    FetchIssued { seq: u64 },
    /// The latest fetch succeeded and its page is now shown
    Loaded { seq: u64 },
    /// The latest fetch failed; previous items are still shown
    Failed { seq: u64, message: String },
    /// A response to a superseded fetch was dropped
    Discarded { seq: u64 },
}

/// Search/sort/pagination state machine for the movie list
pub struct ListController {
    api: ApiClient,
    handle: Handle,
    query: ListQuery,
    movies: Vec<Movie>,
    pagination: Pagination,
    has_data: bool,
    /// Sequence number of the most recently issued fetch
    issued_seq: u64,
    /// Set while the most recently issued fetch is unresolved
    pending: Option<u64>,
    last_error: Option<String>,
    debouncer: Debouncer,
    /// Number of the latest search edit
    search_generation: u64,
    /// Set from a search edit until its settle event is handled
    scheduled_search: Option<u64>,
    events_tx: UnboundedSender<ListEvent>,
    events_rx: UnboundedReceiver<ListEvent>,
}

impl ListController {
    pub fn new(api: ApiClient, handle: Handle, config: &Config) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        let debouncer = Debouncer::new(config.debounce(), handle.clone());
        tracing::debug!(
            debounce_ms = debouncer.window().as_millis() as u64,
            page_size = config.page_size(),
            "list controller ready"
        );
        Self {
            api,
            debouncer,
            handle,
            query: ListQuery::with_limit(config.page_size()),
            movies: Vec::new(),
            pagination: Pagination::default(),
            has_data: false,
            issued_seq: 0,
            pending: None,
            last_error: None,
            search_generation: 0,
            scheduled_search: None,
            events_tx,
            events_rx,
        }
    }

    /// Update the search text now; fetch once typing pauses.
    ///
    /// The field reflects every keystroke immediately. Each call replaces any
    /// fetch scheduled by an earlier call that has not fired yet.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
        self.search_generation += 1;
        let generation = self.search_generation;
        self.scheduled_search = Some(generation);
        let tx = self.events_tx.clone();
        self.debouncer.schedule(move || {
            let _ = tx.send(ListEvent::SearchSettled { generation });
        });
    }

    /// Sort by `field`, descending, from page 1. Fetches immediately.
    pub fn set_sort(&mut self, field: SortField) -> u64 {
        self.query.apply_sort(field);
        self.fetch()
    }

    /// Flip the sort direction and restart from page 1. Fetches immediately.
    pub fn toggle_order(&mut self) -> u64 {
        self.query.toggle_order();
        self.fetch()
    }

    /// Jump to `page`, keeping search and sort. Fetches immediately.
    pub fn set_page(&mut self, page: u32) -> u64 {
        self.query.apply_page(page);
        self.fetch()
    }

    /// Fetch again with the current query
    pub fn reload(&mut self) -> u64 {
        self.fetch()
    }

    /// Back to the default query; pending searches and in-flight responses are dropped
    pub fn reset(&mut self) {
        self.debouncer.cancel();
        self.scheduled_search = None;
        self.query = ListQuery::with_limit(self.query.limit);
        // Bumping the sequence makes any in-flight response stale.
        self.issued_seq += 1;
        self.pending = None;
    }

    /// Handle every event that is ready, without blocking
    pub fn poll(&mut self) -> Vec<ListOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            outcomes.extend(self.handle_event(event));
        }
        outcomes
    }

    /// Wait for the next event that changes the controller and handle it
    pub async fn next_event(&mut self) -> Option<ListOutcome> {
        loop {
            let event = self.events_rx.recv().await?;
            if let Some(outcome) = self.handle_event(event) {
                return Some(outcome);
            }
        }
    }

    fn handle_event(&mut self, event: ListEvent) -> Option<ListOutcome> {
        match event {
            ListEvent::SearchSettled { generation } if self.scheduled_search != Some(generation) => {
                // Queued before a reset, or a later keystroke rearmed the timer
                tracing::debug!(generation, "ignoring settle for a superseded search");
                None
            }
            ListEvent::SearchSettled { .. } => {
                self.scheduled_search = None;
                self.query.settle_search();
                let seq = self.fetch();
                Some(ListOutcome::FetchIssued { seq })
            }
            ListEvent::Fetched { seq, result } => Some(self.apply_response(seq, result)),
        }
    }

    fn apply_response(&mut self, seq: u64, result: Result<MoviePage, ApiError>) -> ListOutcome {
        if seq != self.issued_seq {
            tracing::debug!(seq, latest = self.issued_seq, "discarding stale list response");
            return ListOutcome::Discarded { seq };
        }
        self.pending = None;

        match result {
            Ok(page) => {
                tracing::debug!(
                    seq,
                    count = page.movies.len(),
                    total_pages = page.pagination.total_pages,
                    "movie list loaded"
                );
                self.movies = page.movies;
                self.pagination = page.pagination;
                self.has_data = true;
                self.last_error = None;
                ListOutcome::Loaded { seq }
            }
            Err(e) => {
                tracing::error!(seq, error = %e, "error fetching movies");
                self.last_error = Some(e.to_string());
                ListOutcome::Failed {
                    seq,
                    message: LOAD_FAILED_MESSAGE.to_string(),
                }
            }
        }
    }

    fn fetch(&mut self) -> u64 {
        self.issued_seq += 1;
        let seq = self.issued_seq;
        self.pending = Some(seq);

        let api = self.api.clone();
        let query = self.query.clone();
        let tx = self.events_tx.clone();
        tracing::debug!(
            seq,
            search = %query.search,
            sort = ?query.sort,
            order = %query.order,
            page = query.page,
            "fetching movie list"
        );

        self.handle.spawn(async move {
            let result = api.list_movies(&query).await;
            let _ = tx.send(ListEvent::Fetched { seq, result });
        });
        seq
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn search(&self) -> &str {
        &self.query.search
    }

    pub fn sort(&self) -> SortField {
        self.query.sort
    }

    pub fn order(&self) -> SortOrder {
        self.query.order
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages
    }

    pub fn total_movies(&self) -> u64 {
        self.pagination.total_movies
    }

    /// Whether a page has ever loaded successfully
    pub fn has_data(&self) -> bool {
        self.has_data
    }

    /// First load in flight; the only time a spinner replaces the list
    pub fn is_loading(&self) -> bool {
        self.pending.is_some() && !self.has_data
    }

    /// Reload in flight while the previous page stays on screen
    pub fn is_refreshing(&self) -> bool {
        self.pending.is_some() && self.has_data
    }

    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a search edit has not turned into a fetch yet
    pub fn search_pending(&self) -> bool {
        self.scheduled_search.is_some()
    }

    /// Error from the latest fetch, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
