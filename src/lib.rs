//! Movie Catalog - Main Library
//!
//! Movie Catalog is a native desktop client for a remote movie catalog API,
//! built with egui/eframe on top of a tokio runtime and a reqwest HTTP client.
//!
//! # Overview
//!
//! This library provides the core functionality for the client, including:
//! - A paginated, sortable and searchable movie list with debounced search
//! - Admin-only create, edit and delete of movie records
//! - JWT-based login and signup with a cookie-like persisted token
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types
//!   - Movie records, list queries, pagination results
//!   - Auth payloads and token claims
//!   - Configuration and error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Token store and API client
//!   - List controller, edit/create workflow, auth workflow
//!   - Views and theme
//!
//! # Usage
//!
//! ```rust,no_run
//! use movie_catalog::egui_app::{ApiClient, Config, ListController, TokenStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load()?;
//! let tokens = TokenStore::open(config.token_path())?;
//! let api = ApiClient::new(&config, tokens)?;
//!
//! let mut list = ListController::new(api, tokio::runtime::Handle::current(), &config);
//! list.reload();
//! list.next_event().await;
//! println!("{} movies", list.total_movies());
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **UI**: egui is a single-threaded immediate mode GUI; controller state is
//!   only mutated from the UI thread when it drains its event channels
//! - **Network**: requests and debounce timers run as tokio tasks and report
//!   back through channels
//! - **Token store**: shared between the UI and request tasks behind `Arc<RwLock<>>`

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
