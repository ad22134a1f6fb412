//! egui Native Desktop App Module
//!
//! This module provides a native desktop client using egui/eframe that talks
//! to the movie catalog API.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration layering (defaults, file, environment)
//! - **`token_store`** - Cookie-like persisted auth token and role checks
//! - **`api`** - HTTP client for the movie and auth endpoints
//! - **`debounce`** - Cancellable deferred task used for search input
//! - **`list`** - Search/sort/pagination list controller
//! - **`editor`** - Edit/create/delete workflow
//! - **`auth`** - Login/signup/logout workflow
//! - **`notice`** - Dismissable user notices
//! - **`types`** - App views (route equivalents)
//! - **`state`** - Central state wiring the controllers together
//! - **`views`** / **`theme`** - Rendering
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration management
//! ├── token_store.rs  - Auth token persistence
//! ├── api.rs          - REST client
//! ├── debounce.rs     - Debounce timer
//! ├── list.rs         - List controller
//! ├── editor.rs       - Edit/create workflow
//! ├── auth.rs         - Auth workflow
//! ├── notice.rs       - Notices
//! ├── types.rs        - App views
//! ├── state/          - App state
//! ├── views/          - egui views
//! └── theme/          - Colors and frames
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin movies_app
//! ```

pub mod config;
pub mod token_store;
pub mod api;
pub mod debounce;
pub mod list;
pub mod editor;
pub mod auth;
pub mod notice;
pub mod types;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use token_store::{TokenStore, TokenStoreError};
pub use api::{ApiClient, ApiError};
pub use list::{ListController, ListEvent, ListOutcome};
pub use editor::{EditorMode, EditorOutcome, MovieDraft, MovieEditor, MovieField};
pub use auth::{AuthMode, AuthOutcome, AuthState, AuthWorkflow};
pub use notice::{Notice, NoticeBoard, NoticeLevel};
pub use types::AppView;
pub use state::AppState;
