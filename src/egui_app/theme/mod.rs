//! Theme Module
//!
//! Color scheme and frame builders for the movie catalog UI:
//!
//! - Color constants for the dark catalog theme
//! - Frame builders for the top bar, movie cards, dialogs and notices
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//!
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_LIGHT, "Heat");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
