//! Theme Module
//!
//! Color scheme and styling for the editor:
//!
//! - Color constants for the purple gradient theme
//! - Legacy chat color code lookup for rank previews
//! - Frame and button builders
//!
//! # Usage
//!
//! ```rust,no_run
//! use superior_editor::egui_app::theme::{colors, styles};
//!
//! # fn example(ctx: &eframe::egui::Context, ui: &mut eframe::egui::Ui) {
//! styles::apply_global_theme(ctx);
//!
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::legacy_color("&c").unwrap_or(colors::TEXT_DARK), "Owner");
//! });
//! # }
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
