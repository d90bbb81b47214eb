//! Theme Module
//!
//! Color scheme and frame builders shared by the views.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_DARK, "모임 소개");
//! });
//! ```

pub mod colors;
pub mod styles;
