use eframe::egui;

use crate::egui_app::group_detail::messages;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Delete confirmation. Closing the window counts as cancel.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let mut open = true;
    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new(messages::DELETE_CONFIRM_TITLE)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            ui.colored_label(colors::TEXT_DARK, messages::DELETE_CONFIRM_BODY);
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.add(styles::filled_button("취소", colors::BUTTON_SECONDARY)).clicked() {
                    cancelled = true;
                }
                if ui.add(styles::filled_button("삭제", colors::BUTTON_DANGER)).clicked() {
                    confirmed = true;
                }
            });
        });

    if confirmed {
        state.confirm_delete();
    } else if cancelled || !open {
        state.act(|c| {
            c.cancel_delete();
            Ok(())
        });
    }
}
