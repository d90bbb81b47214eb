use eframe::egui;

use crate::egui_app::navigation::Route;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod confirm_modal;
pub mod group_detail_view;
pub mod placeholder_view;
pub mod post_preview_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("모임").size(18.0).strong());
                ui.add_space(12.0);
                ui.colored_label(colors::TEXT_SECONDARY, state.route.path());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.is_signed_in() {
                        if ui.button("로그아웃").clicked() {
                            state.sign_out();
                        }
                    } else {
                        if ui.button("로그인").clicked() {
                            state.sign_in();
                        }
                        ui.add(
                            egui::TextEdit::singleline(&mut state.token_input)
                                .password(true)
                                .hint_text("access token")
                                .desired_width(160.0),
                        );
                    }

                    ui.add_space(16.0);

                    if ui.button("이동").clicked() {
                        state.open_group_input();
                    }
                    let input = ui.add(
                        egui::TextEdit::singleline(&mut state.group_id_input)
                            .hint_text("모임 번호")
                            .desired_width(80.0),
                    );
                    if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        state.open_group_input();
                    }
                });
            });

            if let Some(notice) = &state.notice {
                ui.colored_label(colors::ERROR, notice);
            }
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::main_area_frame())
        .show(ctx, |ui| match state.route.clone() {
            Route::GroupDetail(_) => group_detail_view::render(ui, state),
            other => placeholder_view::render(ui, state, &other),
        });
}
