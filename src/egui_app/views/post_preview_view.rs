use eframe::egui;

use crate::egui_app::group_detail::{messages, GroupDetailState, PostsState};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Board preview card: the first few posts and a link to the full board
pub fn render(ui: &mut egui::Ui, state: &mut AppState, detail: &GroupDetailState) {
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.colored_label(colors::TEXT_DARK, egui::RichText::new("게시판").size(18.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.link("전체 보기").clicked() {
                    state.act(|c| c.open_board());
                }
            });
        });
        ui.add_space(6.0);

        if detail.posts == PostsState::Loading {
            ui.spinner();
            return;
        }

        let posts = detail.preview();
        if posts.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, messages::NO_POSTS);
            return;
        }

        for post in posts {
            let hover_id = ui.id().with(("post_row", post.id));
            let was_hovered = ui.ctx().data(|d| d.get_temp::<bool>(hover_id)).unwrap_or(false);
            let row = styles::post_row_frame(was_hovered)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.colored_label(colors::TEXT_DARK, &post.title);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.colored_label(colors::TEXT_SECONDARY, post.created_at.format("%m-%d").to_string());
                            ui.colored_label(colors::TEXT_SECONDARY, &post.author);
                        });
                    });
                })
                .response
                .interact(egui::Sense::click());
            ui.ctx().data_mut(|d| d.insert_temp(hover_id, row.hovered()));
            if row.clicked() {
                let post_id = post.id;
                state.act(|c| c.open_post(post_id));
            }
        }
    });
}
