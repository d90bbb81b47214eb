use eframe::egui;

use crate::egui_app::group_detail::{CoordinatesState, GroupDetailState, GroupStatus, Phase};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::{confirm_modal, post_preview_view};
use crate::shared::{GroupAction, GroupDetail, RecruitStatus};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(detail) = state.detail() else {
        return;
    };

    egui::ScrollArea::vertical().show(ui, |ui| {
        match (&detail.group_status, &detail.group) {
            (GroupStatus::Idle, _) | (GroupStatus::Loading, None) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.colored_label(colors::TEXT_LIGHT, "모임 정보를 불러오는 중...");
                });
            }
            (GroupStatus::Failed(message), group) => {
                ui.horizontal(|ui| {
                    ui.colored_label(colors::ERROR, message);
                    if ui.button("다시 시도").clicked() {
                        state.refresh();
                    }
                });
                if let Some(group) = group {
                    ui.add_space(8.0);
                    render_summary(ui, group, &detail);
                }
            }
            (_, Some(group)) => {
                render_summary(ui, group, &detail);
                ui.add_space(12.0);
                render_actions(ui, state, group, &detail);
            }
            (GroupStatus::Loaded, None) => {}
        }

        ui.add_space(16.0);
        post_preview_view::render(ui, state, &detail);
    });

    if detail.phase() == Phase::ConfirmPending {
        confirm_modal::render(ui.ctx(), state);
    }
}

fn render_summary(ui: &mut egui::Ui, group: &GroupDetail, detail: &GroupDetailState) {
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.colored_label(colors::TEXT_DARK, egui::RichText::new(&group.name).size(24.0).strong());
            let badge = match group.recruit_status {
                RecruitStatus::Recruiting => colors::RECRUITING,
                RecruitStatus::Closed => colors::RECRUIT_CLOSED,
            };
            ui.colored_label(badge, group.recruit_status.label());
        });
        ui.colored_label(colors::TEXT_SECONDARY, &group.category_name);
        ui.add_space(8.0);

        egui::Grid::new("group_facts").num_columns(2).spacing([16.0, 4.0]).show(ui, |ui| {
            ui.colored_label(colors::TEXT_SECONDARY, "지역");
            ui.colored_label(colors::TEXT_DARK, group.address().to_string());
            ui.end_row();

            ui.colored_label(colors::TEXT_SECONDARY, "인원");
            ui.colored_label(colors::TEXT_DARK, group.member_label());
            ui.end_row();

            ui.colored_label(colors::TEXT_SECONDARY, "개설일");
            ui.colored_label(colors::TEXT_DARK, group.created_at.format("%Y-%m-%d").to_string());
            ui.end_row();
        });

        ui.add_space(8.0);
        ui.separator();
        ui.colored_label(colors::TEXT_DARK, &group.description);

        match &detail.coordinates {
            CoordinatesState::Loading(_) => {
                ui.add_space(8.0);
                ui.spinner();
            }
            CoordinatesState::Loaded(coordinates) => {
                ui.add_space(8.0);
                if let Some(link) = coordinates.map_link(&group.name) {
                    ui.hyperlink_to("지도에서 보기", link);
                }
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    format!("{}, {}", coordinates.latitude, coordinates.longitude),
                );
            }
            CoordinatesState::Idle | CoordinatesState::Unavailable => {}
        }
    });
}

/// Buttons follow the last detail's roles; they stay disabled until the page
/// is loaded again and no action is running.
fn render_actions(ui: &mut egui::Ui, state: &mut AppState, group: &GroupDetail, detail: &GroupDetailState) {
    let busy = detail.action_in_flight.is_some();
    let enabled = detail.accepts_actions();

    ui.horizontal(|ui| {
        for action in group.permitted_actions() {
            let fill = match action {
                GroupAction::Delete | GroupAction::Leave => colors::BUTTON_DANGER,
                GroupAction::Join | GroupAction::Edit => colors::BUTTON_PRIMARY,
            };
            let clicked = ui
                .add_enabled(enabled, styles::filled_button(action.label(), fill))
                .clicked();
            if !clicked {
                continue;
            }
            match action {
                GroupAction::Join => state.act(|c| c.request_join()),
                GroupAction::Edit => state.act(|c| c.request_edit()),
                GroupAction::Delete => state.act(|c| c.request_delete()),
                GroupAction::Leave => state.leave(),
            }
        }
        if busy {
            ui.spinner();
        }
    });

    if let Some(error) = &detail.action_error {
        ui.add_space(6.0);
        ui.colored_label(colors::ERROR, error);
    }
}
