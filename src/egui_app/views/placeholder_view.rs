use eframe::egui;

use crate::egui_app::navigation::Route;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

/// Routes owned by other pages; only the path is shown
pub fn render(ui: &mut egui::Ui, state: &mut AppState, route: &Route) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new(route.path()).size(22.0).strong());
        ui.add_space(12.0);
        ui.colored_label(colors::TEXT_SECONDARY, "상단에서 모임 번호를 입력하면 상세 페이지로 이동합니다.");

        if let Route::GroupJoin(id) | Route::GroupEdit(id) | Route::GroupBoard(id) | Route::GroupPost(id, _) = route {
            ui.add_space(20.0);
            if ui.button("모임으로 돌아가기").clicked() {
                state.open(Route::GroupDetail(id.clone()));
            }
        }
    });
}
