/**
 * Moim Desktop App - Main Entry Point
 *
 * Loads configuration and the saved session, then runs the egui shell
 * around the group detail page.
 */
use eframe::egui;
use moim::egui_app::{views, AppState, Config, SessionStore};
use moim::egui_app::theme::styles;

/// Font files tried in order when `MOIM_FONT` is not set
const HANGUL_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

/// Install a system font with Hangul glyphs ahead of the defaults
fn setup_custom_fonts(ctx: &egui::Context) {
    let candidates = std::env::var("MOIM_FONT").into_iter().chain(HANGUL_FONTS.iter().map(|p| p.to_string()));
    let Some(bytes) = candidates.into_iter().find_map(|path| std::fs::read(path).ok()) else {
        tracing::warn!("[STARTUP] No Hangul font found; set MOIM_FONT to a .ttf file");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "Hangul".to_owned(),
        std::sync::Arc::new(egui::FontData::from_owned(bytes)),
    );
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, "Hangul".to_owned());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push("Hangul".to_owned());

    ctx.set_fonts(fonts);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::from_env()?;
    let session_path = config
        .app()
        .session_path
        .clone()
        .unwrap_or_else(SessionStore::default_path);
    let session = SessionStore::open(session_path)?;
    let mut state = AppState::new(config, session)?;

    if let Some(route) = std::env::args().nth(1).as_deref().and_then(moim::egui_app::Route::parse) {
        state.open(route);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "모임",
        options,
        Box::new(|cc| {
            setup_custom_fonts(&cc.egui_ctx);
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(MoimApp { state }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct MoimApp {
    state: AppState,
}

impl eframe::App for MoimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_navigation();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
