use eframe::egui;
use parking_lot::Mutex;
use std::sync::Arc;

mod assistant;
mod dispatch;
mod icons;
mod simple_md;
mod style;
mod types;
mod utils;
mod widgets;

use assistant::{AssistantWindow, WINDOW_TITLE};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    init_tracing();

    let settings = utils::load_settings_or_default();
    let mut window = AssistantWindow::from_settings(&settings);
    window.show();
    tracing::info!(
        visible = window.is_visible(),
        size = ?window.geometry(),
        "Starting assistant panel"
    );

    let options = eframe::NativeOptions {
        viewport: window.viewport_builder(),
        vsync: true,
        ..Default::default()
    };

    let window = Arc::new(Mutex::new(window));
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            window.lock().load_icons(&cc.egui_ctx);
            Box::new(QuickAssistApp { window })
        }),
    )
}

struct QuickAssistApp {
    window: Arc<Mutex<AssistantWindow>>,
}

impl eframe::App for QuickAssistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.window.lock().ui(ctx);
    }

    // Translucent panel: let the desktop show through
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }
}
