/**
 * egui Native Desktop App - Main Entry Point
 *
 * Desktop editor for ranks and tags. Implements eframe::App over the shared
 * AppState and drains background results once per frame.
 */
use std::time::Duration;

use eframe::egui;
use superior_editor::egui_app::theme::styles;
use superior_editor::egui_app::{views, AppState};

/// Upper bound between frames so poll and submit results show up without input
const REPAINT_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let state = AppState::new()?;
    tracing::info!("[STARTUP] Editor using API at {}", state.config.server_url());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Superior Editor",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(EditorApp { state }))
        }),
    )?;
    Ok(())
}

struct EditorApp {
    state: AppState,
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.pump();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
