use eframe::egui;

use crate::egui_app::AppView;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod editor_view;
pub mod landing_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("Superior Editor").size(18.0).strong(),
                );

                let Some(session) = state.session.as_ref() else {
                    return;
                };
                let in_flight = session.editor.in_flight();
                let last_submit = session.last_submit.clone();
                let editor_id = session.link.editor_id.clone();

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    if ui.button("Close").clicked() {
                        state.disconnect();
                        return;
                    }

                    ui.add_space(16.0);
                    if in_flight > 0 {
                        ui.colored_label(colors::WARNING, "Saving...");
                    } else if let Some(submit) = last_submit {
                        ui.colored_label(
                            colors::TEXT_LIGHT,
                            format!("Saved v{}", submit.version),
                        )
                        .on_hover_text(submit.download_url);
                    }

                    ui.add_space(16.0);
                    ui.colored_label(colors::TEXT_LIGHT, format!("Session {}", editor_id));
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_PRIMARY)
        .inner_margin(egui::Margin::same(16));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Landing => landing_view::render(ui, state),
            AppView::Editor => match state.session.as_mut() {
                Some(session) => editor_view::render(ui, session),
                None => state.current_view = AppView::Landing,
            },
        });
}
