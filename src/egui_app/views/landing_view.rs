use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);

        ui.colored_label(
            colors::TEXT_LIGHT,
            egui::RichText::new("Superior Editor").size(48.0).strong(),
        );
        ui.add_space(10.0);
        ui.colored_label(
            colors::TEXT_LIGHT,
            egui::RichText::new("Edit your server's ranks and tags").size(20.0),
        );
        ui.add_space(40.0);

        styles::landing_frame().show(ui, |ui| {
            ui.set_max_width(520.0);
            ui.label("Paste the link from /superior web connect:");
            ui.add_space(8.0);

            let input = ui.add(
                egui::TextEdit::singleline(&mut state.link_input)
                    .hint_text("https://.../editor/{editorId}/{serverUuid}")
                    .desired_width(f32::INFINITY),
            );
            let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(12.0);
            let open = ui.add(styles::primary_button("Open Editor").min_size(egui::vec2(200.0, 40.0)));

            if submitted || open.clicked() {
                state.connect();
            }

            if let Some(error) = &state.landing_error {
                ui.add_space(12.0);
                ui.colored_label(colors::ERROR, error.as_str());
            }
        });
    });
}
