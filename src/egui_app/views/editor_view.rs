use eframe::egui;
use uuid::Uuid;

use crate::egui_app::state::EditorSession;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::{EditorTab, PendingDelete, RankForm, TagForm};
use crate::egui_app::pending::EditStatus;
use crate::shared::{Rank, Tag};

/// Deferred card/banner actions, applied after the list is drawn
enum Action {
    EditRank(Rank),
    EditTag(Tag),
    Delete(PendingDelete),
    RetryEdit(Uuid),
    DismissEdit(Uuid),
}

pub fn render(ui: &mut egui::Ui, session: &mut EditorSession) {
    let mut actions = Vec::new();

    render_fetch_banner(ui, session);
    render_failed_edits(ui, session, &mut actions);

    if !session.editor.is_loaded() {
        if session.fetch_error.is_none() {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.spinner();
                ui.colored_label(colors::TEXT_LIGHT, "Loading snapshot...");
            });
        }
        apply_actions(session, actions);
        return;
    }

    render_toolbar(ui, session);
    ui.add_space(8.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| match session.tab {
            EditorTab::Ranks => render_ranks(ui, session, &mut actions),
            EditorTab::Tags => render_tags(ui, session, &mut actions),
        });

    apply_actions(session, actions);

    let ctx = ui.ctx().clone();
    render_rank_form(&ctx, session);
    render_tag_form(&ctx, session);
    render_delete_confirm(&ctx, session);
}

fn apply_actions(session: &mut EditorSession, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::EditRank(rank) => {
                session.form_error = None;
                session.rank_form = Some(RankForm::edit(&rank));
            }
            Action::EditTag(tag) => {
                session.form_error = None;
                session.tag_form = Some(TagForm::edit(&tag));
            }
            Action::Delete(target) => session.confirm_delete = Some(target),
            Action::RetryEdit(id) => session.retry_edit(id),
            Action::DismissEdit(id) => session.dismiss_edit(id),
        }
    }
}

fn render_fetch_banner(ui: &mut egui::Ui, session: &mut EditorSession) {
    let Some(error) = session.fetch_error.clone() else {
        return;
    };

    styles::banner_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.colored_label(colors::TEXT_LIGHT, error.to_string());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Retry").clicked() {
                    session.retry_fetch();
                }
                if session.session_missing() {
                    let upload = ui.add_enabled(
                        !session.is_uploading(),
                        egui::Button::new("Upload demo data"),
                    );
                    if upload.clicked() {
                        session.upload_demo();
                    }
                }
            });
        });
    });
    ui.add_space(8.0);
}

fn render_failed_edits(ui: &mut egui::Ui, session: &EditorSession, actions: &mut Vec<Action>) {
    for edit in session.editor.failed_edits() {
        let EditStatus::Failed { reason } = &edit.status else {
            continue;
        };
        styles::banner_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    format!("{} was not saved: {}", edit.summary, reason),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        actions.push(Action::DismissEdit(edit.id));
                    }
                    if ui.button("Retry").clicked() {
                        actions.push(Action::RetryEdit(edit.id));
                    }
                });
            });
        });
        ui.add_space(4.0);
    }
}

fn render_toolbar(ui: &mut egui::Ui, session: &mut EditorSession) {
    ui.horizontal(|ui| {
        let ranks = format!("Ranks ({})", session.editor.ranks().len());
        let tags = format!("Tags ({})", session.editor.tags().len());
        ui.selectable_value(&mut session.tab, EditorTab::Ranks, ranks);
        ui.selectable_value(&mut session.tab, EditorTab::Tags, tags);

        ui.add_space(16.0);
        ui.add(
            egui::TextEdit::singleline(&mut session.editor.filter)
                .hint_text("Filter by id or name")
                .desired_width(240.0),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = match session.tab {
                EditorTab::Ranks => "Create Rank",
                EditorTab::Tags => "Create Tag",
            };
            if ui.add(styles::primary_button(label)).clicked() {
                session.form_error = None;
                match session.tab {
                    EditorTab::Ranks => session.rank_form = Some(RankForm::create()),
                    EditorTab::Tags => session.tag_form = Some(TagForm::create()),
                }
            }
        });
    });
}

fn render_ranks(ui: &mut egui::Ui, session: &EditorSession, actions: &mut Vec<Action>) {
    let ranks = session.editor.visible_ranks();
    if ranks.is_empty() {
        ui.colored_label(colors::TEXT_LIGHT, "No ranks match.");
        return;
    }

    for rank in ranks {
        styles::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let name_color = colors::legacy_color(&rank.color).unwrap_or(colors::TEXT_DARK);
                ui.label(egui::RichText::new(&rank.name).size(18.0).strong().color(name_color));
                if rank.default {
                    ui.colored_label(colors::SUCCESS, "default");
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(styles::danger_button("Delete")).clicked() {
                        actions.push(Action::Delete(PendingDelete::Rank(rank.id.clone())));
                    }
                    if ui.button("Edit").clicked() {
                        actions.push(Action::EditRank(rank.clone()));
                    }
                });
            });
            ui.colored_label(
                colors::TEXT_MUTED,
                format!("{} · weight {}", rank.id, rank.weight),
            );
            ui.monospace(rank.preview());
            if !rank.permissions.is_empty() {
                ui.colored_label(colors::TEXT_MUTED, rank.permissions.join(", "));
            }
        });
        ui.add_space(6.0);
    }
}

fn render_tags(ui: &mut egui::Ui, session: &EditorSession, actions: &mut Vec<Action>) {
    let tags = session.editor.visible_tags();
    if tags.is_empty() {
        ui.colored_label(colors::TEXT_LIGHT, "No tags match.");
        return;
    }

    for tag in tags {
        styles::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&tag.display_name).size(18.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(styles::danger_button("Delete")).clicked() {
                        actions.push(Action::Delete(PendingDelete::Tag(tag.id.clone())));
                    }
                    if ui.button("Edit").clicked() {
                        actions.push(Action::EditTag(tag.clone()));
                    }
                });
            });
            ui.colored_label(
                colors::TEXT_MUTED,
                format!("{} · priority {}", tag.id, tag.priority),
            );
            ui.monospace(tag.preview());
        });
        ui.add_space(6.0);
    }
}

fn form_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.text_edit_singleline(value);
    ui.end_row();
}

fn render_rank_form(ctx: &egui::Context, session: &mut EditorSession) {
    let Some(form) = session.rank_form.as_mut() else {
        return;
    };
    let title = if form.original_id.is_some() { "Edit Rank" } else { "Create Rank" };
    let mut save = false;
    let mut cancel = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            egui::Grid::new("rank_form").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
                form_row(ui, "Id", &mut form.id);
                form_row(ui, "Name", &mut form.name);
                form_row(ui, "Prefix", &mut form.prefix);
                form_row(ui, "Suffix", &mut form.suffix);
                form_row(ui, "Color", &mut form.color);
                form_row(ui, "Weight", &mut form.weight);
                form_row(ui, "Permissions", &mut form.permissions);
                ui.label("Default");
                ui.checkbox(&mut form.default, "");
                ui.end_row();
            });

            if let Some(error) = &session.form_error {
                ui.colored_label(colors::ERROR, error.as_str());
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                save = ui.add(styles::primary_button("Save")).clicked();
                cancel = ui.button("Cancel").clicked();
            });
        });

    if save {
        session.save_rank_form();
    } else if cancel {
        session.rank_form = None;
        session.form_error = None;
    }
}

fn render_tag_form(ctx: &egui::Context, session: &mut EditorSession) {
    let Some(form) = session.tag_form.as_mut() else {
        return;
    };
    let title = if form.original_id.is_some() { "Edit Tag" } else { "Create Tag" };
    let mut save = false;
    let mut cancel = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            egui::Grid::new("tag_form").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
                form_row(ui, "Id", &mut form.id);
                form_row(ui, "Display name", &mut form.display_name);
                form_row(ui, "Prefix", &mut form.prefix);
                form_row(ui, "Suffix", &mut form.suffix);
                form_row(ui, "Priority", &mut form.priority);
            });

            if let Some(error) = &session.form_error {
                ui.colored_label(colors::ERROR, error.as_str());
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                save = ui.add(styles::primary_button("Save")).clicked();
                cancel = ui.button("Cancel").clicked();
            });
        });

    if save {
        session.save_tag_form();
    } else if cancel {
        session.tag_form = None;
        session.form_error = None;
    }
}

fn render_delete_confirm(ctx: &egui::Context, session: &mut EditorSession) {
    let Some(target) = session.confirm_delete.as_ref() else {
        return;
    };
    let question = match target {
        PendingDelete::Rank(id) => format!("Delete rank '{}'?", id),
        PendingDelete::Tag(id) => format!("Delete tag '{}'?", id),
    };
    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Confirm delete")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(question);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                confirmed = ui.add(styles::danger_button("Delete")).clicked();
                cancelled = ui.button("Cancel").clicked();
            });
        });

    if confirmed {
        session.confirm_pending_delete();
    } else if cancelled {
        session.confirm_delete = None;
    }
}
