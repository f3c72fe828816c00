//! Draws one row per setting cell

use eframe::egui::{self, RichText};

use super::app::GlobedMenuApp;
use super::theme::{ACCENT_CYAN, BG_SECONDARY, TEXT_MUTED, TEXT_PRIMARY};
use crate::cell::{CellEvent, CellView, Editor, INT_FIELD_MAX_LEN, filter_digits};

const ROW_HEIGHT: f32 = 28.0;

/// Render the settings list, grouped by section
pub fn render_settings_list(ui: &mut egui::Ui, app: &mut GlobedMenuApp) {
    let mut events = Vec::new();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let mut section = "";
            for (index, cell) in app.cells.iter().enumerate() {
                let key_section = cell.key().section();
                if key_section != section {
                    section = key_section;
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(section_title(section))
                            .monospace()
                            .color(TEXT_MUTED),
                    );
                }

                for event in render_row(ui, index, &cell.view()) {
                    events.push((index, event));
                }
            }
        });

    for (index, event) in events {
        app.send_event(index, event);
    }
}

fn section_title(section: &str) -> &str {
    match section {
        "globed" => "Globed",
        "overlay" => "Overlay",
        "communication" => "Communication",
        "players" => "Players",
        other => other,
    }
}

/// Draw a single row and return the events its widgets produced this frame
fn render_row(ui: &mut egui::Ui, index: usize, view: &CellView<'_>) -> Vec<CellEvent> {
    let mut events = Vec::new();

    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(4.0)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.set_min_height(ROW_HEIGHT);
            ui.horizontal(|ui| {
                ui.label(RichText::new(view.name).color(TEXT_PRIMARY));
                if let Some(description) = view.description {
                    if ui
                        .small_button(RichText::new("i").color(ACCENT_CYAN))
                        .on_hover_text(description)
                        .clicked()
                    {
                        events.push(CellEvent::InfoPressed);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    render_editor(ui, index, view.editor, &mut events);
                });
            });
        });
    ui.add_space(2.0);

    events
}

fn render_editor(ui: &mut egui::Ui, index: usize, editor: &Editor, events: &mut Vec<CellEvent>) {
    match editor {
        Editor::Checkbox { checked } => {
            let mut value = *checked;
            if ui.checkbox(&mut value, "").changed() {
                events.push(CellEvent::Toggled);
            }
        }
        Editor::Slider { position } => {
            let mut value = position.clamp(0.0, 1.0);
            let response = ui.add(
                egui::Slider::new(&mut value, 0.0..=1.0)
                    .show_value(false)
                    .clamping(egui::SliderClamping::Always),
            );
            if response.changed() {
                events.push(CellEvent::SliderMoved(value));
            }
        }
        Editor::IntField { text } => {
            let mut value = text.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut value)
                    .id_salt(("int_field", index))
                    .char_limit(INT_FIELD_MAX_LEN)
                    .desired_width(80.0),
            );
            if response.changed() {
                events.push(CellEvent::IntEdited(value.clone()));
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                events.push(CellEvent::IntSubmitted(filter_digits(&value)));
            }
        }
        Editor::Button { label } => {
            if ui.button(*label).clicked() {
                events.push(CellEvent::ButtonPressed);
            }
        }
    }
}
