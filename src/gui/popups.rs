//! Modal popups opened by setting rows

use eframe::egui::{self, RichText};

use super::theme::{ACCENT_GOLD, ACCENT_GREEN, TEXT_DIM, TEXT_MUTED};
use crate::cell::{AudioSetup, CellEvent};

const CONSENT_TITLE: &str = "No permission";
const CONSENT_MESSAGE: &str = "Globed does not currently have permission to use your microphone. Do you want to grant the permission?";

/// Popup currently shown over the window
#[derive(Debug, Clone)]
pub enum Popup {
    Alert { title: String, message: String },
    StringInput { cell: usize, text: String },
    Consent { cell: usize },
    AudioSetup { cell: usize, setup: AudioSetup },
}

/// What the user did in a popup
#[derive(Debug, Clone, PartialEq)]
pub enum PopupAction {
    Close,
    /// Close the popup and deliver an event to a row
    Send { cell: usize, event: CellEvent },
    RefreshDevices,
}

fn modal(title: &str) -> egui::Window<'_> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

/// Render the popup and return the action taken this frame, if any
pub fn render_popup(ctx: &egui::Context, popup: &mut Popup) -> Option<PopupAction> {
    let mut action = None;

    match popup {
        Popup::Alert { title, message } => {
            modal(title).show(ctx, |ui| {
                ui.label(message.as_str());
                ui.add_space(8.0);
                if ui.button("Ok").clicked() {
                    action = Some(PopupAction::Close);
                }
            });
        }

        Popup::StringInput { cell, text } => {
            let cell = *cell;
            modal("Enter value").show(ctx, |ui| {
                let response = ui.add(egui::TextEdit::singleline(text).desired_width(260.0));
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        action = Some(PopupAction::Close);
                    }
                    if ui.button(RichText::new("Submit").color(ACCENT_GREEN)).clicked() || submitted
                    {
                        action = Some(PopupAction::Send {
                            cell,
                            event: CellEvent::StringSubmitted(text.clone()),
                        });
                    }
                });
            });
        }

        Popup::Consent { cell } => {
            let cell = *cell;
            modal(CONSENT_TITLE).show(ctx, |ui| {
                ui.label(CONSENT_MESSAGE);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        action = Some(PopupAction::Send {
                            cell,
                            event: CellEvent::ConsentAnswered(false),
                        });
                    }
                    if ui.button(RichText::new("Grant").color(ACCENT_GOLD)).clicked() {
                        action = Some(PopupAction::Send {
                            cell,
                            event: CellEvent::ConsentAnswered(true),
                        });
                    }
                });
            });
        }

        Popup::AudioSetup { cell, setup } => {
            let cell = *cell;
            modal("Audio setup").show(ctx, |ui| {
                ui.label(RichText::new("Input device").color(TEXT_MUTED));
                if setup.devices().is_empty() {
                    ui.label(RichText::new("No input devices found").color(TEXT_DIM));
                }

                let mut clicked = None;
                for (index, device) in setup.devices().iter().enumerate() {
                    let selected = setup.selected().is_some_and(|d| d == device);
                    if ui.selectable_label(selected, device.name.as_str()).clicked() {
                        clicked = Some(index);
                    }
                }
                if let Some(index) = clicked {
                    setup.select(index);
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        action = Some(PopupAction::Close);
                    }
                    if ui.button("Refresh").clicked() {
                        action = Some(PopupAction::RefreshDevices);
                    }
                    if let Some(device) = setup.selected() {
                        if ui.button(RichText::new("Select").color(ACCENT_GREEN)).clicked() {
                            action = Some(PopupAction::Send {
                                cell,
                                event: CellEvent::DeviceSelected(device.name.clone()),
                            });
                        }
                    }
                });
            });
        }
    }

    action
}
