//! Server list page and the direct connection popup

use eframe::egui::{self, RichText};
use tracing::debug;

use super::app::GlobedMenuApp;
use super::popups::Popup;
use super::theme::{ACCENT_GOLD, ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_PRIMARY};
use crate::config::SettingsStore;
use crate::servers::{ADDRESS_PLACEHOLDER, ConnectionState, GameServerRegistry};

/// Text field state of the direct connection popup
#[derive(Debug, Clone, Default)]
pub struct DirectConnectPopup {
    pub address: String,
}

pub fn render_server_switcher(ui: &mut egui::Ui, app: &mut GlobedMenuApp) {
    let state = &app.switcher.network.state;
    let color = match state {
        ConnectionState::Connected(_) => ACCENT_GREEN,
        ConnectionState::Failed(_) => ACCENT_RED,
        ConnectionState::Connecting(_) => ACCENT_GOLD,
        ConnectionState::Disconnected => TEXT_DIM,
    };
    ui.label(RichText::new(state.to_string()).color(color));
    ui.add_space(8.0);

    if app.switcher.registry.pending_changes {
        debug!("Reloading server list");
        app.switcher.registry.pending_changes = false;
    }

    if app.switcher.registry.is_empty() {
        ui.label(RichText::new("No servers").color(TEXT_DIM));
    }

    for server in app.switcher.registry.servers() {
        egui::Frame::NONE
            .fill(BG_SECONDARY)
            .corner_radius(4.0)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&server.name).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(&server.address).monospace().color(TEXT_DIM));
                    ui.label(RichText::new(&server.region).small().color(TEXT_DIM));
                });
            });
        ui.add_space(2.0);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Direct connection").clicked() {
            let address = app
                .store
                .borrow()
                .config()
                .servers
                .standalone_address
                .clone()
                .unwrap_or_default();
            app.direct_connect = Some(DirectConnectPopup { address });
        }

        if app.switcher.central.standalone && ui.button("Reset").clicked() {
            app.switcher.central = Default::default();
            app.switcher.registry =
                GameServerRegistry::from_config(app.store.borrow().config());
        }
    });
}

/// Draw the direct connection popup if it is open
pub fn render_direct_connect(ctx: &egui::Context, app: &mut GlobedMenuApp) {
    let Some(popup) = &mut app.direct_connect else {
        return;
    };
    // Alerts raised by a failed connect sit on top of this popup
    let blocked = app.popup.is_some();

    let mut connect = false;
    let mut close = false;

    egui::Window::new("Direct connection")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                ui.label(RichText::new("Server address").color(TEXT_DIM));
                let response = ui.add(
                    egui::TextEdit::singleline(&mut popup.address)
                        .hint_text(ADDRESS_PLACEHOLDER)
                        .desired_width(260.0),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    connect = true;
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                    if ui.button(RichText::new("Connect").color(ACCENT_GREEN)).clicked() {
                        connect = true;
                    }
                });
            });
        });

    if close {
        app.direct_connect = None;
        return;
    }
    if !connect {
        return;
    }

    let address = popup.address.clone();
    let result = {
        let mut store = app.store.borrow_mut();
        app.switcher.connect_direct(&address, &mut *store)
    };

    match result {
        Ok(parsed) => {
            app.direct_connect = None;
            app.status = Some((format!("Connecting to {}", parsed), false));
        }
        Err(e) => {
            app.popup = Some(Popup::Alert {
                title: "Error".to_string(),
                message: e.user_message().to_string(),
            });
        }
    }
}
