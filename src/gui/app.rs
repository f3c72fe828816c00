//! Main application state for the settings window

use std::rc::Rc;

use anyhow::Result;
use eframe::egui::{self, RichText};
use tracing::warn;

use super::popups::{Popup, PopupAction, render_popup};
use super::server_switcher::{DirectConnectPopup, render_server_switcher};
use super::settings_list::render_settings_list;
use super::theme::{ACCENT_GOLD, ACCENT_GREEN, ACCENT_RED, BG_PRIMARY, TEXT_DIM};
use crate::cell::{
    AudioSetup, CellError, CellEvent, CellResponse, DesktopPermissions, SettingCell,
    SystemDeviceSource,
};
use crate::config::{
    FileSettingsStore, SettingValue, SettingsStore, SharedStore, descriptors, shared,
};
use crate::servers::{GameServerRegistry, NetworkManager, ServerSwitcher};

/// Which page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Settings,
    Servers,
}

/// Settings list and server switcher window
pub struct GlobedMenuApp {
    pub(super) store: SharedStore<FileSettingsStore>,
    pub(super) cells: Vec<SettingCell<FileSettingsStore>>,
    pub(super) devices: SystemDeviceSource,
    pub(super) switcher: ServerSwitcher<NetworkManager>,
    pub(super) view: View,
    pub(super) popup: Option<Popup>,
    pub(super) direct_connect: Option<DirectConnectPopup>,
    /// Last status message, `true` for errors
    pub(super) status: Option<(String, bool)>,
}

impl GlobedMenuApp {
    pub fn new(store: FileSettingsStore) -> Result<Self> {
        let registry = GameServerRegistry::from_config(store.config());
        let store = shared(store);
        let permissions = Rc::new(DesktopPermissions::default());

        let cells = descriptors()
            .iter()
            .map(|descriptor| {
                SettingCell::from_descriptor(descriptor, Rc::clone(&store))
                    .map(|cell| cell.with_permissions(permissions.clone()))
            })
            .collect::<Result<Vec<_>, CellError>>()?;

        Ok(Self {
            store,
            cells,
            devices: SystemDeviceSource,
            switcher: ServerSwitcher::new(registry, NetworkManager::new()),
            view: View::Settings,
            popup: None,
            direct_connect: None,
            status: None,
        })
    }

    /// Feed a widget event to a row and act on its response
    pub(super) fn send_event(&mut self, index: usize, event: CellEvent) {
        let Some(cell) = self.cells.get_mut(index) else {
            return;
        };
        let result = cell.apply(event);
        self.on_cell_response(index, result);
    }

    fn on_cell_response(&mut self, index: usize, result: Result<CellResponse, CellError>) {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!("Setting edit failed: {}", e);
                self.popup = Some(Popup::Alert {
                    title: "Error".to_string(),
                    message: e.to_string(),
                });
                return;
            }
        };

        match response {
            CellResponse::Saved(value) => {
                let name = self.cells[index].view().name.to_string();
                self.status = Some((format!("{} set to {}", name, value), false));
            }
            CellResponse::OpenStringInput => {
                let text = match self.cells[index].value() {
                    SettingValue::Text(text) => text,
                    _ => String::new(),
                };
                self.popup = Some(Popup::StringInput { cell: index, text });
            }
            CellResponse::ShowConsentPrompt => {
                self.popup = Some(Popup::Consent { cell: index });
            }
            CellResponse::OpenAudioSetup => {
                let current = match self.cells[index].value() {
                    SettingValue::Text(text) => text,
                    _ => String::new(),
                };
                let setup = AudioSetup::new(&self.devices, &current);
                self.popup = Some(Popup::AudioSetup { cell: index, setup });
            }
            CellResponse::ShowInfo { title, message } => {
                self.popup = Some(Popup::Alert { title, message });
            }
            CellResponse::PermissionRequested
            | CellResponse::Updated
            | CellResponse::Abandoned
            | CellResponse::Ignored => {}
        }
    }

    fn poll_background(&mut self) {
        for index in 0..self.cells.len() {
            if let Some(response) = self.cells[index].poll() {
                self.on_cell_response(index, Ok(response));
            }
        }

        for event in self.switcher.network.poll_events() {
            tracing::debug!("Network event: {:?}", event);
        }
    }

    fn apply_popup_action(&mut self, action: PopupAction) {
        match action {
            PopupAction::Close => self.popup = None,
            PopupAction::Send { cell, event } => {
                self.popup = None;
                self.send_event(cell, event);
            }
            PopupAction::RefreshDevices => {
                if let Some(Popup::AudioSetup { setup, .. }) = &mut self.popup {
                    setup.refresh(&self.devices);
                }
            }
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Globed").strong().color(ACCENT_GOLD));
            ui.add_space(12.0);
            ui.selectable_value(&mut self.view, View::Settings, "Settings");
            ui.selectable_value(&mut self.view, View::Servers, "Servers");
        });

        if let Some((message, is_error)) = &self.status {
            let color = if *is_error { ACCENT_RED } else { ACCENT_GREEN };
            ui.label(RichText::new(message).small().color(color));
        } else {
            ui.label(RichText::new(" ").small().color(TEXT_DIM));
        }
        ui.separator();
    }
}

impl eframe::App for GlobedMenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_background();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(12.0))
            .show(ctx, |ui| {
                self.render_header(ui);
                match self.view {
                    View::Settings => render_settings_list(ui, self),
                    View::Servers => render_server_switcher(ui, self),
                }
            });

        if let Some(popup) = &mut self.popup {
            if let Some(action) = render_popup(ctx, popup) {
                self.apply_popup_action(action);
            }
        }

        super::server_switcher::render_direct_connect(ctx, self);

        // Permission answers and connection results arrive from outside the UI
        if self.cells.iter().any(|c| c.awaiting_permission())
            || matches!(
                self.switcher.network.state,
                crate::servers::ConnectionState::Connecting(_)
            )
        {
            ctx.request_repaint();
        }
    }
}
