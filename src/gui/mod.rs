//! Desktop front end for the settings list and the server switcher
//!
//! The setting cells and the server switcher are plain state objects; this
//! module draws them with egui and feeds widget events back into them.

mod app;
mod popups;
mod runner;
mod server_switcher;
mod settings_list;
mod theme;

pub use app::{GlobedMenuApp, View};
pub use runner::run_gui;
