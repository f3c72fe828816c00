//! Client setting sections

mod communication;
mod globed;
mod overlay;
mod players;
mod servers;

pub use communication::CommunicationSettings;
pub use globed::GlobedSettings;
pub use overlay::OverlaySettings;
pub use players::PlayerSettings;
pub use servers::ServerSettings;
