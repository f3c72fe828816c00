//! Edit events delivered to a cell and what the cell asks of its host

use crate::config::SettingValue;

/// Input from the row's widgets
#[derive(Debug, Clone, PartialEq)]
pub enum CellEvent {
    /// Checkbox clicked
    Toggled,
    /// Slider dragged or released at a normalized position, clamped to `[0, 1]`
    SliderMoved(f32),
    /// Int field text changed (not committed)
    IntEdited(String),
    /// Int field submitted
    IntSubmitted(String),
    /// "Set" button pressed
    ButtonPressed,
    /// Text input popup closed with a result
    StringSubmitted(String),
    /// Answer to the microphone consent prompt
    ConsentAnswered(bool),
    /// Device chosen in the audio setup popup
    DeviceSelected(String),
    /// Info button next to the label pressed
    InfoPressed,
}

/// What the host should do after an event
#[derive(Debug, Clone, PartialEq)]
pub enum CellResponse {
    /// The value was written and the settings saved
    Saved(SettingValue),
    /// Widget state changed, nothing was written
    Updated,
    OpenStringInput,
    /// Ask the user whether to grant microphone access
    ShowConsentPrompt,
    /// A permission request is in flight, see [`super::SettingCell::poll`]
    PermissionRequested,
    OpenAudioSetup,
    ShowInfo { title: String, message: String },
    /// The edit was dropped (consent declined or permission denied)
    Abandoned,
    Ignored,
}

/// Editing affordance of a row and its cached state
#[derive(Debug, Clone, PartialEq)]
pub enum Editor {
    Checkbox { checked: bool },
    Slider { position: f32 },
    IntField { text: String },
    Button { label: &'static str },
}

/// Everything a host needs to draw a row
#[derive(Debug, Clone, PartialEq)]
pub struct CellView<'a> {
    pub name: &'a str,
    /// `None` when the row has no info button
    pub description: Option<&'a str>,
    pub editor: &'a Editor,
}
