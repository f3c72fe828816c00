//! Setting cells: one settings-list row per setting
//!
//! A [`SettingCell`] reads a setting through its [`SettingKey`], shows an
//! editor chosen by the row's [`SettingType`], and turns widget events into
//! committed values. Every committed edit goes through one store-and-save
//! step: the value is checked against the row's type, written, and the whole
//! settings store is saved.
//!
//! Row types:
//! - **Bool**: checkbox, toggling writes and saves
//! - **Float**: slider over a normalized `[0, 1]` position mapped onto [`Limits`]
//! - **Int**: digit-only text field, parsed on submit
//! - **String**: "Set" button opening a text input popup
//! - **AudioDevice**: "Set" button opening the device picker, gated by
//!   microphone permission

mod audio;
mod error;
mod event;
mod limits;
mod permission;


pub use audio::{
    AudioDevice, AudioDeviceSource, AudioSetup, DEFAULT_DEVICE, StaticDeviceSource,
    SystemDeviceSource,
};
pub use error::CellError;
pub use event::{CellEvent, CellResponse, CellView, Editor};
pub use limits::Limits;
pub use permission::{
    Capability, DesktopPermissions, PermissionCallback, PermissionProvider,
};

use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, info, warn};

use crate::config::{
    SettingDescriptor, SettingKey, SettingType, SettingValue, SettingsStore, SharedStore,
};

/// Maximum length of the int field
pub const INT_FIELD_MAX_LEN: usize = 10;

/// Label of the button for String and AudioDevice rows
pub const SET_BUTTON_LABEL: &str = "Set";

/// Keep only ASCII digits, up to [`INT_FIELD_MAX_LEN`] of them
pub fn filter_digits(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_digit)
        .take(INT_FIELD_MAX_LEN)
        .collect()
}

/// A single settings-list row
pub struct SettingCell<S: SettingsStore> {
    key: SettingKey,
    setting_type: SettingType,
    name: String,
    description: String,
    limits: Limits,
    store: SharedStore<S>,
    permissions: Option<Rc<dyn PermissionProvider>>,
    editor: Editor,
    permission_tx: Sender<bool>,
    permission_rx: Receiver<bool>,
    pending_requests: usize,
}

impl<S: SettingsStore> SettingCell<S> {
    /// Build a row and initialize its editor from the current value.
    ///
    /// Fails if `setting_type` does not match how `key` is stored, or if a
    /// `Float` row has an empty or non-finite range.
    pub fn new(
        key: SettingKey,
        setting_type: SettingType,
        name: impl Into<String>,
        description: impl Into<String>,
        limits: Limits,
        store: SharedStore<S>,
    ) -> Result<Self, CellError> {
        if key.storage() != setting_type.storage() {
            return Err(CellError::TypeMismatch {
                key,
                declared: setting_type,
                stored: key.storage(),
            });
        }

        if setting_type == SettingType::Float && !limits.is_valid() {
            return Err(CellError::InvalidLimits {
                key,
                min: limits.float_min,
                max: limits.float_max,
            });
        }

        let current = store.borrow().value(key);
        let editor = match (setting_type, current) {
            (SettingType::Bool, SettingValue::Bool(checked)) => Editor::Checkbox { checked },
            (SettingType::Float, SettingValue::Float(value)) => Editor::Slider {
                position: limits.initial_position(value),
            },
            (SettingType::Int, SettingValue::Int(value)) => Editor::IntField {
                text: value.to_string(),
            },
            (SettingType::String | SettingType::AudioDevice, SettingValue::Text(_)) => {
                Editor::Button {
                    label: SET_BUTTON_LABEL,
                }
            }
            (declared, value) => unreachable!(
                "{} read a {:?} value for a {} row after the storage check",
                key,
                value.kind(),
                declared
            ),
        };

        let (permission_tx, permission_rx) = mpsc::channel();

        Ok(Self {
            key,
            setting_type,
            name: name.into(),
            description: description.into(),
            limits,
            store,
            permissions: None,
            editor,
            permission_tx,
            permission_rx,
            pending_requests: 0,
        })
    }

    /// Build a row from the settings table
    pub fn from_descriptor(
        descriptor: &SettingDescriptor,
        store: SharedStore<S>,
    ) -> Result<Self, CellError> {
        Self::new(
            descriptor.key,
            descriptor.setting_type,
            descriptor.name,
            descriptor.description,
            descriptor.limits,
            store,
        )
    }

    /// Use `permissions` to gate the audio device picker
    pub fn with_permissions(mut self, permissions: Rc<dyn PermissionProvider>) -> Self {
        self.permissions = Some(permissions);
        self
    }

    pub fn key(&self) -> SettingKey {
        self.key
    }

    pub fn setting_type(&self) -> SettingType {
        self.setting_type
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Current stored value
    pub fn value(&self) -> SettingValue {
        self.store.borrow().value(self.key)
    }

    pub fn view(&self) -> CellView<'_> {
        CellView {
            name: &self.name,
            description: Some(self.description.as_str()).filter(|d| !d.is_empty()),
            editor: &self.editor,
        }
    }

    /// Whether a permission request is still waiting for its answer
    pub fn awaiting_permission(&self) -> bool {
        self.pending_requests > 0
    }

    /// Handle an event from one of the row's widgets.
    ///
    /// # Panics
    ///
    /// Panics if the event is an edit that does not belong to this row's
    /// type, e.g. a slider move on a checkbox row.
    pub fn apply(&mut self, event: CellEvent) -> Result<CellResponse, CellError> {
        match (self.setting_type, event) {
            (_, CellEvent::InfoPressed) => Ok(match self.view().description {
                Some(message) => CellResponse::ShowInfo {
                    title: self.name.clone(),
                    message: message.to_string(),
                },
                None => CellResponse::Ignored,
            }),

            (SettingType::Bool, CellEvent::Toggled) => {
                let checked = !matches!(self.editor, Editor::Checkbox { checked: true });
                // The value is in memory even if saving fails, keep the checkbox in step
                self.editor = Editor::Checkbox { checked };
                self.store_and_save(SettingValue::Bool(checked))
            }

            (SettingType::Float, CellEvent::SliderMoved(position)) => {
                if !position.is_finite() {
                    return Err(CellError::InvalidPosition(position));
                }
                let position = position.clamp(0.0, 1.0);
                let value = self.limits.to_absolute(position);
                self.editor = Editor::Slider { position };
                self.store_and_save(SettingValue::Float(value))
            }

            (SettingType::Int, CellEvent::IntEdited(text)) => {
                self.editor = Editor::IntField {
                    text: filter_digits(&text),
                };
                Ok(CellResponse::Updated)
            }

            (SettingType::Int, CellEvent::IntSubmitted(text)) => {
                let digits = text.trim();
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    return Err(CellError::InvalidInt(text));
                }
                let value = digits
                    .parse::<i32>()
                    .map_err(|_| CellError::InvalidInt(text.clone()))?;
                self.editor = Editor::IntField {
                    text: value.to_string(),
                };
                self.store_and_save(SettingValue::Int(value))
            }

            (SettingType::String, CellEvent::ButtonPressed) => Ok(CellResponse::OpenStringInput),

            (SettingType::AudioDevice, CellEvent::ButtonPressed) => Ok(self.on_audio_button()),

            (SettingType::AudioDevice, CellEvent::ConsentAnswered(grant)) => {
                Ok(self.on_consent(grant))
            }

            (SettingType::String | SettingType::AudioDevice, CellEvent::StringSubmitted(text))
            | (SettingType::AudioDevice, CellEvent::DeviceSelected(text)) => {
                self.store_and_save(SettingValue::Text(text))
            }

            (setting_type, event) => panic!(
                "{} is a {} row and cannot handle {:?}",
                self.key, setting_type, event
            ),
        }
    }

    /// Collect answers to permission requests made by this row.
    ///
    /// Returns `OpenAudioSetup` if any request was granted, `Abandoned` if
    /// every answer received was a denial, and `None` if nothing arrived.
    pub fn poll(&mut self) -> Option<CellResponse> {
        let mut received = false;
        let mut granted = false;

        while let Ok(answer) = self.permission_rx.try_recv() {
            self.pending_requests = self.pending_requests.saturating_sub(1);
            received = true;
            granted |= answer;
        }

        if !received {
            return None;
        }

        if granted {
            Some(CellResponse::OpenAudioSetup)
        } else {
            warn!("Permission denied when requesting audio access");
            Some(CellResponse::Abandoned)
        }
    }

    fn on_audio_button(&mut self) -> CellResponse {
        let Some(permissions) = &self.permissions else {
            warn!("{} has no permission provider, ignoring", self.key);
            return CellResponse::Abandoned;
        };

        if permissions.status(Capability::RecordAudio) {
            CellResponse::OpenAudioSetup
        } else {
            CellResponse::ShowConsentPrompt
        }
    }

    fn on_consent(&mut self, grant: bool) -> CellResponse {
        if !grant {
            debug!("Microphone consent declined for {}", self.key);
            return CellResponse::Abandoned;
        }

        let Some(permissions) = self.permissions.clone() else {
            warn!("{} has no permission provider, ignoring", self.key);
            return CellResponse::Abandoned;
        };

        self.pending_requests += 1;
        let tx = self.permission_tx.clone();
        permissions.request(
            Capability::RecordAudio,
            Box::new(move |granted| {
                let _ = tx.send(granted);
            }),
        );

        CellResponse::PermissionRequested
    }

    /// Write `value` through the row's setting and save the store once.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not of the kind the row's type stores.
    fn store_and_save(&mut self, value: SettingValue) -> Result<CellResponse, CellError> {
        let expected = self.setting_type.storage();
        if value.kind() != expected {
            panic!(
                "{} is a {} row but was given a {:?} value",
                self.key,
                self.setting_type,
                value.kind()
            );
        }

        let mut store = self.store.borrow_mut();
        if let Err(rejected) = self.key.slot(store.config_mut()).assign(value.clone()) {
            panic!(
                "{} rejected a {:?} value after the type check",
                self.key,
                rejected.kind()
            );
        }

        store.save().map_err(CellError::Save)?;
        info!("Set {} = {}", self.key, value);

        Ok(CellResponse::Saved(value))
    }
}
