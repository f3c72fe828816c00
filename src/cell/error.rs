//! Errors reported by setting cells

use crate::config::{SettingKey, SettingType, StorageKind};

/// Recoverable cell errors; contract violations panic instead
#[derive(Debug, thiserror::Error)]
pub enum CellError {
    #[error("Invalid limits for {key}: max ({max}) must be greater than min ({min})")]
    InvalidLimits { key: SettingKey, min: f32, max: f32 },

    #[error("{key} is a {declared} row but the setting is stored as {stored:?}")]
    TypeMismatch {
        key: SettingKey,
        declared: SettingType,
        stored: StorageKind,
    },

    #[error("Slider position must be a finite number, got {0}")]
    InvalidPosition(f32),

    #[error("Invalid number: {0:?}")]
    InvalidInt(String),

    #[error("Failed to save settings: {0:#}")]
    Save(anyhow::Error),
}
