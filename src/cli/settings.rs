//! Settings commands

use std::path::Path;

use anyhow::Result;

use globed_menu::config::{FileSettingsStore, SettingKey, SettingsStore, descriptors};

/// Print every setting grouped by section
pub fn list_command(config_path: &Path) -> Result<()> {
    let store = FileSettingsStore::open(config_path)?;
    println!("Settings ({}):", store.path().display());

    let mut section = "";
    for descriptor in descriptors() {
        if descriptor.key.section() != section {
            section = descriptor.key.section();
            println!("\n[{}]", section);
        }
        println!(
            "  {:<36} {:<14} {}",
            descriptor.key.path(),
            descriptor.setting_type.to_string(),
            store.value(descriptor.key)
        );
    }

    Ok(())
}

/// Parse and store a single setting
pub fn set_command(config_path: &Path, key: &str, value: &str) -> Result<()> {
    let key: SettingKey = key.parse()?;
    let value = key.parse_value(value)?;

    let mut store = FileSettingsStore::open(config_path)?;
    store.assign(key, value.clone())?;
    store.save()?;

    println!("{} = {}", key, value);
    Ok(())
}
