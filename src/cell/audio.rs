//! Audio input device listing and the device picker state

use std::path::Path;

/// Name used for the system default input device
pub const DEFAULT_DEVICE: &str = "default";

/// An audio input device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioDevice {
    pub id: i32,
    pub name: String,
}

/// Source of the current input device list
pub trait AudioDeviceSource {
    fn input_devices(&self) -> Vec<AudioDevice>;
}

/// Fixed device list
#[derive(Debug, Clone, Default)]
pub struct StaticDeviceSource(pub Vec<AudioDevice>);

impl AudioDeviceSource for StaticDeviceSource {
    fn input_devices(&self) -> Vec<AudioDevice> {
        self.0.clone()
    }
}

/// Lists the default device followed by the ALSA sound cards, where available
#[derive(Debug, Clone, Default)]
pub struct SystemDeviceSource;

impl AudioDeviceSource for SystemDeviceSource {
    fn input_devices(&self) -> Vec<AudioDevice> {
        let mut devices = vec![AudioDevice {
            id: -1,
            name: DEFAULT_DEVICE.to_string(),
        }];

        let cards = Path::new("/proc/asound/cards");
        match std::fs::read_to_string(cards) {
            Ok(content) => devices.extend(parse_alsa_cards(&content)),
            Err(e) => tracing::debug!("No ALSA card list ({}), offering default device only", e),
        }

        devices
    }
}

/// Parse `/proc/asound/cards`.
///
/// Each card takes two lines; the first looks like
/// ` 0 [PCH            ]: HDA-Intel - HDA Intel PCH`.
fn parse_alsa_cards(content: &str) -> Vec<AudioDevice> {
    content
        .lines()
        .filter_map(|line| {
            let (head, description) = line.split_once("]:")?;
            let (index, _) = head.trim_start().split_once(' ')?;
            let id = index.parse::<i32>().ok()?;
            let name = description
                .split_once(" - ")
                .map(|(_, name)| name)
                .unwrap_or(description)
                .trim();
            (!name.is_empty()).then(|| AudioDevice {
                id,
                name: name.to_string(),
            })
        })
        .collect()
}

/// Picker state for the audio setup popup
#[derive(Debug, Clone, Default)]
pub struct AudioSetup {
    devices: Vec<AudioDevice>,
    selected: Option<usize>,
}

impl AudioSetup {
    /// Load the device list, preselecting `current` if it is present
    pub fn new(source: &dyn AudioDeviceSource, current: &str) -> Self {
        let mut setup = Self::default();
        setup.load(source, current);
        setup
    }

    /// Reload the device list, keeping the selection if the device still exists
    pub fn refresh(&mut self, source: &dyn AudioDeviceSource) {
        let current = self.selected().map(|d| d.name.clone()).unwrap_or_default();
        self.load(source, &current);
    }

    fn load(&mut self, source: &dyn AudioDeviceSource, current: &str) {
        self.devices = source.input_devices();
        self.selected = self.devices.iter().position(|d| d.name == current);
    }

    pub fn devices(&self) -> &[AudioDevice] {
        &self.devices
    }

    pub fn selected(&self) -> Option<&AudioDevice> {
        self.selected.and_then(|i| self.devices.get(i))
    }

    pub fn select(&mut self, index: usize) -> Option<&AudioDevice> {
        if index < self.devices.len() {
            self.selected = Some(index);
        }
        self.selected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn devices() -> StaticDeviceSource {
        StaticDeviceSource(vec![
            AudioDevice {
                id: 0,
                name: "Built-in Microphone".to_string(),
            },
            AudioDevice {
                id: 1,
                name: "USB Microphone".to_string(),
            },
        ])
    }

    #[test]
    fn test_preselects_current_device() {
        let setup = AudioSetup::new(&devices(), "USB Microphone");
        assert_eq!(setup.selected().unwrap().id, 1);

        let setup = AudioSetup::new(&devices(), "Unplugged");
        assert!(setup.selected().is_none());
    }

    #[test]
    fn test_select_out_of_range_keeps_selection() {
        let mut setup = AudioSetup::new(&devices(), "Built-in Microphone");
        assert_eq!(setup.select(5).unwrap().id, 0);
        assert_eq!(setup.select(1).unwrap().name, "USB Microphone");
    }

    #[test]
    fn test_refresh_drops_vanished_device() {
        let mut setup = AudioSetup::new(&devices(), "USB Microphone");
        let fewer = StaticDeviceSource(vec![AudioDevice {
            id: 0,
            name: "Built-in Microphone".to_string(),
        }]);
        setup.refresh(&fewer);
        assert_eq!(setup.devices().len(), 1);
        assert!(setup.selected().is_none());
    }

    #[test]
    fn test_parse_alsa_cards() {
        let content = " 0 [PCH            ]: HDA-Intel - HDA Intel PCH\n                      HDA Intel PCH at 0xf7f10000 irq 32\n 1 [Microphone     ]: USB-Audio - Yeti Stereo Microphone\n                      Blue Microphones Yeti\n";
        let cards = parse_alsa_cards(content);
        assert_eq!(
            cards,
            vec![
                AudioDevice {
                    id: 0,
                    name: "HDA Intel PCH".to_string()
                },
                AudioDevice {
                    id: 1,
                    name: "Yeti Stereo Microphone".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_system_source_always_has_default() {
        let devices = SystemDeviceSource.input_devices();
        assert_eq!(devices[0].name, DEFAULT_DEVICE);
    }
}
