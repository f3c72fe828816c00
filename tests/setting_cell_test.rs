//! Integration tests for setting cells against an in-memory store

mod common;

use std::rc::Rc;

use globed_menu::cell::{CellEvent, CellResponse, Editor, Limits, SettingCell};
use globed_menu::config::{
    Config, MemorySettingsStore, SettingKey, SettingType, SettingValue, SettingsStore,
    SharedStore, descriptor_for,
};

use common::{memory_store, memory_store_with, scripted_permissions};

fn float_cell(
    store: &SharedStore<MemorySettingsStore>,
    limits: Limits,
) -> SettingCell<MemorySettingsStore> {
    SettingCell::new(
        SettingKey::OverlayOpacity,
        SettingType::Float,
        "Overlay opacity",
        "",
        limits,
        Rc::clone(store),
    )
    .expect("Failed to build float cell")
}

fn slider_position(cell: &SettingCell<MemorySettingsStore>) -> f32 {
    match cell.view().editor {
        Editor::Slider { position } => *position,
        other => panic!("expected slider, got {:?}", other),
    }
}

#[test]
fn test_bool_toggle_twice_saves_twice() {
    let store = memory_store();
    let original = store.borrow().config.communication.voice_proximity;
    let descriptor = descriptor_for(SettingKey::VoiceProximity).unwrap();
    let mut cell = SettingCell::from_descriptor(descriptor, Rc::clone(&store)).unwrap();

    cell.apply(CellEvent::Toggled).unwrap();
    assert_eq!(store.borrow().config.communication.voice_proximity, !original);
    cell.apply(CellEvent::Toggled).unwrap();

    assert_eq!(store.borrow().config.communication.voice_proximity, original);
    assert_eq!(store.borrow().saves, 2);
}

#[test]
fn test_float_zero_based_range() {
    let store = memory_store();
    let mut cell = float_cell(&store, Limits::new(0.0, 100.0));

    cell.apply(CellEvent::SliderMoved(0.5)).unwrap();
    assert_eq!(store.borrow().config.overlay.opacity, 50.0);

    let rebuilt = float_cell(&store, Limits::new(0.0, 100.0));
    assert_eq!(slider_position(&rebuilt), 0.5);
}

#[test]
fn test_float_offset_range_starts_past_written_position() {
    let store = memory_store();
    let mut cell = float_cell(&store, Limits::new(20.0, 120.0));

    cell.apply(CellEvent::SliderMoved(0.5)).unwrap();
    assert_eq!(store.borrow().config.overlay.opacity, 70.0);

    // A rebuilt row divides by the span without subtracting the minimum
    let rebuilt = float_cell(&store, Limits::new(20.0, 120.0));
    assert_eq!(slider_position(&rebuilt), 0.7);
}

#[test]
fn test_every_committed_edit_saves_once() {
    let store = memory_store();
    let mut int_cell = SettingCell::from_descriptor(
        descriptor_for(SettingKey::TpsCap).unwrap(),
        Rc::clone(&store),
    )
    .unwrap();
    let mut string_cell = SettingCell::from_descriptor(
        descriptor_for(SettingKey::CentralServerUrl).unwrap(),
        Rc::clone(&store),
    )
    .unwrap();
    let mut float_cell = SettingCell::from_descriptor(
        descriptor_for(SettingKey::VoiceVolume).unwrap(),
        Rc::clone(&store),
    )
    .unwrap();

    int_cell
        .apply(CellEvent::IntSubmitted("144".to_string()))
        .unwrap();
    assert_eq!(store.borrow().saves, 1);
    assert_eq!(store.borrow().value(SettingKey::TpsCap), SettingValue::Int(144));

    // Typing alone does not save
    int_cell.apply(CellEvent::IntEdited("2".to_string())).unwrap();
    assert_eq!(store.borrow().saves, 1);

    string_cell
        .apply(CellEvent::StringSubmitted("http://localhost:4201".to_string()))
        .unwrap();
    assert_eq!(store.borrow().saves, 2);
    assert_eq!(
        store.borrow().config.globed.central_server_url,
        "http://localhost:4201"
    );

    float_cell.apply(CellEvent::SliderMoved(0.25)).unwrap();
    assert_eq!(store.borrow().saves, 3);
    assert_eq!(store.borrow().config.communication.voice_volume, 0.5);
}

#[test]
fn test_cells_see_each_others_writes() {
    let mut config = Config::default();
    config.overlay.enabled = false;
    let store = memory_store_with(config);

    let mut first = SettingCell::from_descriptor(
        descriptor_for(SettingKey::OverlayEnabled).unwrap(),
        Rc::clone(&store),
    )
    .unwrap();
    assert_eq!(first.view().editor, &Editor::Checkbox { checked: false });
    first.apply(CellEvent::Toggled).unwrap();

    let second = SettingCell::from_descriptor(
        descriptor_for(SettingKey::OverlayEnabled).unwrap(),
        Rc::clone(&store),
    )
    .unwrap();
    assert_eq!(second.view().editor, &Editor::Checkbox { checked: true });
}

#[test]
fn test_audio_declined_prompt_leaves_setting_unchanged() {
    let store = memory_store();
    let perms = scripted_permissions();
    let mut cell = SettingCell::from_descriptor(
        descriptor_for(SettingKey::AudioDevice).unwrap(),
        Rc::clone(&store),
    )
    .unwrap()
    .with_permissions(perms.clone());

    assert_eq!(
        cell.apply(CellEvent::ButtonPressed).unwrap(),
        CellResponse::ShowConsentPrompt
    );
    assert_eq!(
        cell.apply(CellEvent::ConsentAnswered(false)).unwrap(),
        CellResponse::Abandoned
    );

    assert_eq!(perms.requests.get(), 0);
    assert_eq!(cell.poll(), None);
    assert_eq!(store.borrow().saves, 0);
    assert_eq!(store.borrow().config.communication.audio_device, "default");
}

#[test]
fn test_audio_permission_answer_arrives_later() {
    let store = memory_store();
    let perms = scripted_permissions();
    let mut cell = SettingCell::from_descriptor(
        descriptor_for(SettingKey::AudioDevice).unwrap(),
        Rc::clone(&store),
    )
    .unwrap()
    .with_permissions(perms.clone());

    cell.apply(CellEvent::ButtonPressed).unwrap();
    assert_eq!(
        cell.apply(CellEvent::ConsentAnswered(true)).unwrap(),
        CellResponse::PermissionRequested
    );
    assert!(cell.awaiting_permission());
    assert_eq!(cell.poll(), None);

    perms.answer_all(true);
    assert_eq!(cell.poll(), Some(CellResponse::OpenAudioSetup));
    assert!(!cell.awaiting_permission());

    let response = cell
        .apply(CellEvent::DeviceSelected("HDA Intel PCH".to_string()))
        .unwrap();
    assert_eq!(
        response,
        CellResponse::Saved(SettingValue::Text("HDA Intel PCH".to_string()))
    );
    assert_eq!(store.borrow().saves, 1);
}

#[test]
fn test_repeated_requests_are_independent() {
    let store = memory_store();
    let perms = scripted_permissions();
    let mut cell = SettingCell::from_descriptor(
        descriptor_for(SettingKey::AudioDevice).unwrap(),
        Rc::clone(&store),
    )
    .unwrap()
    .with_permissions(perms.clone());

    for _ in 0..2 {
        cell.apply(CellEvent::ButtonPressed).unwrap();
        cell.apply(CellEvent::ConsentAnswered(true)).unwrap();
    }
    assert_eq!(perms.requests.get(), 2);
    assert_eq!(perms.pending(), 2);

    perms.answer_all(false);
    assert_eq!(cell.poll(), Some(CellResponse::Abandoned));
    assert!(!cell.awaiting_permission());
    assert_eq!(store.borrow().saves, 0);
}
