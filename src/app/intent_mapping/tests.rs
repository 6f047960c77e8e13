use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::GeoPosition;

use super::map_intent_to_commands;

#[test]
fn startup_maps_to_initialize_then_restore() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::StartupRequested);

    assert_eq!(
        commands,
        vec![AppCommand::InitializeMap, AppCommand::RestoreMarkers]
    );
}

#[test]
fn map_click_while_idle_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            position: GeoPosition::new(-16.70, -49.26),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn map_click_while_placing_creates_marker_and_exits_mode() {
    let mut state = AppState::new();
    state.selection.toggle_placing();
    let position = GeoPosition::new(-16.70, -49.26);

    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { position });

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        &commands[0],
        AppCommand::CreateMarker {
            title: None,
            description: None,
            ..
        }
    ));
    assert!(matches!(commands[1], AppCommand::ExitMarkerMode));
}

#[test]
fn control_intents_map_one_to_one() {
    let state = AppState::new();

    let cases = [
        (AppIntent::ToggleMarkerModeRequested, AppCommand::ToggleMarkerMode),
        (AppIntent::CycleIconGlyphRequested, AppCommand::CycleIconGlyph),
        (
            AppIntent::CycleTransportTypeRequested,
            AppCommand::CycleTransportType,
        ),
        (AppIntent::ResetViewRequested, AppCommand::ResetCamera),
    ];

    for (intent, expected) in cases {
        assert_eq!(map_intent_to_commands(&state, intent), vec![expected]);
    }
}

#[test]
fn camera_zoom_keeps_focus() {
    let state = AppState::new();
    let focus = Some(GeoPosition::new(-16.6, -49.2));

    let commands = map_intent_to_commands(&state, AppIntent::CameraZoom { delta: 0.5, focus });

    assert_eq!(commands, vec![AppCommand::ZoomCamera { delta: 0.5, focus }]);
}
