//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::StartupRequested => {
            vec![AppCommand::InitializeMap, AppCommand::RestoreMarkers]
        }
        AppIntent::ToggleMarkerModeRequested => vec![AppCommand::ToggleMarkerMode],
        AppIntent::CycleIconGlyphRequested => vec![AppCommand::CycleIconGlyph],
        AppIntent::CycleTransportTypeRequested => vec![AppCommand::CycleTransportType],
        AppIntent::MapClicked { position } => {
            if !state.selection.is_placing() {
                return Vec::new();
            }

            vec![
                AppCommand::CreateMarker {
                    position,
                    title: None,
                    description: None,
                },
                AppCommand::ExitMarkerMode,
            ]
        }
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { delta, focus } => vec![AppCommand::ZoomCamera { delta, focus }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetCamera],
    }
}

#[cfg(test)]
mod tests;
