//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Start ===
            AppCommand::InitializeMap => handlers::markers::initialize_map(state),
            AppCommand::RestoreMarkers => handlers::markers::restore(state),

            // === Auswahl ===
            AppCommand::ToggleMarkerMode => handlers::selection::toggle_marker_mode(state),
            AppCommand::ExitMarkerMode => handlers::selection::exit_marker_mode(state),
            AppCommand::CycleIconGlyph => handlers::selection::cycle_icon_glyph(state),
            AppCommand::CycleTransportType => handlers::selection::cycle_transport_type(state),

            // === Marker ===
            AppCommand::CreateMarker {
                position,
                title,
                description,
            } => handlers::markers::create(state, position, title, description),
            AppCommand::PersistMarkers => handlers::markers::persist(state)?,

            // === Kamera & Viewport ===
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { delta, focus } => {
                handlers::view::zoom_towards(state, delta, focus)
            }
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
