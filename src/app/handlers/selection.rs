//! Handler für den Auswahl-Zustandsautomaten des Control-Panels.

use crate::app::AppState;

/// Schaltet den Platzierungsmodus um (Idle ↔ Placing).
pub fn toggle_marker_mode(state: &mut AppState) {
    state.selection.toggle_placing();
    log::debug!("Platzierungsmodus: {:?}", state.selection.mode());
}

/// Verlässt den Platzierungsmodus nach einer Platzierung.
pub fn exit_marker_mode(state: &mut AppState) {
    state.selection.exit_placing();
}

/// Wählt die nächste Icon-Glyphe.
pub fn cycle_icon_glyph(state: &mut AppState) {
    state.selection.cycle_icon_glyph();
    log::debug!("Icon-Glyphe: {:?}", state.selection.icon_glyph);
}

/// Wählt die nächste Verkehrsart.
pub fn cycle_transport_type(state: &mut AppState) {
    state.selection.cycle_transport_type();
    log::debug!("Verkehrsart: {:?}", state.selection.transport_type);
}
