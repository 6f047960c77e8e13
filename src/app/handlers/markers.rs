//! Handler für Marker-Erstellung, Restore und Persistenz.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoPosition;

/// Initialisiert Ansicht und Kachel-Layer.
pub fn initialize_map(state: &mut AppState) {
    use_cases::markers::initialize_map(state);
}

/// Lädt gespeicherte Marker und rendert sie.
pub fn restore(state: &mut AppState) {
    use_cases::markers::restore_markers(state);
}

/// Erstellt einen Marker an der Position mit der aktuellen Auswahl.
pub fn create(
    state: &mut AppState,
    position: GeoPosition,
    title: Option<String>,
    description: Option<String>,
) {
    use_cases::markers::create_and_add(state, position, title, description);
}

/// Speichert alle Marker und propagiert Speicherfehler an den Aufrufer.
pub fn persist(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::markers::persist_all(state)?;
    Ok(())
}
