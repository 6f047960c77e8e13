//! Use-Cases für Marker: Erstellen, Laden (Restore) und Speichern.

use crate::app::AppState;
use crate::core::{GeoPosition, MarkerRecord, StorageError};
use crate::render::{render_marker, MapSurface};

/// Erstellt einen Marker mit der *aktuellen* Auswahl, hängt ihn an, rendert und speichert.
///
/// Schlägt nie fehl: ein Schreibfehler des Speichers wird nur geloggt.
pub fn create_and_add(
    state: &mut AppState,
    position: GeoPosition,
    title: Option<String>,
    description: Option<String>,
) {
    if !position.is_valid() {
        log::warn!(
            "Ungültige Position ({}, {}), Marker wird nicht gesetzt",
            position.lat,
            position.lng
        );
        return;
    }

    let record = MarkerRecord::new(
        position,
        state.selection.transport_type,
        state.selection.icon_glyph,
        title,
        description,
    );

    render_marker(&record, &state.options, &mut state.view);
    log::info!(
        "Marker gesetzt bei ({:.5}, {:.5}) [{:?}, {:?}]",
        record.position.lat,
        record.position.lng,
        record.transport_type,
        record.icon_glyph
    );
    state.markers.push(record);

    if let Err(e) = persist_all(state) {
        log::warn!("Marker konnten nicht gespeichert werden: {}", e);
    }
}

/// Ersetzt den Store durch die gespeicherten Marker; Fehler ergeben einen leeren Store.
pub fn load_all(state: &mut AppState) {
    let records = state.persistence.load(state.storage.as_ref());
    state.markers.replace_all(records);
}

/// Lädt die gespeicherten Marker und rendert jeden aus seinen eigenen Feldern.
///
/// Die Auswahl bleibt unberührt, außer `seed_selection_from_last_marker` ist gesetzt.
pub fn restore_markers(state: &mut AppState) {
    load_all(state);

    state.view.clear_glyphs();
    for record in state.markers.iter() {
        render_marker(record, &state.options, &mut state.view);
    }

    if state.options.seed_selection_from_last_marker {
        if let Some(last) = state.markers.last() {
            state.selection.icon_glyph = last.icon_glyph;
            state.selection.transport_type = last.transport_type;
        }
    }

    log::info!("{} gespeicherte Marker geladen", state.markers.len());
}

/// Schreibt den kompletten Marker-Snapshot in den Speicher.
pub fn persist_all(state: &mut AppState) -> Result<(), StorageError> {
    state
        .persistence
        .save(state.storage.as_mut(), &state.markers)
}

/// Setzt Ansicht und Kachel-Layer der Kartenoberfläche aus den Optionen.
pub fn initialize_map(state: &mut AppState) {
    let layer = crate::render::TileLayer::new(
        &state.options.tile_url_template,
        &state.options.tile_subdomains,
        &state.options.tile_attribution,
    );
    state
        .view
        .set_view(state.options.map_center, state.options.map_zoom);
    state.view.set_tile_layer(layer);
    log::info!(
        "Karte initialisiert: ({}, {}) Zoom {}",
        state.options.map_center.lat,
        state.options.map_center.lng,
        state.options.map_zoom
    );
}
