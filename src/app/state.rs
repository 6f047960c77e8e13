//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{GeoPosition, IconGlyph, KeyValueStore, MapCamera, MarkerPersistence};
use crate::core::{MarkerStore, MemoryKeyValueStore, TransportType};
use crate::render::{MapSurface, MarkerGlyph, TileLayer};
use crate::shared::MapOptions;

/// Modus der Marker-Platzierung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMode {
    /// Klicks auf die Karte setzen keinen Marker
    #[default]
    Idle,
    /// Der nächste Klick auf die Karte setzt einen Marker
    Placing,
}

/// Auswahlzustand des Control-Panels (Zustandsautomat).
///
/// Jedes Event ist in jedem Zustand gültig; es gibt keinen Endzustand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Platzierungsmodus aktiv
    pub placing_active: bool,
    /// Glyphe für neue Marker
    pub icon_glyph: IconGlyph,
    /// Verkehrsart für neue Marker
    pub transport_type: TransportType,
}

impl SelectionState {
    /// Startzustand: Idle, Cross, Bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Platzierungsmodus.
    pub fn mode(&self) -> PlacementMode {
        if self.placing_active {
            PlacementMode::Placing
        } else {
            PlacementMode::Idle
        }
    }

    /// Gibt `true` zurück, wenn der nächste Kartenklick einen Marker setzt.
    pub fn is_placing(&self) -> bool {
        self.placing_active
    }

    /// Idle ↔ Placing.
    pub fn toggle_placing(&mut self) {
        self.placing_active = !self.placing_active;
    }

    /// Placing → Idle nach einer abgeschlossenen Platzierung.
    pub fn exit_placing(&mut self) {
        self.placing_active = false;
    }

    /// Cross → Dot → Cross.
    pub fn cycle_icon_glyph(&mut self) {
        self.icon_glyph = self.icon_glyph.next();
    }

    /// Bus → Train → Car → Bus.
    pub fn cycle_transport_type(&mut self) {
        self.transport_type = self.transport_type.next();
    }
}

/// Retained Kartenoberfläche: Kamera, Kachel-Layer und platzierte Glyphen.
///
/// Das egui-Frontend zeichnet diesen Zustand jeden Frame neu.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Kamera (Mittelpunkt + Zoom)
    pub camera: MapCamera,
    /// Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
    /// Hintergrund-Kachel-Layer
    pub tile_layer: Option<TileLayer>,
    /// Platzierte Glyphen in Erstellungsreihenfolge
    pub glyphs: Vec<MarkerGlyph>,
}

impl ViewState {
    /// Erstellt eine Ansicht mit Kamera aus den Optionen, ohne Layer und Glyphen.
    pub fn new(options: &MapOptions) -> Self {
        Self {
            camera: MapCamera::new(options.map_center, options.map_zoom),
            viewport_size: [0.0, 0.0],
            tile_layer: None,
            glyphs: Vec::new(),
        }
    }
}

impl MapSurface for ViewState {
    fn set_view(&mut self, center: GeoPosition, zoom: f64) {
        self.camera = MapCamera::new(center, zoom);
    }

    fn set_tile_layer(&mut self, layer: TileLayer) {
        self.tile_layer = Some(layer);
    }

    fn place_glyph(&mut self, glyph: MarkerGlyph) {
        self.glyphs.push(glyph);
    }

    fn clear_glyphs(&mut self) {
        self.glyphs.clear();
    }
}

/// Hauptzustand der Anwendung. Wird einmal beim Start erzeugt und per `&mut`
/// durch alle Handler gereicht.
pub struct AppState {
    /// Auswahl des Control-Panels
    pub selection: SelectionState,
    /// Alle gesetzten Marker
    pub markers: MarkerStore,
    /// Kartenoberfläche
    pub view: ViewState,
    /// Laufzeit-Optionen
    pub options: MapOptions,
    /// Adapter für die Marker-Persistenz
    pub persistence: MarkerPersistence,
    /// Lokaler Key/Value-Speicher
    pub storage: Box<dyn KeyValueStore>,
    /// Command-Log
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen leeren State mit Standard-Optionen und flüchtigem Speicher.
    pub fn new() -> Self {
        Self::with_storage(MapOptions::default(), Box::new(MemoryKeyValueStore::new()))
    }

    /// Erstellt einen leeren State mit den angegebenen Optionen und Speicher.
    pub fn with_storage(options: MapOptions, storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            selection: SelectionState::new(),
            markers: MarkerStore::new(),
            view: ViewState::new(&options),
            persistence: MarkerPersistence::new(options.storage_key.clone()),
            options,
            storage,
            command_log: CommandLog::new(),
        }
    }

    /// Anzahl der gesetzten Marker.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
