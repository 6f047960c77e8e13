//! Render-Szene als expliziter Übergabevertrag zwischen App und Kartenansicht.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use crate::core::MapCamera;
use crate::render::{MarkerGlyph, TileLayer};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: MapCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Hintergrund-Kachel-Layer (fehlt vor der Initialisierung)
    pub tile_layer: Option<TileLayer>,
    /// Höchste Kachel-Zoomstufe
    pub tile_zoom_max: u32,
    /// Zoom-Schritt pro Mausrad-Raste
    pub scroll_zoom_step: f64,
    /// Alle platzierten Marker-Glyphen in Erstellungsreihenfolge
    pub glyphs: Vec<MarkerGlyph>,
    /// Platzierungsmodus aktiv (Fadenkreuz-Cursor)
    pub placing_active: bool,
}

impl RenderScene {
    /// Gibt zurück, ob ein Kachel-Layer gesetzt ist.
    pub fn has_tiles(&self) -> bool {
        self.tile_layer.is_some()
    }
}
