use crate::core::GeoPosition;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Ansicht und Kachel-Layer der Kartenoberfläche setzen
    InitializeMap,
    /// Gespeicherte Marker laden und rendern
    RestoreMarkers,
    /// Platzierungsmodus umschalten
    ToggleMarkerMode,
    /// Nächste Icon-Glyphe wählen
    CycleIconGlyph,
    /// Nächste Verkehrsart wählen
    CycleTransportType,
    /// Marker mit der aktuellen Auswahl erstellen, rendern und speichern
    CreateMarker {
        position: GeoPosition,
        title: Option<String>,
        description: Option<String>,
    },
    /// Platzierungsmodus nach erfolgter Platzierung verlassen
    ExitMarkerMode,
    /// Kompletten Marker-Snapshot speichern
    PersistMarkers,
    /// Karte um Bildschirm-Delta verschieben
    PanCamera { delta: glam::DVec2 },
    /// Zoomstufe ändern (optional auf Fokuspunkt)
    ZoomCamera {
        delta: f64,
        focus: Option<GeoPosition>,
    },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera auf Startwerte zurücksetzen
    ResetCamera,
}
