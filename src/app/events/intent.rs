use crate::core::GeoPosition;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Einmaliges Start-Event: Karte initialisieren, gespeicherte Marker laden
    StartupRequested,
    /// Button "Add Marker" / "Click the map"
    ToggleMarkerModeRequested,
    /// Button "Icon"
    CycleIconGlyphRequested,
    /// Button "Type"
    CycleTransportTypeRequested,
    /// Klick auf die Karte an einer Geo-Position
    MapClicked { position: GeoPosition },
    /// Karte um ein Bildschirm-Delta verschieben (Pixel)
    CameraPan { delta: glam::DVec2 },
    /// Zoomstufe ändern (optional auf einen Fokuspunkt)
    CameraZoom {
        delta: f64,
        focus: Option<GeoPosition>,
    },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Ansicht auf Start-Mittelpunkt und -Zoom zurücksetzen
    ResetViewRequested,
}
