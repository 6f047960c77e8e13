//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoPosition;

/// Setzt die Kamera auf den Startzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::camera::resize(state, size);
}

/// Verschiebt die Karte um ein Bildschirm-Delta.
pub fn pan(state: &mut AppState, delta: glam::DVec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt.
pub fn zoom_towards(state: &mut AppState, delta: f64, focus: Option<GeoPosition>) {
    use_cases::camera::zoom_towards(state, delta, focus);
}
