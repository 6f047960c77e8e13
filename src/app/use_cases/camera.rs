//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::{GeoPosition, MapCamera};

/// Setzt die Kamera auf Start-Mittelpunkt und -Zoom zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = MapCamera::new(state.options.map_center, state.options.map_zoom);
}

/// Verschiebt die Karte um ein Bildschirm-Delta.
pub fn pan(state: &mut AppState, delta: glam::DVec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus` angegeben ist, bleibt die Geo-Position unter der Maus
/// nach dem Zoom an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, delta: f64, focus: Option<GeoPosition>) {
    let min = state.options.zoom_min;
    let max = state.options.zoom_max;
    match focus {
        Some(focus) => {
            let viewport = glam::DVec2::new(
                state.view.viewport_size[0] as f64,
                state.view.viewport_size[1] as f64,
            );
            state
                .view
                .camera
                .zoom_towards(delta, focus, min, max, viewport);
        }
        None => state.view.camera.zoom_by_clamped(delta, min, max),
    }
}

/// Aktualisiert die Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
