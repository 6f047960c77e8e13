//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size: state.view.viewport_size,
        tile_layer: state.view.tile_layer.clone(),
        tile_zoom_max: state.options.tile_zoom_max,
        scroll_zoom_step: state.options.scroll_zoom_step,
        glyphs: state.view.glyphs.clone(),
        placing_active: state.selection.is_placing(),
    }
}
