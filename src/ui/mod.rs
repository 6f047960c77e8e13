//! UI-Komponenten: Control-Panel und Kartenansicht.

/// UI-Layer mit egui
///
/// Das Control-Panel erzeugt Auswahl-Intents, die Kartenansicht zeichnet die
/// Render-Szene und liefert Klick-, Pan- und Zoom-Intents.
pub mod control_panel;
pub mod map_view;

pub use control_panel::{render_control_panel, ControlPanelLabels};
pub use map_view::render_map_view;

/// RGBA-Optionsfarbe nach egui.
pub(crate) fn color32(color: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]).into()
}
