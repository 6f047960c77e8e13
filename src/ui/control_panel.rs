//! Control-Panel oben rechts: Platzierungsmodus, Icon-Glyphe und Verkehrsart.

use crate::app::{AppIntent, AppState, SelectionState};
use crate::shared::options::color_to_hex;
use crate::shared::MapOptions;

/// Beschriftungen der drei Buttons, vollständig aus dem Auswahlzustand abgeleitet.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanelLabels {
    /// "Add Marker" (Idle) oder "Click the map" (Placing)
    pub placement: &'static str,
    /// "X" oder "●"
    pub icon: &'static str,
    /// "Bus", "Train" oder "Car"
    pub transport: &'static str,
    /// Textfarbe der Verkehrsart (RGBA)
    pub transport_color: [f32; 4],
}

impl ControlPanelLabels {
    /// Berechnet alle Beschriftungen neu (nicht inkrementell).
    pub fn from_state(selection: &SelectionState, options: &MapOptions) -> Self {
        Self {
            placement: if selection.is_placing() {
                "Click the map"
            } else {
                "Add Marker"
            },
            icon: selection.icon_glyph.symbol(),
            transport: selection.transport_type.label(),
            transport_color: options.transport_color(selection.transport_type),
        }
    }

    /// Textfarbe der Verkehrsart als `#rrggbb`.
    pub fn transport_color_hex(&self) -> String {
        color_to_hex(self.transport_color)
    }
}

/// Rendert das Control-Panel und gibt erzeugte Events zurück.
pub fn render_control_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let labels = ControlPanelLabels::from_state(&state.selection, &state.options);

    egui::Area::new(egui::Id::new("marker_control_panel"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.vertical(|ui| {
                    let placement_btn =
                        egui::Button::new(labels.placement).selected(state.selection.is_placing());
                    if ui.add(placement_btn).clicked() {
                        events.push(AppIntent::ToggleMarkerModeRequested);
                    }

                    if ui.button(format!("Icon: {}", labels.icon)).clicked() {
                        events.push(AppIntent::CycleIconGlyphRequested);
                    }

                    let transport_text = egui::RichText::new(format!("Type: {}", labels.transport))
                        .color(super::color32(labels.transport_color));
                    if ui.button(transport_text).clicked() {
                        events.push(AppIntent::CycleTransportTypeRequested);
                    }
                });
            });
        });

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransportType;

    #[test]
    fn test_default_labels() {
        let labels = ControlPanelLabels::from_state(&SelectionState::new(), &MapOptions::default());
        assert_eq!(labels.placement, "Add Marker");
        assert_eq!(labels.icon, "X");
        assert_eq!(labels.transport, "Bus");
        assert_eq!(labels.transport_color_hex(), "#9b59b6");
    }

    #[test]
    fn test_labels_follow_every_state_change() {
        let options = MapOptions::default();
        let mut selection = SelectionState::new();

        selection.toggle_placing();
        selection.cycle_icon_glyph();
        selection.cycle_transport_type();
        let labels = ControlPanelLabels::from_state(&selection, &options);
        assert_eq!(labels.placement, "Click the map");
        assert_eq!(labels.icon, "●");
        assert_eq!(labels.transport, "Train");
        assert_eq!(labels.transport_color_hex(), "#f1c40f");

        selection.cycle_transport_type();
        let labels = ControlPanelLabels::from_state(&selection, &options);
        assert_eq!(labels.transport, "Car");
        assert_eq!(labels.transport_color_hex(), "#ecf0f1");
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let options = MapOptions::default();
        let selection = SelectionState {
            placing_active: true,
            transport_type: TransportType::Car,
            ..SelectionState::new()
        };
        assert_eq!(
            ControlPanelLabels::from_state(&selection, &options),
            ControlPanelLabels::from_state(&selection, &options)
        );
    }
}
