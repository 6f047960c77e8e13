//! Marker-Renderer: übersetzt einen `MarkerRecord` in eine Glyphe auf der Kartenoberfläche.

use super::MapSurface;
use crate::core::{GeoPosition, IconGlyph, MarkerRecord, TransportType};
use crate::shared::options::color_to_hex;
use crate::shared::MapOptions;

/// Fertig aufbereitete Marker-Glyphe für eine Kartenoberfläche.
///
/// Enthält die Klartexte für Frontends ohne HTML-Rendering (egui zeichnet daraus
/// Labels). `icon_markup` und `popup_markup` sind der Vertrag für markup-basierte
/// Oberflächen (`divIcon`/`bindPopup`-artig) und garantieren das Escaping.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGlyph {
    /// Position des Ankerpunkts
    pub position: GeoPosition,
    /// Glyphe (bestimmt die Form)
    pub icon_glyph: IconGlyph,
    /// Verkehrsart (bestimmt die Farbe)
    pub transport_type: TransportType,
    /// Darzustellendes Zeichen ("X" oder "●")
    pub symbol: &'static str,
    /// CSS-Klassen, z.B. `custom-marker marker-bus marker-x`
    pub class_name: String,
    /// Füllfarbe (RGBA)
    pub color: [f32; 4],
    /// Icon-Größe in Pixeln
    pub icon_size: [f32; 2],
    /// Ankerpunkt innerhalb des Icons in Pixeln
    pub icon_anchor: [f32; 2],
    /// Popup-Titel als Klartext (Platzhalter bei leerem Titel)
    pub popup_title: String,
    /// Popup-Beschreibung als Klartext
    pub popup_description: String,
}

impl MarkerGlyph {
    /// Icon-Markup mit Farbe als Inline-Style.
    pub fn icon_markup(&self) -> String {
        format!(
            "<div class=\"{}\" style=\"color: {}\">{}</div>",
            self.class_name,
            color_to_hex(self.color),
            self.symbol
        )
    }

    /// Popup-Markup; Titel und Beschreibung werden escaped.
    pub fn popup_markup(&self) -> String {
        format!(
            "<b>{}</b><br>{}",
            escape_markup(&self.popup_title),
            escape_markup(&self.popup_description)
        )
    }
}

/// Baut die Glyphe zu einem Marker; reine Funktion ohne Seiteneffekte.
pub fn build_glyph(record: &MarkerRecord, options: &MapOptions) -> MarkerGlyph {
    let popup_title = if record.title.is_empty() {
        options.marker_default_title.clone()
    } else {
        record.title.clone()
    };

    MarkerGlyph {
        position: record.position,
        icon_glyph: record.icon_glyph,
        transport_type: record.transport_type,
        symbol: record.icon_glyph.symbol(),
        class_name: format!(
            "custom-marker marker-{} marker-{}",
            record.transport_type.key(),
            record.icon_glyph.key()
        ),
        color: options.transport_color(record.transport_type),
        icon_size: options.marker_icon_size,
        icon_anchor: options.marker_icon_anchor,
        popup_title,
        popup_description: record.description.clone(),
    }
}

/// Rendert einen Marker auf die Oberfläche.
///
/// Nutzt ausschließlich die Felder des Datensatzes, nie die aktuelle Auswahl.
pub fn render_marker<S: MapSurface + ?Sized>(
    record: &MarkerRecord,
    options: &MapOptions,
    surface: &mut S,
) {
    surface.place_glyph(build_glyph(record, options));
}

/// Escaped Text für die Einbettung in HTML-Markup.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TileLayer;

    #[derive(Default)]
    struct RecordingSurface {
        glyphs: Vec<MarkerGlyph>,
    }

    impl MapSurface for RecordingSurface {
        fn set_view(&mut self, _center: GeoPosition, _zoom: f64) {}
        fn set_tile_layer(&mut self, _layer: TileLayer) {}
        fn place_glyph(&mut self, glyph: MarkerGlyph) {
            self.glyphs.push(glyph);
        }
        fn clear_glyphs(&mut self) {
            self.glyphs.clear();
        }
    }

    fn record(transport: TransportType, glyph: IconGlyph, title: &str, desc: &str) -> MarkerRecord {
        MarkerRecord::new(
            GeoPosition::new(-16.7, -49.26),
            transport,
            glyph,
            Some(title.to_string()),
            Some(desc.to_string()),
        )
    }

    #[test]
    fn test_glyph_style_follows_record_fields() {
        let options = MapOptions::default();
        let glyph = build_glyph(&record(TransportType::Train, IconGlyph::Dot, "", ""), &options);

        assert_eq!(glyph.symbol, "●");
        assert_eq!(glyph.class_name, "custom-marker marker-train marker-circle");
        assert_eq!(color_to_hex(glyph.color), "#f1c40f");
        assert_eq!(glyph.icon_size, [24.0, 24.0]);
        assert_eq!(glyph.icon_anchor, [12.0, 12.0]);
    }

    #[test]
    fn test_empty_title_uses_placeholder() {
        let options = MapOptions::default();
        let glyph = build_glyph(&record(TransportType::Bus, IconGlyph::Cross, "", ""), &options);
        assert_eq!(glyph.popup_title, "New Marker");
        assert_eq!(glyph.popup_markup(), "<b>New Marker</b><br>");
    }

    #[test]
    fn test_popup_markup_escapes_user_text() {
        let options = MapOptions::default();
        let glyph = build_glyph(
            &record(
                TransportType::Car,
                IconGlyph::Cross,
                "<script>alert(1)</script>",
                "Tom & \"Jerry's\"",
            ),
            &options,
        );

        assert_eq!(
            glyph.popup_markup(),
            "<b>&lt;script&gt;alert(1)&lt;/script&gt;</b><br>Tom &amp; &quot;Jerry&#39;s&quot;"
        );
        // Klartext bleibt unverändert
        assert_eq!(glyph.popup_title, "<script>alert(1)</script>");
    }

    #[test]
    fn test_icon_markup_carries_class_and_color() {
        let options = MapOptions::default();
        let glyph = build_glyph(&record(TransportType::Bus, IconGlyph::Cross, "", ""), &options);
        assert_eq!(
            glyph.icon_markup(),
            "<div class=\"custom-marker marker-bus marker-x\" style=\"color: #9b59b6\">X</div>"
        );
    }

    #[test]
    fn test_render_marker_places_exactly_one_glyph() {
        let options = MapOptions::default();
        let mut surface = RecordingSurface::default();
        render_marker(
            &record(TransportType::Bus, IconGlyph::Dot, "Ponto", "Linha 1"),
            &options,
            &mut surface,
        );
        assert_eq!(surface.glyphs.len(), 1);
        assert_eq!(surface.glyphs[0].popup_description, "Linha 1");
    }
}
