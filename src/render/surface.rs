//! Vertrag zur Kartenoberfläche (Map Surface).
//!
//! Die Oberfläche stellt Ansicht, Kachel-Layer und platzierte Glyphen bereit. Kern und
//! App-Layer kennen nur dieses Trait; wie gezeichnet wird, entscheidet das Frontend.

use super::MarkerGlyph;
use crate::core::GeoPosition;

/// Hintergrund-Kachel-Layer mit Attribution.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    /// URL-Vorlage mit `{s}`, `{z}`, `{x}`, `{y}`, `{r}`
    pub url_template: String,
    /// Subdomains für `{s}`
    pub subdomains: Vec<String>,
    /// Attributionstext
    pub attribution: String,
}

impl TileLayer {
    /// Erstellt einen Layer; jedes Zeichen von `subdomains` ist eine Subdomain.
    pub fn new(url_template: &str, subdomains: &str, attribution: &str) -> Self {
        Self {
            url_template: url_template.to_string(),
            subdomains: subdomains.chars().map(String::from).collect(),
            attribution: attribution.to_string(),
        }
    }

    /// Setzt die Kachel-URL zusammen. `{r}` (Retina-Suffix) bleibt leer.
    pub fn tile_url(&self, z: u32, x: u32, y: u32) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let index = (x as usize + y as usize) % self.subdomains.len();
            self.subdomains[index].as_str()
        };

        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{r}", "")
    }
}

/// Kartenoberfläche, auf der Ansicht, Kacheln und Marker-Glyphen platziert werden.
pub trait MapSurface {
    /// Zentriert die Ansicht auf `center` mit Zoomstufe `zoom`.
    fn set_view(&mut self, center: GeoPosition, zoom: f64);

    /// Setzt den Hintergrund-Kachel-Layer.
    fn set_tile_layer(&mut self, layer: TileLayer);

    /// Platziert eine Glyphe samt Popup-Label.
    fn place_glyph(&mut self, glyph: MarkerGlyph);

    /// Entfernt alle platzierten Glyphen.
    fn clear_glyphs(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::{TILE_ATTRIBUTION, TILE_SUBDOMAINS, TILE_URL_TEMPLATE};

    #[test]
    fn test_tile_url_substitutes_all_placeholders() {
        let layer = TileLayer::new(TILE_URL_TEMPLATE, TILE_SUBDOMAINS, TILE_ATTRIBUTION);
        assert_eq!(
            layer.tile_url(13, 2974, 4660),
            "https://c.basemaps.cartocdn.com/dark_all/13/2974/4660.png"
        );
    }

    #[test]
    fn test_subdomains_rotate_with_tile_position() {
        let layer = TileLayer::new("{s}/{z}/{x}/{y}", "ab", "");
        assert_eq!(layer.tile_url(1, 0, 0), "a/1/0/0");
        assert_eq!(layer.tile_url(1, 1, 0), "b/1/1/0");
    }

    #[test]
    fn test_template_without_subdomains() {
        let layer = TileLayer::new("https://tile.example/{z}/{x}/{y}.png", "", "");
        assert_eq!(layer.tile_url(0, 0, 0), "https://tile.example/0/0/0.png");
    }
}
