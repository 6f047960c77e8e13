//! Zentrale Konfiguration der Marker-Karte.
//!
//! `MapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{GeoPosition, MarkerPersistence, TransportType, MAX_TILE_ZOOM};
use serde::{Deserialize, Serialize};

// ── Karte ───────────────────────────────────────────────────────────

/// Start-Mittelpunkt der Karte (Goiânia).
pub const MAP_CENTER: GeoPosition = GeoPosition::new(-16.6799, -49.255);
/// Start-Zoomstufe.
pub const MAP_ZOOM: f64 = 13.0;
/// Minimale Zoomstufe.
pub const MAP_ZOOM_MIN: f64 = 2.0;
/// Maximale Zoomstufe.
pub const MAP_ZOOM_MAX: f64 = 19.0;
/// Höchste Zoomstufe, für die Kacheln angefragt werden.
pub const TILE_ZOOM_MAX: u32 = 19;
/// Zoom-Schritt bei Mausrad-Scroll (Zoomstufen).
pub const SCROLL_ZOOM_STEP: f64 = 0.5;

// ── Kacheln ─────────────────────────────────────────────────────────

/// URL-Vorlage des dunklen Carto-Basemaps.
pub const TILE_URL_TEMPLATE: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
/// Subdomains für `{s}`.
pub const TILE_SUBDOMAINS: &str = "abcd";
/// Attributionstext des Kachel-Layers.
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap";

// ── Persistenz ──────────────────────────────────────────────────────

/// Dateiname des lokalen Key/Value-Speichers (neben der Binary).
pub const STORAGE_FILE_NAME: &str = "goiania_map_storage.json";

// ── Marker-Darstellung ──────────────────────────────────────────────

/// Icon-Größe in Pixeln.
pub const MARKER_ICON_SIZE: [f32; 2] = [24.0, 24.0];
/// Icon-Ankerpunkt in Pixeln (Mitte).
pub const MARKER_ICON_ANCHOR: [f32; 2] = [12.0, 12.0];
/// Platzhalter-Titel im Popup bei leerem Titel.
pub const MARKER_DEFAULT_TITLE: &str = "New Marker";
/// Farbe für Bus-Marker (RGBA: Lila, #9b59b6).
pub const COLOR_BUS: [f32; 4] = [0.6078, 0.3490, 0.7137, 1.0];
/// Farbe für Zug-Marker (RGBA: Gelb, #f1c40f).
pub const COLOR_TRAIN: [f32; 4] = [0.9451, 0.7686, 0.0588, 1.0];
/// Farbe für Auto-Marker (RGBA: Fast-Weiß, #ecf0f1).
pub const COLOR_CAR: [f32; 4] = [0.9255, 0.9412, 0.9451, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Karten-Optionen.
/// Wird als `goiania_marker_map.toml` neben der Binary gelesen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    // ── Karte ───────────────────────────────────────────────────
    /// Start-Zoomstufe
    pub map_zoom: f64,
    /// Minimale Zoomstufe
    pub zoom_min: f64,
    /// Maximale Zoomstufe
    pub zoom_max: f64,
    /// Höchste Kachel-Zoomstufe
    pub tile_zoom_max: u32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub scroll_zoom_step: f64,

    // ── Kacheln ─────────────────────────────────────────────────
    /// URL-Vorlage (`{s}`, `{z}`, `{x}`, `{y}`, `{r}`)
    pub tile_url_template: String,
    /// Subdomains für `{s}` (je Zeichen eine)
    pub tile_subdomains: String,
    /// Attributionstext
    pub tile_attribution: String,

    // ── Persistenz ──────────────────────────────────────────────
    /// Schlüssel der Marker-Liste im Key/Value-Speicher
    pub storage_key: String,
    /// Dateiname des Key/Value-Speichers
    pub storage_file_name: String,
    /// Auswahl (Glyphe/Verkehrsart) nach dem Laden vom letzten Marker übernehmen
    pub seed_selection_from_last_marker: bool,

    // ── Marker ──────────────────────────────────────────────────
    /// Icon-Größe in Pixeln
    pub marker_icon_size: [f32; 2],
    /// Icon-Ankerpunkt in Pixeln
    pub marker_icon_anchor: [f32; 2],
    /// Platzhalter-Titel im Popup
    pub marker_default_title: String,
    /// Farbe für Bus
    pub color_bus: [f32; 4],
    /// Farbe für Zug
    pub color_train: [f32; 4],
    /// Farbe für Auto
    pub color_car: [f32; 4],

    /// Start-Mittelpunkt (als TOML-Tabelle zuletzt)
    pub map_center: GeoPosition,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            map_center: MAP_CENTER,
            map_zoom: MAP_ZOOM,
            zoom_min: MAP_ZOOM_MIN,
            zoom_max: MAP_ZOOM_MAX,
            tile_zoom_max: TILE_ZOOM_MAX,
            scroll_zoom_step: SCROLL_ZOOM_STEP,

            tile_url_template: TILE_URL_TEMPLATE.to_string(),
            tile_subdomains: TILE_SUBDOMAINS.to_string(),
            tile_attribution: TILE_ATTRIBUTION.to_string(),

            storage_key: MarkerPersistence::DEFAULT_KEY.to_string(),
            storage_file_name: STORAGE_FILE_NAME.to_string(),
            seed_selection_from_last_marker: false,

            marker_icon_size: MARKER_ICON_SIZE,
            marker_icon_anchor: MARKER_ICON_ANCHOR,
            marker_default_title: MARKER_DEFAULT_TITLE.to_string(),
            color_bus: COLOR_BUS,
            color_train: COLOR_TRAIN,
            color_car: COLOR_CAR,
        }
    }
}

impl MapOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.validated()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt unbrauchbare Werte einzeln durch ihre Standardwerte.
    ///
    /// Die Kamera-Mathematik setzt endliche Zoomgrenzen mit `zoom_min <= zoom_max`
    /// und eine Kachel-Zoomstufe bis `MAX_TILE_ZOOM` voraus.
    pub fn validated(mut self) -> Self {
        let limits_ok = self.zoom_min.is_finite()
            && self.zoom_max.is_finite()
            && self.zoom_min <= self.zoom_max;
        if !limits_ok {
            log::warn!(
                "Ungültige Zoomgrenzen [{}, {}], verwende [{}, {}]",
                self.zoom_min,
                self.zoom_max,
                MAP_ZOOM_MIN,
                MAP_ZOOM_MAX
            );
            self.zoom_min = MAP_ZOOM_MIN;
            self.zoom_max = MAP_ZOOM_MAX;
        }

        if !self.map_zoom.is_finite() {
            log::warn!("Ungültige Start-Zoomstufe {}, verwende {}", self.map_zoom, MAP_ZOOM);
            self.map_zoom = MAP_ZOOM;
        }
        self.map_zoom = self.map_zoom.clamp(self.zoom_min, self.zoom_max);

        if self.tile_zoom_max > MAX_TILE_ZOOM {
            log::warn!(
                "Kachel-Zoomstufe {} zu hoch, verwende {}",
                self.tile_zoom_max,
                TILE_ZOOM_MAX
            );
            self.tile_zoom_max = TILE_ZOOM_MAX;
        }

        if !(self.scroll_zoom_step.is_finite() && self.scroll_zoom_step > 0.0) {
            log::warn!(
                "Ungültiger Scroll-Zoomschritt {}, verwende {}",
                self.scroll_zoom_step,
                SCROLL_ZOOM_STEP
            );
            self.scroll_zoom_step = SCROLL_ZOOM_STEP;
        }

        if !self.map_center.is_valid() {
            log::warn!(
                "Ungültiger Start-Mittelpunkt ({}, {}), verwende Goiânia",
                self.map_center.lat,
                self.map_center.lng
            );
            self.map_center = MAP_CENTER;
        }

        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        Self::beside_executable("goiania_marker_map.toml")
    }

    /// Ermittelt den Pfad zum Key/Value-Speicher neben der Binary.
    pub fn storage_path(&self) -> std::path::PathBuf {
        Self::beside_executable(&self.storage_file_name)
    }

    fn beside_executable(file_name: &str) -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("goiania-marker-map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(file_name)
    }

    /// Farbe einer Verkehrsart (RGBA).
    pub fn transport_color(&self, transport_type: TransportType) -> [f32; 4] {
        match transport_type {
            TransportType::Bus => self.color_bus,
            TransportType::Train => self.color_train,
            TransportType::Car => self.color_car,
        }
    }
}

/// Wandelt eine RGBA-Farbe in `#rrggbb` um (Alpha wird ignoriert).
pub fn color_to_hex(color: [f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color[0]),
        channel(color[1]),
        channel(color[2])
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transport_colors_match_palette() {
        let options = MapOptions::default();
        assert_eq!(color_to_hex(options.transport_color(TransportType::Bus)), "#9b59b6");
        assert_eq!(color_to_hex(options.transport_color(TransportType::Train)), "#f1c40f");
        assert_eq!(color_to_hex(options.transport_color(TransportType::Car)), "#ecf0f1");
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let opts: MapOptions =
            toml::from_str("map_zoom = 15.0\nseed_selection_from_last_marker = true\n")
                .expect("TOML erwartet");
        assert_eq!(opts.map_zoom, 15.0);
        assert!(opts.seed_selection_from_last_marker);
        assert_eq!(opts.storage_key, "goiania_map_markers");
        assert_eq!(opts.map_center, MAP_CENTER);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("Tempdir erwartet");
        let path = dir.path().join("options.toml");
        let mut opts = MapOptions::default();
        opts.tile_attribution = "© Teste".to_string();

        opts.save_to_file(&path).expect("Speichern erwartet");
        assert_eq!(MapOptions::load_from_file(&path), opts);
    }

    #[test]
    fn test_broken_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("Tempdir erwartet");
        let path = dir.path().join("options.toml");
        std::fs::write(&path, "map_zoom = [").expect("Schreiben erwartet");
        assert_eq!(MapOptions::load_from_file(&path), MapOptions::default());
    }

    #[test]
    fn test_inverted_zoom_limits_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("Tempdir erwartet");
        let path = dir.path().join("options.toml");
        std::fs::write(&path, "zoom_min = 18.0\nzoom_max = 3.0\nmap_zoom = 15.0\n")
            .expect("Schreiben erwartet");

        let opts = MapOptions::load_from_file(&path);
        assert_eq!(opts.zoom_min, MAP_ZOOM_MIN);
        assert_eq!(opts.zoom_max, MAP_ZOOM_MAX);
        assert_eq!(opts.map_zoom, 15.0);
    }

    #[test]
    fn test_excessive_tile_zoom_falls_back_to_default() {
        let dir = tempfile::tempdir().expect("Tempdir erwartet");
        let path = dir.path().join("options.toml");
        std::fs::write(&path, "tile_zoom_max = 40\nzoom_max = 12.0\n")
            .expect("Schreiben erwartet");

        let opts = MapOptions::load_from_file(&path);
        assert_eq!(opts.tile_zoom_max, TILE_ZOOM_MAX);
        assert_eq!(opts.zoom_max, 12.0);
        // Start-Zoom wird in die gültigen Grenzen gezogen
        assert_eq!(opts.map_zoom, 12.0);
    }

    #[test]
    fn test_validated_repairs_each_field_separately() {
        let opts = MapOptions {
            zoom_min: f64::NAN,
            map_zoom: f64::INFINITY,
            scroll_zoom_step: -1.0,
            map_center: GeoPosition::new(91.0, 0.0),
            tile_zoom_max: 21,
            ..MapOptions::default()
        }
        .validated();

        assert_eq!(opts.zoom_min, MAP_ZOOM_MIN);
        assert_eq!(opts.zoom_max, MAP_ZOOM_MAX);
        assert_eq!(opts.map_zoom, MAP_ZOOM);
        assert_eq!(opts.scroll_zoom_step, SCROLL_ZOOM_STEP);
        assert_eq!(opts.map_center, MAP_CENTER);
        assert_eq!(opts.tile_zoom_max, 21);
    }

    #[test]
    fn test_defaults_pass_validation_unchanged() {
        assert_eq!(MapOptions::default().validated(), MapOptions::default());
    }
}
