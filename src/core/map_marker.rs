//! Marker-Datenmodell: Position, Verkehrsart, Icon-Glyphe und der Marker-Datensatz.

use serde::{Deserialize, Serialize};

/// Geografische Position (WGS84, Grad).
///
/// Serialisiert als `{"lat": .., "lng": ..}`, kompatibel mit dem gespeicherten Payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl GeoPosition {
    /// Erstellt eine neue Position.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Gibt `true` zurück, wenn beide Werte endlich sind und im gültigen Bereich liegen.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Verkehrsart eines Markers (bestimmt die Farbe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    /// Bus (lila)
    #[default]
    Bus,
    /// Zug (gelb)
    Train,
    /// Auto (fast weiß)
    Car,
}

impl TransportType {
    /// Feste Zyklus-Reihenfolge.
    pub const ALL: [TransportType; 3] = [Self::Bus, Self::Train, Self::Car];

    /// Nächste Verkehrsart im Zyklus Bus → Train → Car → Bus.
    pub fn next(self) -> Self {
        match self {
            Self::Bus => Self::Train,
            Self::Train => Self::Car,
            Self::Car => Self::Bus,
        }
    }

    /// Anzeigename im Control-Panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bus => "Bus",
            Self::Train => "Train",
            Self::Car => "Car",
        }
    }

    /// Schlüssel für Payload und CSS-Klasse.
    pub fn key(self) -> &'static str {
        match self {
            Self::Bus => "bus",
            Self::Train => "train",
            Self::Car => "car",
        }
    }
}

/// Icon-Glyphe eines Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IconGlyph {
    /// "X"
    #[default]
    #[serde(rename = "x")]
    Cross,
    /// Gefüllter Punkt
    #[serde(rename = "circle")]
    Dot,
}

impl IconGlyph {
    /// Nächste Glyphe im Zyklus Cross → Dot → Cross.
    pub fn next(self) -> Self {
        match self {
            Self::Cross => Self::Dot,
            Self::Dot => Self::Cross,
        }
    }

    /// Darzustellendes Zeichen.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Cross => "X",
            Self::Dot => "●",
        }
    }

    /// Schlüssel für Payload und CSS-Klasse.
    pub fn key(self) -> &'static str {
        match self {
            Self::Cross => "x",
            Self::Dot => "circle",
        }
    }
}

/// Ein gesetzter Marker. Wird nach der Erstellung nicht mehr verändert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    /// Position auf der Karte
    pub position: GeoPosition,
    /// Verkehrsart
    #[serde(rename = "type")]
    pub transport_type: TransportType,
    /// Icon-Glyphe
    #[serde(rename = "iconType")]
    pub icon_glyph: IconGlyph,
    /// Titel (leer = Platzhalter im Popup)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Beschreibung
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl MarkerRecord {
    /// Erstellt einen Marker; fehlende Texte werden zu leeren Strings.
    pub fn new(
        position: GeoPosition,
        transport_type: TransportType,
        icon_glyph: IconGlyph,
        title: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            position,
            transport_type,
            icon_glyph,
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
        }
    }
}

/// `null` im Payload wird wie ein fehlender Text behandelt.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
