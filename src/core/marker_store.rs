//! In-Memory-Sequenz aller gesetzten Marker.

use super::MarkerRecord;

/// Geordnete, zur Laufzeit nur wachsende Marker-Liste.
///
/// Einfügereihenfolge = Erstellungsreihenfolge. Persistiert wird immer der komplette
/// Snapshot als JSON-Array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerStore {
    records: Vec<MarkerRecord>,
}

impl MarkerStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Hängt einen Marker an.
    pub fn push(&mut self, record: MarkerRecord) {
        self.records.push(record);
    }

    /// Ersetzt den gesamten Inhalt (Laden aus der Persistenz).
    pub fn replace_all(&mut self, records: Vec<MarkerRecord>) {
        self.records = records;
    }

    /// Read-only Sicht auf alle Marker.
    pub fn records(&self) -> &[MarkerRecord] {
        &self.records
    }

    /// Iterator in Erstellungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &MarkerRecord> {
        self.records.iter()
    }

    /// Zuletzt erstellter Marker.
    pub fn last(&self) -> Option<&MarkerRecord> {
        self.records.last()
    }

    /// Anzahl der Marker.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Gibt `true` zurück, wenn keine Marker vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialisiert den kompletten Snapshot als JSON-Array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records)
    }

    /// Parst einen Snapshot. Ein einzelner ungültiger Eintrag verwirft den ganzen Payload.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        let records: Vec<MarkerRecord> = serde_json::from_str(payload)?;
        Ok(Self { records })
    }
}
