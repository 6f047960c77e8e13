//! Lokale Persistenz: Key/Value-Speicher und Marker-Adapter.
//!
//! Die Marker liegen als ein einziger JSON-String unter einem festen Schlüssel und werden
//! bei jeder Änderung komplett überschrieben. Lesefehler führen nie zum Abbruch: fehlende
//! oder kaputte Daten ergeben einen leeren Store.

use super::{MarkerRecord, MarkerStore};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Fehler der Speicher-Backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Datei konnte nicht gelesen oder geschrieben werden
    #[error("Speicherdatei {path}: {source}")]
    Io {
        /// Betroffene Datei
        path: PathBuf,
        /// Ursprünglicher Fehler
        #[source]
        source: std::io::Error,
    },
    /// Serialisierung fehlgeschlagen
    #[error("JSON-Fehler: {0}")]
    Json(#[from] serde_json::Error),
}

/// Minimaler String-Key/Value-Speicher (Gegenstück zu `localStorage`).
pub trait KeyValueStore {
    /// Liest den Wert zu `key`, `None` wenn nicht vorhanden.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Setzt `key` auf `value` und überschreibt einen vorhandenen Wert.
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}

/// Flüchtiger Speicher für Tests und als Fallback.
#[derive(Debug, Default, Clone)]
pub struct MemoryKeyValueStore {
    entries: BTreeMap<String, String>,
}

impl MemoryKeyValueStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Speicher mit einem vorbelegten Eintrag.
    pub fn with_entry(key: &str, value: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.to_string(), value.into());
        Self { entries }
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Dateibasierter Speicher: alle Schlüssel als JSON-Objekt in einer Datei.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileKeyValueStore {
    /// Öffnet den Speicher. Fehlende oder kaputte Datei → leerer Speicher.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => {
                    log::info!("Speicher geladen aus: {}", path.display());
                    entries
                }
                Err(e) => {
                    log::warn!("Speicherdatei fehlerhaft, starte leer: {}", e);
                    BTreeMap::new()
                }
            },
            Err(_) => {
                log::info!("Keine Speicherdatei gefunden: {}", path.display());
                BTreeMap::new()
            }
        };

        Self { path, entries }
    }

    /// Pfad der Speicherdatei.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    /// Übernimmt den Wert erst, wenn die Datei geschrieben wurde.
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value);
        self.flush(&entries)?;
        self.entries = entries;
        Ok(())
    }
}

/// Adapter zwischen `MarkerStore` und einem `KeyValueStore`.
#[derive(Debug, Clone)]
pub struct MarkerPersistence {
    key: String,
}

impl MarkerPersistence {
    /// Standard-Schlüssel der Marker-Liste.
    pub const DEFAULT_KEY: &'static str = "goiania_map_markers";

    /// Erstellt einen Adapter für den angegebenen Schlüssel.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Verwendeter Schlüssel.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Liest alle gespeicherten Marker; jeder Fehler ergibt eine leere Liste.
    pub fn load(&self, storage: &dyn KeyValueStore) -> Vec<MarkerRecord> {
        let payload = match storage.get(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                log::info!("Keine gespeicherten Marker unter '{}'", self.key);
                return Vec::new();
            }
            Err(e) => {
                log::warn!("Marker konnten nicht gelesen werden, starte leer: {}", e);
                return Vec::new();
            }
        };

        if payload.trim().is_empty() {
            return Vec::new();
        }

        let store = match MarkerStore::from_json(&payload) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Gespeicherte Marker fehlerhaft, starte leer: {}", e);
                return Vec::new();
            }
        };

        // Wie beim Parsen: ein ungültiger Eintrag verwirft den ganzen Payload
        if let Some(index) = store.iter().position(|r| !r.position.is_valid()) {
            let position = store.records()[index].position;
            log::warn!(
                "Gespeicherter Marker {} hat ungültige Position ({}, {}), starte leer",
                index,
                position.lat,
                position.lng
            );
            return Vec::new();
        }

        store.records().to_vec()
    }

    /// Schreibt den kompletten Snapshot und überschreibt den vorherigen Inhalt.
    pub fn save(
        &self,
        storage: &mut dyn KeyValueStore,
        store: &MarkerStore,
    ) -> Result<(), StorageError> {
        let payload = store.to_json()?;
        storage.set(&self.key, payload)?;
        log::debug!("{} Marker gespeichert unter '{}'", store.len(), self.key);
        Ok(())
    }
}

impl Default for MarkerPersistence {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}
