//! Core-Domänentypen: Marker, Marker-Store, Persistenz, Kamera.

pub mod camera;
/// Marker-Datenmodell
///
/// - MarkerRecord: ein gesetzter Marker mit Position, Verkehrsart und Glyphe
/// - TransportType / IconGlyph: zyklisch umschaltbare Auswahlwerte
pub mod map_marker;
pub mod marker_store;
pub mod persistence;

pub use camera::{MapCamera, VisibleTile, MAX_TILE_ZOOM, TILE_SIZE};
pub use map_marker::{GeoPosition, IconGlyph, MarkerRecord, TransportType};
pub use marker_store::MarkerStore;
pub use persistence::{
    FileKeyValueStore, KeyValueStore, MarkerPersistence, MemoryKeyValueStore, StorageError,
};
