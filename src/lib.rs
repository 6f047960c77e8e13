//! Goiânia Marker Map Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, PlacementMode, SelectionState, ViewState,
};
pub use core::{
    FileKeyValueStore, GeoPosition, IconGlyph, KeyValueStore, MapCamera, MarkerPersistence,
    MarkerRecord, MarkerStore, MemoryKeyValueStore, StorageError, TransportType,
};
pub use render::{MapSurface, MarkerGlyph, TileLayer};
pub use shared::{MapOptions, RenderScene};
