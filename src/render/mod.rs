//! Render-Layer: Vertrag zur Kartenoberfläche und Marker-Glyphen.

pub mod marker_renderer;
pub mod surface;

pub use marker_renderer::{build_glyph, escape_markup, render_marker, MarkerGlyph};
pub use surface::{MapSurface, TileLayer};
