//! Web-Mercator-Kamera für Pan und Zoom der Kartenansicht.

use super::GeoPosition;
use glam::DVec2;

/// Kantenlänge einer Rasterkachel in Pixeln.
pub const TILE_SIZE: f64 = 256.0;
/// Höchste Kachel-Zoomstufe, die Kachelserver üblicherweise liefern.
pub const MAX_TILE_ZOOM: u32 = 22;

/// Maximal darstellbarer Breitengrad der Web-Mercator-Projektion.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Adresse einer sichtbaren Kachel samt Bildschirm-Offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleTile {
    /// Zoomstufe der Kachel
    pub z: u32,
    /// Spalte (bereits in `0..2^z` umgebrochen)
    pub x: u32,
    /// Zeile
    pub y: u32,
    /// Linke obere Ecke relativ zur Viewport-Ecke (Pixel)
    pub screen_min: DVec2,
    /// Kantenlänge auf dem Bildschirm (Pixel)
    pub screen_size: f64,
}

/// Kamera mit Kartenmittelpunkt und (gebrochener) Zoomstufe.
#[derive(Debug, Clone, PartialEq)]
pub struct MapCamera {
    /// Kartenmittelpunkt
    pub center: GeoPosition,
    /// Zoomstufe (0 = ganze Welt in einer Kachel)
    pub zoom: f64,
}

impl MapCamera {
    /// Erstellt eine Kamera.
    pub fn new(center: GeoPosition, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Weltpixel einer Position bei gegebener Zoomstufe.
    pub fn project(position: GeoPosition, zoom: f64) -> DVec2 {
        let scale = TILE_SIZE * 2f64.powf(zoom);
        let lat = position.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (position.lng + 180.0) / 360.0;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0;
        DVec2::new(x * scale, y * scale)
    }

    /// Umkehrung von [`MapCamera::project`]. Der Längengrad wird in `[-180, 180)` umgebrochen.
    pub fn unproject(world_px: DVec2, zoom: f64) -> GeoPosition {
        let scale = TILE_SIZE * 2f64.powf(zoom);
        let lng = (world_px.x / scale * 360.0).rem_euclid(360.0) - 180.0;
        let n = std::f64::consts::PI * (1.0 - 2.0 * world_px.y / scale);
        let lat = n.sinh().atan().to_degrees();
        GeoPosition::new(lat, lng)
    }

    /// Rechnet eine Bildschirmposition (relativ zur Viewport-Ecke) in eine Geo-Position um.
    pub fn screen_to_geo(&self, screen_pos: DVec2, viewport_size: DVec2) -> GeoPosition {
        let center_px = Self::project(self.center, self.zoom);
        Self::unproject(center_px + screen_pos - viewport_size / 2.0, self.zoom)
    }

    /// Rechnet eine Geo-Position in eine Bildschirmposition um.
    pub fn geo_to_screen(&self, position: GeoPosition, viewport_size: DVec2) -> DVec2 {
        let center_px = Self::project(self.center, self.zoom);
        Self::project(position, self.zoom) - center_px + viewport_size / 2.0
    }

    /// Verschiebt die Karte um ein Bildschirm-Delta (Drag nach rechts → Karte folgt).
    pub fn pan(&mut self, delta_px: DVec2) {
        let center_px = Self::project(self.center, self.zoom);
        self.center = Self::unproject(center_px - delta_px, self.zoom);
    }

    /// Ändert die Zoomstufe und begrenzt sie auf `[min, max]`.
    pub fn zoom_by_clamped(&mut self, delta: f64, min: f64, max: f64) {
        self.zoom = (self.zoom + delta).clamp(min, max);
    }

    /// Zoomt so, dass `focus` an derselben Bildschirmposition bleibt.
    pub fn zoom_towards(
        &mut self,
        delta: f64,
        focus: GeoPosition,
        min: f64,
        max: f64,
        viewport_size: DVec2,
    ) {
        let focus_screen = self.geo_to_screen(focus, viewport_size);
        self.zoom_by_clamped(delta, min, max);
        let focus_px = Self::project(focus, self.zoom);
        let center_px = focus_px - (focus_screen - viewport_size / 2.0);
        self.center = Self::unproject(center_px, self.zoom);
    }

    /// Zählt die Kacheln auf, die den Viewport bedecken.
    ///
    /// Die Kachel-Zoomstufe ist die gerundete Kamera-Zoomstufe, begrenzt auf `max_tile_zoom`
    /// und höchstens `MAX_TILE_ZOOM`.
    pub fn visible_tiles(&self, viewport_size: DVec2, max_tile_zoom: u32) -> Vec<VisibleTile> {
        let z = (self.zoom.round().max(0.0) as u32)
            .min(max_tile_zoom)
            .min(MAX_TILE_ZOOM);
        let scale = 2f64.powf(self.zoom - z as f64);
        let tile_count = 1u32 << z;

        let center_px = Self::project(self.center, z as f64);
        let top_left = center_px - viewport_size / (2.0 * scale);
        let bottom_right = center_px + viewport_size / (2.0 * scale);

        let min_x = (top_left.x / TILE_SIZE).floor() as i64;
        let max_x = (bottom_right.x / TILE_SIZE).ceil() as i64 - 1;
        let min_y = ((top_left.y / TILE_SIZE).floor() as i64).max(0);
        let max_y = ((bottom_right.y / TILE_SIZE).ceil() as i64 - 1).min(tile_count as i64 - 1);

        let mut tiles = Vec::new();
        for ty in min_y..=max_y {
            for tx in min_x..=max_x {
                let origin = DVec2::new(tx as f64, ty as f64) * TILE_SIZE;
                tiles.push(VisibleTile {
                    z,
                    x: tx.rem_euclid(tile_count as i64) as u32,
                    y: ty as u32,
                    screen_min: (origin - top_left) * scale,
                    screen_size: TILE_SIZE * scale,
                });
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn goiania() -> MapCamera {
        MapCamera::new(GeoPosition::new(-16.6799, -49.255), 13.0)
    }

    #[test]
    fn test_project_origin_is_world_center() {
        let px = MapCamera::project(GeoPosition::new(0.0, 0.0), 0.0);
        assert_relative_eq!(px.x, 128.0, epsilon = 1e-9);
        assert_relative_eq!(px.y, 128.0, epsilon = 1e-9);
    }

    #[test]
    fn test_project_unproject_roundtrip() {
        let pos = GeoPosition::new(-16.70, -49.26);
        let back = MapCamera::unproject(MapCamera::project(pos, 13.0), 13.0);
        assert_relative_eq!(back.lat, pos.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lng, pos.lng, epsilon = 1e-9);
    }

    #[test]
    fn test_unproject_wraps_longitude() {
        let pos = MapCamera::unproject(DVec2::new(TILE_SIZE * 1.25, TILE_SIZE / 2.0), 0.0);
        assert_relative_eq!(pos.lng, -90.0, epsilon = 1e-9);
        assert_relative_eq!(pos.lat, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_viewport_center_maps_to_camera_center() {
        let camera = goiania();
        let viewport = DVec2::new(800.0, 600.0);
        let pos = camera.screen_to_geo(DVec2::new(400.0, 300.0), viewport);
        assert_relative_eq!(pos.lat, camera.center.lat, epsilon = 1e-9);
        assert_relative_eq!(pos.lng, camera.center.lng, epsilon = 1e-9);
    }

    #[test]
    fn test_screen_geo_roundtrip() {
        let camera = goiania();
        let viewport = DVec2::new(1280.0, 720.0);
        let screen = DVec2::new(100.0, 650.0);
        let geo = camera.screen_to_geo(screen, viewport);
        let back = camera.geo_to_screen(geo, viewport);
        assert_relative_eq!(back.x, screen.x, epsilon = 1e-6);
        assert_relative_eq!(back.y, screen.y, epsilon = 1e-6);
    }

    #[test]
    fn test_pan_moves_map_with_drag() {
        let mut camera = goiania();
        let viewport = DVec2::new(800.0, 600.0);
        let before = camera.screen_to_geo(DVec2::new(400.0, 300.0), viewport);
        camera.pan(DVec2::new(50.0, 0.0));
        // Der vorherige Mittelpunkt liegt jetzt 50 px weiter rechts
        let moved = camera.geo_to_screen(before, viewport);
        assert_relative_eq!(moved.x, 450.0, epsilon = 1e-6);
        assert_relative_eq!(moved.y, 300.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = goiania();
        camera.zoom_by_clamped(10.0, 1.0, 18.0);
        assert_relative_eq!(camera.zoom, 18.0);
        camera.zoom_by_clamped(-30.0, 1.0, 18.0);
        assert_relative_eq!(camera.zoom, 1.0);
    }

    #[test]
    fn test_zoom_towards_keeps_focus_on_screen() {
        let mut camera = goiania();
        let viewport = DVec2::new(800.0, 600.0);
        let focus_screen = DVec2::new(120.0, 80.0);
        let focus = camera.screen_to_geo(focus_screen, viewport);

        camera.zoom_towards(1.0, focus, 1.0, 18.0, viewport);

        let after = camera.geo_to_screen(focus, viewport);
        assert_relative_eq!(camera.zoom, 14.0);
        assert_relative_eq!(after.x, focus_screen.x, epsilon = 1e-6);
        assert_relative_eq!(after.y, focus_screen.y, epsilon = 1e-6);
    }

    #[test]
    fn test_visible_tiles_cover_viewport() {
        let camera = MapCamera::new(GeoPosition::new(0.0, 0.0), 1.0);
        let tiles = camera.visible_tiles(DVec2::new(512.0, 512.0), 18);
        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().all(|t| t.z == 1 && t.x < 2 && t.y < 2));
        assert!(tiles.iter().any(|t| t.screen_min == DVec2::ZERO));
    }

    #[test]
    fn test_visible_tiles_wrap_columns_and_clip_rows() {
        let camera = MapCamera::new(GeoPosition::new(0.0, 0.0), 0.0);
        let tiles = camera.visible_tiles(DVec2::new(1024.0, 1024.0), 18);
        assert!(tiles.iter().all(|t| t.x == 0 && t.y == 0));
        assert_eq!(tiles.len(), 5);
    }

    #[test]
    fn test_visible_tiles_cap_tile_zoom() {
        let camera = MapCamera::new(GeoPosition::new(-16.6799, -49.255), 40.0);
        let tiles = camera.visible_tiles(DVec2::new(800.0, 600.0), 40);
        assert!(!tiles.is_empty());
        assert!(tiles.iter().all(|t| t.z == MAX_TILE_ZOOM));
    }
}
