//! Kartenansicht: zeichnet Kacheln und Marker-Glyphen, übersetzt Maus-Eingaben in Intents.

use crate::app::AppIntent;
use crate::core::{IconGlyph, MapCamera};
use crate::render::{MarkerGlyph, TileLayer};
use crate::shared::RenderScene;
use glam::DVec2;

/// Hintergrundfarbe, solange Kacheln laden.
const MAP_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(38, 38, 38);
/// Scroll-Pixel, die einem Zoom-Schritt entsprechen.
const SCROLL_PIXELS_PER_STEP: f64 = 50.0;

/// Rendert die Karte im zentralen Panel und gibt erzeugte Events zurück.
pub fn render_map_view(ctx: &egui::Context, scene: &RenderScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(MAP_BACKGROUND))
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

            let size = [rect.width(), rect.height()];
            if size != scene.viewport_size {
                events.push(AppIntent::ViewportResized { size });
            }

            let viewport = DVec2::new(rect.width() as f64, rect.height() as f64);

            if let Some(layer) = &scene.tile_layer {
                paint_tiles(ui, rect, &scene.camera, layer, viewport, scene.tile_zoom_max);
            }

            let painter = ui.painter_at(rect);
            for glyph in &scene.glyphs {
                let icon_rect = glyph_rect(glyph, &scene.camera, rect, viewport);
                if rect.intersects(icon_rect) {
                    paint_glyph(&painter, glyph, icon_rect);
                }
            }
            let hovered = response
                .hover_pos()
                .and_then(|pos| glyph_at(scene, rect, pos));

            if let Some(layer) = &scene.tile_layer {
                painter.text(
                    rect.right_bottom() - egui::vec2(6.0, 4.0),
                    egui::Align2::RIGHT_BOTTOM,
                    &layer.attribution,
                    egui::FontId::proportional(11.0),
                    egui::Color32::from_gray(190),
                );
            }

            if let Some((glyph, icon_rect)) = hovered {
                show_popup(ui.ctx(), glyph, icon_rect);
            }

            collect_input(ui, &response, rect, scene, viewport, &mut events);
        });

    events
}

fn to_dvec(v: egui::Vec2) -> DVec2 {
    DVec2::new(v.x as f64, v.y as f64)
}

fn glyph_rect(
    glyph: &MarkerGlyph,
    camera: &MapCamera,
    rect: egui::Rect,
    viewport: DVec2,
) -> egui::Rect {
    let screen = camera.geo_to_screen(glyph.position, viewport);
    let anchor = rect.min + egui::vec2(screen.x as f32, screen.y as f32);
    let min = anchor - egui::vec2(glyph.icon_anchor[0], glyph.icon_anchor[1]);
    egui::Rect::from_min_size(min, egui::vec2(glyph.icon_size[0], glyph.icon_size[1]))
}

/// Oberste Glyphe unter `pos` (zuletzt gezeichnet = oben).
fn glyph_at(
    scene: &RenderScene,
    rect: egui::Rect,
    pos: egui::Pos2,
) -> Option<(&MarkerGlyph, egui::Rect)> {
    let viewport = DVec2::new(rect.width() as f64, rect.height() as f64);
    scene.glyphs.iter().rev().find_map(|glyph| {
        let icon_rect = glyph_rect(glyph, &scene.camera, rect, viewport);
        icon_rect.contains(pos).then_some((glyph, icon_rect))
    })
}

fn paint_tiles(
    ui: &egui::Ui,
    rect: egui::Rect,
    camera: &MapCamera,
    layer: &TileLayer,
    viewport: DVec2,
    tile_zoom_max: u32,
) {
    for tile in camera.visible_tiles(viewport, tile_zoom_max) {
        let min = rect.min + egui::vec2(tile.screen_min.x as f32, tile.screen_min.y as f32);
        let side = tile.screen_size as f32;
        let tile_rect = egui::Rect::from_min_size(min, egui::vec2(side, side));
        egui::Image::new(layer.tile_url(tile.z, tile.x, tile.y)).paint_at(ui, tile_rect);
    }
}

fn paint_glyph(painter: &egui::Painter, glyph: &MarkerGlyph, icon_rect: egui::Rect) {
    let color = super::color32(glyph.color);
    match glyph.icon_glyph {
        IconGlyph::Cross => {
            painter.text(
                icon_rect.center(),
                egui::Align2::CENTER_CENTER,
                glyph.symbol,
                egui::FontId::proportional(icon_rect.height() * 0.8),
                color,
            );
        }
        IconGlyph::Dot => {
            painter.circle_filled(icon_rect.center(), icon_rect.width() * 0.3, color);
        }
    }
}

/// Popup über der Glyphe; Titel und Beschreibung als Klartext-Labels.
fn show_popup(ctx: &egui::Context, glyph: &MarkerGlyph, icon_rect: egui::Rect) {
    egui::Area::new(egui::Id::new("marker_popup"))
        .fixed_pos(icon_rect.center_top() - egui::vec2(0.0, 4.0))
        .pivot(egui::Align2::CENTER_BOTTOM)
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(&glyph.popup_title).strong());
                if !glyph.popup_description.is_empty() {
                    ui.label(&glyph.popup_description);
                }
            });
        });
}

fn collect_input(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
    scene: &RenderScene,
    viewport: DVec2,
    events: &mut Vec<AppIntent>,
) {
    if response.clicked() {
        // Klicks auf eine Glyphe gehören dem Marker, nicht der Karte
        if let Some(pos) = response
            .interact_pointer_pos()
            .filter(|pos| glyph_at(scene, rect, *pos).is_none())
        {
            let position = scene.camera.screen_to_geo(to_dvec(pos - rect.min), viewport);
            events.push(AppIntent::MapClicked { position });
        }
    }

    if response.dragged() {
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            events.push(AppIntent::CameraPan {
                delta: to_dvec(delta),
            });
        }
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if response.hovered() && scene.placing_active {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
    }

    if response.hovered() && ui.input(|i| i.key_pressed(egui::Key::Home)) {
        events.push(AppIntent::ResetViewRequested);
    }

    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            let focus = response
                .hover_pos()
                .map(|pos| scene.camera.screen_to_geo(to_dvec(pos - rect.min), viewport));
            events.push(AppIntent::CameraZoom {
                delta: scroll as f64 / SCROLL_PIXELS_PER_STEP * scene.scroll_zoom_step,
                focus,
            });
        }
    }
}
