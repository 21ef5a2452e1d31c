//! Screen ↔ world coordinate mapping.
//!
//! `screen = world * zoom + pan`. All functions are pure: operations that
//! change the view return a new `Viewport` (or mutate one in place through
//! the convenience methods) and never fail.

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Default lower zoom bound.
pub const MIN_ZOOM: f64 = 0.25;
/// Default upper zoom bound.
pub const MAX_ZOOM: f64 = 4.0;
/// Smallest zoom any viewport accepts; keeps `world_from_screen` finite.
pub const ZOOM_FLOOR: f64 = 0.01;

/// Scale between world units and minimap pixels.
pub const MINIMAP_SCALE: f64 = 0.1;

/// Pan/zoom state of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan: Vec2,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl Viewport {
    /// Identity viewport with custom zoom limits. Swapped limits are
    /// reordered; limits that are not finite fall back to the defaults and
    /// none goes below [`ZOOM_FLOOR`].
    pub fn with_limits(min_zoom: f64, max_zoom: f64) -> Self {
        let sane = |limit: f64, fallback: f64| {
            if limit.is_finite() {
                limit.max(ZOOM_FLOOR)
            } else {
                fallback
            }
        };
        let (min_zoom, max_zoom) = (sane(min_zoom, MIN_ZOOM), sane(max_zoom, MAX_ZOOM));
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        Self {
            zoom: 1.0_f64.clamp(min_zoom, max_zoom),
            pan: Vec2::ZERO,
            min_zoom,
            max_zoom,
        }
    }

    pub fn world_from_screen(&self, screen: Point) -> Point {
        world_from_screen(screen, self)
    }

    pub fn screen_from_world(&self, world: Point) -> Point {
        screen_from_world(world, self)
    }

    /// Zoom by `factor`, keeping the world point under `anchor` fixed.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        *self = zoom_at(anchor, factor, self);
    }

    /// Pan so that `world` lands in the middle of a canvas of `canvas` size.
    pub fn center_on(&mut self, world: Point, canvas: Size) {
        let center = Vec2::new(canvas.width / 2.0, canvas.height / 2.0);
        self.pan = center - world.to_vec2() * self.zoom;
    }

    /// Translate by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Zoom 1, no pan. Limits are kept.
    pub fn reset(&mut self) {
        self.zoom = 1.0_f64.clamp(self.min_zoom, self.max_zoom);
        self.pan = Vec2::ZERO;
    }

    /// World → screen transform.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// The world-space rectangle visible through a canvas of `canvas` size.
    pub fn visible_world_rect(&self, canvas: Size) -> Rect {
        let p0 = self.world_from_screen(Point::ZERO);
        let p1 = self.world_from_screen(Point::new(canvas.width, canvas.height));
        Rect::from_points(p0, p1)
    }
}

pub fn world_from_screen(screen: Point, viewport: &Viewport) -> Point {
    ((screen.to_vec2() - viewport.pan) / viewport.zoom).to_point()
}

pub fn screen_from_world(world: Point, viewport: &Viewport) -> Point {
    (world.to_vec2() * viewport.zoom + viewport.pan).to_point()
}

/// Zoom around `anchor` (screen space). The new zoom is clamped to the
/// viewport's limits; non-finite or non-positive factors leave it as is.
pub fn zoom_at(anchor: Point, factor: f64, viewport: &Viewport) -> Viewport {
    if !factor.is_finite() || factor <= 0.0 {
        return *viewport;
    }
    let world_anchor = world_from_screen(anchor, viewport);
    let zoom = (viewport.zoom * factor).clamp(viewport.min_zoom, viewport.max_zoom);
    Viewport {
        zoom,
        pan: anchor.to_vec2() - world_anchor.to_vec2() * zoom,
        ..*viewport
    }
}

/// Minimap pixels → world units.
pub fn minimap_to_world(point: Point, scale: f64) -> Point {
    (point.to_vec2() / scale).to_point()
}

/// World units → minimap pixels.
pub fn world_to_minimap(point: Point, scale: f64) -> Point {
    (point.to_vec2() * scale).to_point()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn screen_world_roundtrip() {
        let vp = Viewport {
            zoom: 2.5,
            pan: Vec2::new(-40.0, 12.0),
            ..Viewport::default()
        };
        let world = Point::new(33.0, -7.5);
        let screen = vp.screen_from_world(world);
        assert!(close(screen, Point::new(42.5, -6.75)));
        assert!(close(vp.world_from_screen(screen), world));
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let vp = Viewport {
            zoom: 1.3,
            pan: Vec2::new(15.0, -20.0),
            ..Viewport::default()
        };
        let anchor = Point::new(300.0, 200.0);
        let before = vp.world_from_screen(anchor);
        let zoomed = zoom_at(anchor, 1.1, &vp);
        assert!((zoomed.zoom - 1.43).abs() < 1e-12);
        assert!(close(zoomed.world_from_screen(anchor), before));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut vp = Viewport::default();
        for _ in 0..40 {
            vp.zoom_at(Point::new(10.0, 10.0), 1.1);
        }
        assert_eq!(vp.zoom, MAX_ZOOM);
        for _ in 0..80 {
            vp.zoom_at(Point::new(10.0, 10.0), 0.9);
        }
        assert_eq!(vp.zoom, MIN_ZOOM);
    }

    #[test]
    fn degenerate_factor_is_ignored() {
        let vp = Viewport::default();
        assert_eq!(zoom_at(Point::ZERO, 0.0, &vp), vp);
        assert_eq!(zoom_at(Point::ZERO, f64::NAN, &vp), vp);
        assert_eq!(zoom_at(Point::ZERO, -2.0, &vp), vp);
    }

    #[test]
    fn center_on_puts_world_point_mid_canvas() {
        let mut vp = Viewport {
            zoom: 2.0,
            ..Viewport::default()
        };
        let canvas = Size::new(800.0, 600.0);
        vp.center_on(Point::new(100.0, 50.0), canvas);
        assert!(close(
            vp.screen_from_world(Point::new(100.0, 50.0)),
            Point::new(400.0, 300.0)
        ));
    }

    #[test]
    fn minimap_click_maps_to_world() {
        let world = minimap_to_world(Point::new(20.0, 15.0), MINIMAP_SCALE);
        assert!(close(world, Point::new(200.0, 150.0)));
        assert!(close(world_to_minimap(world, MINIMAP_SCALE), Point::new(20.0, 15.0)));
    }

    #[test]
    fn affine_matches_point_mapping() {
        let vp = Viewport {
            zoom: 0.5,
            pan: Vec2::new(7.0, 9.0),
            ..Viewport::default()
        };
        let p = Point::new(-12.0, 40.0);
        assert!(close(vp.to_affine() * p, vp.screen_from_world(p)));
    }

    #[test]
    fn swapped_limits_are_reordered() {
        let vp = Viewport::with_limits(4.0, 0.5);
        assert_eq!((vp.min_zoom, vp.max_zoom), (0.5, 4.0));
        let tight = Viewport::with_limits(2.0, 3.0);
        assert_eq!(tight.zoom, 2.0);
    }

    #[test]
    fn degenerate_limits_keep_zoom_positive() {
        let vp = Viewport::with_limits(0.0, f64::INFINITY);
        assert_eq!((vp.min_zoom, vp.max_zoom), (ZOOM_FLOOR, MAX_ZOOM));
        let vp = Viewport::with_limits(f64::NAN, -3.0);
        assert_eq!((vp.min_zoom, vp.max_zoom), (ZOOM_FLOOR, MIN_ZOOM));

        let mut vp = Viewport::with_limits(0.0, 4.0);
        for _ in 0..200 {
            vp.zoom_at(Point::new(400.0, 300.0), 0.5);
        }
        assert_eq!(vp.zoom, ZOOM_FLOOR);
        let world = vp.world_from_screen(Point::new(10.0, 20.0));
        assert!(world.x.is_finite() && world.y.is_finite());
    }

    #[test]
    fn reset_restores_identity() {
        let mut vp = Viewport::default();
        vp.zoom_at(Point::new(50.0, 50.0), 2.0);
        vp.pan_by(Vec2::new(3.0, 4.0));
        vp.reset();
        assert_eq!(vp, Viewport::default());
    }

    #[test]
    fn visible_rect_shrinks_with_zoom() {
        let mut vp = Viewport::default();
        let canvas = Size::new(800.0, 600.0);
        assert_eq!(vp.visible_world_rect(canvas), Rect::new(0.0, 0.0, 800.0, 600.0));
        vp.zoom = 2.0;
        assert_eq!(vp.visible_world_rect(canvas), Rect::new(0.0, 0.0, 400.0, 300.0));
    }
}
