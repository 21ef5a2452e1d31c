//! Connection geometry.
//!
//! Connections are quadratic Béziers bowed perpendicular to the chord.
//! The bow grows with distance up to a cap, and its side depends only on
//! the `from` star's id, so a connection never flips while either
//! endpoint is dragged.

use cb_core::{LineStyle, Star, StarId};
use kurbo::{Point, QuadBez, Vec2};

/// Bow as a fraction of the chord length.
pub const BOW_RATIO: f64 = 0.15;
/// Maximum bow in world units.
pub const MAX_BOW: f64 = 50.0;

/// Control point of the curve from `from` (owned by star `from_id`) to `to`.
pub fn control_point(from: Point, from_id: StarId, to: Point) -> Point {
    let chord = to - from;
    let distance = chord.hypot();
    let mid = from.midpoint(to);
    if distance <= f64::EPSILON {
        return mid;
    }
    let bow = (distance * BOW_RATIO).min(MAX_BOW);
    let side = if from_id.is_even() { 1.0 } else { -1.0 };
    let normal = Vec2::new(-chord.y / distance, chord.x / distance);
    mid + normal * bow * side
}

/// The curve drawn for a connection between two stars.
pub fn connection_curve(from: &Star, to: &Star) -> QuadBez {
    let (p0, p2) = (from.position(), to.position());
    QuadBez::new(p0, control_point(p0, from.id, p2), p2)
}

/// Dash pattern (on, off, ...) for a line style. Empty means solid.
pub fn dash_pattern(style: LineStyle) -> &'static [f64] {
    match style {
        LineStyle::Solid => &[],
        LineStyle::Dashed => &[10.0, 10.0],
        LineStyle::Dotted => &[3.0, 8.0],
    }
}

/// SVG path data (`M x y Q cx cy x y`).
pub fn svg_path_data(curve: &QuadBez) -> String {
    format!(
        "M {} {} Q {} {} {} {}",
        curve.p0.x, curve.p0.y, curve.p1.x, curve.p1.y, curve.p2.x, curve.p2.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bow_is_perpendicular_and_capped() {
        // 100 units apart: bow 15, even id bends toward +normal (down for a
        // left-to-right chord in screen coordinates).
        let c = control_point(Point::new(0.0, 0.0), StarId(2), Point::new(100.0, 0.0));
        assert_eq!(c, Point::new(50.0, 15.0));

        let odd = control_point(Point::new(0.0, 0.0), StarId(3), Point::new(100.0, 0.0));
        assert_eq!(odd, Point::new(50.0, -15.0));

        let far = control_point(Point::new(0.0, 0.0), StarId(2), Point::new(0.0, 1000.0));
        assert_eq!(far, Point::new(-50.0, 500.0));
    }

    #[test]
    fn coincident_endpoints_do_not_produce_nan() {
        let p = Point::new(4.0, 4.0);
        assert_eq!(control_point(p, StarId(1), p), p);
    }

    #[test]
    fn dash_patterns() {
        assert!(dash_pattern(LineStyle::Solid).is_empty());
        assert_eq!(dash_pattern(LineStyle::Dashed), &[10.0, 10.0]);
        assert_eq!(dash_pattern(LineStyle::Dotted), &[3.0, 8.0]);
    }

    #[test]
    fn path_data_format() {
        let curve = QuadBez::new((0.0, 0.0), (50.0, 15.0), (100.0, 0.0));
        assert_eq!(svg_path_data(&curve), "M 0 0 Q 50 15 100 0");
    }
}
