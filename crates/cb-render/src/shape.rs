//! Star glyph outlines.
//!
//! Every shape is drawn as a soft glow outline filled with a radial
//! gradient, then a solid core with a white border. Both canvas and SVG
//! backends consume the same [`Glyph`].

use cb_core::Shape;
use kurbo::{BezPath, Circle, Point, Shape as _};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Radius of the radial glow gradient around every star.
pub const GLOW_RADIUS: f64 = 20.0;
/// Vertical offset of the title label on the canvas.
pub const LABEL_OFFSET: f64 = 25.0;
/// Vertical offset of the title label in SVG exports.
pub const SVG_LABEL_OFFSET: f64 = 35.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Circle { center: Point, radius: f64 },
    Polygon(Vec<Point>),
}

impl Outline {
    pub fn to_path(&self) -> BezPath {
        match self {
            Outline::Circle { center, radius } => Circle::new(*center, *radius).to_path(0.1),
            Outline::Polygon(points) => {
                let mut path = BezPath::new();
                let mut iter = points.iter();
                if let Some(first) = iter.next() {
                    path.move_to(*first);
                    for p in iter {
                        path.line_to(*p);
                    }
                    path.close_path();
                }
                path
            }
        }
    }

    /// SVG `points` attribute for polygons (`x,y x,y ...`).
    pub fn svg_points(&self) -> Option<String> {
        match self {
            Outline::Circle { .. } => None,
            Outline::Polygon(points) => Some(
                points
                    .iter()
                    .map(|p| format!("{},{}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}

/// Glow and core outlines of one star.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub glow: Outline,
    pub core: Outline,
}

/// Build the outlines for `shape` centered on `center`.
pub fn glyph(shape: Shape, center: Point) -> Glyph {
    match shape {
        Shape::Circle => Glyph {
            glow: Outline::Circle {
                center,
                radius: GLOW_RADIUS,
            },
            core: Outline::Circle {
                center,
                radius: 8.0,
            },
        },
        Shape::Diamond => Glyph {
            glow: Outline::Polygon(regular_polygon(center, 18.0, 4)),
            core: Outline::Polygon(regular_polygon(center, 7.0, 4)),
        },
        Shape::Hexagon => Glyph {
            glow: Outline::Polygon(regular_polygon(center, 16.0, 6)),
            core: Outline::Polygon(regular_polygon(center, 7.0, 6)),
        },
        Shape::Star => Glyph {
            glow: Outline::Polygon(star_polygon(center, 16.0, 6.0, 5)),
            core: Outline::Circle {
                center,
                radius: 6.0,
            },
        },
    }
}

/// `sides` vertices on a circle, first vertex straight up.
fn regular_polygon(center: Point, radius: f64, sides: usize) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let angle = TAU * i as f64 / sides as f64 - FRAC_PI_2;
            polar(center, radius, angle)
        })
        .collect()
}

/// Alternating outer/inner vertices, first tip straight up.
fn star_polygon(center: Point, outer: f64, inner: f64, points: usize) -> Vec<Point> {
    (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = PI * i as f64 / points as f64 - FRAC_PI_2;
            polar(center, radius, angle)
        })
        .collect()
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn diamond_vertices_are_axis_aligned() {
        let g = glyph(Shape::Diamond, Point::new(100.0, 50.0));
        let Outline::Polygon(points) = g.glow else {
            panic!("expected polygon");
        };
        assert_eq!(points.len(), 4);
        assert!(near(points[0], Point::new(100.0, 32.0)));
        assert!(near(points[1], Point::new(118.0, 50.0)));
        assert!(near(points[2], Point::new(100.0, 68.0)));
        assert!(near(points[3], Point::new(82.0, 50.0)));
    }

    #[test]
    fn star_alternates_radii() {
        let center = Point::new(0.0, 0.0);
        let g = glyph(Shape::Star, center);
        let Outline::Polygon(points) = g.glow else {
            panic!("expected polygon");
        };
        assert_eq!(points.len(), 10);
        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 16.0 } else { 6.0 };
            assert!((p.distance(center) - expected).abs() < 1e-9);
        }
        assert!(matches!(g.core, Outline::Circle { radius, .. } if radius == 6.0));
    }

    #[test]
    fn every_shape_has_a_glyph_within_glow_radius() {
        let center = Point::new(10.0, 10.0);
        for shape in Shape::ALL {
            let g = glyph(shape, center);
            let bbox = g.glow.to_path().bounding_box();
            assert!(bbox.width() <= GLOW_RADIUS * 2.0 + 1e-6, "{shape:?}");
            assert!(bbox.contains(center));
        }
    }

    #[test]
    fn svg_points_format() {
        let outline = Outline::Polygon(vec![Point::new(1.0, 2.0), Point::new(3.5, 4.0)]);
        assert_eq!(outline.svg_points().as_deref(), Some("1,2 3.5,4"));
        assert!(Outline::Circle { center: Point::ZERO, radius: 1.0 }.svg_points().is_none());
    }
}
