//! SVG export.
//!
//! Writes the whole scene in world coordinates. The view box is the
//! stars' bounding box padded on every side, so the export does not depend
//! on the current pan or zoom.

use crate::curve::{connection_curve, dash_pattern, svg_path_data};
use crate::shape::{Outline, SVG_LABEL_OFFSET, glyph};
use crate::theme::CanvasTheme;
use cb_core::{LineStyle, Rgb, Scene};
use std::fmt::Write as _;

/// Padding around the stars' bounding box, in world units.
pub const EXPORT_PADDING: f64 = 50.0;

/// Render `scene` as a standalone SVG document. Returns `None` for an
/// empty scene.
pub fn render_svg(scene: &Scene, theme: &CanvasTheme) -> Option<String> {
    let Some(bounds) = scene.bounds() else {
        log::info!("svg export skipped: scene is empty");
        return None;
    };
    let bounds = bounds.inflate(EXPORT_PADDING, EXPORT_PADDING);
    let (x, y, width, height) = (bounds.x0, bounds.y0, bounds.width(), bounds.height());

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{x} {y} {width} {height}\" width=\"{width}\" height=\"{height}\">"
    );
    let _ = writeln!(
        svg,
        "  <rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" fill=\"{}\"/>",
        theme.bg
    );

    // Connections first so stars sit on top
    for conn in scene.connections().iter() {
        let (Some(from), Some(to)) = (scene.star(conn.from), scene.star(conn.to)) else {
            continue;
        };
        let curve = connection_curve(from, to);
        let _ = writeln!(
            svg,
            "  <path d=\"{}\" stroke=\"{}\" stroke-width=\"2\" fill=\"none\" opacity=\"0.8\"{}/>",
            svg_path_data(&curve),
            conn.color,
            dash_attr(conn.style)
        );
    }

    for star in scene.stars().iter() {
        let g = glyph(star.shape, star.position());
        let glow = star.color.to_rgba(0.3);
        write_outline(&mut svg, &g.glow, &glow, None);
        write_outline(&mut svg, &g.core, &star.color.to_hex(), Some(Rgb::WHITE));

        if !star.title.is_empty() {
            let _ = writeln!(
                svg,
                "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"Segoe UI, sans-serif\" font-size=\"12\" fill=\"{}\">{}</text>",
                star.x,
                star.y + SVG_LABEL_OFFSET,
                theme.label,
                escape_xml(&star.title)
            );
        }
    }

    svg.push_str("</svg>");
    Some(svg)
}

fn dash_attr(style: LineStyle) -> String {
    let pattern = dash_pattern(style);
    if pattern.is_empty() {
        String::new()
    } else {
        let values: Vec<String> = pattern.iter().map(|v| v.to_string()).collect();
        format!(" stroke-dasharray=\"{}\"", values.join(" "))
    }
}

fn write_outline(svg: &mut String, outline: &Outline, fill: &str, stroke: Option<Rgb>) {
    let stroke = stroke
        .map(|c| format!(" stroke=\"{c}\" stroke-width=\"2\""))
        .unwrap_or_default();
    match outline {
        Outline::Circle { center, radius } => {
            let _ = writeln!(
                svg,
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" fill=\"{fill}\"{stroke}/>",
                center.x, center.y
            );
        }
        Outline::Polygon(_) => {
            let points = outline.svg_points().unwrap_or_default();
            let _ = writeln!(svg, "  <polygon points=\"{points}\" fill=\"{fill}\"{stroke}/>");
        }
    }
}

/// Escape text content for XML.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
