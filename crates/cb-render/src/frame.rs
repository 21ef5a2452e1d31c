//! Per-tick draw list.
//!
//! `Frame::build` reads the scene, selection, tag filter and viewport and
//! produces everything a backend needs to paint one frame, in paint
//! order. Building a frame never mutates editor state.

use crate::curve::connection_curve;
use crate::shape::{Glyph, glyph};
use cb_core::transform::world_to_minimap;
use cb_core::{ConnectionId, LineStyle, Rgb, Scene, Selection, Shape, StarId, TagFilter, Viewport};
use kurbo::{Affine, Line, Point, QuadBez, Rect, Size};
use std::collections::BTreeSet;

/// Connections fainter than this are drawn without glow.
pub const GLOW_CUTOFF: f64 = 0.2;
/// Characters of a title shown on the minimap.
pub const MINIMAP_TITLE_CHARS: usize = 8;

/// Transient gesture state drawn over the scene, in world space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub marquee: Option<Rect>,
    /// From the source star's center to the pointer.
    pub pending_link: Option<Line>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeItem {
    pub id: ConnectionId,
    pub curve: QuadBez,
    pub from_color: Rgb,
    pub to_color: Rgb,
    pub color: Rgb,
    pub style: LineStyle,
    pub opacity: f64,
    pub glow: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarItem {
    pub id: StarId,
    pub center: Point,
    pub shape: Shape,
    pub glyph: Glyph,
    pub color: Rgb,
    pub title: String,
    pub opacity: f64,
    pub selected: bool,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// World → screen.
    pub transform: Affine,
    pub zoom_percent: u32,
    pub edges: Vec<EdgeItem>,
    pub stars: Vec<StarItem>,
    pub overlay: Overlay,
    /// World rectangle covered by the canvas.
    pub visible_world: Rect,
}

impl Frame {
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        scene: &Scene,
        selection: &Selection,
        tags: &TagFilter,
        viewport: &Viewport,
        canvas: Size,
        highlighted: &BTreeSet<StarId>,
        overlay: Overlay,
    ) -> Self {
        let edges = scene
            .connections()
            .iter()
            .filter_map(|conn| {
                let from = scene.star(conn.from)?;
                let to = scene.star(conn.to)?;
                let opacity = tags.connection_opacity(conn, scene);
                Some(EdgeItem {
                    id: conn.id,
                    curve: connection_curve(from, to),
                    from_color: from.color,
                    to_color: to.color,
                    color: conn.color,
                    style: conn.style,
                    opacity,
                    glow: opacity > GLOW_CUTOFF,
                })
            })
            .collect();

        let stars = scene
            .stars()
            .iter()
            .map(|star| StarItem {
                id: star.id,
                center: star.position(),
                shape: star.shape,
                glyph: glyph(star.shape, star.position()),
                color: star.color,
                title: star.title.clone(),
                opacity: tags.star_opacity(star),
                selected: selection.contains(star.id),
                highlighted: highlighted.contains(&star.id),
            })
            .collect();

        Self {
            transform: viewport.to_affine(),
            zoom_percent: (viewport.zoom * 100.0).round() as u32,
            edges,
            stars,
            overlay,
            visible_world: viewport.visible_world_rect(canvas),
        }
    }
}

// ─── Minimap ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct MinimapDot {
    pub center: Point,
    pub color: Rgb,
    pub label: String,
}

/// Scene projected into minimap pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimapFrame {
    pub dots: Vec<MinimapDot>,
    pub lines: Vec<(Line, Rgb)>,
    /// The main canvas's visible area.
    pub viewport: Rect,
}

impl MinimapFrame {
    pub fn build(scene: &Scene, viewport: &Viewport, canvas: Size, scale: f64) -> Self {
        let project = |p: Point| world_to_minimap(p, scale);
        let dots = scene
            .stars()
            .iter()
            .map(|star| MinimapDot {
                center: project(star.position()),
                color: star.color,
                label: star.title.chars().take(MINIMAP_TITLE_CHARS).collect(),
            })
            .collect();
        let lines = scene
            .connections()
            .iter()
            .filter_map(|conn| {
                let from = scene.star(conn.from)?;
                let to = scene.star(conn.to)?;
                Some((
                    Line::new(project(from.position()), project(to.position())),
                    conn.color,
                ))
            })
            .collect();
        let visible = viewport.visible_world_rect(canvas);
        Self {
            dots,
            lines,
            viewport: Rect::from_points(project(visible.origin()), project(Point::new(visible.x1, visible.y1))),
        }
    }
}
