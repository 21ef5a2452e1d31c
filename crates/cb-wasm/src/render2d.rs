//! Canvas2D software renderer.
//!
//! Paints a [`Frame`] to an HTML `<canvas>` via `CanvasRenderingContext2d`.
//! Scene content is drawn under the frame's world → screen transform;
//! the backdrop and minimap are drawn in screen pixels.

use cb_core::Rgb;
use cb_render::curve::dash_pattern;
use cb_render::particles::BackgroundStar;
use cb_render::shape::{GLOW_RADIUS, LABEL_OFFSET, Outline};
use cb_render::{CanvasTheme, EdgeItem, Frame, MinimapFrame, ParticleSystem, StarItem};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const MARQUEE_DASH: [f64; 2] = [5.0, 5.0];
const MINIMAP_DOT_RADIUS: f64 = 3.0;

/// Render one frame: backdrop, connections, stars, particles and gesture
/// overlay.
#[allow(clippy::too_many_arguments)]
pub fn render_frame(
    ctx: &CanvasRenderingContext2d,
    frame: &Frame,
    particles: &ParticleSystem,
    backdrop: &[BackgroundStar],
    theme: &CanvasTheme,
    canvas_width: f64,
    canvas_height: f64,
    time_ms: f64,
) {
    let _ = ctx.reset_transform();
    ctx.set_fill_style_str(theme.bg);
    ctx.fill_rect(0.0, 0.0, canvas_width, canvas_height);
    draw_backdrop(ctx, backdrop, time_ms);

    ctx.save();
    let [a, b, c, d, e, f] = frame.transform.as_coeffs();
    let _ = ctx.set_transform(a, b, c, d, e, f);

    for edge in &frame.edges {
        draw_edge(ctx, edge);
    }
    for star in &frame.stars {
        draw_star(ctx, star, theme);
    }
    draw_particles(ctx, particles);
    draw_overlay(ctx, frame, theme);

    ctx.restore();
}

fn draw_backdrop(ctx: &CanvasRenderingContext2d, backdrop: &[BackgroundStar], time_ms: f64) {
    for dot in backdrop {
        ctx.set_fill_style_str(&Rgb::WHITE.to_rgba(dot.alpha_at(time_ms)));
        ctx.begin_path();
        let _ = ctx.arc(dot.position.x, dot.position.y, dot.size, 0.0, TAU);
        ctx.fill();
    }
}

// ─── Connections ─────────────────────────────────────────────────────────

fn draw_edge(ctx: &CanvasRenderingContext2d, edge: &EdgeItem) {
    let curve = edge.curve;
    let gradient = ctx.create_linear_gradient(curve.p0.x, curve.p0.y, curve.p2.x, curve.p2.y);
    let _ = gradient.add_color_stop(0.0, &edge.from_color.to_rgba(0.8 * edge.opacity));
    let _ = gradient.add_color_stop(0.5, &edge.color.to_rgba(0.6 * edge.opacity));
    let _ = gradient.add_color_stop(1.0, &edge.to_color.to_rgba(0.8 * edge.opacity));

    ctx.save();
    ctx.set_stroke_style_canvas_gradient(&gradient);
    ctx.set_line_width(2.0);
    set_dash(ctx, dash_pattern(edge.style));
    if edge.glow {
        ctx.set_shadow_color(&edge.color.to_rgba(0.5 * edge.opacity));
        ctx.set_shadow_blur(10.0);
    }
    ctx.begin_path();
    ctx.move_to(curve.p0.x, curve.p0.y);
    ctx.quadratic_curve_to(curve.p1.x, curve.p1.y, curve.p2.x, curve.p2.y);
    ctx.stroke();
    ctx.restore();
}

// ─── Stars ───────────────────────────────────────────────────────────────

fn draw_star(ctx: &CanvasRenderingContext2d, star: &StarItem, theme: &CanvasTheme) {
    let (x, y) = (star.center.x, star.center.y);
    ctx.save();
    ctx.set_global_alpha(star.opacity);

    // Glow
    if let Ok(glow) = ctx.create_radial_gradient(x, y, 0.0, x, y, GLOW_RADIUS) {
        let _ = glow.add_color_stop(0.0, &star.color.to_rgba(0.8));
        let _ = glow.add_color_stop(1.0, &star.color.to_rgba(0.0));
        ctx.set_fill_style_canvas_gradient(&glow);
        trace_outline(ctx, &star.glyph.glow);
        ctx.fill();
    }

    // Core
    ctx.set_fill_style_str(&star.color.to_hex());
    trace_outline(ctx, &star.glyph.core);
    ctx.fill();
    if star.selected {
        ctx.set_stroke_style_str(theme.accent);
        ctx.set_line_width(3.0);
    } else {
        ctx.set_stroke_style_str(&Rgb::WHITE.to_hex());
        ctx.set_line_width(2.0);
    }
    ctx.stroke();

    if star.highlighted {
        ctx.set_stroke_style_str(theme.accent);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        let _ = ctx.arc(x, y, GLOW_RADIUS + 4.0, 0.0, TAU);
        ctx.stroke();
    }

    if !star.title.is_empty() {
        ctx.set_fill_style_str(theme.label);
        ctx.set_font("12px Segoe UI, sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text(&star.title, x, y + LABEL_OFFSET);
    }

    ctx.restore();
}

fn trace_outline(ctx: &CanvasRenderingContext2d, outline: &Outline) {
    ctx.begin_path();
    match outline {
        Outline::Circle { center, radius } => {
            let _ = ctx.arc(center.x, center.y, *radius, 0.0, TAU);
        }
        Outline::Polygon(points) => {
            let mut iter = points.iter();
            if let Some(first) = iter.next() {
                ctx.move_to(first.x, first.y);
                for p in iter {
                    ctx.line_to(p.x, p.y);
                }
                ctx.close_path();
            }
        }
    }
}

fn draw_particles(ctx: &CanvasRenderingContext2d, particles: &ParticleSystem) {
    for p in particles.particles() {
        ctx.set_fill_style_str(&p.color.to_rgba(p.life.clamp(0.0, 1.0)));
        ctx.begin_path();
        let _ = ctx.arc(p.position.x, p.position.y, p.size, 0.0, TAU);
        ctx.fill();
    }
}

// ─── Gesture overlay ─────────────────────────────────────────────────────

fn draw_overlay(ctx: &CanvasRenderingContext2d, frame: &Frame, theme: &CanvasTheme) {
    if let Some(line) = frame.overlay.pending_link {
        ctx.save();
        ctx.set_stroke_style_str(&Rgb::WHITE.to_rgba(0.5));
        ctx.set_line_width(2.0);
        set_dash(ctx, &MARQUEE_DASH);
        ctx.begin_path();
        ctx.move_to(line.p0.x, line.p0.y);
        ctx.line_to(line.p1.x, line.p1.y);
        ctx.stroke();
        ctx.restore();
    }

    if let Some(rect) = frame.overlay.marquee {
        ctx.save();
        ctx.set_fill_style_str("rgba(255, 215, 0, 0.1)");
        ctx.fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
        ctx.set_stroke_style_str(theme.accent);
        ctx.set_line_width(1.0);
        set_dash(ctx, &MARQUEE_DASH);
        ctx.stroke_rect(rect.x0, rect.y0, rect.width(), rect.height());
        ctx.restore();
    }
}

// ─── Minimap ─────────────────────────────────────────────────────────────

pub fn render_minimap(
    ctx: &CanvasRenderingContext2d,
    minimap: &MinimapFrame,
    theme: &CanvasTheme,
    width: f64,
    height: f64,
) {
    ctx.set_fill_style_str(theme.badge_bg);
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_line_width(1.0);
    for (line, color) in &minimap.lines {
        ctx.set_stroke_style_str(&color.to_rgba(0.5));
        ctx.begin_path();
        ctx.move_to(line.p0.x, line.p0.y);
        ctx.line_to(line.p1.x, line.p1.y);
        ctx.stroke();
    }

    ctx.set_font("8px Segoe UI, sans-serif");
    ctx.set_text_align("center");
    for dot in &minimap.dots {
        ctx.set_fill_style_str(&dot.color.to_hex());
        ctx.begin_path();
        let _ = ctx.arc(dot.center.x, dot.center.y, MINIMAP_DOT_RADIUS, 0.0, TAU);
        ctx.fill();
        if !dot.label.is_empty() {
            ctx.set_fill_style_str(theme.badge_text);
            let _ = ctx.fill_text(&dot.label, dot.center.x, dot.center.y + 10.0);
        }
    }

    let view = minimap.viewport;
    ctx.save();
    ctx.set_stroke_style_str(theme.accent);
    set_dash(ctx, &MARQUEE_DASH);
    ctx.stroke_rect(view.x0, view.y0, view.width(), view.height());
    ctx.restore();
}

fn set_dash(ctx: &CanvasRenderingContext2d, pattern: &[f64]) {
    let array: js_sys::Array = pattern.iter().map(|v| JsValue::from_f64(*v)).collect();
    let _ = ctx.set_line_dash(&array);
}
