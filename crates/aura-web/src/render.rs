//! Canvas 2D drawing for the particle and ray fields.
//!
//! All coordinates are logical (CSS pixel) units; the surface's DPR transform
//! maps them onto the physical backing store.

use aura_core::{glyph_for, Palette, ParticleField, RayField, GLYPH_COLS, GLYPH_ROWS};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

use crate::constants::{
    CENTER_MARKER_RADIUS, GLYPH_CELL_PX, LABEL_FONT, LINK_WIDTH, RAY_ALPHA_LABELED,
    RAY_ALPHA_PLAIN, RAY_WIDTH_LABELED, RAY_WIDTH_PLAIN, TIP_CLEARANCE_PX,
};
use crate::surface::Surface;

fn css_rgb(rgb: [u8; 3]) -> String {
    format!("rgb({},{},{})", rgb[0], rgb[1], rgb[2])
}

pub fn draw_field(surface: &Surface, field: &ParticleField, palette: &Palette) {
    let ctx = surface.ctx();
    surface.clear();

    // Discs first, then the pair links over them.
    ctx.set_fill_style_str(&css_rgb(palette.particle));
    for p in &field.particles {
        ctx.set_global_alpha(f64::from(p.alpha));
        ctx.begin_path();
        let _ = ctx.arc(
            f64::from(p.pos.x),
            f64::from(p.pos.y),
            f64::from(p.radius),
            0.0,
            TAU,
        );
        ctx.fill();
    }

    ctx.set_stroke_style_str(&css_rgb(palette.link));
    ctx.set_line_width(LINK_WIDTH);
    field.visit_links(|a, b, alpha| {
        ctx.set_global_alpha(f64::from(alpha));
        ctx.begin_path();
        ctx.move_to(f64::from(a.x), f64::from(a.y));
        ctx.line_to(f64::from(b.x), f64::from(b.y));
        ctx.stroke();
    });
    ctx.set_global_alpha(1.0);
}

pub fn draw_rays(surface: &Surface, rays: &RayField, palette: &Palette) {
    let ctx = surface.ctx();
    surface.clear();
    let center = Vec2::new(surface.width() * 0.5, surface.height() * 0.5);

    // Plain rays underneath, all in one path since they share a style.
    ctx.set_stroke_style_str(&css_rgb(palette.ray_plain));
    ctx.set_line_width(RAY_WIDTH_PLAIN);
    ctx.set_global_alpha(RAY_ALPHA_PLAIN);
    ctx.begin_path();
    for (i, ray) in rays.rays.iter().enumerate() {
        if ray.has_label() {
            continue;
        }
        let tip = rays.endpoint(i, center);
        ctx.move_to(f64::from(center.x), f64::from(center.y));
        ctx.line_to(f64::from(tip.x), f64::from(tip.y));
    }
    ctx.stroke();

    // Labeled rays on top, heavier, each with its glyph and text.
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    ctx.set_line_width(RAY_WIDTH_LABELED);
    ctx.set_global_alpha(RAY_ALPHA_LABELED);
    for (i, ray) in rays.rays.iter().enumerate() {
        let Some(label) = ray.label else {
            continue;
        };
        let tip = rays.endpoint(i, center);
        ctx.set_stroke_style_str(&css_rgb(palette.ray_labeled));
        ctx.begin_path();
        ctx.move_to(f64::from(center.x), f64::from(center.y));
        ctx.line_to(f64::from(tip.x), f64::from(tip.y));
        ctx.stroke();
        draw_tip(ctx, tip, label, palette);
    }

    // Fixed-size center marker, always on top.
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(&css_rgb(palette.center_marker));
    ctx.begin_path();
    let _ = ctx.arc(
        f64::from(center.x),
        f64::from(center.y),
        CENTER_MARKER_RADIUS,
        0.0,
        TAU,
    );
    ctx.fill();
}

// Glyph block above the tip, label text below it. A label without a glyph
// still gets its text.
fn draw_tip(ctx: &web::CanvasRenderingContext2d, tip: Vec2, label: &str, palette: &Palette) {
    if let Some(glyph) = glyph_for(label) {
        ctx.set_fill_style_str(&css_rgb(palette.glyph));
        let block_w = GLYPH_CELL_PX * GLYPH_COLS as f64;
        let block_h = GLYPH_CELL_PX * GLYPH_ROWS as f64;
        let left = f64::from(tip.x) - block_w * 0.5;
        let top = f64::from(tip.y) - block_h - TIP_CLEARANCE_PX;
        for row in 0..GLYPH_ROWS {
            for col in 0..GLYPH_COLS {
                if glyph.filled(row, col) {
                    ctx.fill_rect(
                        left + col as f64 * GLYPH_CELL_PX,
                        top + row as f64 * GLYPH_CELL_PX,
                        GLYPH_CELL_PX,
                        GLYPH_CELL_PX,
                    );
                }
            }
        }
    }
    ctx.set_fill_style_str(&css_rgb(palette.label_text));
    let _ = ctx.fill_text(label, f64::from(tip.x), f64::from(tip.y) + TIP_CLEARANCE_PX);
}
