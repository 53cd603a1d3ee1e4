//! Backend-agnostic shape renderer.
//!
//! A frame is reduced to an ordered list of [`Sprite`]s in screen space; the
//! platform painter walks the list and draws each shape around its origin.
//! Outline helpers here keep the shape proportions in one place.

use glam::Vec2;
use std::f32::consts::PI;

use crate::color::Rgb;
use crate::constants::{CANDY_CANE_COLOR, RING_COLOR, STAR_COLOR};
use crate::particle::{ImageId, Particle, ParticleKind};
use crate::projection::{Projector, Viewport};

// Shape proportions, relative to the projected size `s`
pub const RIBBON_WIDTH: f32 = 0.4;
pub const CANE_LINE_WIDTH: f32 = 0.6;
pub const CANE_HOOK_RADIUS: f32 = 0.5;
pub const CANE_SHAFT_END: f32 = 1.5;
pub const RING_LINE_WIDTH: f32 = 0.4;
pub const STAR_POINTS: usize = 5;
pub const STAR_INNER_RATIO: f32 = 0.4;
pub const STAR_GLOW_BLUR: f32 = 60.0; // times perspective scale
pub const STAR_HALO_RADIUS: f32 = 0.8;
pub const IMAGE_FRAME_RATIO: f32 = 1.15;
pub const IMAGE_GLOW_BLUR: f32 = 15.0; // times perspective scale

/// Screen-space shape. Mirrors [`ParticleKind`] with every color resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Foliage { color: Rgb },
    Gift { color: Rgb, ribbon: Rgb },
    CandyCane { color: Rgb },
    Ring { color: Rgb },
    Star { color: Rgb },
    Image { image: ImageId },
}

impl From<ParticleKind> for Shape {
    fn from(kind: ParticleKind) -> Self {
        match kind {
            ParticleKind::Foliage { color } => Shape::Foliage { color },
            ParticleKind::Gift { color, ribbon } => Shape::Gift { color, ribbon },
            ParticleKind::CandyCane => Shape::CandyCane {
                color: CANDY_CANE_COLOR,
            },
            ParticleKind::Ring => Shape::Ring { color: RING_COLOR },
            ParticleKind::Star => Shape::Star { color: STAR_COLOR },
            ParticleKind::ImageOrnament { image } => Shape::Image { image },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub origin: Vec2,
    /// Projected half-extent in pixels.
    pub size: f32,
    /// Perspective factor, used to scale glow radii.
    pub scale: f32,
    /// Canvas rotation in radians; always 0 for upright shapes.
    pub rotation: f32,
    pub shape: Shape,
}

/// Project `particles` in `order` into `out`, skipping culled particles.
/// `out` is cleared first so the caller can reuse its allocation.
pub fn build_sprites(
    particles: &[Particle],
    order: &[u32],
    projector: &Projector,
    viewport: Viewport,
    out: &mut Vec<Sprite>,
) {
    out.clear();
    if viewport.is_empty() {
        return;
    }
    for &i in order {
        let Some(p) = particles.get(i as usize) else {
            continue;
        };
        let Some(proj) = projector.project(p.position, viewport) else {
            continue;
        };
        let rotation = if p.kind.is_upright() { 0.0 } else { p.rotation };
        out.push(Sprite {
            origin: proj.screen,
            size: p.size * proj.scale,
            scale: proj.scale,
            rotation,
            shape: p.kind.into(),
        });
    }
}

/// Ten-vertex outline of an upright five-pointed star, first point at the top.
pub fn star_outline(outer: f32) -> [Vec2; STAR_POINTS * 2] {
    let inner = outer * STAR_INNER_RATIO;
    let mut pts = [Vec2::ZERO; STAR_POINTS * 2];
    for (k, pt) in pts.iter_mut().enumerate() {
        let r = if k % 2 == 0 { outer } else { inner };
        let angle = (PI / STAR_POINTS as f32) * k as f32 - PI / 2.0;
        *pt = Vec2::new(angle.cos() * r, angle.sin() * r);
    }
    pts
}

/// Foliage wedge in canvas space: apex above the origin, flat base below.
pub fn foliage_outline(s: f32) -> [Vec2; 3] {
    [Vec2::new(0.0, -s), Vec2::new(s, s), Vec2::new(-s, s)]
}

/// Candy cane hook: a half circle opening downward centred above the origin,
/// then a straight shaft. Returns `(hook_center, hook_radius, shaft_end)`.
pub fn cane_hook(s: f32) -> (Vec2, f32, Vec2) {
    let r = s * CANE_HOOK_RADIUS;
    (Vec2::new(0.0, -r), r, Vec2::new(r, s * CANE_SHAFT_END))
}

/// Axis-aligned rectangle as `(x, y, w, h)` relative to the sprite origin.
pub type Rect = (f32, f32, f32, f32);

/// Box and the two ribbon bars (vertical, horizontal) of a gift.
pub fn gift_rects(s: f32) -> (Rect, Rect, Rect) {
    let w = s * RIBBON_WIDTH;
    (
        (-s, -s, s * 2.0, s * 2.0),
        (-w / 2.0, -s, w, s * 2.0),
        (-s, -w / 2.0, s * 2.0, w),
    )
}

/// Outer frame and inner clipped picture area of an image ornament.
pub fn image_rects(s: f32) -> (Rect, Rect) {
    let f = s * IMAGE_FRAME_RATIO;
    ((-f, -f, f * 2.0, f * 2.0), (-s, -s, s * 2.0, s * 2.0))
}
