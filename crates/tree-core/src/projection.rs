//! Back-to-front ordering and pinhole projection onto the drawing surface.

use glam::{Vec2, Vec3};
use std::cmp::Ordering;

use crate::constants::{CAMERA_DISTANCE, CULL_MARGIN_PX, FOV};
use crate::error::{Result, TreeError};
use crate::particle::Particle;

/// Drawing surface size in pixels. Zero in either axis means nothing is
/// visible.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Negative sizes clamp to zero; non-finite sizes are rejected.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(TreeError::InvalidViewport { width, height });
        }
        Ok(Self {
            width: width.max(0.0),
            height: height.max(0.0),
        })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    /// Screen position in pixels, origin top-left.
    pub screen: Vec2,
    /// Perspective factor applied to world sizes.
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pub fov: f32,
    pub camera_distance: f32,
    pub cull_margin: f32,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            fov: FOV,
            camera_distance: CAMERA_DISTANCE,
            cull_margin: CULL_MARGIN_PX,
        }
    }
}

impl Projector {
    /// Project a world point, or `None` if it is behind the camera plane, far
    /// outside the viewport, or the viewport is empty.
    pub fn project(&self, p: Vec3, viewport: Viewport) -> Option<Projected> {
        if viewport.is_empty() {
            return None;
        }
        let depth = self.camera_distance + p.z;
        if depth <= 0.0 {
            return None;
        }
        let scale = self.fov / depth;
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        // World +Y is up, screen +Y is down.
        let screen = Vec2::new(p.x * scale, -p.y * scale) + viewport.center();
        let m = self.cull_margin;
        let inside = screen.x > -m
            && screen.x < viewport.width + m
            && screen.y > -m
            && screen.y < viewport.height + m;
        inside.then_some(Projected { screen, scale })
    }
}

/// Image ornaments always paint last; everything else farthest first.
pub fn paint_order(a: &Particle, b: &Particle) -> Ordering {
    match (a.kind.is_image(), b.kind.is_image()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => b.position.z.total_cmp(&a.position.z),
    }
}

/// Persistent draw order over a particle slice.
///
/// Particles themselves stay in construction order (their index keys the
/// drift phase); only this index list is re-sorted each frame. The sort is
/// stable and starts from the previous frame's order, so it is nearly sorted
/// already.
#[derive(Clone, Debug, Default)]
pub struct DepthOrder {
    order: Vec<u32>,
}

impl DepthOrder {
    pub fn sort(&mut self, particles: &[Particle]) -> &[u32] {
        if self.order.len() != particles.len() {
            self.order = (0..particles.len() as u32).collect();
        }
        self.order
            .sort_by(|&a, &b| paint_order(&particles[a as usize], &particles[b as usize]));
        &self.order
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn origin_projects_to_center() {
        let p = Projector::default().project(Vec3::ZERO, vp()).unwrap();
        assert_eq!(p.screen, Vec2::new(400.0, 300.0));
        assert!((p.scale - FOV / CAMERA_DISTANCE).abs() < 1e-6);
    }

    #[test]
    fn world_up_is_screen_up() {
        let p = Projector::default()
            .project(Vec3::new(0.0, 100.0, 0.0), vp())
            .unwrap();
        assert!(p.screen.y < 300.0);
    }

    #[test]
    fn behind_camera_is_culled() {
        let proj = Projector::default();
        assert!(proj.project(Vec3::new(0.0, 0.0, -CAMERA_DISTANCE), vp()).is_none());
        assert!(proj.project(Vec3::new(0.0, 0.0, -900.0), vp()).is_none());
    }

    #[test]
    fn cull_margin_is_one_hundred_pixels() {
        let proj = Projector::default();
        let scale = FOV / CAMERA_DISTANCE;
        // 90 px left of the viewport edge: kept
        let x = (-400.0 - 90.0) / scale;
        assert!(proj.project(Vec3::new(x, 0.0, 0.0), vp()).is_some());
        // 110 px left: culled
        let x = (-400.0 - 110.0) / scale;
        assert!(proj.project(Vec3::new(x, 0.0, 0.0), vp()).is_none());
    }

    #[test]
    fn empty_viewport_shows_nothing() {
        let empty = Viewport::new(0.0, 0.0).unwrap();
        assert!(Projector::default().project(Vec3::ZERO, empty).is_none());
        assert!(Viewport::new(f32::NAN, 1.0).is_err());
        assert!(Viewport::new(-5.0, 10.0).unwrap().is_empty());
    }
}
