//! Target-shape generators for the two formations and the apex star.
//!
//! All generators are pure given their random source and are sampled once per
//! particle when the store is built, never per frame. Points are in object
//! space; the integrator applies the global orbit rotation later.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

use crate::constants::{
    SCATTER_HALF_X, SCATTER_HALF_Y, SCATTER_Z_MAX, SCATTER_Z_MIN, STAR_Y, TREE_BASE_RADIUS,
    TREE_HEIGHT,
};

/// Random point inside the solid tree cone.
///
/// Placement does not depend on the particle's index; every call draws three
/// uniforms and hands them to [`cone_point`].
pub fn tree_target<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u_height: f32 = rng.gen();
    let u_radius: f32 = rng.gen();
    let u_angle: f32 = rng.gen();
    cone_point(u_height, u_radius, u_angle)
}

/// Map three uniforms in `[0, 1]` to a point in the cone.
///
/// `h = 1 - u²` biases samples toward the base (h = 1) where the cross-section
/// is largest; the radius at that height grows linearly with `h`, and
/// `sqrt` on the radial draw keeps the disc uniform by area.
pub fn cone_point(u_height: f32, u_radius: f32, u_angle: f32) -> Vec3 {
    let h = 1.0 - u_height * u_height;
    let y = TREE_HEIGHT / 2.0 - h * TREE_HEIGHT;
    let radius_at_h = TREE_BASE_RADIUS * h;
    let r = radius_at_h * u_radius.sqrt();
    let angle = u_angle * TAU;
    Vec3::new(r * angle.cos(), y, r * angle.sin())
}

/// The apex marker: always the same point just above the cone tip.
#[inline]
pub fn star_target() -> Vec3 {
    Vec3::new(0.0, STAR_Y, 0.0)
}

/// Random point in the scatter box. Z extends further toward the viewer's far
/// side than the near side so the cloud keeps its distance from the camera.
pub fn scatter_target<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.gen_range(-SCATTER_HALF_X..SCATTER_HALF_X),
        rng.gen_range(-SCATTER_HALF_Y..SCATTER_HALF_Y),
        rng.gen_range(SCATTER_Z_MIN..SCATTER_Z_MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cone_point_extremes() {
        // u_height = 0 -> h = 1: base plane, full radius available
        let base = cone_point(0.0, 1.0, 0.0);
        assert!((base.y + TREE_HEIGHT / 2.0).abs() < 1e-3);
        assert!((base.x - TREE_BASE_RADIUS).abs() < 1e-3);

        // u_height = 1 -> h = 0: apex, zero radius
        let apex = cone_point(1.0, 1.0, 0.3);
        assert!((apex.y - TREE_HEIGHT / 2.0).abs() < 1e-3);
        assert!(apex.x.abs() < 1e-3 && apex.z.abs() < 1e-3);
    }

    #[test]
    fn star_sits_above_apex() {
        assert!(star_target().y > TREE_HEIGHT / 2.0);
    }
}
