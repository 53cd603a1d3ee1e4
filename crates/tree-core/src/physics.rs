//! Per-frame damped-spring integrator.
//!
//! Every particle springs toward its active formation target, rotated about
//! the Y axis by a slowly growing global angle. Steps are per display frame
//! rather than per second, so the constants are tuned for ~60 Hz.

use glam::Vec3;

use crate::constants::{
    DRIFT_AMPLITUDE, ROTATION_STEP, SCATTER_FRICTION, SCATTER_STIFFNESS, TIME_STEP, TREE_FRICTION,
    TREE_STIFFNESS,
};
use crate::mode::Formation;
use crate::particle::Particle;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub friction: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    /// Tight and heavily damped so the tree snaps into shape.
    pub tree: Spring,
    /// Loose and lightly damped so the cloud keeps coasting.
    pub scatter: Spring,
    pub rotation_step: f32,
    pub time_step: f32,
    pub drift_amplitude: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            tree: Spring {
                stiffness: TREE_STIFFNESS,
                friction: TREE_FRICTION,
            },
            scatter: Spring {
                stiffness: SCATTER_STIFFNESS,
                friction: SCATTER_FRICTION,
            },
            rotation_step: ROTATION_STEP,
            time_step: TIME_STEP,
            drift_amplitude: DRIFT_AMPLITUDE,
        }
    }
}

impl PhysicsParams {
    #[inline]
    pub fn spring(&self, formation: Formation) -> Spring {
        match formation {
            Formation::Tree => self.tree,
            Formation::Scatter => self.scatter,
        }
    }
}

/// Accumulated animation state owned by the render loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneClock {
    /// Global orbit angle in radians; grows without bound.
    pub rotation: f32,
    /// Drift clock driving the scatter-mode noise.
    pub time: f32,
}

impl SceneClock {
    #[inline]
    pub fn advance(&mut self, params: &PhysicsParams) {
        self.time += params.time_step;
        self.rotation += params.rotation_step;
    }
}

/// Rotate a point about the Y axis; Y is left untouched.
#[inline]
pub fn rotate_y(p: Vec3, cos: f32, sin: f32) -> Vec3 {
    Vec3::new(p.x * cos - p.z * sin, p.y, p.x * sin + p.z * cos)
}

/// Smooth pseudo-random drift force for scatter mode, phase-shifted per
/// particle so neighbours do not move in lockstep.
#[inline]
pub fn drift(time: f32, id: usize, amplitude: f32) -> Vec3 {
    let phase = id as f32 * 0.1;
    Vec3::new(
        (time * 0.2 + phase).sin(),
        (time * 0.15 + phase).cos(),
        (time * 0.1 + phase).sin(),
    ) * amplitude
}

/// Advance the clock, then step every particle once toward `formation`.
///
/// `formation` is read once by the caller for the whole pass.
pub fn step(
    particles: &mut [Particle],
    formation: Formation,
    clock: &mut SceneClock,
    params: &PhysicsParams,
) {
    clock.advance(params);
    let (sin, cos) = clock.rotation.sin_cos();
    let spring = params.spring(formation);
    let drifting = formation == Formation::Scatter;

    for (id, p) in particles.iter_mut().enumerate() {
        let target = rotate_y(p.target(formation), cos, sin);
        p.velocity += (target - p.position) * spring.stiffness;
        if drifting {
            p.velocity += drift(clock.time, id, params.drift_amplitude);
        }
        p.velocity *= spring.friction;
        p.position += p.velocity;
        p.rotation += p.spin;
    }
}
