use glam::Vec3;

use crate::color::Rgb;
use crate::mode::Formation;

/// Index into the image slot table supplied alongside the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

/// Visual kind, fixed at creation. Each variant carries only what its shape
/// needs; candy canes and rings use fixed palette colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleKind {
    Foliage { color: Rgb },
    Gift { color: Rgb, ribbon: Rgb },
    CandyCane,
    Ring,
    Star,
    ImageOrnament { image: ImageId },
}

impl ParticleKind {
    /// Star and image ornaments are drawn upright and never spin.
    #[inline]
    pub fn is_upright(&self) -> bool {
        matches!(self, Self::Star | Self::ImageOrnament { .. })
    }

    #[inline]
    pub fn is_image(&self) -> bool {
        matches!(self, Self::ImageOrnament { .. })
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub tree_target: Vec3,
    pub scatter_target: Vec3,
    pub kind: ParticleKind,
    pub size: f32,
    pub rotation: f32,
    pub spin: f32,
}

impl Particle {
    /// A particle at rest on its scatter target.
    pub fn new(kind: ParticleKind, tree_target: Vec3, scatter_target: Vec3, size: f32) -> Self {
        Self {
            position: scatter_target,
            velocity: Vec3::ZERO,
            tree_target,
            scatter_target,
            kind,
            size,
            rotation: 0.0,
            spin: 0.0,
        }
    }

    /// Set the initial angle and per-frame spin. Upright kinds ignore both.
    pub fn with_spin(mut self, rotation: f32, spin: f32) -> Self {
        if !self.kind.is_upright() {
            self.rotation = rotation;
            self.spin = spin;
        }
        self
    }

    /// Object-space target for the given formation (before orbit rotation).
    #[inline]
    pub fn target(&self, formation: Formation) -> Vec3 {
        match formation {
            Formation::Tree => self.tree_target,
            Formation::Scatter => self.scatter_target,
        }
    }
}
