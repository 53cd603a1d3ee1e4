//! Particle store construction.
//!
//! The store is built in one pass and never patched: a new image list means a
//! new store. Procedural particles come first (the star at index 0), image
//! ornaments are appended after them.

use rand::prelude::*;
use std::f32::consts::TAU;

use crate::constants::*;
use crate::error::{Result, TreeError};
use crate::geometry::{scatter_target, star_target, tree_target};
use crate::particle::{ImageId, Particle, ParticleKind};

/// Which procedural kind a single uniform roll selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindBand {
    Foliage,
    Gift,
    CandyCane,
    Ring,
}

/// Bucket a roll in `[0, 1)` against the cumulative kind thresholds.
pub fn kind_band(roll: f32) -> KindBand {
    if roll < FOLIAGE_BAND {
        KindBand::Foliage
    } else if roll < GIFT_BAND {
        KindBand::Gift
    } else if roll < CANDY_CANE_BAND {
        KindBand::CandyCane
    } else {
        KindBand::Ring
    }
}

pub struct ParticleStore {
    particles: Vec<Particle>,
    image_count: usize,
}

impl ParticleStore {
    /// Build `procedural` particles plus one ornament per image, seeded so the
    /// layout is reproducible. Fails if more images are supplied than there
    /// are anchors.
    pub fn new(procedural: usize, image_count: usize, seed: u64) -> Result<Self> {
        if image_count > MAX_IMAGES {
            return Err(TreeError::TooManyImages {
                got: image_count,
                max: MAX_IMAGES,
            });
        }
        let mut rng = StdRng::seed_from_u64(seed);
        Ok(Self::build(&mut rng, procedural, image_count))
    }

    pub fn build<R: Rng + ?Sized>(rng: &mut R, procedural: usize, image_count: usize) -> Self {
        let image_count = image_count.min(MAX_IMAGES);
        let mut particles = Vec::with_capacity(procedural + image_count);
        for i in 0..procedural {
            particles.push(procedural_particle(rng, i));
        }
        for i in 0..image_count {
            let anchor = IMAGE_ANCHORS[i % IMAGE_ANCHORS.len()];
            let kind = ParticleKind::ImageOrnament { image: ImageId(i) };
            particles.push(Particle::new(kind, anchor, scatter_target(rng), IMAGE_SIZE));
        }
        log::info!(
            "[store] built {} particles ({} procedural, {} images)",
            particles.len(),
            procedural,
            image_count
        );
        Self {
            particles,
            image_count,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

fn procedural_particle<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Particle {
    let scatter = scatter_target(rng);
    if index < STAR_COUNT {
        return Particle::new(ParticleKind::Star, star_target(), scatter, STAR_SIZE);
    }
    let (kind, (lo, hi)) = match kind_band(rng.gen()) {
        KindBand::Foliage => {
            let color = *FOLIAGE_COLORS.choose(rng).unwrap_or(&FOLIAGE_COLORS[0]);
            (ParticleKind::Foliage { color }, FOLIAGE_SIZE)
        }
        KindBand::Gift => {
            let color = *GIFT_COLORS.choose(rng).unwrap_or(&GIFT_COLORS[0]);
            let ribbon = *RIBBON_COLORS.choose(rng).unwrap_or(&RIBBON_COLORS[0]);
            (ParticleKind::Gift { color, ribbon }, GIFT_SIZE)
        }
        KindBand::CandyCane => (ParticleKind::CandyCane, CANDY_CANE_SIZE),
        KindBand::Ring => (ParticleKind::Ring, RING_SIZE),
    };
    let size = rng.gen_range(lo..hi);
    let rotation = rng.gen_range(0.0..TAU);
    let spin = rng.gen_range(-MAX_SPIN..MAX_SPIN);
    Particle::new(kind, tree_target(rng), scatter, size).with_spin(rotation, spin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_band_thresholds() {
        assert_eq!(kind_band(0.0), KindBand::Foliage);
        assert_eq!(kind_band(0.7499), KindBand::Foliage);
        assert_eq!(kind_band(0.75), KindBand::Gift);
        assert_eq!(kind_band(0.83), KindBand::CandyCane);
        assert_eq!(kind_band(0.88), KindBand::Ring);
        assert_eq!(kind_band(0.999), KindBand::Ring);
    }

    #[test]
    fn rejects_more_images_than_anchors() {
        let err = ParticleStore::new(10, 6, 1).err();
        assert_eq!(err, Some(TreeError::TooManyImages { got: 6, max: 5 }));
    }

    #[test]
    fn particles_start_at_rest_on_scatter_target() {
        let store = ParticleStore::new(50, 1, 9).unwrap();
        for p in store.particles() {
            assert_eq!(p.position, p.scatter_target);
            assert_eq!(p.velocity, glam::Vec3::ZERO);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = ParticleStore::new(100, 2, 42).unwrap();
        let b = ParticleStore::new(100, 2, 42).unwrap();
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.tree_target, pb.tree_target);
            assert_eq!(pa.kind, pb.kind);
        }
    }
}
