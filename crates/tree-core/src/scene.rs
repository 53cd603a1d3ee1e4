//! Per-frame pipeline: physics, depth sort, projection.

use crate::error::Result;
use crate::images::ImageSlots;
use crate::mode::Formation;
use crate::physics::{self, PhysicsParams, SceneClock};
use crate::projection::{DepthOrder, Projector, Viewport};
use crate::render::{build_sprites, Sprite};
use crate::store::ParticleStore;

/// Everything the render loop owns between frames.
pub struct Scene {
    store: ParticleStore,
    clock: SceneClock,
    params: PhysicsParams,
    projector: Projector,
    order: DepthOrder,
    sprites: Vec<Sprite>,
}

impl Scene {
    pub fn new(store: ParticleStore) -> Self {
        Self::with_params(store, PhysicsParams::default(), Projector::default())
    }

    pub fn with_params(store: ParticleStore, params: PhysicsParams, projector: Projector) -> Self {
        let capacity = store.len();
        Self {
            store,
            clock: SceneClock::default(),
            params,
            projector,
            order: DepthOrder::default(),
            sprites: Vec::with_capacity(capacity),
        }
    }

    /// Throw the particles away and build a fresh set for a new image list.
    /// The orbit clock keeps running so the rebuild is not a visual jump in
    /// rotation.
    pub fn rebuild(&mut self, procedural: usize, image_count: usize, seed: u64) -> Result<()> {
        self.store = ParticleStore::new(procedural, image_count, seed)?;
        self.order = DepthOrder::default();
        Ok(())
    }

    /// Rebuild for a new image list. The ornament count comes from `slots`, so
    /// every ornament's [`ImageId`](crate::ImageId) indexes a slot.
    pub fn rebuild_for_images<H>(
        &mut self,
        slots: &ImageSlots<H>,
        procedural: usize,
        seed: u64,
    ) -> Result<()> {
        self.rebuild(procedural, slots.len(), seed)
    }

    /// Advance one frame toward `formation` and return the sprites to paint,
    /// back to front.
    pub fn frame(&mut self, formation: Formation, viewport: Viewport) -> &[Sprite] {
        physics::step(
            self.store.particles_mut(),
            formation,
            &mut self.clock,
            &self.params,
        );
        let order = self.order.sort(self.store.particles());
        build_sprites(
            self.store.particles(),
            order,
            &self.projector,
            viewport,
            &mut self.sprites,
        );
        &self.sprites
    }

    #[inline]
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    #[inline]
    pub fn clock(&self) -> SceneClock {
        self.clock
    }

    #[inline]
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }
}
