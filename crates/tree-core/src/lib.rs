//! Particle tree engine: formations, physics, gesture classification and
//! projection. No platform APIs; the web front-end paints the sprites.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod images;
pub mod mode;
pub mod particle;
pub mod physics;
pub mod projection;
pub mod render;
pub mod scene;
pub mod stats;
pub mod store;

pub use color::Rgb;
pub use config::SceneConfig;
pub use constants::*;
pub use error::{Result, TreeError};
pub use gesture::{DetectionMode, GestureClassifier, GestureOutput, HandLandmarks, Pose};
pub use images::{ImageSlots, ImageState};
pub use mode::{Formation, FormationReader, ModeChange, ModeController};
pub use particle::{ImageId, Particle, ParticleKind};
pub use projection::{Projector, Viewport};
pub use render::{Shape, Sprite};
pub use scene::Scene;
pub use stats::{FpsBand, FrameReport, FrameStats};
pub use store::ParticleStore;
