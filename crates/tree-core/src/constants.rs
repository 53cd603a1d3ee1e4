use glam::Vec3;

use crate::color::Rgb;

// Shared tuning constants for the simulation, projection and gesture layers.

// Particle store
pub const PARTICLE_COUNT: usize = 1800;
pub const STAR_COUNT: usize = 1; // a single apex star
pub const MAX_IMAGES: usize = 5;
pub const DEFAULT_RECIPIENT: &str = "Friend";

// Tree formation (world units, +Y is up)
pub const TREE_HEIGHT: f32 = 450.0;
pub const TREE_BASE_RADIUS: f32 = 220.0;
pub const STAR_Y: f32 = 240.0; // slightly above the apex at TREE_HEIGHT / 2

// Scatter formation: uniform box, deeper in front than behind
pub const SCATTER_HALF_X: f32 = 900.0;
pub const SCATTER_HALF_Y: f32 = 600.0;
pub const SCATTER_Z_MIN: f32 = -400.0;
pub const SCATTER_Z_MAX: f32 = 800.0;

// Relative tree anchors for image ornaments, upper centre first
pub const IMAGE_ANCHORS: [Vec3; MAX_IMAGES] = [
    Vec3::new(0.0, 150.0, 150.0),
    Vec3::new(-70.0, 40.0, 150.0),
    Vec3::new(70.0, 40.0, 150.0),
    Vec3::new(-110.0, -80.0, 150.0),
    Vec3::new(110.0, -80.0, 150.0),
];

// Kind selection: cumulative upper bounds of a single uniform roll
pub const FOLIAGE_BAND: f32 = 0.75;
pub const GIFT_BAND: f32 = 0.83;
pub const CANDY_CANE_BAND: f32 = 0.88;

// Sizes (world units before perspective scale)
pub const FOLIAGE_SIZE: (f32, f32) = (5.0, 8.0);
pub const GIFT_SIZE: (f32, f32) = (7.0, 11.0);
pub const CANDY_CANE_SIZE: (f32, f32) = (8.0, 12.0);
pub const RING_SIZE: (f32, f32) = (4.0, 7.0);
pub const STAR_SIZE: f32 = 40.0;
pub const IMAGE_SIZE: f32 = 32.0;
pub const MAX_SPIN: f32 = 0.05; // radians per frame, either direction

// Palette
pub const FOLIAGE_COLORS: [Rgb; 5] = [
    Rgb::hex(0x0f3d0f),
    Rgb::hex(0x1a5c1a),
    Rgb::hex(0x004d00),
    Rgb::hex(0x2e8b57),
    Rgb::hex(0x083808),
];
pub const GIFT_COLORS: [Rgb; 5] = [
    Rgb::hex(0xd32f2f),
    Rgb::hex(0x1976d2),
    Rgb::hex(0xfbc02d),
    Rgb::hex(0x7b1fa2),
    Rgb::hex(0xffffff),
];
pub const RIBBON_COLORS: [Rgb; 3] = [Rgb::hex(0xffd700), Rgb::hex(0xffffff), Rgb::hex(0xff0000)];
pub const CANDY_CANE_COLOR: Rgb = Rgb::hex(0xff0000);
pub const RING_COLOR: Rgb = Rgb::hex(0xffb300);
pub const STAR_COLOR: Rgb = Rgb::hex(0xffffff);
pub const BACKGROUND: Rgb = Rgb::hex(0x020205);

// Physics (per frame, not per second)
pub const TREE_STIFFNESS: f32 = 0.06;
pub const TREE_FRICTION: f32 = 0.60;
pub const SCATTER_STIFFNESS: f32 = 0.005;
pub const SCATTER_FRICTION: f32 = 0.92;
pub const ROTATION_STEP: f32 = 0.003; // global orbit per frame
pub const TIME_STEP: f32 = 0.015; // drift clock per frame
pub const DRIFT_AMPLITUDE: f32 = 0.08;

// Projection
pub const FOV: f32 = 500.0;
pub const CAMERA_DISTANCE: f32 = 800.0;
pub const CULL_MARGIN_PX: f32 = 100.0;

// Gesture classification
pub const POSE_BUFFER_LEN: usize = 10;
pub const POSE_COMMIT_COUNT: usize = 7; // a new majority must exceed 70% of the buffer
pub const SWIPE_WINDOW_MS: u64 = 800;
pub const SWIPE_MIN_SAMPLES: usize = 5;
pub const SWIPE_MIN_DISTANCE: f32 = 0.15; // normalized image width
pub const SWIPE_COOLDOWN_MS: u64 = 1500;

// Fallback autoplay (no camera)
pub const AUTOPLAY_OPEN_DELAY_MS: u64 = 2000;
pub const AUTOPLAY_CYCLE_MS: u64 = 5000;

// Performance monitor
pub const STATS_WINDOW_MS: u64 = 1000;
pub const FPS_GOOD: u32 = 55;
pub const FPS_FAIR: u32 = 30;
