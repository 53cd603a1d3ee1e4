// DOM hooks and paint styles for the Canvas 2D front-end

use tree_core::Rgb;

pub const CANVAS_ID: &str = "app-canvas";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const CARD_ID: &str = "card";
pub const MODE_LABEL_ID: &str = "mode-label";
pub const PERF_ID: &str = "perf-monitor";
pub const HINT_SELECTOR: &str = ".hint";
pub const GREETING_TO_ID: &str = "greeting-to";
pub const GREETING_FROM_ID: &str = "greeting-from";
pub const CARD_MESSAGE_ID: &str = "card-message";
pub const GESTURE_STATUS_ID: &str = "gesture-status";
pub const AUTOPLAY_BADGE_ID: &str = "autoplay-indicator";
pub const AUTOPLAY_BADGE_HTML: &str =
    "<p class=\"title\">Auto-play mode</p><p class=\"detail\">Camera not available</p>";

// Star: radial gradient from a white core through yellow to a faint gold rim
pub const STAR_GRADIENT_INNER: f64 = 0.1; // inner circle, times projected size
pub const STAR_MID: Rgb = Rgb::hex(0xffeb3b);
pub const STAR_MID_STOP: f32 = 0.4;
pub const STAR_EDGE: Rgb = Rgb::hex(0xffd700);
pub const STAR_EDGE_ALPHA: f32 = 0.1;
pub const STAR_HALO: Rgb = Rgb::hex(0xffdf64);
pub const STAR_HALO_ALPHA: f32 = 0.8;

// Image ornament frame
pub const IMAGE_FRAME: Rgb = Rgb::hex(0xffffff);
pub const IMAGE_GLOW_ALPHA: f32 = 0.6;
