//! Hand-landmark gesture classification.
//!
//! Each camera frame yields zero or one hand. The classifier reduces it to a
//! smoothed [`Pose`] (only while the card is open) and a separate swipe edge.
//! It keeps only a short pose window and a sub-second swipe history.

pub mod landmarks;
pub mod pose;
pub mod smoothing;
pub mod swipe;

pub use landmarks::{HandLandmarks, LANDMARK_COUNT, MIDDLE_MCP, WRIST};
pub use pose::{classify_pose, folded_fingers, is_folded, Pose};
pub use smoothing::PoseSmoother;
pub use swipe::{SwipeDetector, SwipeParams};

use instant::Instant;

/// Which mapping is live, driven by the card state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectionMode {
    /// Card open: poses drive the formation; swipes only while pointing.
    Pose,
    /// Card closed: any hand is checked for swipes; poses are not reported.
    Swipe,
}

/// One frame of classifier output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureOutput {
    /// Smoothed pose; `None` in swipe mode.
    pub pose: Option<Pose>,
    pub swipe: bool,
}

#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    smoother: PoseSmoother,
    swipe: SwipeDetector,
}

impl GestureClassifier {
    pub fn new(smoother: PoseSmoother, swipe: SwipeDetector) -> Self {
        Self { smoother, swipe }
    }

    /// Process one camera frame. `hand` is `None` when the tracker saw nothing.
    pub fn process(
        &mut self,
        hand: Option<&HandLandmarks>,
        mode: DetectionMode,
        now: Instant,
    ) -> GestureOutput {
        let Some(hand) = hand else {
            // No hand degrades to IDLE through the same smoothing window.
            let pose = (mode == DetectionMode::Pose).then(|| self.smoother.push(Pose::Idle));
            return GestureOutput { pose, swipe: false };
        };

        let raw = classify_pose(hand);
        let pose = (mode == DetectionMode::Pose).then(|| self.smoother.push(raw));

        // Swipe gating uses the raw pose so a pointing hand can close the card
        // before the smoothed pose catches up.
        let check_swipe = match mode {
            DetectionMode::Swipe => true,
            DetectionMode::Pose => raw == Pose::Pointing,
        };
        let swipe = check_swipe && self.swipe.update(hand.point(MIDDLE_MCP).x, now);
        GestureOutput { pose, swipe }
    }

    #[inline]
    pub fn committed_pose(&self) -> Pose {
        self.smoother.committed()
    }

    /// Drop all buffered history (camera torn down).
    pub fn reset(&mut self) {
        self.smoother.clear();
        self.swipe.clear();
    }
}
