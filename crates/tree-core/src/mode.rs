//! Card open/closed state and the active formation.
//!
//! The controller is the only writer of the formation; the render loop holds a
//! [`FormationReader`] and loads it once at the start of each frame, so a frame
//! never sees the formation change half way through its particle pass.

use instant::Instant;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::constants::{AUTOPLAY_CYCLE_MS, AUTOPLAY_OPEN_DELAY_MS};
use crate::gesture::{DetectionMode, GestureOutput, Pose};

/// Named target shape the particles animate toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Formation {
    Tree,
    #[default]
    Scatter,
}

impl Formation {
    pub fn label(self) -> &'static str {
        match self {
            Formation::Tree => "Christmas Tree Formed",
            Formation::Scatter => "Particles Scattered",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Formation::Tree => Formation::Scatter,
            Formation::Scatter => Formation::Tree,
        }
    }

    fn to_u8(self) -> u8 {
        match self {
            Formation::Tree => 0,
            Formation::Scatter => 1,
        }
    }

    fn from_u8(v: u8) -> Self {
        if v == 0 {
            Formation::Tree
        } else {
            Formation::Scatter
        }
    }
}

/// Read side of the formation cell; cheap to clone.
#[derive(Clone, Debug)]
pub struct FormationReader(Arc<AtomicU8>);

impl FormationReader {
    #[inline]
    pub fn load(&self) -> Formation {
        Formation::from_u8(self.0.load(Ordering::Acquire))
    }
}

/// Write side of the formation cell. Deliberately not `Clone`.
#[derive(Debug)]
struct FormationWriter(Arc<AtomicU8>);

impl FormationWriter {
    fn new(initial: Formation) -> Self {
        Self(Arc::new(AtomicU8::new(initial.to_u8())))
    }

    fn store(&self, formation: Formation) {
        self.0.store(formation.to_u8(), Ordering::Release);
    }

    fn reader(&self) -> FormationReader {
        FormationReader(self.0.clone())
    }
}

/// Timed demo used when the camera or tracker is unavailable.
#[derive(Clone, Copy, Debug)]
struct Autoplay {
    started: Option<Instant>,
    last_flip: Option<Instant>,
}

/// What changed as a result of an input, for the overlay to react to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeChange {
    pub card_toggled: bool,
    pub formation_changed: bool,
    /// The smoothed pose shown in the status line changed.
    pub pose_changed: bool,
}

#[derive(Debug)]
pub struct ModeController {
    card_open: bool,
    formation: Formation,
    last_pose: Pose,
    writer: FormationWriter,
    autoplay: Option<Autoplay>,
    started: bool,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeController {
    pub fn new() -> Self {
        let formation = Formation::default();
        Self {
            card_open: false,
            formation,
            last_pose: Pose::Idle,
            writer: FormationWriter::new(formation),
            autoplay: None,
            started: false,
        }
    }

    pub fn reader(&self) -> FormationReader {
        self.writer.reader()
    }

    #[inline]
    pub fn card_open(&self) -> bool {
        self.card_open
    }

    #[inline]
    pub fn formation(&self) -> Formation {
        self.formation
    }

    /// Most recent smoothed pose (IDLE until the classifier reports one).
    #[inline]
    pub fn last_pose(&self) -> Pose {
        self.last_pose
    }

    /// The user has dismissed the start screen.
    #[inline]
    pub fn started(&self) -> bool {
        self.started
    }

    #[inline]
    pub fn autoplay(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Classifier gating follows the card: closed listens for swipes only,
    /// open maps poses to formations.
    #[inline]
    pub fn detection_mode(&self) -> DetectionMode {
        if self.card_open {
            DetectionMode::Pose
        } else {
            DetectionMode::Swipe
        }
    }

    /// Fold one classifier result into the state. Ignored during autoplay.
    pub fn apply(&mut self, out: GestureOutput) -> ModeChange {
        let mut change = ModeChange::default();
        if self.autoplay.is_some() {
            return change;
        }
        if let Some(pose) = out.pose {
            change.pose_changed = pose != self.last_pose;
            self.last_pose = pose;
            change.formation_changed = self.apply_pose(pose);
        }
        if out.swipe {
            self.toggle_card();
            change.card_toggled = true;
        }
        change
    }

    /// Keyboard request for a formation. Held to the same gating as gestures:
    /// only while the card is open and never during autoplay.
    pub fn request_formation(&mut self, formation: Formation) -> ModeChange {
        let mut change = ModeChange::default();
        if self.card_open && self.autoplay.is_none() {
            change.formation_changed = self.set_formation(formation);
        }
        change
    }

    /// Any swipe toggles the card; the classifier only reports swipes while the
    /// card is open if the hand is pointing.
    pub fn toggle_card(&mut self) {
        self.card_open = !self.card_open;
        log::info!(
            "[mode] card {}",
            if self.card_open { "opened" } else { "closed" }
        );
    }

    /// Only TREE and SCATTER move the formation; POINTING and IDLE hold it so
    /// the particles stay put while the hand repositions.
    pub fn apply_pose(&mut self, pose: Pose) -> bool {
        match pose {
            Pose::Tree => self.set_formation(Formation::Tree),
            Pose::Scatter => self.set_formation(Formation::Scatter),
            Pose::Pointing | Pose::Idle => false,
        }
    }

    pub fn set_formation(&mut self, formation: Formation) -> bool {
        if formation == self.formation {
            return false;
        }
        self.formation = formation;
        self.writer.store(formation);
        log::debug!("[mode] formation -> {:?}", formation);
        true
    }

    /// The camera or tracker failed: switch to the timed demo. Idempotent.
    pub fn camera_failed(&mut self) {
        if self.autoplay.is_none() {
            log::warn!("[mode] camera unavailable, enabling autoplay");
            self.autoplay = Some(Autoplay {
                started: None,
                last_flip: None,
            });
        }
    }

    /// The user has begun the experience. Starts the autoplay clock if the
    /// camera already failed. Returns `false` if already started.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        if let Some(auto) = &mut self.autoplay {
            auto.started = Some(now);
            auto.last_flip = Some(now);
        }
        true
    }

    /// Back to the pre-start state. The card closes and the autoplay clock
    /// stops; a failed camera stays failed.
    pub fn shutdown(&mut self) {
        self.started = false;
        self.card_open = false;
        self.last_pose = Pose::Idle;
        if let Some(auto) = &mut self.autoplay {
            auto.started = None;
            auto.last_flip = None;
        }
    }

    /// Advance autoplay: open the card after the delay, then alternate the
    /// formation on a fixed period. No-op outside autoplay.
    pub fn tick(&mut self, now: Instant) -> ModeChange {
        let mut change = ModeChange::default();
        let Some(mut auto) = self.autoplay else {
            return change;
        };
        if self.started && auto.started.is_none() {
            // camera failed after the start screen; the clock starts now
            auto.started = Some(now);
            auto.last_flip = Some(now);
        }
        let (Some(started), Some(mut last_flip)) = (auto.started, auto.last_flip) else {
            return change;
        };
        if !self.card_open
            && now.saturating_duration_since(started) >= Duration::from_millis(AUTOPLAY_OPEN_DELAY_MS)
        {
            self.card_open = true;
            change.card_toggled = true;
            log::info!("[mode] autoplay opened card");
        }
        let period = Duration::from_millis(AUTOPLAY_CYCLE_MS);
        while now.saturating_duration_since(last_flip) >= period {
            last_flip += period;
            let next = self.formation.toggled();
            change.formation_changed |= self.set_formation(next);
        }
        self.autoplay = Some(Autoplay {
            started: Some(started),
            last_flip: Some(last_flip),
        });
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out(pose: Option<Pose>, swipe: bool) -> GestureOutput {
        GestureOutput { pose, swipe }
    }

    #[test]
    fn transient_poses_hold_formation() {
        let mut mc = ModeController::new();
        mc.apply(out(Some(Pose::Tree), false));
        assert_eq!(mc.formation(), Formation::Tree);
        mc.apply(out(Some(Pose::Pointing), false));
        mc.apply(out(Some(Pose::Idle), false));
        assert_eq!(mc.formation(), Formation::Tree);
        assert_eq!(mc.last_pose(), Pose::Idle);
        mc.apply(out(Some(Pose::Scatter), false));
        assert_eq!(mc.formation(), Formation::Scatter);
    }

    #[test]
    fn swipe_toggles_card_and_detection_mode() {
        let mut mc = ModeController::new();
        assert_eq!(mc.detection_mode(), DetectionMode::Swipe);
        let change = mc.apply(out(None, true));
        assert!(change.card_toggled);
        assert!(mc.card_open());
        assert_eq!(mc.detection_mode(), DetectionMode::Pose);
        mc.apply(out(Some(Pose::Pointing), true));
        assert!(!mc.card_open());
    }

    #[test]
    fn reader_sees_writes() {
        let mut mc = ModeController::new();
        let reader = mc.reader();
        assert_eq!(reader.load(), Formation::Scatter);
        mc.set_formation(Formation::Tree);
        assert_eq!(reader.load(), Formation::Tree);
    }

    #[test]
    fn labels() {
        assert_eq!(Formation::Tree.label(), "Christmas Tree Formed");
        assert_eq!(Formation::Scatter.label(), "Particles Scattered");
    }
}
