use super::landmarks::*;

/// Momentary hand-shape classification, before smoothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pose {
    /// Closed fist.
    Tree,
    /// Open hand.
    Scatter,
    /// Index extended, the other three folded.
    Pointing,
    /// No hand, or a shape that matches nothing above.
    Idle,
}

impl Pose {
    pub const ALL: [Pose; 4] = [Pose::Tree, Pose::Scatter, Pose::Pointing, Pose::Idle];

    /// Live status line shown while the card is open.
    pub fn status_text(self) -> &'static str {
        match self {
            Pose::Tree => "Fist detected",
            Pose::Scatter => "Open hand detected",
            Pose::Pointing => "Pointing detected",
            Pose::Idle => "Show me your hand",
        }
    }

    #[inline]
    pub(crate) fn slot(self) -> usize {
        match self {
            Pose::Tree => 0,
            Pose::Scatter => 1,
            Pose::Pointing => 2,
            Pose::Idle => 3,
        }
    }
}

/// (tip, pip) pairs for index, middle, ring and pinky. The thumb is ignored.
const FINGERS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// A finger is folded when its tip is closer to the wrist than its PIP joint.
#[inline]
pub fn is_folded(hand: &HandLandmarks, tip: usize, pip: usize) -> bool {
    let wrist = hand.point(WRIST);
    hand.point(tip).distance(wrist) < hand.point(pip).distance(wrist)
}

/// Fold state of index, middle, ring and pinky in that order.
pub fn folded_fingers(hand: &HandLandmarks) -> [bool; 4] {
    FINGERS.map(|(tip, pip)| is_folded(hand, tip, pip))
}

/// Classify in priority order TREE, POINTING, SCATTER, else IDLE.
///
/// Two or three folded fingers that are not the pointing shape fall through
/// to IDLE on purpose; that gap keeps half-closed hands from flipping the tree.
pub fn classify_pose(hand: &HandLandmarks) -> Pose {
    let [index, middle, ring, pinky] = folded_fingers(hand);
    let folded = [index, middle, ring, pinky].iter().filter(|f| **f).count();
    if index && middle && ring && pinky {
        Pose::Tree
    } else if !index && middle && ring && pinky {
        Pose::Pointing
    } else if folded <= 1 {
        Pose::Scatter
    } else {
        Pose::Idle
    }
}
