use super::pose::Pose;
use crate::constants::{POSE_BUFFER_LEN, POSE_COMMIT_COUNT};

/// Majority vote over the last few raw poses with a commit threshold.
///
/// A new majority only replaces the committed pose once its count exceeds
/// `commit_count`; until then the previous pose keeps being reported.
#[derive(Clone, Debug)]
pub struct PoseSmoother {
    buffer: [Pose; POSE_BUFFER_LEN],
    write_index: usize,
    len: usize,
    committed: Pose,
    commit_count: usize,
}

impl Default for PoseSmoother {
    fn default() -> Self {
        Self::new(POSE_COMMIT_COUNT)
    }
}

impl PoseSmoother {
    pub fn new(commit_count: usize) -> Self {
        Self {
            buffer: [Pose::Idle; POSE_BUFFER_LEN],
            write_index: 0,
            len: 0,
            committed: Pose::Idle,
            commit_count,
        }
    }

    /// Start from a known committed pose instead of IDLE.
    pub fn with_committed(mut self, pose: Pose) -> Self {
        self.committed = pose;
        self
    }

    #[inline]
    pub fn committed(&self) -> Pose {
        self.committed
    }

    /// Record one raw pose and return the pose to report for this frame.
    pub fn push(&mut self, pose: Pose) -> Pose {
        self.buffer[self.write_index] = pose;
        self.write_index = (self.write_index + 1) % POSE_BUFFER_LEN;
        self.len = (self.len + 1).min(POSE_BUFFER_LEN);

        let (dominant, count) = self.majority();
        if dominant != self.committed && count > self.commit_count {
            log::debug!(
                "[gesture] commit {:?} -> {:?} ({}/{})",
                self.committed,
                dominant,
                count,
                self.len
            );
            self.committed = dominant;
        }
        self.committed
    }

    /// Most frequent pose in the window and its count. Ties go to the pose
    /// that appears first in [`Pose::ALL`].
    pub fn majority(&self) -> (Pose, usize) {
        let mut counts = [0usize; 4];
        for p in &self.buffer[..self.len] {
            counts[p.slot()] += 1;
        }
        Pose::ALL
            .iter()
            .map(|p| (*p, counts[p.slot()]))
            .fold((self.committed, 0), |best, cur| if cur.1 > best.1 { cur } else { best })
    }

    pub fn clear(&mut self) {
        self.write_index = 0;
        self.len = 0;
    }
}
