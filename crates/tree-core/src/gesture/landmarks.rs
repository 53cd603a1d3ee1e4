//! Hand landmarks as delivered by the tracker: 21 points per hand in
//! normalized `[0, 1]` image coordinates.

use glam::Vec2;

use crate::error::{Result, TreeError};

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// One tracked hand. Depth is dropped; classification is purely 2D.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Vec2; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Vec2; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Parse a flat buffer of `x, y` pairs (42 floats) or `x, y, z` triples
    /// (63 floats), the two layouts the JS bridge may send.
    pub fn from_flat(data: &[f32]) -> Result<Self> {
        let stride = match data.len() {
            n if n == LANDMARK_COUNT * 2 => 2,
            n if n == LANDMARK_COUNT * 3 => 3,
            got => return Err(TreeError::LandmarkCount { got }),
        };
        let mut points = [Vec2::ZERO; LANDMARK_COUNT];
        for (i, p) in points.iter_mut().enumerate() {
            *p = Vec2::new(data[i * stride], data[i * stride + 1]);
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec2 {
        self.points[index]
    }

    #[inline]
    pub fn points(&self) -> &[Vec2; LANDMARK_COUNT] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flat_accepts_both_strides() {
        let xy: Vec<f32> = (0..42).map(|v| v as f32).collect();
        let hand = HandLandmarks::from_flat(&xy).unwrap();
        assert_eq!(hand.point(MIDDLE_MCP), Vec2::new(18.0, 19.0));

        let xyz: Vec<f32> = (0..63).map(|v| v as f32).collect();
        let hand = HandLandmarks::from_flat(&xyz).unwrap();
        assert_eq!(hand.point(1), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn from_flat_rejects_other_lengths() {
        assert_eq!(
            HandLandmarks::from_flat(&[0.0; 99]),
            Err(TreeError::LandmarkCount { got: 99 })
        );
    }
}
