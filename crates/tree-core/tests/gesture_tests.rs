// Host-side tests for pose classification, smoothing and swipe detection.

use glam::Vec2;
use instant::Instant;
use std::time::Duration;
use tree_core::gesture::landmarks::*;
use tree_core::gesture::{classify_pose, PoseSmoother, SwipeDetector, SwipeParams};
use tree_core::{DetectionMode, GestureClassifier, HandLandmarks, Pose};

/// Synthetic hand: wrist at the bottom, fingers pointing up. A folded finger
/// has its tip pulled back below its PIP joint.
fn hand(index: bool, middle: bool, ring: bool, pinky: bool) -> HandLandmarks {
    hand_at(0.5, [index, middle, ring, pinky])
}

fn hand_at(center_x: f32, folded: [bool; 4]) -> HandLandmarks {
    let mut pts = [Vec2::new(center_x, 0.9); LANDMARK_COUNT];
    let fingers = [
        (INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP, -0.06),
        (MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP, -0.02),
        (RING_MCP, RING_PIP, RING_DIP, RING_TIP, 0.02),
        (PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP, 0.06),
    ];
    for ((mcp, pip, dip, tip, dx), is_folded) in fingers.into_iter().zip(folded) {
        let x = center_x + dx;
        pts[mcp] = Vec2::new(x, 0.7);
        pts[pip] = Vec2::new(x, 0.6);
        if is_folded {
            pts[dip] = Vec2::new(x, 0.65);
            pts[tip] = Vec2::new(x, 0.72);
        } else {
            pts[dip] = Vec2::new(x, 0.5);
            pts[tip] = Vec2::new(x, 0.4);
        }
    }
    pts[WRIST] = Vec2::new(center_x, 0.9);
    HandLandmarks::new(pts)
}

#[test]
fn fist_is_tree() {
    assert_eq!(classify_pose(&hand(true, true, true, true)), Pose::Tree);
}

#[test]
fn index_only_is_pointing() {
    assert_eq!(classify_pose(&hand(false, true, true, true)), Pose::Pointing);
}

#[test]
fn open_or_nearly_open_is_scatter() {
    assert_eq!(classify_pose(&hand(false, false, false, false)), Pose::Scatter);
    assert_eq!(classify_pose(&hand(false, false, false, true)), Pose::Scatter);
    assert_eq!(classify_pose(&hand(true, false, false, false)), Pose::Scatter);
}

#[test]
fn two_or_three_folded_without_pointing_is_idle() {
    assert_eq!(classify_pose(&hand(false, false, true, true)), Pose::Idle);
    assert_eq!(classify_pose(&hand(true, true, false, false)), Pose::Idle);
    assert_eq!(classify_pose(&hand(true, true, true, false)), Pose::Idle);
}

fn primed(committed: Pose, window: &[Pose]) -> PoseSmoother {
    let mut s = PoseSmoother::default().with_committed(committed);
    // fill the window without triggering a commit check result we care about
    for p in window {
        s.push(*p);
    }
    s
}

#[test]
fn smoothing_switches_only_past_seventy_percent() {
    // 2 TREE then SCATTER frames: the switch lands on the 8th SCATTER.
    let mut s = primed(Pose::Tree, &[Pose::Tree, Pose::Tree]);
    for i in 1..=8 {
        let out = s.push(Pose::Scatter);
        if i < 8 {
            assert_eq!(out, Pose::Tree, "switched early at scatter #{i}");
        } else {
            assert_eq!(out, Pose::Scatter);
        }
    }
    assert_eq!(s.majority(), (Pose::Scatter, 8));
}

#[test]
fn smoothing_holds_on_six_to_four() {
    let mut window = vec![Pose::Tree; 4];
    window.extend(std::iter::repeat(Pose::Scatter).take(6));
    let s = primed(Pose::Tree, &window);
    assert_eq!(s.majority(), (Pose::Scatter, 6));
    assert_eq!(s.committed(), Pose::Tree);
}

#[test]
fn smoothing_window_slides() {
    let mut s = PoseSmoother::default().with_committed(Pose::Tree);
    for _ in 0..10 {
        s.push(Pose::Tree);
    }
    // seven scatters displace seven trees: 7/10 is not enough
    for _ in 0..7 {
        assert_eq!(s.push(Pose::Scatter), Pose::Tree);
    }
    assert_eq!(s.push(Pose::Scatter), Pose::Scatter);
}

fn ms(t0: Instant, v: u64) -> Instant {
    t0 + Duration::from_millis(v)
}

#[test]
fn swipe_fires_once_then_cools_down() {
    let mut d = SwipeDetector::new(SwipeParams::default());
    let t0 = Instant::now();
    let mut fired = 0;
    // 0.1 -> 0.3 over 400 ms in 5 samples
    for (i, x) in [0.1, 0.15, 0.2, 0.25, 0.3].into_iter().enumerate() {
        if d.update(x, ms(t0, i as u64 * 100)) {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);
    assert_eq!(d.sample_count(), 0);

    // same motion again inside the 1.5 s refractory period
    for (i, x) in [0.1, 0.15, 0.2, 0.25, 0.3].into_iter().enumerate() {
        assert!(!d.update(x, ms(t0, 500 + i as u64 * 100)));
    }

    // and once more after it expires
    let mut fired_again = false;
    for (i, x) in [0.3, 0.25, 0.2, 0.15, 0.1].into_iter().enumerate() {
        fired_again |= d.update(x, ms(t0, 2000 + i as u64 * 100));
    }
    assert!(fired_again);
}

#[test]
fn swipe_needs_five_samples_in_window() {
    let mut d = SwipeDetector::default();
    let t0 = Instant::now();
    for (i, x) in [0.1, 0.2, 0.3, 0.4].into_iter().enumerate() {
        assert!(!d.update(x, ms(t0, i as u64 * 50)));
    }
    // slow drift: samples age out of the 800 ms window
    let mut d = SwipeDetector::default();
    for i in 0..20u64 {
        assert!(!d.update(0.1 + i as f32 * 0.01, ms(t0, i * 300)));
    }
}

#[test]
fn small_motion_does_not_swipe() {
    let mut d = SwipeDetector::default();
    let t0 = Instant::now();
    for i in 0..10u64 {
        assert!(!d.update(0.5 + i as f32 * 0.01, ms(t0, i * 50)));
    }
}

#[test]
fn classifier_reports_poses_only_in_pose_mode() {
    let mut c = GestureClassifier::default();
    let t0 = Instant::now();
    let fist = hand(true, true, true, true);
    let out = c.process(Some(&fist), DetectionMode::Swipe, t0);
    assert_eq!(out.pose, None);

    let mut last = None;
    for i in 0..10 {
        last = c.process(Some(&fist), DetectionMode::Pose, ms(t0, i * 33)).pose;
    }
    assert_eq!(last, Some(Pose::Tree));
}

#[test]
fn missing_hand_degrades_to_idle() {
    let mut c = GestureClassifier::default();
    let t0 = Instant::now();
    let open = hand(false, false, false, false);
    for i in 0..10 {
        c.process(Some(&open), DetectionMode::Pose, ms(t0, i * 33));
    }
    assert_eq!(c.committed_pose(), Pose::Scatter);
    let mut last = None;
    for i in 10..20 {
        last = c.process(None, DetectionMode::Pose, ms(t0, i * 33)).pose;
    }
    assert_eq!(last, Some(Pose::Idle));
    // swipe mode without a hand reports nothing at all
    let out = c.process(None, DetectionMode::Swipe, ms(t0, 700));
    assert_eq!(out.pose, None);
    assert!(!out.swipe);
}

#[test]
fn open_card_swipes_only_while_pointing() {
    let t0 = Instant::now();
    let xs = [0.2, 0.25, 0.3, 0.35, 0.4];

    let mut c = GestureClassifier::default();
    let mut swiped = false;
    for (i, x) in xs.into_iter().enumerate() {
        let open = hand_at(x, [false; 4]);
        swiped |= c.process(Some(&open), DetectionMode::Pose, ms(t0, i as u64 * 80)).swipe;
    }
    assert!(!swiped, "open hand must not swipe while the card is open");

    let mut c = GestureClassifier::default();
    let mut swiped = false;
    for (i, x) in xs.into_iter().enumerate() {
        let pointing = hand_at(x, [false, true, true, true]);
        swiped |= c.process(Some(&pointing), DetectionMode::Pose, ms(t0, i as u64 * 80)).swipe;
    }
    assert!(swiped);

    let mut c = GestureClassifier::default();
    let mut swiped = false;
    for (i, x) in xs.into_iter().enumerate() {
        let open = hand_at(x, [false; 4]);
        swiped |= c.process(Some(&open), DetectionMode::Swipe, ms(t0, i as u64 * 80)).swipe;
    }
    assert!(swiped, "closed card accepts any hand");
}
