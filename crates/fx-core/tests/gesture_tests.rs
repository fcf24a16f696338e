// Host-side tests for the per-frame gesture predicates.

use fx_core::gestures::*;
use fx_core::landmarks::slot;
use fx_core::poses;
use fx_core::{Eye, Finger, HandLandmarks, Landmark};
use glam::Vec2;

fn classify(hand: &HandLandmarks) -> (bool, bool, bool) {
    (
        is_open_hand(hand),
        is_pointing(hand),
        cluster_centroid(hand).is_some(),
    )
}

#[test]
fn canonical_poses_classify_as_expected() {
    assert_eq!(classify(&poses::open_palm()), (true, false, false));
    assert_eq!(classify(&poses::pointing()), (false, true, false));
    assert_eq!(classify(&poses::cluster(Vec2::ZERO)), (false, false, true));
    assert_eq!(classify(&poses::fist()), (false, false, false));
}

#[test]
fn gestures_are_mutually_exclusive_on_fixtures() {
    let rubbing = poses::cluster(Vec2::new(0.015, 0.0));
    let fixtures = [
        ("open", poses::open_palm()),
        ("pointing", poses::pointing()),
        ("cluster", poses::cluster(Vec2::ZERO)),
        ("rubbing", rubbing.clone()),
        ("fist", poses::fist()),
    ];
    let previous = poses::cluster(Vec2::ZERO);
    for (name, hand) in &fixtures {
        let hits = [
            is_open_hand(hand),
            is_pointing(hand),
            is_cluster_rub(hand, Some(&previous)),
        ];
        let count = hits.iter().filter(|h| **h).count();
        assert!(count <= 1, "{name} matched {count} gestures: {hits:?}");
    }
    assert!(is_cluster_rub(&rubbing, Some(&previous)));
}

#[test]
fn classification_is_scale_invariant() {
    for factor in [0.4, 0.7, 1.0, 1.6, 2.5] {
        let open = poses::scaled(&poses::open_palm(), factor);
        let point = poses::scaled(&poses::pointing(), factor);
        let fist = poses::scaled(&poses::fist(), factor);
        assert!(is_open_hand(&open), "open palm lost at scale {factor}");
        assert!(is_pointing(&point), "pointing lost at scale {factor}");
        assert!(!is_open_hand(&point), "pointing read as open at scale {factor}");
        assert!(!is_pointing(&fist), "fist read as pointing at scale {factor}");
        assert!(!is_open_hand(&fist), "fist read as open at scale {factor}");
    }
}

#[test]
fn classification_is_translation_invariant() {
    let by = Vec2::new(0.2, -0.15);
    assert!(is_open_hand(&poses::translated(&poses::open_palm(), by)));
    assert!(is_pointing(&poses::translated(&poses::pointing(), by)));
    assert!(cluster_centroid(&poses::translated(&poses::cluster(Vec2::ZERO), by)).is_some());
}

#[test]
fn open_hand_that_is_pinching_is_not_open() {
    let open = poses::open_palm();
    let mut pts = open.points().to_vec();
    let index_tip = pts[slot::INDEX_TIP];
    pts[slot::THUMB_TIP] = Landmark::new(index_tip.x + 0.02, index_tip.y, 0.0);
    let pinching = HandLandmarks::from_slice(&pts).unwrap();
    assert!(!is_open_hand(&pinching));
}

#[test]
fn collapsed_hand_matches_nothing() {
    let hand = HandLandmarks::new([Landmark::new(0.5, 0.5, 0.0); 21]);
    assert!(!is_open_hand(&hand));
    assert!(!is_pointing(&hand));
    assert!(!is_thumb_extended(&hand));
}

#[test]
fn finger_extension_per_finger() {
    let open = poses::open_palm();
    let point = poses::pointing();
    for finger in Finger::ALL {
        assert!(is_finger_extended(&open, finger), "{finger:?} curled on open palm");
    }
    assert!(is_finger_extended(&point, Finger::Index));
    for finger in [Finger::Middle, Finger::Ring, Finger::Pinky] {
        assert!(!is_finger_extended(&point, finger), "{finger:?} extended when pointing");
    }
    assert!(is_thumb_extended(&open));
    assert!(!is_thumb_extended(&point));
}

#[test]
fn fist_is_not_a_cluster() {
    assert!(cluster_centroid(&poses::fist()).is_none());
}

#[test]
fn cluster_rub_needs_previous_frame() {
    let hand = poses::cluster(Vec2::new(0.015, 0.0));
    assert!(!is_cluster_rub(&hand, None));
}

#[test]
fn cluster_rub_requires_wrist_relative_motion() {
    let previous = poses::cluster(Vec2::ZERO);
    // Held still.
    assert!(!is_cluster_rub(&poses::cluster(Vec2::ZERO), Some(&previous)));
    // Below the motion threshold.
    assert!(!is_cluster_rub(
        &poses::cluster(Vec2::new(0.005, 0.0)),
        Some(&previous)
    ));
    // Fingers moved against the wrist.
    assert!(is_cluster_rub(
        &poses::cluster(Vec2::new(0.0, 0.015)),
        Some(&previous)
    ));
    // Whole arm carried across the frame.
    let carried = poses::translated(&previous, Vec2::new(0.08, 0.02));
    assert!(!is_cluster_rub(&carried, Some(&previous)));
}

#[test]
fn pinch_distance_matches_fixture_gap() {
    for gap in [0.02, 0.03, 0.08, 0.15, 0.2] {
        let d = pinch_distance(&poses::pinch(gap), Finger::Index);
        assert!((d - gap).abs() < 1e-5, "gap {gap} measured {d}");
    }
}

#[test]
fn eye_aspect_ratio_matches_fixture() {
    let face = poses::face(0.1, 0.3);
    assert!((eye_aspect_ratio(&face, Eye::Left) - 0.1).abs() < 1e-4);
    assert!((eye_aspect_ratio(&face, Eye::Right) - 0.3).abs() < 1e-4);
}

#[test]
fn wink_needs_one_eye_closed_and_the_other_open() {
    assert_eq!(detect_wink(&poses::face(0.1, 0.3)), Some(Eye::Left));
    assert_eq!(detect_wink(&poses::face(0.3, 0.1)), Some(Eye::Right));
    // Blink.
    assert_eq!(detect_wink(&poses::face(0.1, 0.1)), None);
    // Both open.
    assert_eq!(detect_wink(&poses::face(0.3, 0.3)), None);
    // Closing eye not closed enough.
    assert_eq!(detect_wink(&poses::face(0.2, 0.3)), None);
    // Other eye not open enough.
    assert_eq!(detect_wink(&poses::face(0.1, 0.22)), None);
}
