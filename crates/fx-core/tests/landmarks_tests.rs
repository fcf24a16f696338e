// Host-side tests for landmark validation and the flat buffer layout.

use fx_core::geometry::{centroid, extension_ratio, hand_scale};
use fx_core::landmarks::slot;
use fx_core::poses::{self, flatten};
use fx_core::{
    hands_from_flat, Eye, FaceLandmarks, HandLabel, HandLandmarks, Landmark, LandmarkError,
    Viewport,
};
use glam::Vec2;

#[test]
fn hand_requires_exactly_21_points() {
    let short = vec![Landmark::default(); 20];
    assert_eq!(
        HandLandmarks::from_slice(&short),
        Err(LandmarkError::HandLength(20))
    );
    let long = vec![Landmark::default(); 22];
    assert_eq!(
        HandLandmarks::from_slice(&long),
        Err(LandmarkError::HandLength(22))
    );
    assert!(HandLandmarks::from_slice(&[Landmark::default(); 21]).is_ok());
}

#[test]
fn face_requires_full_mesh() {
    assert_eq!(
        FaceLandmarks::from_slice(&[Landmark::default(); 100]),
        Err(LandmarkError::FaceLength(100))
    );
    assert_eq!(
        FaceLandmarks::from_flat(&[0.0; 30]),
        Err(LandmarkError::FaceLength(10))
    );
    let face = poses::face(0.3, 0.3);
    assert_eq!(FaceLandmarks::from_flat(&flatten(face.points())), Ok(face));
}

#[test]
fn refined_mesh_with_iris_points_is_accepted() {
    let face = poses::face(0.1, 0.3);
    let mut coords = flatten(face.points());
    coords.extend([0.5f32; 30]);
    let refined = FaceLandmarks::from_flat(&coords).unwrap();
    assert_eq!(refined.points().len(), 478);
    assert_eq!(refined.eye(Eye::Left), face.eye(Eye::Left));
    assert_eq!(refined.eye(Eye::Right), face.eye(Eye::Right));
    assert_eq!(
        FaceLandmarks::from_slice(&[Landmark::default(); 467]),
        Err(LandmarkError::FaceLength(467))
    );
}

#[test]
fn ragged_flat_buffer_is_rejected() {
    assert_eq!(
        HandLandmarks::from_flat(&[0.0; 62]),
        Err(LandmarkError::Ragged(62))
    );
    assert_eq!(
        hands_from_flat(&["Left"], &[0.0; 64]),
        Err(LandmarkError::Ragged(64))
    );
}

#[test]
fn accessors_read_their_slots() {
    let hand = poses::pointing();
    let pts = hand.points();
    assert_eq!(hand.wrist(), pts[slot::WRIST].xy());
    assert_eq!(hand.index_mcp(), pts[slot::INDEX_MCP].xy());
    assert_eq!(hand.index_tip(), pts[slot::INDEX_TIP].xy());
    assert_eq!(hand.pinky_mcp(), pts[slot::PINKY_MCP].xy());
    let tips = hand.fingertips();
    assert_eq!(tips[0], pts[slot::THUMB_TIP].xy());
    assert_eq!(tips[4], pts[slot::PINKY_TIP].xy());
}

#[test]
fn batch_splits_by_label() {
    let mut coords = flatten(poses::open_palm().points());
    coords.extend(flatten(poses::pointing().points()));
    let batch = hands_from_flat(&["Left", "Right"], &coords).unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].label, HandLabel::Left);
    assert_eq!(batch[0].landmarks, poses::open_palm());
    assert_eq!(batch[1].label, HandLabel::Right);
    assert_eq!(batch[1].landmarks, poses::pointing());
}

#[test]
fn empty_batch_is_not_an_error() {
    let labels: [&str; 0] = [];
    let batch = hands_from_flat(&labels, &[]).unwrap();
    assert!(batch.is_empty());
}

#[test]
fn batch_label_count_must_match() {
    let coords = flatten(poses::open_palm().points());
    assert_eq!(
        hands_from_flat(&["Left", "Right"], &coords),
        Err(LandmarkError::BatchMismatch { labels: 2, hands: 1 })
    );
    let labels: [&str; 0] = [];
    assert_eq!(
        hands_from_flat(&labels, &coords),
        Err(LandmarkError::BatchMismatch { labels: 0, hands: 1 })
    );
}

#[test]
fn batch_with_short_hand_is_rejected() {
    let coords = vec![0.0; 20 * 3];
    assert_eq!(
        hands_from_flat(&["Left"], &coords),
        Err(LandmarkError::HandLength(20))
    );
}

#[test]
fn unknown_label_is_rejected() {
    let coords = flatten(poses::open_palm().points());
    assert_eq!(
        hands_from_flat(&["Middle"], &coords),
        Err(LandmarkError::UnknownLabel("Middle".into()))
    );
}

#[test]
fn hand_label_parses_both_cases() {
    assert_eq!("Left".parse::<HandLabel>(), Ok(HandLabel::Left));
    assert_eq!("right".parse::<HandLabel>(), Ok(HandLabel::Right));
    assert!("LEFT".parse::<HandLabel>().is_err());
    assert_eq!(HandLabel::Right.to_string(), "Right");
}

#[test]
fn eyes_read_mesh_slots() {
    let face = poses::face(0.1, 0.3);
    let left = face.eye(Eye::Left);
    let right = face.eye(Eye::Right);
    assert_eq!(left.outer, Vec2::new(0.40, 0.40));
    assert_eq!(right.outer, Vec2::new(0.60, 0.40));
    assert_eq!(Eye::Left.other(), Eye::Right);
}

#[test]
fn viewport_mirrors_horizontally() {
    let vp = Viewport::new(640.0, 480.0);
    assert_eq!(vp.to_canvas(Vec2::new(0.25, 0.5)), Vec2::new(480.0, 240.0));
    assert_eq!(vp.to_canvas(Vec2::ZERO), Vec2::new(640.0, 0.0));
    assert_eq!(vp.to_canvas(Vec2::ONE), Vec2::new(0.0, 480.0));
}

#[test]
fn hand_scale_is_wrist_to_index_mcp() {
    for hand in [poses::open_palm(), poses::pointing(), poses::fist()] {
        assert!((hand_scale(&hand) - 0.1).abs() < 1e-5);
    }
    let bigger = poses::scaled(&poses::open_palm(), 2.0);
    assert!((hand_scale(&bigger) - 0.2).abs() < 1e-5);
}

#[test]
fn extension_ratio_guards_zero_scale() {
    assert_eq!(extension_ratio(1.0, 0.0), 0.0);
    assert!((extension_ratio(0.3, 0.1) - 3.0).abs() < 1e-5);
}

#[test]
fn centroid_of_points() {
    assert_eq!(centroid(&[]), Vec2::ZERO);
    let c = centroid(&[Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(1.0, 3.0)]);
    assert!((c - Vec2::new(1.0, 1.0)).length() < 1e-6);
}
