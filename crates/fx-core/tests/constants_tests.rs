// Host-side tests for tuning constants and their relationships.

use fx_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_ordered() {
    assert!(SNAP_THRESHOLD_DISTANCE < SNAP_RELEASE_THRESHOLD);
    assert!(WINK_CLOSED_THRESHOLD < WINK_OPEN_THRESHOLD);
    assert!(FINGER_EXTENSION_RATIO > 1.0);
    assert!(OPEN_HAND_PINCH_RATIO < OPEN_HAND_EXTENSION_RATIO);
    assert!(RUB_MOTION_THRESHOLD < CLUSTER_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_are_positive() {
    assert!(WINK_COOLDOWN_MS > 0.0);
    assert!(RUB_ACTIVATION_DELAY_MS > 0.0);
    assert!(RUB_ACTIVATION_DELAY_MS < WINK_COOLDOWN_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn unit_life_lasts_fifty_decays() {
    let ticks = (1.0 / LIFE_DECAY).round() as usize;
    assert_eq!(ticks, 50);
    assert!(LIFE_EPSILON < LIFE_DECAY / 2.0);
}

#[test]
fn mesh_sizes() {
    assert_eq!(HAND_LANDMARK_COUNT, 21);
    assert_eq!(FACE_LANDMARK_COUNT, 468);
    assert_eq!(STAR_SPIKES, 5);
}
