// Host-side tests for per-eye wink cooldowns.

use fx_core::constants::WINK_COOLDOWN_MS;
use fx_core::poses;
use fx_core::{Eye, WinkDetector};

fn count_left_winks(times: &[f64]) -> usize {
    let mut detector = WinkDetector::new();
    let face = poses::face(0.1, 0.3);
    times
        .iter()
        .filter(|t| detector.observe(&face, **t) == Some(Eye::Left))
        .count()
}

#[test]
fn first_wink_fires_immediately() {
    assert_eq!(count_left_winks(&[0.0]), 1);
    assert_eq!(count_left_winks(&[12.5]), 1);
}

#[test]
fn winks_inside_cooldown_spark_once() {
    assert_eq!(count_left_winks(&[0.0, 500.0]), 1);
    assert_eq!(count_left_winks(&[1000.0, 1000.0 + WINK_COOLDOWN_MS]), 1);
}

#[test]
fn winks_past_cooldown_spark_twice() {
    assert_eq!(count_left_winks(&[0.0, 900.0]), 2);
}

#[test]
fn held_wink_repeats_at_cooldown_cadence() {
    // A wink held for two seconds at 30 fps.
    let times: Vec<f64> = (0..60).map(|i| i as f64 * 33.0).collect();
    // Fires at 0, then the first frame past 800 (825), then past 1625 (1650).
    assert_eq!(count_left_winks(&times), 3);
}

#[test]
fn eyes_have_independent_cooldowns() {
    let mut detector = WinkDetector::new();
    assert_eq!(detector.observe(&poses::face(0.1, 0.3), 0.0), Some(Eye::Left));
    assert_eq!(
        detector.observe(&poses::face(0.3, 0.1), 100.0),
        Some(Eye::Right)
    );
    assert_eq!(detector.observe(&poses::face(0.1, 0.3), 200.0), None);
    assert_eq!(detector.last_fired(Eye::Left), Some(0.0));
    assert_eq!(detector.last_fired(Eye::Right), Some(100.0));
}

#[test]
fn blinks_and_open_eyes_never_fire() {
    let mut detector = WinkDetector::new();
    for (i, (l, r)) in [(0.1, 0.1), (0.3, 0.3), (0.05, 0.12)].iter().enumerate() {
        assert_eq!(detector.observe(&poses::face(*l, *r), i as f64 * 1000.0), None);
    }
    assert_eq!(detector.last_fired(Eye::Left), None);
    assert_eq!(detector.last_fired(Eye::Right), None);
}
