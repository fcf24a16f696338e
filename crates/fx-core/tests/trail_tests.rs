// Host-side tests for trail windows, smoothing and persistent ink queuing.

use fx_core::constants::MAX_LINE_POINTS;
use fx_core::{FxConfig, HandLabel, PathCommand, Point, StrokeState, TrailQueue};
use glam::Vec2;

fn pt(x: f32, y: f32, t: f64) -> Point {
    Point::new(Vec2::new(x, y), t)
}

fn persistent() -> FxConfig {
    FxConfig {
        persistent_line: true,
        ..FxConfig::default()
    }
}

#[test]
fn trail_keeps_most_recent_points_in_order() {
    let mut trail = TrailQueue::new();
    for i in 0..MAX_LINE_POINTS + 5 {
        trail.push(pt(i as f32, 0.0, i as f64));
    }
    assert_eq!(trail.len(), MAX_LINE_POINTS);
    let stamps: Vec<f64> = trail.iter().map(|p| p.timestamp).collect();
    let expected: Vec<f64> = (5..MAX_LINE_POINTS + 5).map(|i| i as f64).collect();
    assert_eq!(stamps, expected);
}

#[test]
fn short_trails_have_no_path() {
    let mut trail = TrailQueue::new();
    assert!(trail.smoothed_path().is_empty());
    trail.push(pt(1.0, 1.0, 0.0));
    assert!(trail.smoothed_path().is_empty());
}

#[test]
fn two_points_draw_a_line() {
    let mut trail = TrailQueue::new();
    trail.push(pt(0.0, 0.0, 0.0));
    trail.push(pt(10.0, 0.0, 1.0));
    assert_eq!(
        trail.smoothed_path(),
        vec![
            PathCommand::MoveTo(Vec2::ZERO),
            PathCommand::LineTo(Vec2::new(10.0, 0.0)),
        ]
    );
}

#[test]
fn smoothing_curves_through_midpoints() {
    let mut trail = TrailQueue::new();
    trail.push(pt(0.0, 0.0, 0.0));
    trail.push(pt(10.0, 0.0, 1.0));
    trail.push(pt(10.0, 10.0, 2.0));
    trail.push(pt(20.0, 10.0, 3.0));
    assert_eq!(
        trail.smoothed_path(),
        vec![
            PathCommand::MoveTo(Vec2::ZERO),
            PathCommand::QuadTo {
                ctrl: Vec2::new(10.0, 0.0),
                to: Vec2::new(10.0, 5.0)
            },
            PathCommand::QuadTo {
                ctrl: Vec2::new(10.0, 10.0),
                to: Vec2::new(15.0, 10.0)
            },
            PathCommand::LineTo(Vec2::new(20.0, 10.0)),
        ]
    );
}

#[test]
fn fading_mode_collects_trail_and_clears_on_end() {
    let config = FxConfig::default();
    let mut strokes = StrokeState::new();
    strokes.add_point(HandLabel::Left, pt(1.0, 1.0, 0.0), &config);
    strokes.add_point(HandLabel::Left, pt(2.0, 2.0, 1.0), &config);
    assert_eq!(strokes.trail(HandLabel::Left).len(), 2);
    assert!(strokes.trail(HandLabel::Right).is_empty());
    assert!(strokes.pending_ink().is_empty());

    strokes.end_stroke(HandLabel::Left, false);
    assert!(strokes.trail(HandLabel::Left).is_empty());
}

#[test]
fn persistent_mode_queues_segments_from_anchor() {
    let config = persistent();
    let mut strokes = StrokeState::new();
    strokes.add_point(HandLabel::Right, pt(0.0, 0.0, 0.0), &config);
    assert_eq!(strokes.anchor(HandLabel::Right), Some(pt(0.0, 0.0, 0.0)));
    assert!(strokes.pending_ink().is_empty());

    strokes.add_point(HandLabel::Right, pt(5.0, 0.0, 1.0), &config);
    strokes.add_point(HandLabel::Right, pt(5.0, 5.0, 2.0), &config);
    assert!(strokes.trail(HandLabel::Right).is_empty());

    let (clear, segments) = strokes.take_ink();
    assert!(!clear);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].from, pt(0.0, 0.0, 0.0));
    assert_eq!(segments[0].to, pt(5.0, 0.0, 1.0));
    assert_eq!(segments[1].from, pt(5.0, 0.0, 1.0));
    assert_eq!(segments[0].style, config.stroke_style());
    assert_eq!(
        segments[1].path(),
        [
            PathCommand::MoveTo(Vec2::new(5.0, 0.0)),
            PathCommand::LineTo(Vec2::new(5.0, 5.0)),
        ]
    );

    // Drained.
    let (clear, segments) = strokes.take_ink();
    assert!(!clear);
    assert!(segments.is_empty());
}

#[test]
fn ending_a_persistent_stroke_drops_the_anchor() {
    let config = persistent();
    let mut strokes = StrokeState::new();
    strokes.add_point(HandLabel::Left, pt(0.0, 0.0, 0.0), &config);
    strokes.end_stroke(HandLabel::Left, true);
    assert_eq!(strokes.anchor(HandLabel::Left), None);
    // A new stroke starts without joining the old one.
    strokes.add_point(HandLabel::Left, pt(9.0, 9.0, 1.0), &config);
    assert!(strokes.pending_ink().is_empty());
}

#[test]
fn segments_keep_style_at_draw_time() {
    let mut config = persistent();
    let mut strokes = StrokeState::new();
    strokes.add_point(HandLabel::Left, pt(0.0, 0.0, 0.0), &config);
    strokes.add_point(HandLabel::Left, pt(1.0, 0.0, 1.0), &config);
    config.line_width = 9.0;
    strokes.add_point(HandLabel::Left, pt(2.0, 0.0, 2.0), &config);
    let (_, segments) = strokes.take_ink();
    assert_eq!(segments[0].style.width, 3.0);
    assert_eq!(segments[1].style.width, 9.0);
}

#[test]
fn clear_wipes_everything_and_requests_ink_clear() {
    let mut strokes = StrokeState::new();
    strokes.add_point(HandLabel::Left, pt(0.0, 0.0, 0.0), &FxConfig::default());
    strokes.add_point(HandLabel::Right, pt(0.0, 0.0, 0.0), &persistent());
    strokes.add_point(HandLabel::Right, pt(1.0, 0.0, 1.0), &persistent());
    strokes.clear();
    assert!(strokes.trail(HandLabel::Left).is_empty());
    assert_eq!(strokes.anchor(HandLabel::Right), None);
    let (clear, segments) = strokes.take_ink();
    assert!(clear);
    assert!(segments.is_empty());
}

#[test]
fn toggling_persistence_resets_the_other_layer() {
    let mut strokes = StrokeState::new();
    strokes.add_point(HandLabel::Left, pt(0.0, 0.0, 0.0), &FxConfig::default());
    strokes.set_persistent(true);
    assert!(strokes.trail(HandLabel::Left).is_empty());
    assert!(!strokes.take_ink().0);

    strokes.add_point(HandLabel::Left, pt(0.0, 0.0, 0.0), &persistent());
    strokes.set_persistent(false);
    assert_eq!(strokes.anchor(HandLabel::Left), None);
    assert!(strokes.take_ink().0);
}
