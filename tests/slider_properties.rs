//! Property tests for the slider's geometry and snapping.
//!
//! Uses proptest to verify:
//! 1. Normalization: angles land in [0, 360) and are periodic in 360
//! 2. Round trip: polar -> cartesian -> polar reconstructs the point
//! 3. Value law: value == index * step + min and stays in [min, max - step]
//! 4. Idempotence: recomputing at the same pointer emits at most once

use dial::geometry::{self, ArcPath, Point};
use dial::gui::slider::{
    AngleState, Bounds, InputAdapter, InputSource, LayoutMetrics, Slider, SliderConfig,
    SliderEvent, SliderView,
};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

struct NullView;

impl SliderView for NullView {
    fn apply_layout(&mut self, _layout: &LayoutMetrics) {}
    fn rotate_indicator(&mut self, _degrees: f64) {}
    fn redraw_arc(&mut self, _arc: ArcPath) {}
}

/// Distance between two angles going the short way round.
fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_config() -> impl Strategy<Value = SliderConfig> {
    (-500i32..500, 1u32..200, 1u32..50).prop_map(|(min, steps, step)| {
        let min = min as f64;
        let step = step as f64;
        SliderConfig::new(min, min + steps as f64 * step, step).unwrap()
    })
}

fn arb_point() -> impl Strategy<Value = Point> {
    (-1000.0..1000.0_f64, -1000.0..1000.0_f64).prop_map(|(x, y)| Point::new(x, y))
}

// ── 1. Normalization ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalized_angle_in_range(raw in -1e6..1e6_f64) {
        let n = geometry::clockwise_from_north(raw);
        prop_assert!((0.0..360.0).contains(&n), "{} -> {}", raw, n);
    }

    #[test]
    fn normalization_is_periodic(raw in -720.0..720.0_f64, k in -20i32..20) {
        let a = geometry::clockwise_from_north(raw);
        let b = geometry::clockwise_from_north(raw + 360.0 * k as f64);
        prop_assert!(circular_distance(a, b) < 1e-6, "{} vs {}", a, b);
    }
}

// ── 2. Round trip ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn polar_round_trip(center in arb_point(), radius in 1.0..500.0_f64, angle in -3.0..3.0_f64) {
        let p = geometry::polar_to_cartesian(center, radius, angle);
        let polar = geometry::cartesian_to_polar(center, p);
        let back = geometry::polar_to_cartesian(center, polar.radius, polar.angle);

        prop_assert!((polar.radius - radius).abs() < 1e-9 * radius.max(1.0));
        prop_assert!(back.distance_to(p) < 1e-9 * radius.max(1.0));
    }

    #[test]
    fn pointer_angle_inverts_point_at(center in arb_point(), radius in 1.0..500.0_f64, deg in 0.0..360.0_f64) {
        let p = geometry::point_at(center, radius, deg);
        let back = geometry::pointer_angle(center, p).unwrap();
        prop_assert!(circular_distance(back, deg) < 1e-6);
    }
}

// ── 3. Value law ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn snapped_value_follows_angle(config in arb_config(), raw in 0.0..360.0_f64) {
        let state = AngleState::nearest(raw, &config);
        let value = config.value_at(state.index);
        let expected = (state.degrees / config.step_angle()).round() * config.step() + config.min();

        prop_assert!((0.0..360.0).contains(&state.degrees));
        prop_assert!((value - expected).abs() < 1e-6);
        prop_assert!(value >= config.min());
        prop_assert!(value <= config.max() - config.step() + 1e-6);
        prop_assert!(circular_distance(state.degrees, raw) <= config.step_angle() / 2.0 + 1e-9);
    }
}

// ── 4. Idempotence ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn repeated_recompute_emits_once(config in arb_config(), deg in 0.0..360.0_f64) {
        let min = config.min();
        let container = Bounds::new(0.0, 0.0, 400.0, 400.0);
        let mut slider = Slider::new(config, InputAdapter::default(), container, NullView);
        let emitted = Rc::new(RefCell::new(0usize));
        let sink = emitted.clone();
        slider.subscribe(SliderEvent::ValueChanged, move |_| *sink.borrow_mut() += 1);

        let point = geometry::point_at(Point::new(200.0, 200.0), 150.0, deg);
        slider.gesture_start(point, InputSource::Pointer);
        slider.gesture_move(point, InputSource::Pointer);
        let first = slider.on_frame().unwrap();
        slider.gesture_move(point, InputSource::Pointer);
        let second = slider.on_frame().unwrap();

        prop_assert_eq!(second, None);
        prop_assert_eq!(*emitted.borrow(), usize::from(first.is_some()));
        prop_assert_eq!(first.is_none(), slider.value() == min);
    }
}
