use super::gesture::{FrameRequest, Gesture, HitTarget, InputAdapter, InputSource, PointerSample};
use super::observer::{Observers, SliderEvent, SubscriptionId};
use super::scene::SliderView;
use super::{
    CLICK_RING_SLACK, KNOB_RADIUS, MAX_DECIMALS, MAX_STEPS, REFERENCE_SIDE, STEP_COUNT_TOLERANCE,
    TRACK_WIDTH,
};
use crate::config::{SliderColor, SliderRecord};
use crate::geometry::{self, Point};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderError {
    #[error("Slider range must be finite (min {min}, max {max}, step {step})")]
    NonFinite { min: f64, max: f64, step: f64 },
    #[error("Step must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("Max ({max}) must be greater than min ({min})")]
    EmptyRange { min: f64, max: f64 },
    #[error("Range does not divide into whole steps ({0} steps)")]
    FractionalStepCount(f64),
    #[error("Too many steps ({0})")]
    TooManySteps(f64),
    #[error("Invalid slider size: {0:?}")]
    InvalidSize(SliderSize),
    #[error("Pointer position is not finite: {0:?}")]
    InvalidPointer(Point),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderSize {
    /// Fixed outer radius in pixels.
    Radius(f64),
    /// Diameter as a fraction of the container's shorter side.
    Percent(f64),
}

impl Default for SliderSize {
    fn default() -> Self {
        Self::Percent(1.0)
    }
}

impl SliderSize {
    fn validate(self) -> Result<Self, SliderError> {
        let valid = match self {
            Self::Radius(r) => r.is_finite() && r > 0.0,
            Self::Percent(p) => p.is_finite() && p > 0.0 && p <= 1.0,
        };
        valid.then_some(self).ok_or(SliderError::InvalidSize(self))
    }

    pub fn side(&self, container: &Bounds) -> f64 {
        match self {
            Self::Radius(r) => r * 2.0,
            Self::Percent(p) => container.min_side() * p,
        }
    }

    /// Fixed-radius sliders are drawn at their nominal pixel size.
    fn scale(&self, container: &Bounds) -> f64 {
        match self {
            Self::Radius(_) => 1.0,
            Self::Percent(_) => container.min_side() / REFERENCE_SIDE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    min: f64,
    max: f64,
    step: f64,
    steps: u32,
    size: SliderSize,
    color: SliderColor,
    label: String,
}

impl SliderConfig {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, SliderError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(SliderError::NonFinite { min, max, step });
        }
        if step <= 0.0 {
            return Err(SliderError::NonPositiveStep(step));
        }
        if max <= min {
            return Err(SliderError::EmptyRange { min, max });
        }

        let count = (max - min) / step;
        let whole = count.round();
        if (count - whole).abs() > STEP_COUNT_TOLERANCE * whole.max(1.0) || whole < 1.0 {
            return Err(SliderError::FractionalStepCount(count));
        }
        if whole > MAX_STEPS {
            return Err(SliderError::TooManySteps(whole));
        }

        Ok(Self {
            min,
            max,
            step,
            steps: whole as u32,
            size: SliderSize::default(),
            color: SliderColor::default(),
            label: String::new(),
        })
    }

    pub fn with_size(mut self, size: SliderSize) -> Result<Self, SliderError> {
        self.size = size.validate()?;
        Ok(self)
    }

    pub fn with_color(mut self, color: SliderColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// `percent` wins over `radius` when a record sets both.
    pub fn from_record(record: &SliderRecord) -> Result<Self, SliderError> {
        let size = match (record.percent, record.radius) {
            (Some(p), _) => SliderSize::Percent(p),
            (None, Some(r)) => SliderSize::Radius(r),
            (None, None) => SliderSize::default(),
        };

        Ok(Self::new(record.min, record.max, record.step)?
            .with_size(size)?
            .with_color(record.color)
            .with_label(record.label.clone()))
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn step_angle(&self) -> f64 {
        360.0 / self.steps as f64
    }

    pub fn size(&self) -> SliderSize {
        self.size
    }

    pub fn color(&self) -> SliderColor {
        self.color
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value_at(&self, index: u32) -> f64 {
        index as f64 * self.step + self.min
    }

    /// Fraction digits needed to print every reachable value exactly.
    pub fn decimals(&self) -> usize {
        decimal_places(self.step).max(decimal_places(self.min))
    }
}

fn decimal_places(x: f64) -> usize {
    (0..MAX_DECIMALS)
        .find(|&d| {
            let scaled = x * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() <= STEP_COUNT_TOLERANCE * scaled.abs().max(1.0)
        })
        .unwrap_or(MAX_DECIMALS)
}

/// Rectangle of the host container in pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// A container that is not attached to a visible tree reports no area.
    pub fn is_visible(&self) -> bool {
        self.origin.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub container: Bounds,
    pub side: f64,
    pub offset: Point,
    pub scale: f64,
}

impl LayoutMetrics {
    pub fn compute(container: Bounds, size: SliderSize) -> Option<Self> {
        if !container.is_visible() {
            return None;
        }
        let side = size.side(&container);
        Some(Self {
            container,
            side,
            offset: Point::new(
                (container.width - side) / 2.0,
                (container.height - side) / 2.0,
            ),
            scale: size.scale(&container),
        })
    }

    pub fn center(&self) -> Point {
        let half = self.side / 2.0;
        Point::new(
            self.container.origin.x + self.offset.x + half,
            self.container.origin.y + self.offset.y + half,
        )
    }

    /// Radius of the track; the knob has to fit inside the widget's square.
    pub fn ring_radius(&self) -> f64 {
        (self.side / 2.0 - self.knob_radius()).max(0.0)
    }

    pub fn track_width(&self) -> f64 {
        TRACK_WIDTH * self.scale
    }

    pub fn knob_radius(&self) -> f64 {
        KNOB_RADIUS * self.scale
    }

    /// Half-width of the band around the ring that accepts taps.
    pub fn click_band(&self) -> f64 {
        self.track_width() / 2.0 + CLICK_RING_SLACK * self.scale
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngleState {
    pub index: u32,
    pub degrees: f64,
}

impl AngleState {
    /// Snaps a clockwise-from-north angle to the nearest step. Half-step ties
    /// round away from zero, and a snap onto 360° wraps to 0°.
    pub fn nearest(degrees: f64, config: &SliderConfig) -> Self {
        let step_angle = config.step_angle();
        let index = (degrees / step_angle).round() as u32 % config.steps();
        Self {
            index,
            degrees: index as f64 * step_angle,
        }
    }
}

/// A radial slider: gesture handling, step snapping and redraw decisions.
///
/// The slider never touches the host toolkit. Moves only record the latest
/// sample; the host calls [`Slider::on_frame`] once per display frame after
/// [`Slider::gesture_move`] asks for one.
pub struct Slider<V: SliderView> {
    config: SliderConfig,
    input: InputAdapter,
    angle: AngleState,
    gesture: Gesture,
    sample: Option<PointerSample>,
    frame_pending: bool,
    layout: Option<LayoutMetrics>,
    view: V,
    observers: Observers,
}

impl<V: SliderView> Slider<V> {
    pub fn new(config: SliderConfig, input: InputAdapter, container: Bounds, view: V) -> Self {
        let mut slider = Self {
            config,
            input,
            angle: AngleState::default(),
            gesture: Gesture::Idle,
            sample: None,
            frame_pending: false,
            layout: None,
            view,
            observers: Observers::new(),
        };
        slider.resize(container);
        slider
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn value(&self) -> f64 {
        self.config.value_at(self.angle.index)
    }

    pub fn angle(&self) -> f64 {
        self.angle.degrees
    }

    pub fn layout(&self) -> Option<&LayoutMetrics> {
        self.layout.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn subscribe(
        &mut self,
        event: SliderEvent,
        callback: impl FnMut(f64) + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(event, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Recomputes layout for a new container size. Returns `false` when the
    /// container has no area, in which case nothing is drawn.
    pub fn resize(&mut self, container: Bounds) -> bool {
        self.layout = LayoutMetrics::compute(container, self.config.size);
        match self.layout {
            Some(layout) => {
                self.view.apply_layout(&layout);
                self.render(&layout);
                true
            }
            None => {
                log::debug!(
                    "Slider '{}' has no visible container ({:?})",
                    self.config.label,
                    container
                );
                false
            }
        }
    }

    pub fn hit_test(&self, point: Point) -> HitTarget {
        let Some(layout) = self.layout.filter(|_| point.is_finite()) else {
            return HitTarget::Outside;
        };
        let center = layout.center();
        let knob = geometry::point_at(center, layout.ring_radius(), self.angle.degrees);

        if point.distance_to(knob) <= layout.knob_radius() {
            return HitTarget::Knob;
        }

        if (point.distance_to(center) - layout.ring_radius()).abs() <= layout.click_band() {
            HitTarget::ClickRing
        } else {
            HitTarget::Outside
        }
    }

    pub fn gesture_start(&mut self, point: Point, source: InputSource) -> bool {
        if !self.input.accepts(source) {
            return false;
        }
        self.sample = Some(point.into());
        self.gesture = Gesture::Dragging { source };
        true
    }

    pub fn gesture_move(&mut self, point: Point, source: InputSource) -> FrameRequest {
        if !self.gesture.tracks(source) {
            return FrameRequest::Ignored;
        }
        self.sample = Some(point.into());
        if self.frame_pending {
            FrameRequest::Pending
        } else {
            self.frame_pending = true;
            FrameRequest::Schedule
        }
    }

    /// Ends the gesture whichever device reports the release. A release on
    /// the knob or the click ring from an accepted source counts as a tap
    /// and resolves immediately with the release point.
    pub fn gesture_end(
        &mut self,
        point: Point,
        target: HitTarget,
        source: InputSource,
    ) -> Result<Option<f64>, SliderError> {
        if !self.gesture.is_dragging() {
            return Ok(None);
        }
        self.gesture = Gesture::Idle;
        if !target.is_interactive() || !self.input.accepts(source) {
            return Ok(None);
        }
        self.sample = Some(point.into());
        self.recompute(point)
    }

    pub fn gesture_cancel(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Runs the coalesced recompute for this frame with the latest sample.
    pub fn on_frame(&mut self) -> Result<Option<f64>, SliderError> {
        self.frame_pending = false;
        match self.sample {
            Some(sample) => self.recompute(sample.position),
            None => Ok(None),
        }
    }

    /// Returns the new value when the snapped angle changed.
    fn recompute(&mut self, point: Point) -> Result<Option<f64>, SliderError> {
        let Some(layout) = self.layout else {
            log::debug!("Skipping recompute for '{}': no layout", self.config.label);
            return Ok(None);
        };
        let raw = geometry::pointer_angle(layout.center(), point)
            .ok_or(SliderError::InvalidPointer(point))?;

        let next = AngleState::nearest(raw, &self.config);
        if next.index == self.angle.index {
            return Ok(None);
        }

        self.angle = next;
        self.render(&layout);

        let value = self.value();
        self.observers.emit(SliderEvent::ValueChanged, value);
        Ok(Some(value))
    }

    fn render(&mut self, layout: &LayoutMetrics) {
        let degrees = self.angle.degrees;
        self.view.rotate_indicator(degrees);
        self.view.redraw_arc(geometry::describe_arc(
            layout.center(),
            layout.ring_radius(),
            0.0,
            degrees,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ArcPath;
    use crate::gui::slider::InputMode;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingView {
        layouts: usize,
        rotations: Vec<f64>,
        arcs: Vec<ArcPath>,
    }

    impl SliderView for RecordingView {
        fn apply_layout(&mut self, _layout: &LayoutMetrics) {
            self.layouts += 1;
        }

        fn rotate_indicator(&mut self, degrees: f64) {
            self.rotations.push(degrees);
        }

        fn redraw_arc(&mut self, arc: ArcPath) {
            self.arcs.push(arc);
        }
    }

    const CENTER: Point = Point { x: 100.0, y: 100.0 };

    fn container() -> Bounds {
        Bounds::new(0.0, 0.0, 200.0, 200.0)
    }

    fn slider(min: f64, max: f64, step: f64) -> Slider<RecordingView> {
        let config = SliderConfig::new(min, max, step).unwrap();
        Slider::new(config, InputAdapter::default(), container(), RecordingView::default())
    }

    fn at(degrees: f64) -> Point {
        geometry::point_at(CENTER, 80.0, degrees)
    }

    fn record_values(slider: &mut Slider<RecordingView>) -> Rc<RefCell<Vec<f64>>> {
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = values.clone();
        slider.subscribe(SliderEvent::ValueChanged, move |v| sink.borrow_mut().push(v));
        values
    }

    fn drag_to(slider: &mut Slider<RecordingView>, point: Point) -> Option<f64> {
        slider.gesture_start(point, InputSource::Pointer);
        slider.gesture_move(point, InputSource::Pointer);
        slider.on_frame().unwrap()
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            SliderConfig::new(0.0, 100.0, 0.0),
            Err(SliderError::NonPositiveStep(0.0))
        );
        assert_eq!(
            SliderConfig::new(0.0, 100.0, -5.0),
            Err(SliderError::NonPositiveStep(-5.0))
        );
        assert_eq!(
            SliderConfig::new(10.0, 10.0, 1.0),
            Err(SliderError::EmptyRange {
                min: 10.0,
                max: 10.0
            })
        );
        assert!(matches!(
            SliderConfig::new(0.0, 100.0, 30.0),
            Err(SliderError::FractionalStepCount(_))
        ));
        assert!(matches!(
            SliderConfig::new(0.0, f64::NAN, 1.0),
            Err(SliderError::NonFinite { .. })
        ));
        assert!(matches!(
            SliderConfig::new(0.0, 1e6, 1.0),
            Err(SliderError::TooManySteps(_))
        ));
    }

    #[test]
    fn test_near_integral_step_count_is_accepted() {
        let config = SliderConfig::new(0.0, 1.0, 0.1).unwrap();
        assert_eq!(config.steps(), 10);
    }

    #[test]
    fn test_decimals_follow_step() {
        assert_eq!(SliderConfig::new(0.0, 1000.0, 10.0).unwrap().decimals(), 0);
        assert_eq!(SliderConfig::new(0.0, 1.0, 0.1).unwrap().decimals(), 1);
        assert_eq!(SliderConfig::new(0.0, 1.0, 0.25).unwrap().decimals(), 2);
        assert_eq!(SliderConfig::new(0.5, 10.5, 1.0).unwrap().decimals(), 1);
    }

    #[test]
    fn test_size_validation() {
        let config = SliderConfig::new(0.0, 100.0, 10.0).unwrap();
        assert!(config.clone().with_size(SliderSize::Percent(0.0)).is_err());
        assert!(config.clone().with_size(SliderSize::Percent(1.5)).is_err());
        assert!(config.clone().with_size(SliderSize::Radius(-1.0)).is_err());
        assert!(config.with_size(SliderSize::Radius(120.0)).is_ok());
    }

    #[test]
    fn test_scenario_a_snaps_to_nearest_step() {
        let mut s = slider(0.0, 400.0, 10.0);
        assert_eq!(s.config().steps(), 40);
        assert_eq!(s.config().step_angle(), 9.0);

        assert_eq!(drag_to(&mut s, at(46.0)), Some(50.0));
        assert_eq!(s.angle(), 45.0);
        assert_eq!(s.value(), 50.0);
    }

    #[test]
    fn test_scenario_b_half_step_rounds_away_from_zero() {
        let config = SliderConfig::new(0.0, 400.0, 10.0).unwrap();
        let state = AngleState::nearest(4.5, &config);
        assert_eq!(state.degrees, 9.0);
        assert_eq!(config.value_at(state.index), 10.0);

        let below = AngleState::nearest(4.49, &config);
        assert_eq!(below.degrees, 0.0);
    }

    #[test]
    fn test_scenario_c_moves_within_a_frame_coalesce() {
        let mut s = slider(0.0, 400.0, 10.0);
        let values = record_values(&mut s);
        assert!(s.gesture_start(at(10.0), InputSource::Pointer));

        assert_eq!(s.gesture_move(at(46.0), InputSource::Pointer), FrameRequest::Schedule);
        assert_eq!(s.gesture_move(at(91.0), InputSource::Pointer), FrameRequest::Pending);
        assert!(s.is_frame_pending());

        assert_eq!(s.on_frame(), Ok(Some(100.0)));
        assert!(!s.is_frame_pending());
        assert_eq!(*values.borrow(), [100.0]);
        // initial render plus one recompute
        assert_eq!(s.view().rotations, [0.0, 90.0]);

        assert_eq!(s.on_frame(), Ok(None));
        assert_eq!(values.borrow().len(), 1);
    }

    #[test]
    fn test_scenario_d_tap_on_knob_and_ring() {
        let mut s = slider(0.0, 400.0, 10.0);
        let values = record_values(&mut s);
        let layout = *s.layout().unwrap();

        let knob = geometry::point_at(layout.center(), layout.ring_radius(), 0.0);
        assert_eq!(s.hit_test(knob), HitTarget::Knob);
        s.gesture_start(knob, InputSource::Pointer);
        assert_eq!(s.gesture_end(knob, HitTarget::Knob, InputSource::Pointer), Ok(None));
        assert!(values.borrow().is_empty());

        let ring = geometry::point_at(layout.center(), layout.ring_radius(), 90.0);
        assert_eq!(s.hit_test(ring), HitTarget::ClickRing);
        s.gesture_start(ring, InputSource::Pointer);
        assert_eq!(
            s.gesture_end(ring, HitTarget::ClickRing, InputSource::Pointer),
            Ok(Some(100.0))
        );
        assert_eq!(*values.borrow(), [100.0]);
        assert!(!s.is_dragging());
    }

    #[test]
    fn test_release_outside_does_not_recompute() {
        let mut s = slider(0.0, 400.0, 10.0);
        s.gesture_start(CENTER, InputSource::Pointer);
        assert_eq!(s.hit_test(CENTER), HitTarget::Outside);
        assert_eq!(
            s.gesture_end(at(90.0), HitTarget::Outside, InputSource::Pointer),
            Ok(None)
        );
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn test_click_ring_edge() {
        let s = slider(0.0, 400.0, 10.0);
        let layout = *s.layout().unwrap();
        let band = layout.click_band();
        let scale = 200.0 / REFERENCE_SIDE;
        assert!((band - (TRACK_WIDTH / 2.0 + CLICK_RING_SLACK) * scale).abs() < 1e-12);

        let edge = layout.ring_radius() + band;
        let inside = geometry::point_at(layout.center(), edge - 0.01, 180.0);
        let outside = geometry::point_at(layout.center(), edge + 0.01, 180.0);
        assert_eq!(s.hit_test(inside), HitTarget::ClickRing);
        assert_eq!(s.hit_test(outside), HitTarget::Outside);
    }

    #[test]
    fn test_scenario_e_resize_moves_center() {
        let mut s = slider(0.0, 360.0, 1.0);
        let pointer = Point::new(150.0, 50.0);
        assert_eq!(drag_to(&mut s, pointer), Some(45.0));

        assert!(s.resize(Bounds::new(0.0, 0.0, 400.0, 200.0)));
        let layout = s.layout().unwrap();
        assert_eq!(layout.offset, Point::new(100.0, 0.0));
        assert_eq!(layout.center(), Point::new(200.0, 100.0));

        s.gesture_move(pointer, InputSource::Pointer);
        assert_eq!(s.on_frame(), Ok(Some(315.0)));
    }

    #[test]
    fn test_detached_container_is_a_no_op() {
        let mut s = slider(0.0, 400.0, 10.0);
        let values = record_values(&mut s);
        assert!(!s.resize(Bounds::new(0.0, 0.0, 0.0, 0.0)));
        assert!(s.layout().is_none());

        assert_eq!(drag_to(&mut s, at(90.0)), None);
        assert!(values.borrow().is_empty());
        assert_eq!(s.hit_test(at(90.0)), HitTarget::Outside);
    }

    #[test]
    fn test_bad_pointer_does_not_starve_frames() {
        let mut s = slider(0.0, 400.0, 10.0);
        s.gesture_start(at(0.0), InputSource::Pointer);
        let bad = Point::new(f64::NAN, 3.0);
        assert_eq!(s.gesture_move(bad, InputSource::Pointer), FrameRequest::Schedule);
        assert!(matches!(s.on_frame(), Err(SliderError::InvalidPointer(_))));

        assert_eq!(s.gesture_move(at(90.0), InputSource::Pointer), FrameRequest::Schedule);
        assert_eq!(s.on_frame(), Ok(Some(100.0)));
    }

    #[test]
    fn test_pending_frame_after_release_is_benign() {
        let mut s = slider(0.0, 400.0, 10.0);
        s.gesture_start(at(0.0), InputSource::Pointer);
        s.gesture_move(at(90.0), InputSource::Pointer);
        s.gesture_end(at(90.0), HitTarget::Outside, InputSource::Pointer)
            .unwrap();

        assert_eq!(s.gesture_move(at(180.0), InputSource::Pointer), FrameRequest::Ignored);
        assert_eq!(s.on_frame(), Ok(Some(100.0)));
        assert_eq!(s.on_frame(), Ok(None));
    }

    #[test]
    fn test_value_bounds() {
        let mut s = slider(0.0, 400.0, 10.0);
        drag_to(&mut s, at(90.0));
        assert_eq!(drag_to(&mut s, at(359.0)), Some(0.0));
        assert_eq!(s.angle(), 0.0);
        assert_eq!(drag_to(&mut s, at(351.0)), Some(390.0));
    }

    #[test]
    fn test_input_adapter_is_applied() {
        let config = SliderConfig::new(0.0, 400.0, 10.0).unwrap();
        let mut s = Slider::new(
            config,
            InputAdapter::new(InputMode::Touch),
            container(),
            RecordingView::default(),
        );
        assert!(!s.gesture_start(at(90.0), InputSource::Pointer));
        assert_eq!(s.gesture_move(at(90.0), InputSource::Pointer), FrameRequest::Ignored);

        assert!(s.gesture_start(at(90.0), InputSource::Touch));
        assert_eq!(s.gesture_move(at(90.0), InputSource::Pointer), FrameRequest::Ignored);
        assert_eq!(s.gesture_move(at(90.0), InputSource::Touch), FrameRequest::Schedule);
    }

    #[test]
    fn test_release_from_other_device_ends_drag() {
        let config = SliderConfig::new(0.0, 400.0, 10.0).unwrap();
        let mut s = Slider::new(
            config,
            InputAdapter::new(InputMode::Touch),
            container(),
            RecordingView::default(),
        );
        let values = record_values(&mut s);

        assert!(s.gesture_start(at(90.0), InputSource::Touch));
        assert_eq!(
            s.gesture_end(at(90.0), HitTarget::ClickRing, InputSource::Pointer),
            Ok(None)
        );
        assert!(!s.is_dragging());
        assert_eq!(s.gesture_move(at(180.0), InputSource::Touch), FrameRequest::Ignored);
        assert!(values.borrow().is_empty());

        // an accepted source still taps on release
        let mut s = slider(0.0, 400.0, 10.0);
        assert!(s.gesture_start(at(90.0), InputSource::Touch));
        assert_eq!(
            s.gesture_end(at(90.0), HitTarget::ClickRing, InputSource::Pointer),
            Ok(Some(100.0))
        );
        assert!(!s.is_dragging());
    }

    #[test]
    fn test_arc_follows_rotation() {
        let mut s = slider(0.0, 400.0, 10.0);
        drag_to(&mut s, at(270.0));
        let arc = s.view().arcs.last().unwrap();
        assert_eq!(s.view().rotations.last(), Some(&270.0));
        assert!((arc.sweep() - 270.0).abs() < 1e-9);
        assert!(arc.segments[0].large_arc);
        assert_eq!(s.view().layouts, 1);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut s = slider(0.0, 400.0, 10.0);
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = values.clone();
        let id = s.subscribe(SliderEvent::ValueChanged, move |v| sink.borrow_mut().push(v));

        drag_to(&mut s, at(90.0));
        assert!(s.unsubscribe(id));
        drag_to(&mut s, at(180.0));

        assert_eq!(*values.borrow(), [100.0]);
        assert_eq!(s.value(), 200.0);
    }

    #[test]
    fn test_fixed_radius_layout() {
        let config = SliderConfig::new(0.0, 100.0, 10.0)
            .unwrap()
            .with_size(SliderSize::Radius(50.0))
            .unwrap();
        let s = Slider::new(
            config,
            InputAdapter::default(),
            Bounds::new(10.0, 20.0, 300.0, 200.0),
            RecordingView::default(),
        );
        let layout = s.layout().unwrap();
        assert_eq!(layout.side, 100.0);
        assert_eq!(layout.scale, 1.0);
        assert_eq!(layout.center(), Point::new(160.0, 120.0));
        assert_eq!(layout.ring_radius(), 50.0 - KNOB_RADIUS);
    }
}
