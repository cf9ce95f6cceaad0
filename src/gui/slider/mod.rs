pub mod gesture;
pub mod model;
pub mod observer;
pub mod scene;
pub mod view;

pub use gesture::{FrameRequest, HitTarget, InputAdapter, InputMode, InputSource};
pub use model::{AngleState, Bounds, LayoutMetrics, Slider, SliderConfig, SliderError, SliderSize};
pub use observer::{SliderEvent, SubscriptionId};
pub use scene::{Scene, SceneBuilder, SceneView, SliderView};
pub use view::draw;

pub const REFERENCE_SIDE: f64 = 700.0; // container side at which scale is 1.0
pub const TRACK_WIDTH: f64 = 24.0;
pub const KNOB_RADIUS: f64 = 14.0;
pub const KNOB_BORDER: f64 = 2.0;
pub const CLICK_RING_SLACK: f64 = 6.0; // extra hit distance around the track
pub const TICK_GAP: f64 = 2.0;
pub const ARC_ALPHA: f64 = 0.7;
pub const MAX_STEPS: f64 = 3600.0;
pub const MAX_DECIMALS: usize = 6;
pub const STEP_COUNT_TOLERANCE: f64 = 1e-9;
