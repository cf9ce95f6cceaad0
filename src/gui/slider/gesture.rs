use crate::geometry::Point;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

/// Device family an input event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Pointer,
    Touch,
    Pen,
}

/// Which input families a slider reacts to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    #[strum(serialize = "auto", serialize = "any")]
    Auto,
    #[strum(serialize = "pointer", serialize = "mouse")]
    Pointer,
    #[strum(serialize = "touch")]
    Touch,
}

/// Input strategy fixed for the lifetime of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputAdapter {
    mode: InputMode,
}

impl InputAdapter {
    pub fn new(mode: InputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn accepts(&self, source: InputSource) -> bool {
        match self.mode {
            InputMode::Auto => true,
            InputMode::Pointer => matches!(source, InputSource::Pointer | InputSource::Pen),
            InputMode::Touch => source == InputSource::Touch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        source: InputSource,
    },
}

impl Gesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Moves and releases only count when they come from the device that
    /// started the drag.
    pub fn tracks(&self, source: InputSource) -> bool {
        matches!(self, Self::Dragging { source: s } if *s == source)
    }
}

/// What a release landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Knob,
    ClickRing,
    Outside,
}

impl HitTarget {
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Self::Outside)
    }
}

/// Last pointer position seen, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub position: Point,
}

impl From<Point> for PointerSample {
    fn from(position: Point) -> Self {
        Self { position }
    }
}

/// Result of feeding a move into a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// No frame is pending; the host must schedule one.
    Schedule,
    /// A frame is already scheduled and will pick up the new sample.
    Pending,
    /// The move was not part of an active gesture.
    Ignored,
}
