use super::model::{LayoutMetrics, SliderConfig};
use super::{KNOB_BORDER, TICK_GAP};
use crate::config::SliderColor;
use crate::geometry::{self, ArcPath, Point};
use std::f64::consts::PI;

/// Redraw surface a [`Slider`](super::Slider) drives.
pub trait SliderView {
    fn apply_layout(&mut self, layout: &LayoutMetrics);
    fn rotate_indicator(&mut self, degrees: f64);
    fn redraw_arc(&mut self, arc: ArcPath);
}

/// Background ring, dashed into one segment per step.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub center: Point,
    pub radius: f64,
    pub width: f64,
    /// Cairo dash pattern; empty means a solid ring.
    pub dashes: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knob {
    pub radius: f64,
    pub border: f64,
}

/// The rotating layer carrying the knob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub center: Point,
    pub rotation: f64,
    pub ring_radius: f64,
    pub knob: Knob,
}

impl Indicator {
    pub fn knob_center(&self) -> Point {
        geometry::point_at(self.center, self.ring_radius, self.rotation)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub track: Track,
    pub arc: ArcPath,
    pub indicator: Indicator,
    pub color: SliderColor,
}

pub struct SceneBuilder {
    color: SliderColor,
    steps: u32,
    layout: Option<LayoutMetrics>,
    rotation: f64,
}

impl SceneBuilder {
    pub fn new(color: SliderColor, steps: u32) -> Self {
        Self {
            color,
            steps,
            layout: None,
            rotation: 0.0,
        }
    }

    pub fn layout(mut self, layout: LayoutMetrics) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Nothing can be built before the slider has been laid out.
    pub fn build(self) -> Option<Scene> {
        let layout = self.layout?;
        let center = layout.center();
        let radius = layout.ring_radius();
        let width = layout.track_width();

        Some(Scene {
            track: Track {
                center,
                radius,
                width,
                dashes: track_dashes(radius, self.steps, TICK_GAP * layout.scale),
            },
            arc: geometry::describe_arc(center, radius, 0.0, self.rotation),
            indicator: Indicator {
                center,
                rotation: self.rotation,
                ring_radius: radius,
                knob: Knob {
                    radius: layout.knob_radius(),
                    border: KNOB_BORDER * layout.scale,
                },
            },
            color: self.color,
        })
    }
}

fn track_dashes(radius: f64, steps: u32, gap: f64) -> Vec<f64> {
    let per_step = 2.0 * PI * radius / steps.max(1) as f64;
    if per_step <= gap * 2.0 {
        Vec::new()
    } else {
        vec![per_step - gap, gap]
    }
}

/// Retained scene the GTK drawing area paints from.
#[derive(Debug, Clone)]
pub struct SceneView {
    color: SliderColor,
    steps: u32,
    scene: Option<Scene>,
    redraws: u64,
}

impl SceneView {
    pub fn new(config: &SliderConfig) -> Self {
        Self {
            color: config.color(),
            steps: config.steps(),
            scene: None,
            redraws: 0,
        }
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn redraws(&self) -> u64 {
        self.redraws
    }
}

impl SliderView for SceneView {
    fn apply_layout(&mut self, layout: &LayoutMetrics) {
        let rotation = self
            .scene
            .as_ref()
            .map_or(0.0, |s| s.indicator.rotation);
        self.scene = SceneBuilder::new(self.color, self.steps)
            .layout(*layout)
            .rotation(rotation)
            .build();
    }

    fn rotate_indicator(&mut self, degrees: f64) {
        if let Some(scene) = &mut self.scene {
            scene.indicator.rotation = degrees;
        }
    }

    fn redraw_arc(&mut self, arc: ArcPath) {
        if let Some(scene) = &mut self.scene {
            scene.arc = arc;
            self.redraws += 1;
        }
    }
}
