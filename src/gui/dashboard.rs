use crate::config::Config;
use crate::geometry::Point;
use crate::gui::slider::{
    Bounds, FrameRequest, HitTarget, InputAdapter, InputSource, Scene, SceneView, Slider,
    SliderConfig, SliderEvent,
};

/// The expense page: concentric sliders sharing one drawing area.
pub struct Dashboard {
    sliders: Vec<Slider<SceneView>>,
    active: Option<usize>,
}

impl Dashboard {
    /// Builds one slider per valid record. `notify` receives the index of the
    /// slider (among the ones built) and its new value.
    pub fn from_config(
        config: &Config,
        container: Bounds,
        notify: impl Fn(usize, f64) + Clone + 'static,
    ) -> Self {
        let input = InputAdapter::new(config.input);

        let sliders = config
            .sliders
            .iter()
            .filter_map(|record| match SliderConfig::from_record(record) {
                Ok(c) => Some(c),
                Err(e) => {
                    log::warn!("Not rendering slider '{}': {}", record.label, e);
                    None
                }
            })
            .enumerate()
            .map(|(index, slider_config)| {
                let view = SceneView::new(&slider_config);
                let mut slider = Slider::new(slider_config, input, container, view);
                let notify = notify.clone();
                slider.subscribe(SliderEvent::ValueChanged, move |value| notify(index, value));
                slider
            })
            .collect();

        Self {
            sliders,
            active: None,
        }
    }

    pub fn sliders(&self) -> &[Slider<SceneView>] {
        &self.sliders
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.sliders.iter().filter_map(|s| s.view().scene())
    }

    pub fn resize(&mut self, container: Bounds) {
        for slider in &mut self.sliders {
            slider.resize(container);
        }
    }

    /// A knob hit beats a ring hit; between rings the closest one wins.
    fn pick(&self, point: Point) -> Option<usize> {
        self.sliders
            .iter()
            .enumerate()
            .filter_map(|(i, s)| {
                let target = s.hit_test(point);
                let layout = s.layout()?;
                target.is_interactive().then(|| {
                    let gap = (point.distance_to(layout.center()) - layout.ring_radius()).abs();
                    (i, target != HitTarget::Knob, gap)
                })
            })
            .min_by(|a, b| a.1.cmp(&b.1).then(a.2.total_cmp(&b.2)))
            .map(|(i, _, _)| i)
    }

    pub fn press(&mut self, point: Point, source: InputSource) -> bool {
        self.active = match self.pick(point) {
            Some(i) if self.sliders[i].gesture_start(point, source) => Some(i),
            _ => None,
        };
        self.active.is_some()
    }

    pub fn drag(&mut self, point: Point, source: InputSource) -> FrameRequest {
        match self.active {
            Some(i) => self.sliders[i].gesture_move(point, source),
            None => FrameRequest::Ignored,
        }
    }

    /// Returns `true` when the release changed a value.
    pub fn release(&mut self, point: Point, source: InputSource) -> bool {
        let Some(i) = self.active.take() else {
            return false;
        };
        let slider = &mut self.sliders[i];
        let target = slider.hit_test(point);
        match slider.gesture_end(point, target, source) {
            Ok(changed) => changed.is_some(),
            Err(e) => {
                log::warn!("Ignoring release on '{}': {}", slider.config().label(), e);
                false
            }
        }
    }

    pub fn cancel(&mut self) {
        if let Some(i) = self.active.take() {
            self.sliders[i].gesture_cancel();
        }
    }

    /// Runs every pending frame recompute. Returns `true` when anything
    /// needs repainting.
    pub fn frame(&mut self) -> bool {
        let mut changed = false;
        for slider in self.sliders.iter_mut().filter(|s| s.is_frame_pending()) {
            match slider.on_frame() {
                Ok(value) => changed |= value.is_some(),
                Err(e) => log::warn!("Frame skipped for '{}': {}", slider.config().label(), e),
            }
        }
        changed
    }
}
