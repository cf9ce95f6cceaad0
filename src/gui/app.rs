use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::dashboard::Dashboard;
use crate::gui::label::{LabelInit, LabelMsg, ValueLabel};
use crate::gui::slider::Bounds;
use crate::gui::theme;
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub dashboard: Rc<RefCell<Dashboard>>,
    pub labels: Vec<Controller<ValueLabel>>,
    pub label_box: gtk::Box,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    ValueChanged { index: usize, value: f64 },
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

/// Slider observers forward into the component's input queue, so a value
/// change never re-enters the dashboard while it is borrowed.
fn notifier(sender: &ComponentSender<AppModel>) -> impl Fn(usize, f64) + Clone + 'static {
    let input = sender.input_sender().clone();
    move |index, value| input.emit(AppMsg::ValueChanged { index, value })
}

impl AppModel {
    fn rebuild_labels(&mut self) {
        while let Some(child) = self.label_box.first_child() {
            self.label_box.remove(&child);
        }

        self.labels = self
            .dashboard
            .borrow()
            .sliders()
            .iter()
            .map(|slider| {
                ValueLabel::builder()
                    .launch(LabelInit {
                        caption: slider.config().label().to_string(),
                        color: slider.config().color(),
                        value: slider.value(),
                        decimals: slider.config().decimals(),
                    })
                    .detach()
            })
            .collect();

        for label in &self.labels {
            self.label_box.append(label.widget());
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Dial"),
            set_default_size: (1100, 760),

            gtk::Box {
                set_orientation: gtk::Orientation::Horizontal,

                #[name = "label_box"]
                gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 16,
                    set_valign: gtk::Align::Center,
                    add_css_class: "dial-labels",
                },

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();

        // laid out once the drawing area gets its first size
        let dashboard = Dashboard::from_config(&config, Bounds::default(), notifier(&sender));

        let model = AppModel {
            dashboard: Rc::new(RefCell::new(dashboard)),
            labels: Vec::new(),
            label_box: gtk::Box::default(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.label_box = widgets.label_box.clone();
        model.drawing_area = widgets.drawing_area.clone();
        model.rebuild_labels();

        window::attach_draw(&widgets.drawing_area, model.dashboard.clone());
        window::attach_resize(&widgets.drawing_area, model.dashboard.clone());
        window::attach_gestures(&widgets.drawing_area, model.dashboard.clone());

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::ValueChanged { index, value } => {
                if let Some(label) = self.labels.get(index) {
                    label.emit(LabelMsg::Value(value));
                }
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    let bounds = window::container_bounds(&self.drawing_area);
                    *self.dashboard.borrow_mut() =
                        Dashboard::from_config(&new_config, bounds, notifier(&sender));
                    self.rebuild_labels();
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
