use crate::config::SliderColor;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;

/// Mirrors one slider's value next to its color and caption.
pub struct ValueLabel {
    value: f64,
    decimals: usize,
    caption: String,
    color: SliderColor,
}

pub struct LabelInit {
    pub caption: String,
    pub color: SliderColor,
    pub value: f64,
    pub decimals: usize,
}

#[derive(Debug)]
pub enum LabelMsg {
    Value(f64),
}

pub fn format_value(value: f64, decimals: usize) -> String {
    format!("${value:.decimals$}")
}

#[relm4::component(pub)]
impl SimpleComponent for ValueLabel {
    type Init = LabelInit;
    type Input = LabelMsg;
    type Output = ();

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Horizontal,
            set_spacing: 12,

            gtk::Label {
                add_css_class: "dial-value",
                set_width_chars: 7,
                set_xalign: 1.0,
                #[watch]
                set_label: &format_value(model.value, model.decimals),
            },

            #[name = "swatch"]
            gtk::DrawingArea {
                set_content_width: 16,
                set_content_height: 16,
                set_valign: gtk::Align::Center,
            },

            gtk::Label {
                add_css_class: "dial-caption",
                set_label: &model.caption,
            },
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        _sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = ValueLabel {
            value: init.value,
            decimals: init.decimals,
            caption: init.caption,
            color: init.color,
        };

        let widgets = view_output!();

        let (r, g, b, a) = model.color.to_srgba(1.0).into_components();
        widgets.swatch.set_draw_func(move |_, cr, width, height| {
            cr.set_source_rgba(r, g, b, a);
            cr.rectangle(0.0, 0.0, width as f64, height as f64);
            if let Err(e) = cr.fill() {
                log::error!("Swatch drawing error: {}", e);
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            LabelMsg::Value(value) => self.value = value,
        }
    }
}
