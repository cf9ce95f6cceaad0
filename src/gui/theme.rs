use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub track: Srgba<f64>,
    pub knob_fill: Srgba<f64>,
    pub knob_border: Srgba<f64>,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            track: Srgba::new(0.745, 0.749, 0.753, 1.0),
            knob_fill: Srgba::new(1.0, 1.0, 1.0, 1.0),
            knob_border: Srgba::new(0.6, 0.6, 0.6, 1.0),
        }
    }
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        let fallback = Self::default();
        Self {
            track: Self::lookup_color(context, "borders", fallback.track, Some(1.0)),
            knob_fill: Self::lookup_color(context, "theme_base_color", fallback.knob_fill, None),
            knob_border: Self::lookup_color(
                context,
                "theme_unfocused_fg_color",
                fallback.knob_border,
                Some(0.6),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.dial-labels {
    padding: 24px;
}
.dial-value {
    font-size: 28px;
    font-weight: bold;
}
.dial-caption {
    opacity: 0.7;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
