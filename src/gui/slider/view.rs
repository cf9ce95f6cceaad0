use super::ARC_ALPHA;
use super::scene::{Indicator, Scene, Track};
use crate::geometry::{ArcPath, NORTH_OFFSET_DEG, degrees_to_radians};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

/// Cairo measures from 3 o'clock; the scene measures from 12.
fn cairo_angle(degrees: f64) -> f64 {
    degrees_to_radians(degrees - NORTH_OFFSET_DEG)
}

struct SceneRenderer<'a> {
    scene: &'a Scene,
    colors: &'a ThemeColors,
}

impl<'a> SceneRenderer<'a> {
    fn new(scene: &'a Scene, colors: &'a ThemeColors) -> Self {
        Self { scene, colors }
    }

    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        self.draw_track(cr, &self.scene.track)?;
        self.draw_arc(cr, &self.scene.arc, self.scene.track.width)?;
        self.draw_indicator(cr, &self.scene.indicator)
    }

    fn draw_track(&self, cr: &Context, track: &Track) -> Result<(), cairo::Error> {
        cr.save()?;
        set_source(cr, self.colors.track);
        cr.set_line_width(track.width);
        cr.set_dash(&track.dashes, 0.0);
        cr.new_path();
        cr.arc(
            track.center.x,
            track.center.y,
            track.radius,
            -PI / 2.0,
            1.5 * PI,
        );
        cr.stroke()?;
        cr.restore()
    }

    fn draw_arc(&self, cr: &Context, arc: &ArcPath, width: f64) -> Result<(), cairo::Error> {
        if arc.is_empty() {
            return Ok(());
        }
        cr.save()?;
        set_source(cr, self.scene.color.to_srgba(ARC_ALPHA));
        cr.set_line_width(width);
        cr.set_line_cap(cairo::LineCap::Butt);
        cr.new_path();
        cr.move_to(arc.start.x, arc.start.y);
        for seg in &arc.segments {
            cr.arc(
                arc.center.x,
                arc.center.y,
                arc.radius,
                cairo_angle(seg.from_deg),
                cairo_angle(seg.to_deg),
            );
        }
        cr.stroke()?;
        cr.restore()
    }

    /// The knob is laid out at 12 o'clock and the whole layer rotated.
    fn draw_indicator(&self, cr: &Context, indicator: &Indicator) -> Result<(), cairo::Error> {
        cr.save()?;
        cr.translate(indicator.center.x, indicator.center.y);
        cr.rotate(degrees_to_radians(indicator.rotation));

        cr.new_path();
        cr.arc(
            0.0,
            -indicator.ring_radius,
            indicator.knob.radius,
            0.0,
            2.0 * PI,
        );
        set_source(cr, self.colors.knob_fill);
        cr.fill_preserve()?;
        set_source(cr, self.colors.knob_border);
        cr.set_line_width(indicator.knob.border);
        cr.stroke()?;
        cr.restore()
    }
}

pub fn draw<'a>(
    cr: &Context,
    scenes: impl IntoIterator<Item = &'a Scene>,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    for scene in scenes {
        SceneRenderer::new(scene, colors).draw(cr)?;
    }
    Ok(())
}
