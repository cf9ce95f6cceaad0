use crate::geometry::Point;
use crate::gui::dashboard::Dashboard;
use crate::gui::slider::{self, Bounds, FrameRequest, InputSource};
use crate::gui::theme::ThemeColors;
use gdk4::prelude::*;
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::RefCell;
use std::rc::Rc;

pub fn container_bounds(area: &gtk::DrawingArea) -> Bounds {
    Bounds::new(0.0, 0.0, area.width() as f64, area.height() as f64)
}

/// Devices that are neither touchscreens nor pens drive the slider as a pointer.
pub fn classify_device(source: Option<gdk4::InputSource>) -> InputSource {
    match source {
        Some(gdk4::InputSource::Touchscreen) => InputSource::Touch,
        Some(gdk4::InputSource::Pen) => InputSource::Pen,
        _ => InputSource::Pointer,
    }
}

pub fn input_source(controller: &impl IsA<gtk::EventController>) -> InputSource {
    classify_device(controller.current_event_device().map(|d| d.source()))
}

pub fn attach_draw(area: &gtk::DrawingArea, dashboard: Rc<RefCell<Dashboard>>) {
    area.set_draw_func(move |area, cr, _, _| {
        let style_context = area.style_context();
        let colors = ThemeColors::from_context(&style_context);
        if let Err(e) = slider::draw(cr, dashboard.borrow().scenes(), &colors) {
            log::error!("Drawing error: {}", e);
        }
    });
}

pub fn attach_resize(area: &gtk::DrawingArea, dashboard: Rc<RefCell<Dashboard>>) {
    area.connect_resize(move |area, width, height| {
        dashboard
            .borrow_mut()
            .resize(Bounds::new(0.0, 0.0, width as f64, height as f64));
        area.queue_draw();
    });
}

/// Runs the dashboard's pending recomputes on the next frame clock tick.
fn schedule_frame(area: &gtk::DrawingArea, dashboard: Rc<RefCell<Dashboard>>) {
    area.add_tick_callback(move |area, _clock| {
        if dashboard.borrow_mut().frame() {
            area.queue_draw();
        }
        glib::ControlFlow::Break
    });
}

/// The drag gesture keeps reporting after the pointer leaves the area, so a
/// drag can wander off the widget and still steer the slider.
pub fn attach_gestures(area: &gtk::DrawingArea, dashboard: Rc<RefCell<Dashboard>>) {
    let drag = gtk::GestureDrag::new();

    {
        let dashboard = dashboard.clone();
        drag.connect_drag_begin(move |gesture, x, y| {
            let source = input_source(gesture);
            if dashboard.borrow_mut().press(Point::new(x, y), source) {
                gesture.set_state(gtk::EventSequenceState::Claimed);
            }
        });
    }

    {
        let dashboard = dashboard.clone();
        let area = area.downgrade();
        drag.connect_drag_update(move |gesture, dx, dy| {
            let Some((x, y)) = gesture.start_point() else {
                return;
            };
            let request = dashboard
                .borrow_mut()
                .drag(Point::new(x + dx, y + dy), input_source(gesture));
            if request == FrameRequest::Schedule
                && let Some(area) = area.upgrade()
            {
                schedule_frame(&area, dashboard.clone());
            }
        });
    }

    {
        let dashboard = dashboard.clone();
        let area = area.downgrade();
        drag.connect_drag_end(move |gesture, dx, dy| {
            let Some((x, y)) = gesture.start_point() else {
                return;
            };
            let changed = dashboard
                .borrow_mut()
                .release(Point::new(x + dx, y + dy), input_source(gesture));
            if changed && let Some(area) = area.upgrade() {
                area.queue_draw();
            }
        });
    }

    drag.connect_cancel(move |_, _| {
        dashboard.borrow_mut().cancel();
    });

    area.add_controller(drag);
}
