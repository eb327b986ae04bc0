use crate::dom;
use crate::markup::View;
use crate::render;
use glam::Vec2;
use logo_core::{BoundingBox, LogoWidget};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct WidgetWiring {
    pub view: View,
    pub widget: Rc<RefCell<LogoWidget>>,
}

pub fn wire_widget_handlers(w: WidgetWiring) {
    wire_mousemove(&w);
    wire_mouseleave(&w);
    wire_chip_clicks(&w);
}

#[inline]
fn element_bounds(el: &web::HtmlElement) -> BoundingBox {
    let rect = el.get_bounding_client_rect();
    BoundingBox::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

fn wire_mousemove(w: &WidgetWiring) {
    let w = w.clone();
    let target = w.view.orbit.clone();
    dom::add_listener(&target, "mousemove", move |ev: web::MouseEvent| {
        let cursor = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let bounds = element_bounds(&w.view.orbit);
        w.widget.borrow_mut().on_pointer_move(cursor, bounds);
        render::paint_pose(&w.view, &w.widget.borrow());
    });
}

fn wire_mouseleave(w: &WidgetWiring) {
    let w = w.clone();
    let target = w.view.orbit.clone();
    dom::add_listener(&target, "mouseleave", move |_ev: web::MouseEvent| {
        w.widget.borrow_mut().on_pointer_leave();
        render::paint_pose(&w.view, &w.widget.borrow());
    });
}

fn wire_chip_clicks(w: &WidgetWiring) {
    for (i, chip) in w.view.chips.iter().enumerate() {
        let w = w.clone();
        dom::add_listener(chip, "click", move |_ev: web::MouseEvent| {
            w.widget.borrow_mut().select_palette(i);
            render::paint(&w.view, &w.widget.borrow());
        });
    }
}
