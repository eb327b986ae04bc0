#![cfg(target_arch = "wasm32")]
use crate::constants::{FALLBACK_MOUNT_ID, MOUNT_ATTR};
use crate::error::MountError;
use logo_core::{LogoWidget, PAGE_METADATA};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod error;
mod events;
mod markup;
mod render;
mod shell;

/// Elements that should each host an independent widget.
fn mount_points(document: &web::Document) -> Result<Vec<web::Element>, MountError> {
    let nodes = document.query_selector_all(&format!("[{}]", MOUNT_ATTR))?;
    let mut points: Vec<web::Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect();
    if points.is_empty() {
        if let Some(el) = document.get_element_by_id(FALLBACK_MOUNT_ID) {
            points.push(el);
        }
    }
    if points.is_empty() {
        return Err(MountError::NoMountPoint {
            attr: MOUNT_ATTR,
            id: FALLBACK_MOUNT_ID,
        });
    }
    Ok(points)
}

fn mount_widget(document: &web::Document, root: &web::Element) -> Result<(), MountError> {
    let widget = LogoWidget::new();
    let view = markup::mount(document, root, widget.palettes())?;
    render::paint(&view, &widget);
    events::wire_widget_handlers(events::WidgetWiring {
        view,
        widget: Rc::new(RefCell::new(widget)),
    });
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("logo-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document()?;
    shell::apply_metadata(&document, &PAGE_METADATA)?;

    let points = mount_points(&document)?;
    let mut mounted = 0usize;
    for root in &points {
        match mount_widget(&document, root) {
            Ok(()) => mounted += 1,
            Err(e) => log::error!("[mount] {}", e),
        }
    }
    log::info!("[mount] {} of {} widget(s) mounted", mounted, points.len());
    Ok(())
}
