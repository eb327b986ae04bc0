use crate::error::MountError;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Result<web::Document, MountError> {
    web::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)
}

/// First descendant of `root` with the given class, as an `HtmlElement`.
pub fn child_by_class(
    root: &web::Element,
    class: &'static str,
) -> Result<web::HtmlElement, MountError> {
    root.query_selector(&format!(".{}", class))?
        .ok_or(MountError::MissingElement(class))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(class))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("[dom] set {}={} failed: {:?}", property, value, e);
    }
}

pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] add {} listener failed: {:?}", event, e);
    }
    closure.forget();
}
