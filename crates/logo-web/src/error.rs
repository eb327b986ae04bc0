use thiserror::Error;

/// Failures while locating or building the widget's DOM.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("no mount point: add a [{attr}] element or #{id}")]
    NoMountPoint { attr: &'static str, id: &'static str },
    #[error("missing .{0} inside mounted widget")]
    MissingElement(&'static str),
    #[error("element .{0} is not an HtmlElement")]
    NotHtmlElement(&'static str),
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for MountError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        MountError::Dom(format!("{:?}", value))
    }
}
