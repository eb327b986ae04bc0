use crate::error::MountError;
use logo_core::PageMetadata;
use web_sys as web;

/// Write title, language and description into the host document.
pub fn apply_metadata(document: &web::Document, meta: &PageMetadata) -> Result<(), MountError> {
    document.set_title(meta.title);
    if let Some(html) = document.document_element() {
        html.set_attribute("lang", meta.lang)?;
    }

    let existing = document.query_selector("meta[name=\"description\"]")?;
    let tag = match existing {
        Some(tag) => tag,
        None => {
            let tag = document.create_element("meta")?;
            tag.set_attribute("name", "description")?;
            if let Some(head) = document.head() {
                head.append_child(&tag)?;
            }
            tag
        }
    };
    tag.set_attribute("content", meta.description)?;
    Ok(())
}
