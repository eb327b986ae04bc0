//! Widget DOM construction.
//!
//! The static parts of the stage (copy, orbit layers, info card) are written as
//! one HTML template; palette chips are created per palette so each carries its
//! index. `mount` returns handles to every element the renderer touches.

use crate::constants::{AURA_CLASS, CHIP_INDEX_ATTR, CHIP_ROW_CLASS, EMBLEM_CLASS, ORBIT_CLASS};
use crate::dom;
use crate::error::MountError;
use logo_core::{Palette, CHIP_CLASS};
use wasm_bindgen::JsCast;
use web_sys as web;

const STAGE_HTML: &str = r#"<section class="stage">
  <div class="hero-copy">
    <p class="eyebrow">Interactive Identity System</p>
    <h1>Craft a tactile logo that feels alive.</h1>
    <p class="blurb">A rich 3D badge with responsive light and depth, tailored for product teams building immersive interaction design systems.</p>
    <div class="palette-row"></div>
  </div>
  <div class="logo-orbit">
    <div class="ambient-glow"></div>
    <div class="logo-shell">
      <div class="logo-emblem">
        <div class="logo-highlight"></div>
        <div class="logo-core">
          <span class="glyph">ID</span>
          <span class="tagline">interactive designs</span>
        </div>
      </div>
      <div class="logo-ring"><div class="inner-sheen"></div></div>
    </div>
    <div class="reflection"></div>
  </div>
  <div class="floating-card">
    <p class="card-title">Why it works</p>
    <ul>
      <li>Soft specular highlights simulate real studio lighting.</li>
      <li>Color-driven rim light reacts to cursor orbit for presence.</li>
      <li>Layered glass ring adds parallax for interactive canvases.</li>
    </ul>
  </div>
</section>"#;

/// Handles to the mounted elements of one widget instance.
#[derive(Clone)]
pub struct View {
    pub orbit: web::HtmlElement,
    pub aura: web::HtmlElement,
    pub emblem: web::HtmlElement,
    pub chips: Vec<web::HtmlElement>,
}

pub fn mount(
    document: &web::Document,
    root: &web::Element,
    palettes: &[Palette],
) -> Result<View, MountError> {
    root.set_inner_html(STAGE_HTML);

    let row = dom::child_by_class(root, CHIP_ROW_CLASS)?;
    let mut chips = Vec::with_capacity(palettes.len());
    for (i, palette) in palettes.iter().enumerate() {
        let chip = document
            .create_element("button")?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| MountError::NotHtmlElement(CHIP_CLASS))?;
        chip.set_attribute("type", "button")?;
        chip.set_attribute(CHIP_INDEX_ATTR, &i.to_string())?;
        chip.set_class_name(CHIP_CLASS);
        let label = document.create_element("span")?;
        label.set_text_content(Some(palette.name));
        chip.append_child(&label)?;
        row.append_child(&chip)?;
        chips.push(chip);
    }

    Ok(View {
        orbit: dom::child_by_class(root, ORBIT_CLASS)?,
        aura: dom::child_by_class(root, AURA_CLASS)?,
        emblem: dom::child_by_class(root, EMBLEM_CLASS)?,
        chips,
    })
}
