use crate::dom::set_style;
use crate::markup::View;
use logo_core::{chip_background, chip_class, chip_shadow, LogoWidget};

/// Push the widget's current state into its mounted elements.
pub fn paint(view: &View, widget: &LogoWidget) {
    let palette = widget.palette();
    set_style(&view.orbit, "transform", &widget.transform());
    set_style(&view.orbit, "background", palette.background);
    set_style(&view.aura, "background-image", widget.aura_gradient());
    set_style(&view.emblem, "background-image", widget.emblem_gradient());
    paint_chips(view, widget);
}

/// Pointer events only move the pose; chips are left alone.
pub fn paint_pose(view: &View, widget: &LogoWidget) {
    set_style(&view.orbit, "transform", &widget.transform());
    set_style(&view.aura, "background-image", widget.aura_gradient());
}

fn paint_chips(view: &View, widget: &LogoWidget) {
    let selected = widget.selected_index();
    for (i, (chip, palette)) in view.chips.iter().zip(widget.palettes()).enumerate() {
        let active = i == selected;
        chip.set_class_name(chip_class(active));
        set_style(chip, "background", &chip_background(palette));
        set_style(chip, "box-shadow", &chip_shadow(palette, active));
    }
}
