//! CSS value derivation from palette and pose.
//!
//! All functions here are pure; callers cache the results keyed on the
//! inputs they take.

use crate::constants::{
    AURA_FADE_PCT, CHIP_ANGLE_DEG, CHIP_GLOW_ALPHA_HEX, CHIP_GLOW_BLUR_PX, EMBLEM_ANGLE_DEG,
    EMBLEM_BASE_COLOR, EMBLEM_SECONDARY_STOP_PCT,
};
use crate::palette::Palette;
use crate::pointer::{GlowPosition, Rotation};

pub const CHIP_CLASS: &str = "palette-chip";
pub const CHIP_ACTIVE_CLASS: &str = "palette-chip active";

/// Three-stop linear gradient for the emblem face.
pub fn emblem_gradient(palette: &Palette) -> String {
    format!(
        "linear-gradient({}deg, {}, {} {}%, {})",
        EMBLEM_ANGLE_DEG,
        palette.primary,
        palette.secondary,
        EMBLEM_SECONDARY_STOP_PCT,
        EMBLEM_BASE_COLOR
    )
}

/// Radial accent highlight centered on the glow position.
pub fn aura_gradient(palette: &Palette, glow: GlowPosition) -> String {
    format!(
        "radial-gradient(circle at {}% {}%, {} 0%, transparent {}%)",
        glow.x, glow.y, palette.accent, AURA_FADE_PCT
    )
}

pub fn orbit_transform(rotation: Rotation) -> String {
    format!("rotateX({}deg) rotateY({}deg)", rotation.x, rotation.y)
}

pub fn chip_background(palette: &Palette) -> String {
    format!(
        "linear-gradient({}deg, {}, {})",
        CHIP_ANGLE_DEG, palette.primary, palette.secondary
    )
}

pub fn chip_shadow(palette: &Palette, active: bool) -> String {
    if active {
        format!(
            "0 0 {}px {}{}",
            CHIP_GLOW_BLUR_PX, palette.primary, CHIP_GLOW_ALPHA_HEX
        )
    } else {
        "none".to_string()
    }
}

#[inline]
pub fn chip_class(active: bool) -> &'static str {
    if active {
        CHIP_ACTIVE_CLASS
    } else {
        CHIP_CLASS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTES;
    use glam::Vec2;

    #[test]
    fn emblem_gradient_matches_css_form() {
        assert_eq!(
            emblem_gradient(&PALETTES[0]),
            "linear-gradient(135deg, #58d0ff, #006fff 60%, #020817)"
        );
    }

    #[test]
    fn aura_gradient_prints_shortest_numbers() {
        let css = aura_gradient(&PALETTES[1], Vec2::new(62.5, 35.0));
        assert_eq!(
            css,
            "radial-gradient(circle at 62.5% 35%, #ffc46b 0%, transparent 65%)"
        );
    }

    #[test]
    fn chip_shadow_only_when_active() {
        assert_eq!(chip_shadow(&PALETTES[2], true), "0 0 20px #70ffba55");
        assert_eq!(chip_shadow(&PALETTES[2], false), "none");
    }
}
