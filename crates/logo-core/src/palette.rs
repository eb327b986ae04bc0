//! The fixed palette table the widget can be themed with.
//!
//! Colors are CSS hex strings so they can be dropped straight into style
//! declarations by the web frontend.

/// A named set of four colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
}

pub const PALETTES: &[Palette] = &[
    Palette {
        name: "Aurora Bloom",
        primary: "#58d0ff",
        secondary: "#006fff",
        accent: "#f7f089",
        background: "#0a1a2f",
    },
    Palette {
        name: "Lava Pulse",
        primary: "#ff7958",
        secondary: "#ff2d7a",
        accent: "#ffc46b",
        background: "#24111d",
    },
    Palette {
        name: "Neon Forest",
        primary: "#70ffba",
        secondary: "#1385ff",
        accent: "#caff5a",
        background: "#0b221d",
    },
];

#[inline]
pub fn palette_at(index: usize) -> Option<&'static Palette> {
    PALETTES.get(index)
}
