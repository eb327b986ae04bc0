// DOM hooks shared by markup construction, rendering and event wiring.

// Mount points
pub const MOUNT_ATTR: &str = "data-interactive-logo";
pub const FALLBACK_MOUNT_ID: &str = "app";

// Element classes the renderer looks up after mounting
pub const ORBIT_CLASS: &str = "logo-orbit";
pub const AURA_CLASS: &str = "ambient-glow";
pub const EMBLEM_CLASS: &str = "logo-emblem";
pub const CHIP_ROW_CLASS: &str = "palette-row";

// Palette index stamped on each chip button
pub const CHIP_INDEX_ATTR: &str = "data-palette-index";
