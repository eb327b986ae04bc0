use glam::Vec2;

// Tilt and glow tuning shared by every widget instance.

// Pointer mapping
pub const TILT_FACTOR_DEG: f32 = 18.0; // degrees per full box width/height of displacement
pub const GLOW_X_RANGE: (f32, f32) = (20.0, 80.0); // percent
pub const GLOW_Y_RANGE: (f32, f32) = (15.0, 70.0); // percent

// Rest pose
pub const REST_ROTATION: Vec2 = Vec2::ZERO;
pub const REST_GLOW: Vec2 = Vec2::new(50.0, 35.0);

// Emblem gradient
pub const EMBLEM_ANGLE_DEG: u32 = 135;
pub const EMBLEM_SECONDARY_STOP_PCT: u32 = 60;
pub const EMBLEM_BASE_COLOR: &str = "#020817";

// Aura gradient
pub const AURA_FADE_PCT: u32 = 65;

// Palette chips
pub const CHIP_ANGLE_DEG: u32 = 120;
pub const CHIP_GLOW_BLUR_PX: u32 = 20;
pub const CHIP_GLOW_ALPHA_HEX: &str = "55"; // appended to a #rrggbb primary
