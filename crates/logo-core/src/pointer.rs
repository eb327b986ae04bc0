//! Cursor-to-pose mapping.
//!
//! Horizontal displacement from the box center tilts the logo around its Y
//! axis; vertical displacement tilts it around X, inverted so that moving the
//! cursor up brings the top edge toward the viewer. The glow follows the
//! cursor in percentage space but stays inside a fixed window.

use crate::constants::{GLOW_X_RANGE, GLOW_Y_RANGE, REST_GLOW, REST_ROTATION, TILT_FACTOR_DEG};
use glam::Vec2;

/// Tilt angles in degrees: `x` around the horizontal axis, `y` around the vertical.
pub type Rotation = Vec2;

/// Center of the radial highlight, in percent of the surface.
pub type GlowPosition = Vec2;

/// Position and size of the interactive surface in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True when the box cannot be divided by (zero, negative or NaN extent).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Cursor position relative to the box's top-left corner.
    #[inline]
    pub fn offset_of(&self, cursor: Vec2) -> Vec2 {
        cursor - Vec2::new(self.left, self.top)
    }
}

/// Rotation and glow, always updated together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub rotation: Rotation,
    pub glow: GlowPosition,
}

impl Pose {
    pub const REST: Pose = Pose {
        rotation: REST_ROTATION,
        glow: REST_GLOW,
    };
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

/// Map a viewport-space cursor to a pose. Returns `None` for a degenerate box.
pub fn pose_for_cursor(cursor: Vec2, bounds: &BoundingBox) -> Option<Pose> {
    if bounds.is_degenerate() {
        return None;
    }
    let offset = bounds.offset_of(cursor);
    let size = bounds.size();
    // Normalized displacement from the center, 0 at center and +-0.5 at the edges.
    let centered = (offset - size * 0.5) / size;
    let rotation = Rotation::new(
        centered.y * -TILT_FACTOR_DEG,
        centered.x * TILT_FACTOR_DEG,
    );
    let pct = offset / size * 100.0;
    let glow = GlowPosition::new(
        pct.x.clamp(GLOW_X_RANGE.0, GLOW_X_RANGE.1),
        pct.y.clamp(GLOW_Y_RANGE.0, GLOW_Y_RANGE.1),
    );
    Some(Pose { rotation, glow })
}
