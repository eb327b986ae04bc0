//! Interactive logo state.
//!
//! A `LogoWidget` owns the current pose, the selected palette and the two
//! gradient strings derived from them. The strings are re-derived only when
//! their inputs change, so renderers can read them on every frame.

use crate::gradient::{aura_gradient, emblem_gradient, orbit_transform};
use crate::palette::{Palette, PALETTES};
use crate::pointer::{pose_for_cursor, BoundingBox, GlowPosition, Pose, Rotation};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Engagement {
    /// Pointer absent; pose at rest.
    #[default]
    Neutral,
    /// Pointer over the surface; pose follows the cursor.
    Engaged,
}

#[derive(Clone, Debug)]
pub struct LogoWidget {
    pose: Pose,
    selected: usize,
    engagement: Engagement,
    emblem: String,
    aura: String,
}

impl Default for LogoWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl LogoWidget {
    pub fn new() -> Self {
        let pose = Pose::REST;
        let palette = &PALETTES[0];
        Self {
            pose,
            selected: 0,
            engagement: Engagement::Neutral,
            emblem: emblem_gradient(palette),
            aura: aura_gradient(palette, pose.glow),
        }
    }

    pub fn palettes(&self) -> &'static [Palette] {
        PALETTES
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn palette(&self) -> &'static Palette {
        &PALETTES[self.selected]
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn rotation(&self) -> Rotation {
        self.pose.rotation
    }

    pub fn glow(&self) -> GlowPosition {
        self.pose.glow
    }

    pub fn engagement(&self) -> Engagement {
        self.engagement
    }

    pub fn emblem_gradient(&self) -> &str {
        &self.emblem
    }

    pub fn aura_gradient(&self) -> &str {
        &self.aura
    }

    pub fn transform(&self) -> String {
        orbit_transform(self.pose.rotation)
    }

    /// Switch the active palette. Out-of-range indices are ignored.
    pub fn select_palette(&mut self, index: usize) {
        let Some(palette) = PALETTES.get(index) else {
            log::debug!("[palette] ignoring out-of-range index {}", index);
            return;
        };
        if index == self.selected {
            return;
        }
        self.selected = index;
        self.emblem = emblem_gradient(palette);
        self.aura = aura_gradient(palette, self.pose.glow);
        log::debug!("[palette] selected {} ({})", index, palette.name);
    }

    /// Track the cursor over `bounds`. A degenerate box leaves the widget untouched.
    pub fn on_pointer_move(&mut self, cursor: Vec2, bounds: BoundingBox) {
        match pose_for_cursor(cursor, &bounds) {
            Some(pose) => {
                self.engagement = Engagement::Engaged;
                self.set_pose(pose);
            }
            None => {
                log::trace!("[pointer] skipped move over degenerate box {:?}", bounds);
            }
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.engagement = Engagement::Neutral;
        self.set_pose(Pose::REST);
    }

    fn set_pose(&mut self, pose: Pose) {
        let glow_changed = pose.glow != self.pose.glow;
        self.pose = pose;
        if glow_changed {
            self.aura = aura_gradient(self.palette(), pose.glow);
        }
    }
}
