//! # Anchors
//!
//! The closed set of places rays can start from.

use glam::{UVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Where a family of rays is anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorKind {
    /// The four edge midpoints.
    Midpoints,
    /// The four corners.
    Corners,
    /// The surface center.
    Center,
}

/// Normalized phrase -> anchor. Anything not listed here is not an anchor.
const PHRASES: [(&str, AnchorKind); 3] = [
    ("the midpoints of four sides", AnchorKind::Midpoints),
    ("four corners", AnchorKind::Corners),
    ("the center", AnchorKind::Center),
];

impl AnchorKind {
    pub const ALL: [AnchorKind; 3] = [AnchorKind::Midpoints, AnchorKind::Corners, AnchorKind::Center];

    /// Looks up a normalized (lowercase, trimmed) phrase.
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        PHRASES
            .iter()
            .find(|(text, _)| *text == phrase)
            .map(|(_, kind)| *kind)
    }

    /// The canonical phrase for this anchor.
    pub fn phrase(self) -> &'static str {
        match self {
            AnchorKind::Midpoints => PHRASES[0].0,
            AnchorKind::Corners => PHRASES[1].0,
            AnchorKind::Center => PHRASES[2].0,
        }
    }

    /// Anchor points for a surface of `size`, in a fixed order.
    pub fn points(self, size: UVec2) -> Vec<Vec2> {
        let w = size.x as f32;
        let h = size.y as f32;
        match self {
            AnchorKind::Midpoints => vec![
                Vec2::new(w / 2.0, 0.0),
                Vec2::new(w / 2.0, h),
                Vec2::new(0.0, h / 2.0),
                Vec2::new(w, h / 2.0),
            ],
            AnchorKind::Corners => vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, h),
                Vec2::new(w, 0.0),
                Vec2::new(w, h),
            ],
            AnchorKind::Center => vec![Vec2::new(w / 2.0, h / 2.0)],
        }
    }
}
