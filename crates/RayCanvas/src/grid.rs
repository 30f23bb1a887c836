//! # Grid Geometry
//!
//! Interior grid line positions for a surface. Everything here is a pure
//! function of the surface size, so callers recompute instead of caching
//! across resizes.

use glam::{UVec2, Vec2};

/// Interior line positions along one axis of length `extent`.
///
/// Returns `divisions - 1` strictly increasing values. Each one is snapped to
/// the pixel grid and offset by half a pixel so 1px lines stay crisp.
pub fn axis_points(extent: u32, divisions: u32) -> Vec<f32> {
    (1..divisions)
        .map(|i| (extent as f64 * i as f64 / divisions as f64).floor() as f32 + 0.5)
        .collect()
}

/// Grid line positions for a given surface size.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    pub divisions: u32,
    pub x_points: Vec<f32>,
    pub y_points: Vec<f32>,
}

impl GridSpec {
    pub fn for_size(size: UVec2, divisions: u32) -> Self {
        Self {
            divisions,
            x_points: axis_points(size.x, divisions),
            y_points: axis_points(size.y, divisions),
        }
    }

    /// The lattice point `(x_points[ix], y_points[iy])`, if both indices are in range.
    pub fn intersection(&self, ix: usize, iy: usize) -> Option<Vec2> {
        Some(Vec2::new(*self.x_points.get(ix)?, *self.y_points.get(iy)?))
    }

    /// True when there are no interior points to aim at (a single division).
    pub fn is_empty(&self) -> bool {
        self.x_points.is_empty() || self.y_points.is_empty()
    }
}
