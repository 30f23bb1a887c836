use glam::{Vec2, Vec4};

use crate::anchor::AnchorKind;
use crate::grid::GridSpec;
use crate::random::RandomSource;
use crate::render::Surface;

/// Draws randomized rays from anchor points to grid intersections.
///
/// The renderer is stateless between calls: everything it needs (surface
/// size, grid, color, randomness) is passed in.
#[derive(Clone, Copy, Debug)]
pub struct RayRenderer {
    /// Segments per anchor point.
    pub ray_count: u32,
    /// Stroke width in pixels.
    pub width: f32,
}

impl RayRenderer {
    pub fn new(ray_count: u32, width: f32) -> Self {
        Self { ray_count, width }
    }

    /// Draws `ray_count` segments from every anchor point of `anchor`.
    ///
    /// The far endpoint of each segment takes an x from `grid.x_points` and an
    /// independent y from `grid.y_points`, so it always lands on a lattice
    /// intersection. Returns the number of segments drawn.
    pub fn render<S, R>(
        &self,
        surface: &mut S,
        grid: &GridSpec,
        anchor: AnchorKind,
        color: Vec4,
        rng: &mut R,
    ) -> usize
    where
        S: Surface + ?Sized,
        R: RandomSource + ?Sized,
    {
        if grid.is_empty() {
            tracing::debug!(?anchor, "Grid has no interior points, no rays drawn");
            return 0;
        }

        let mut drawn = 0;
        for origin in anchor.points(surface.size()) {
            for _ in 0..self.ray_count {
                let target = Vec2::new(
                    grid.x_points[rng.pick(grid.x_points.len())],
                    grid.y_points[rng.pick(grid.y_points.len())],
                );
                surface.stroke_line(origin, target, color, self.width);
                drawn += 1;
            }
        }
        drawn
    }
}
