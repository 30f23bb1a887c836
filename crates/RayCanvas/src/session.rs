//! # Drawing Session
//!
//! The orchestrator. A [`DrawingSession`] owns the surface and reruns the
//! whole pipeline (clear, grid, parse, rays) on every external trigger. No
//! geometry survives between triggers, so a resize needs no invalidation.

use glam::{UVec2, Vec2, Vec4};

use crate::color;
use crate::config::{ConfigError, RayConfig};
use crate::directive::{self, Directive};
use crate::grid::GridSpec;
use crate::random::RandomSource;
use crate::rays::RayRenderer;
use crate::render::Surface;

pub struct DrawingSession<S, R> {
    surface: S,
    config: RayConfig,
    rng: R,
    /// Mirrors a 2D canvas stroke style: unknown color words leave it as is.
    stroke: Vec4,
    last_input: String,
}

impl<S: Surface, R: RandomSource> DrawingSession<S, R> {
    /// Creates a session. The surface is not drawn until the first trigger.
    pub fn new(surface: S, config: RayConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let stroke = config.style.grid_color;
        Ok(Self {
            surface,
            config,
            rng,
            stroke,
            last_input: String::new(),
        })
    }

    pub fn config(&self) -> &RayConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The text most recently passed to [`Self::update`].
    pub fn last_input(&self) -> &str {
        &self.last_input
    }

    /// Grid for the current surface size. Recomputed on every call.
    pub fn grid(&self) -> GridSpec {
        GridSpec::for_size(self.surface.size(), self.config.divisions)
    }

    /// Clears to the background color and draws the full grid.
    pub fn refresh(&mut self) {
        let size = self.surface.size();
        let grid = self.grid();
        let style = &self.config.style;
        let (w, h) = (size.x as f32, size.y as f32);

        self.surface.clear(style.background_color);

        // Vertical Lines
        for &x in &grid.x_points {
            self.surface.stroke_line(
                Vec2::new(x, 0.0),
                Vec2::new(x, h),
                style.grid_color,
                style.line_width,
            );
        }

        // Horizontal Lines
        for &y in &grid.y_points {
            self.surface.stroke_line(
                Vec2::new(0.0, y),
                Vec2::new(w, y),
                style.grid_color,
                style.line_width,
            );
        }

        self.stroke = style.grid_color;
    }

    /// Draws rays for each directive in order, on top of whatever is there.
    ///
    /// Returns the total number of segments drawn.
    pub fn apply_directives(&mut self, directives: &[Directive]) -> usize {
        let grid = self.grid();
        let renderer = RayRenderer::new(self.config.ray_count, self.config.style.line_width);

        let mut drawn = 0;
        for directive in directives {
            match color::resolve(&directive.color) {
                Some(rgba) => self.stroke = rgba,
                None => tracing::warn!(
                    color = %directive.color,
                    "Unknown color, keeping previous stroke"
                ),
            }
            drawn += renderer.render(
                &mut self.surface,
                &grid,
                directive.anchor,
                self.stroke,
                &mut self.rng,
            );
        }
        drawn
    }

    /// Handles an "input changed" trigger: refresh, parse, draw.
    pub fn update(&mut self, input: &str) -> usize {
        self.last_input.clear();
        self.last_input.push_str(input);

        self.refresh();
        let directives = directive::parse(input);
        tracing::debug!(count = directives.len(), "Parsed directives");
        self.apply_directives(&directives)
    }

    /// Handles a "surface resized" trigger: resize, then replay the last input.
    pub fn resize(&mut self, size: UVec2) -> usize {
        tracing::debug!(width = size.x, height = size.y, "Surface resized");
        self.surface.resize(size);
        let input = std::mem::take(&mut self.last_input);
        self.update(&input)
    }
}
