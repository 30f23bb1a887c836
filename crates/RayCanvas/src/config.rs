//! # Configuration
//!
//! This module defines the configuration struct for a drawing session.

use glam::Vec4;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a [`RayConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must have at least one division per axis")]
    ZeroDivisions,
    #[error("ray count must be at least one")]
    ZeroRayCount,
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration parameters for a [`crate::DrawingSession`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RayConfig {
    /// Equal partitions per axis. Default: 14.
    pub divisions: u32,
    /// Segments drawn per anchor point. Default: 10.
    pub ray_count: u32,
    /// Visual styling configuration.
    pub style: CanvasStyle,
}

impl Default for RayConfig {
    fn default() -> Self {
        Self {
            divisions: 14,
            ray_count: 10,
            style: CanvasStyle::default(),
        }
    }
}

impl RayConfig {
    /// Parses a JSON document. Missing fields fall back to their defaults.
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.divisions == 0 {
            return Err(ConfigError::ZeroDivisions);
        }
        if self.ray_count == 0 {
            return Err(ConfigError::ZeroRayCount);
        }
        Ok(())
    }
}

/// Visual styling configuration for the canvas.
///
/// Colors are RGBA in `0.0 - 1.0` using `glam::Vec4`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasStyle {
    /// Fill used when the surface is cleared.
    pub background_color: Vec4,
    /// Color of the grid lines. Also the initial stroke for rays.
    pub grid_color: Vec4,
    /// Width of grid lines and rays in pixels.
    pub line_width: f32,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            background_color: Vec4::ONE,
            // LightGray (#d3d3d3)
            grid_color: Vec4::new(211.0 / 255.0, 211.0 / 255.0, 211.0 / 255.0, 1.0),
            line_width: 1.0,
        }
    }
}
