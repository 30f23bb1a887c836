//! # RayCanvas
//!
//! `ray_canvas` is a headless engine that draws a square grid and overlays
//! randomized "rays" described by a tiny free-text directive language, e.g.
//! `red lines from the center, blue lines from four corners`.
//!
//! ## Core Architecture
//! - **Grid (`src/grid.rs`)**: Interior grid line positions for a surface size.
//! - **Directives (`src/directive.rs`)**: Tolerant parser turning text into `Directive`s.
//! - **Rays (`src/rays.rs`)**: Draws randomized segments from anchor points to grid intersections.
//! - **Session (`src/session.rs`)**: Owns the `Surface` and replays grid + directives on every trigger.
//! - **Render (`src/render.rs`)**: The `Surface` abstraction and a recorder producing `DrawCommand`s
//!   for the host to rasterize.

pub mod anchor;
pub mod color;
pub mod config;
pub mod directive;
pub mod grid;
pub mod random;
pub mod rays;
pub mod render;
pub mod session;

// Re-exports for convenience
pub use anchor::AnchorKind;
pub use config::{CanvasStyle, ConfigError, RayConfig};
pub use directive::{Directive, FragmentError, parse};
pub use grid::GridSpec;
pub use random::{RandomSource, RngSource};
pub use rays::RayRenderer;
pub use render::{DrawCommand, RecordingSurface, RenderList, Surface};
pub use session::DrawingSession;
