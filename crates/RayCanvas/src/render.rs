//! # Rendering System
//!
//! The engine never touches pixels. It writes to a [`Surface`], and the host
//! decides what a surface is. [`RecordingSurface`] is the usual choice: it
//! turns every call into a [`DrawCommand`] that the host application
//! (macroquad, egui, a PNG encoder...) interprets.

use glam::{UVec2, Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// A mutable raster with the two primitives the engine needs.
pub trait Surface {
    /// Current size in pixels.
    fn size(&self) -> UVec2;

    /// Changes the size. Existing content need not survive.
    fn resize(&mut self, size: UVec2);

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Vec4);

    /// Strokes a straight segment from `start` to `end`.
    fn stroke_line(&mut self, start: Vec2, end: Vec2, color: Vec4, width: f32);
}

/// A single drawing primitive.
///
/// Coordinates are in **Surface Space** (Pixels).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear {
        /// Surface size at the time of the clear.
        size: UVec2,
        /// Fill color (RGBA, 0.0 - 1.0).
        color: Vec4,
    },
    /// A straight line segment.
    Line {
        /// Start point in pixels.
        start: Vec2,
        /// End point in pixels.
        end: Vec2,
        /// Line color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Line thickness in pixels.
        width: f32,
    },
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;

/// A [`Surface`] that records calls as a [`RenderList`].
///
/// `clear` drops everything recorded so far, since nothing beneath a full
/// fill can be visible.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: UVec2,
    commands: RenderList,
}

impl RecordingSurface {
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded `Line` commands.
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Line { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn resize(&mut self, size: UVec2) {
        self.size = size;
        self.commands.clear();
    }

    fn clear(&mut self, color: Vec4) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            size: self.size,
            color,
        });
    }

    fn stroke_line(&mut self, start: Vec2, end: Vec2, color: Vec4, width: f32) {
        self.commands.push(DrawCommand::Line {
            start,
            end,
            color,
            width,
        });
    }
}
