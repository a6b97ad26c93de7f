//! World-to-canvas projection settings.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};
use shared::ViewPlane;

use crate::canvas::CanvasPoint;

/// Per-export drawing parameters.
///
/// Built once for an export and passed by reference to every generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Applied to world-space points before dropping z; identity when `None`
    pub transform: Option<DMat4>,
    /// Stroke width of generated lines
    pub line_width: f64,
    /// Stroke color of generated lines
    pub line_color: String,
    /// Canvas units per world unit
    pub draw_scale: f64,
    /// Margin around the composed drawing
    pub padding: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            transform: None,
            line_width: 1.0,
            line_color: "red".to_string(),
            draw_scale: 10.0,
            padding: 10.0,
        }
    }
}

impl ProjectionConfig {
    /// Default settings looking straight at `plane`
    pub fn for_view(plane: ViewPlane) -> Self {
        Self::default().with_view(plane)
    }

    pub fn with_view(self, plane: ViewPlane) -> Self {
        self.with_transform(plane.projection_matrix())
    }

    pub fn with_transform(mut self, transform: DMat4) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_draw_scale(mut self, draw_scale: f64) -> Self {
        self.draw_scale = draw_scale;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_stroke(mut self, color: &str, width: f64) -> Self {
        self.line_color = color.to_string();
        self.line_width = width;
        self
    }

    /// Project a world-space point onto the canvas.
    ///
    /// The transform sees the full 3D point; truncation to x/y and scaling
    /// happen afterwards, in that order.
    pub fn world_to_canvas(&self, pos: DVec3) -> CanvasPoint {
        let projected = match &self.transform {
            Some(m) => m.transform_point3(pos),
            None => pos,
        };
        CanvasPoint::new(projected.x, projected.y) * self.draw_scale
    }
}
