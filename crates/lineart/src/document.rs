//! Output document model.

use serde::{Deserialize, Serialize};

use crate::canvas::{CanvasPoint, CanvasRect};

/// A straight stroke between two canvas points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_color: String,
    pub stroke_width: f64,
}

impl Line {
    pub fn new(a: CanvasPoint, b: CanvasPoint, stroke_color: &str, stroke_width: f64) -> Self {
        Self {
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
            stroke_color: stroke_color.to_string(),
            stroke_width,
        }
    }

    pub fn start(&self) -> CanvasPoint {
        CanvasPoint::new(self.x1, self.y1)
    }

    pub fn end(&self) -> CanvasPoint {
        CanvasPoint::new(self.x2, self.y2)
    }
}

/// Drawable primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryElement {
    Line(Line),
}

impl GeometryElement {
    /// Shift every coordinate of the shape by `offset`
    pub fn translate(&mut self, offset: CanvasPoint) {
        match self {
            GeometryElement::Line(line) => {
                line.x1 += offset.x;
                line.y1 += offset.y;
                line.x2 += offset.x;
                line.y2 += offset.y;
            }
        }
    }

    pub fn points(&self) -> Vec<CanvasPoint> {
        match self {
            GeometryElement::Line(line) => vec![line.start(), line.end()],
        }
    }
}

/// One generated element and its canvas bounds, before composition
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    pub element: GeometryElement,
    pub bounds: CanvasRect,
}

impl ElementRecord {
    pub fn new(element: GeometryElement, bounds: CanvasRect) -> Self {
        Self { element, bounds }
    }
}

/// Composed drawing: canvas size plus elements in draw order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<GeometryElement>,
}

impl Document {
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.elements.iter().map(|e| match e {
            GeometryElement::Line(line) => line,
        })
    }
}
