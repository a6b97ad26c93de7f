//! Canvas-space point and rectangle algebra.
//!
//! `CanvasPoint` and `CanvasRect` are plain values. The well-typed
//! combinations are available as `std::ops` impls; [`CanvasValue`] carries the
//! same operations over operands whose types are only known at runtime and
//! rejects the combinations the algebra does not define.

use std::ops::{Add, AddAssign, BitOr, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};

/// A point on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both components set to `v`
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Componentwise minimum over a non-empty sequence
    pub fn min<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = CanvasPoint>,
    {
        points
            .into_iter()
            .reduce(|a, b| Self::new(a.x.min(b.x), a.y.min(b.y)))
            .ok_or(ExportError::EmptySequence("min"))
    }

    /// Componentwise maximum over a non-empty sequence
    pub fn max<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = CanvasPoint>,
    {
        points
            .into_iter()
            .reduce(|a, b| Self::new(a.x.max(b.x), a.y.max(b.y)))
            .ok_or(ExportError::EmptySequence("max"))
    }
}

impl From<[f64; 2]> for CanvasPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for CanvasPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl Add for CanvasPoint {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<f64> for CanvasPoint {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        Self::new(self.x + rhs, self.y + rhs)
    }
}

impl AddAssign for CanvasPoint {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for CanvasPoint {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<f64> for CanvasPoint {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.x - rhs, self.y - rhs)
    }
}

impl Mul for CanvasPoint {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f64> for CanvasPoint {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div for CanvasPoint {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f64> for CanvasPoint {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for CanvasPoint {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

/// Axis-aligned rectangle on the canvas; `min <= max` on both axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    min: CanvasPoint,
    max: CanvasPoint,
}

impl CanvasRect {
    /// Rectangle spanning two opposite corners, in any order
    pub fn new(a: CanvasPoint, b: CanvasPoint) -> Self {
        Self {
            min: CanvasPoint::new(a.x.min(b.x), a.y.min(b.y)),
            max: CanvasPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Zero-sized rectangle at `p`
    pub fn point(p: CanvasPoint) -> Self {
        Self { min: p, max: p }
    }

    /// Minimal rectangle covering all `points`
    pub fn from_points(points: &[CanvasPoint]) -> Result<Self> {
        Ok(Self {
            min: CanvasPoint::min(points.iter().copied())?,
            max: CanvasPoint::max(points.iter().copied())?,
        })
    }

    pub fn min(&self) -> CanvasPoint {
        self.min
    }

    pub fn max(&self) -> CanvasPoint {
        self.max
    }

    pub fn dims(&self) -> CanvasPoint {
        self.max - self.min
    }

    pub fn center(&self) -> CanvasPoint {
        (self.min + self.max) * 0.5
    }

    /// Minimal rectangle covering `self` and `other`
    pub fn union(&self, other: &CanvasRect) -> Self {
        Self {
            min: CanvasPoint::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: CanvasPoint::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Minimal rectangle covering `self` and `p`
    pub fn include(&self, p: CanvasPoint) -> Self {
        self.union(&Self::point(p))
    }

    /// Minimal rectangle covering every rectangle in `rects`
    pub fn union_all<I>(rects: I) -> Result<Self>
    where
        I: IntoIterator<Item = CanvasRect>,
    {
        rects
            .into_iter()
            .reduce(|acc, r| acc.union(&r))
            .ok_or(ExportError::EmptySequence("union_all"))
    }

    pub fn contains(&self, p: CanvasPoint) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

impl BitOr for CanvasRect {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(&rhs)
    }
}

impl BitOr<CanvasPoint> for CanvasRect {
    type Output = Self;
    fn bitor(self, rhs: CanvasPoint) -> Self {
        self.include(rhs)
    }
}

/// A canvas operand whose type is checked at runtime
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasValue {
    Scalar(f64),
    Point(CanvasPoint),
    Rect(CanvasRect),
}

impl CanvasValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            CanvasValue::Scalar(_) => "scalar",
            CanvasValue::Point(_) => "point",
            CanvasValue::Rect(_) => "rect",
        }
    }

    pub fn add(self, rhs: CanvasValue) -> Result<CanvasValue> {
        self.arith("add", rhs, |a, b| a + b, |a, s| a + s)
    }

    pub fn sub(self, rhs: CanvasValue) -> Result<CanvasValue> {
        self.arith("sub", rhs, |a, b| a - b, |a, s| a - s)
    }

    pub fn mul(self, rhs: CanvasValue) -> Result<CanvasValue> {
        self.arith("mul", rhs, |a, b| a * b, |a, s| a * s)
    }

    pub fn div(self, rhs: CanvasValue) -> Result<CanvasValue> {
        self.arith("div", rhs, |a, b| a / b, |a, s| a / s)
    }

    pub fn neg(self) -> Result<CanvasValue> {
        self.mul(CanvasValue::Scalar(-1.0))
    }

    /// Rectangle union with a rectangle or a point
    pub fn union(self, rhs: CanvasValue) -> Result<CanvasValue> {
        match (self, rhs) {
            (CanvasValue::Rect(a), CanvasValue::Rect(b)) => Ok(CanvasValue::Rect(a | b)),
            (CanvasValue::Rect(a), CanvasValue::Point(p)) => Ok(CanvasValue::Rect(a | p)),
            (lhs, rhs) => Err(lhs.unsupported("union", rhs)),
        }
    }

    pub fn as_point(&self) -> Option<CanvasPoint> {
        match self {
            CanvasValue::Point(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_rect(&self) -> Option<CanvasRect> {
        match self {
            CanvasValue::Rect(r) => Some(*r),
            _ => None,
        }
    }

    fn arith(
        self,
        op: &'static str,
        rhs: CanvasValue,
        pointwise: impl Fn(CanvasPoint, CanvasPoint) -> CanvasPoint,
        scalar: impl Fn(CanvasPoint, f64) -> CanvasPoint,
    ) -> Result<CanvasValue> {
        match (self, rhs) {
            (CanvasValue::Point(a), CanvasValue::Point(b)) => Ok(CanvasValue::Point(pointwise(a, b))),
            (CanvasValue::Point(a), CanvasValue::Scalar(s)) => Ok(CanvasValue::Point(scalar(a, s))),
            (lhs, rhs) => Err(lhs.unsupported(op, rhs)),
        }
    }

    fn unsupported(&self, op: &'static str, rhs: CanvasValue) -> ExportError {
        ExportError::UnsupportedOperand {
            op,
            lhs: self.type_name(),
            rhs: rhs.type_name(),
        }
    }
}

impl From<f64> for CanvasValue {
    fn from(v: f64) -> Self {
        CanvasValue::Scalar(v)
    }
}

impl From<CanvasPoint> for CanvasValue {
    fn from(p: CanvasPoint) -> Self {
        CanvasValue::Point(p)
    }
}

impl From<CanvasRect> for CanvasValue {
    fn from(r: CanvasRect) -> Self {
        CanvasValue::Rect(r)
    }
}
