//! Value types shared by the resizer, the platform emitters and the batch run.

use std::ops::Mul;

/// A density-independent size. Either component may be zero (or negative)
/// to mean "derive from the source aspect ratio".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LogicalSize {
    pub width: f64,
    pub height: f64,
}

impl LogicalSize {
    pub const ZERO: LogicalSize = LogicalSize {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when neither dimension was requested.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 && self.height <= 0.0
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

impl Mul<f64> for LogicalSize {
    type Output = LogicalSize;

    fn mul(self, factor: f64) -> LogicalSize {
        self.scaled(factor)
    }
}

/// How a requested size is reconciled with the source aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitPolicy {
    /// Use the requested box as-is once missing dimensions are derived.
    Fill,
    /// Shrink into the requested box, preserving the aspect ratio.
    #[default]
    Fit,
    /// Grow so both dimensions meet or exceed the requested box.
    Stretch,
}

/// What the single-image resizer should produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeTarget {
    /// Resolve `size` against the source dimensions with `policy`.
    Size { size: LogicalSize, policy: FitPolicy },
    /// Multiply the source pixel dimensions by a factor.
    Scale(f64),
}

impl ResizeTarget {
    /// True when the target leaves the source dimensions untouched.
    pub fn is_identity(&self) -> bool {
        match self {
            ResizeTarget::Size { size, .. } => size.is_empty(),
            ResizeTarget::Scale(factor) => (factor - 1.0).abs() <= f64::EPSILON,
        }
    }
}
