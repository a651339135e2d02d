// Copyright 2026 the Logax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis geometry supplied by the host layout engine.

use kurbo::{Insets, Rect};

/// The pixel band an axis maps into: outer bounds plus inner padding.
///
/// Padding is the space reserved inside the bounds (label gutters and the
/// like); the value range maps onto the padded interior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisGeometry {
    /// Outer axis bounds in screen pixels.
    pub bounds: Rect,
    /// Padding inside the bounds: `x0`/`x1` left/right, `y0`/`y1` top/bottom.
    pub padding: Insets,
}

impl AxisGeometry {
    /// Creates a geometry with no padding.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            padding: Insets::ZERO,
        }
    }

    /// Sets the inner padding.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Left edge of the bounds.
    pub fn left(&self) -> f64 {
        self.bounds.x0
    }

    /// Right edge of the bounds.
    pub fn right(&self) -> f64 {
        self.bounds.x1
    }

    /// Top edge of the bounds.
    pub fn top(&self) -> f64 {
        self.bounds.y0
    }

    /// Bottom edge of the bounds.
    pub fn bottom(&self) -> f64 {
        self.bounds.y1
    }

    /// Outer width.
    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    /// Outer height.
    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    /// Width of the padded interior.
    pub fn inner_width(&self) -> f64 {
        self.width() - (self.padding.x0 + self.padding.x1)
    }

    /// Height of the padded interior.
    pub fn inner_height(&self) -> f64 {
        self.height() - (self.padding.y0 + self.padding.y1)
    }
}
