// Copyright 2026 the Logax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The logarithmic axis component.
//!
//! [`LogAxis`] rebuilds its state from scratch on every [`Axis::recompute`]
//! call: range derivation (flat or stacked) → degenerate-range correction →
//! tick generation with override/reversal handling → mapping endpoints. The
//! host layout engine triggers one recompute per layout pass and reads the
//! results back through the accessors and pixel mapping.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use logax_core::{AxisId, SeriesSet};

use crate::geometry::AxisGeometry;
use crate::range;
use crate::ticks;

/// Axis placement relative to the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisPosition {
    /// A horizontal axis above the plot.
    Top,
    /// A horizontal axis below the plot.
    Bottom,
    /// A vertical axis left of the plot.
    Left,
    /// A vertical axis right of the plot.
    Right,
}

impl AxisPosition {
    /// Returns `true` for `Top` and `Bottom`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Tick range behavior: optional hard endpoints and direction reversal.
///
/// Unlike the usual "nice range" hinting, `min`/`max` here are unconditional:
/// they replace the derived endpoints and pin the first/last tick. A zero
/// override counts as set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickOptions {
    /// Hard lower endpoint.
    pub min: Option<f64>,
    /// Hard upper endpoint.
    pub max: Option<f64>,
    /// Swaps the mapping direction and the exposed tick order.
    pub reverse: bool,
}

/// Configuration for one logarithmic axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisConfig {
    /// Axis placement; decides orientation and natural tick order.
    pub position: AxisPosition,
    /// Range the axis on cumulative per-kind sums instead of raw values.
    pub stacked: bool,
    /// Percentage stacking: every stacked slot counts as 100.
    pub relative_points: bool,
    /// Endpoint overrides and reversal.
    pub ticks: TickOptions,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            position: AxisPosition::Left,
            stacked: false,
            relative_points: false,
            ticks: TickOptions::default(),
        }
    }
}

impl AxisConfig {
    /// Sets the axis position.
    pub fn with_position(mut self, position: AxisPosition) -> Self {
        self.position = position;
        self
    }

    /// Enables stacked ranging.
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Enables percentage stacking (implies stacked semantics only when
    /// `stacked` is also set).
    pub fn with_relative_points(mut self, relative: bool) -> Self {
        self.relative_points = relative;
        self
    }

    /// Sets the tick options.
    pub fn with_ticks(mut self, ticks: TickOptions) -> Self {
        self.ticks = ticks;
        self
    }
}

/// Capability interface every axis kind exposes to the host renderer.
pub trait Axis {
    /// Returns `true` for top/bottom axes.
    fn is_horizontal(&self) -> bool;

    /// Rebuilds range, ticks and mapping endpoints from the current data.
    fn recompute(&mut self, data: &SeriesSet);

    /// Maps a data value to a pixel coordinate along the axis band.
    fn pixel_for_value(&self, value: f64) -> f64;

    /// Maps the tick at `index` to a pixel coordinate; `NaN` out of range.
    fn pixel_for_tick(&self, index: usize) -> f64;

    /// Returns a series' numeric value for tooltips/labels; `NaN` when the
    /// series or point does not exist.
    fn label_for_index(&self, data: &SeriesSet, point: usize, series: usize) -> f64;
}

/// A base-10 logarithmic axis.
///
/// The domain must be strictly positive: `log10` of zero or a negative value
/// propagates `NaN` through tick and pixel computation, except for the exact
/// value `0.0`, which pins to the band start (a drawing convenience inherited
/// from stacked bars based at zero).
#[derive(Debug)]
pub struct LogAxis {
    id: AxisId,
    config: AxisConfig,
    geometry: AxisGeometry,
    min: f64,
    max: f64,
    start: f64,
    end: f64,
    tick_values: Vec<f64>,
}

impl LogAxis {
    /// Creates an axis with the default `[1, 10]` range and no ticks; call
    /// [`Axis::recompute`] before mapping.
    pub fn new(id: AxisId, config: AxisConfig, geometry: AxisGeometry) -> Self {
        Self {
            id,
            config,
            geometry,
            min: 1.0,
            max: 10.0,
            start: 1.0,
            end: 10.0,
            tick_values: Vec::new(),
        }
    }

    /// The axis id series bind against.
    pub fn id(&self) -> AxisId {
        self.id
    }

    /// The configuration this axis was built with.
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// The pixel band geometry.
    pub fn geometry(&self) -> &AxisGeometry {
        &self.geometry
    }

    /// Replaces the geometry (the layout engine moves axes between passes).
    pub fn set_geometry(&mut self, geometry: AxisGeometry) {
        self.geometry = geometry;
    }

    /// Smallest covered value after the last recompute.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest covered value after the last recompute.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Mapping endpoint at the band start (`max` when reversed).
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Mapping endpoint at the band end (`min` when reversed).
    pub fn end(&self) -> f64 {
        self.end
    }

    /// The tick values in render order, frozen since the last recompute.
    pub fn ticks(&self) -> &[f64] {
        &self.tick_values
    }
}

impl Axis for LogAxis {
    fn is_horizontal(&self) -> bool {
        self.config.position.is_horizontal()
    }

    fn recompute(&mut self, data: &SeriesSet) {
        let horizontal = self.is_horizontal();
        let derived = if self.config.stacked {
            range::stacked_extent(data, self.id, horizontal, self.config.relative_points)
        } else {
            range::flat_extent(data, self.id, horizontal)
        };
        let (min, max) = range::resolve_range(derived, &self.config.ticks);
        let layout = ticks::derive_ticks(min, max, !horizontal, &self.config.ticks);
        self.min = layout.min;
        self.max = layout.max;
        self.start = layout.start;
        self.end = layout.end;
        self.tick_values = layout.values;
    }

    fn pixel_for_value(&self, value: f64) -> f64 {
        let g = &self.geometry;
        let range = self.end.log10() - self.start.log10();

        if self.is_horizontal() {
            if value == 0.0 {
                return g.left() + g.padding.x0;
            }
            let offset = g.inner_width() / range * (value.log10() - self.start.log10());
            g.left() + offset + g.padding.x0
        } else {
            if value == 0.0 {
                return g.top() + g.padding.y0;
            }
            // Bottom minus offset: screen y grows downward while the axis
            // value grows upward.
            let offset = g.inner_height() / range * (value.log10() - self.start.log10());
            (g.bottom() - g.padding.y1) - offset
        }
    }

    fn pixel_for_tick(&self, index: usize) -> f64 {
        match self.tick_values.get(index) {
            Some(&value) => self.pixel_for_value(value),
            None => f64::NAN,
        }
    }

    fn label_for_index(&self, data: &SeriesSet, point: usize, series: usize) -> f64 {
        data.get(series).map_or(f64::NAN, |s| s.right_value(point))
    }
}
