// Copyright 2026 the Logax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series containers and the raw-value access trait.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::{AxisId, SeriesKind};

/// Read access to one series' raw data points.
///
/// `value` returns `None` for a missing or non-numeric datum; axes treat such
/// points as absent rather than as errors.
pub trait SeriesData: core::fmt::Debug {
    /// Returns the number of data points.
    fn len(&self) -> usize;

    /// Returns `true` if the series has no data points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the numeric value at `index`, if present.
    fn value(&self, index: usize) -> Option<f64>;
}

impl SeriesData for Vec<f64> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn value(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }
}

/// One data series: a kind key, axis bindings, a visibility flag and its data.
///
/// Owned by the chart's [`SeriesSet`]; axes only ever read it.
#[derive(Debug)]
pub struct Series {
    /// Series-type key used for stacked grouping.
    pub kind: SeriesKind,
    /// Axis this series is bound to horizontally.
    pub x_axis: AxisId,
    /// Axis this series is bound to vertically.
    pub y_axis: AxisId,
    /// Hidden series are excluded from range derivation.
    pub visible: bool,
    /// The raw data points.
    pub data: Box<dyn SeriesData>,
}

impl Series {
    /// Creates a visible series of the given kind, bound to axis 0 on both
    /// sides.
    pub fn new(kind: SeriesKind, data: impl SeriesData + 'static) -> Self {
        Self {
            kind,
            x_axis: AxisId(0),
            y_axis: AxisId(0),
            visible: true,
            data: Box::new(data),
        }
    }

    /// Sets the horizontal axis binding.
    pub fn with_x_axis(mut self, axis: AxisId) -> Self {
        self.x_axis = axis;
        self
    }

    /// Sets the vertical axis binding.
    pub fn with_y_axis(mut self, axis: AxisId) -> Self {
        self.y_axis = axis;
        self
    }

    /// Sets the visibility flag.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Returns the number of data points.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series has no data points.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the numeric value at `index`, or `NaN` when the datum is
    /// missing or out of range.
    pub fn right_value(&self, index: usize) -> f64 {
        self.data.value(index).unwrap_or(f64::NAN)
    }
}

/// The set of series backing one chart.
#[derive(Debug, Default)]
pub struct SeriesSet {
    /// All series, visible or not.
    pub series: Vec<Series>,
}

impl SeriesSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a series and returns its index.
    pub fn push(&mut self, series: Series) -> usize {
        self.series.push(series);
        self.series.len() - 1
    }

    /// Returns the series at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    /// Returns the visible series bound to `axis`.
    ///
    /// Horizontal axes match on the x-binding, vertical axes on the
    /// y-binding.
    pub fn visible_for_axis(
        &self,
        axis: AxisId,
        horizontal: bool,
    ) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |s| {
            s.visible && (if horizontal { s.x_axis } else { s.y_axis }) == axis
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn visible_for_axis_filters_on_binding_and_visibility() {
        let mut set = SeriesSet::new();
        set.push(Series::new(SeriesKind(0), vec![1.0]).with_y_axis(AxisId(1)));
        set.push(Series::new(SeriesKind(0), vec![2.0]).with_y_axis(AxisId(2)));
        set.push(
            Series::new(SeriesKind(0), vec![3.0])
                .with_y_axis(AxisId(1))
                .with_visible(false),
        );

        let bound: Vec<_> = set.visible_for_axis(AxisId(1), false).collect();
        assert_eq!(bound.len(), 1, "hidden and foreign series must be skipped");
        assert_eq!(bound[0].right_value(0), 1.0);
    }

    #[test]
    fn horizontal_axes_match_the_x_binding() {
        let mut set = SeriesSet::new();
        set.push(
            Series::new(SeriesKind(0), vec![1.0])
                .with_x_axis(AxisId(7))
                .with_y_axis(AxisId(1)),
        );

        assert_eq!(set.visible_for_axis(AxisId(7), true).count(), 1);
        assert_eq!(set.visible_for_axis(AxisId(7), false).count(), 0);
    }

    #[test]
    fn right_value_is_nan_for_missing_points() {
        let series = Series::new(SeriesKind(0), vec![4.0]);
        assert_eq!(series.right_value(0), 4.0);
        assert!(series.right_value(1).is_nan(), "out of range must read NaN");
    }
}
