// Copyright 2026 the Logax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data range derivation for a log axis.
//!
//! The extent functions fold the visible bound series into a `(min, max)`
//! pair, skipping points whose numeric conversion fails (`NaN`).
//! [`resolve_range`] then applies configured overrides and the
//! degenerate-range correction, yielding the range tick generation runs on.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use logax_core::{AxisId, SeriesKind, SeriesSet};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis::TickOptions;

/// Fixed fallback range when there is no usable data at all.
const DEFAULT_RANGE: (f64, f64) = (1.0, 10.0);

/// Min/max over every visible bound series' values, flattened.
pub(crate) fn flat_extent(
    set: &SeriesSet,
    axis: AxisId,
    horizontal: bool,
) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for series in set.visible_for_axis(axis, horizontal) {
        for index in 0..series.len() {
            let v = series.right_value(index);
            if v.is_nan() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
    }
    (min <= max).then_some((min, max))
}

/// Min/max over cumulative per-index sums, grouped by series kind.
///
/// Series of one kind are summed slot-by-slot (a later, longer series extends
/// the sum array; fresh slots start at 0). With `relative` set, every touched
/// slot is forced to the constant 100 instead — percentage stacking
/// normalizes magnitude away. Each kind's extent over its summed array is
/// combined into the overall extent.
pub(crate) fn stacked_extent(
    set: &SeriesSet,
    axis: AxisId,
    horizontal: bool,
    relative: bool,
) -> Option<(f64, f64)> {
    let mut sums_per_kind: HashMap<SeriesKind, Vec<f64>> = HashMap::new();
    for series in set.visible_for_axis(axis, horizontal) {
        let sums = sums_per_kind.entry(series.kind).or_default();
        for index in 0..series.len() {
            let v = series.right_value(index);
            if v.is_nan() {
                continue;
            }
            if sums.len() <= index {
                // Slots nothing ever contributes to stay NaN and are
                // ignored below.
                sums.resize(index + 1, f64::NAN);
            }
            let slot = &mut sums[index];
            if slot.is_nan() {
                *slot = 0.0;
            }
            if relative {
                *slot = 100.0;
            } else {
                // No positive/negative split: a log scale cannot cross zero
                // anyway.
                *slot += v;
            }
        }
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sums in sums_per_kind.values() {
        let mut kind_min = f64::INFINITY;
        let mut kind_max = f64::NEG_INFINITY;
        for &v in sums {
            if v.is_nan() {
                continue;
            }
            kind_min = kind_min.min(v);
            kind_max = kind_max.max(v);
        }
        min = min.min(kind_min);
        max = max.max(kind_max);
    }
    (min <= max).then_some((min, max))
}

/// Applies configured overrides and the degenerate-range correction.
///
/// `ticks.max`/`ticks.min` unconditionally replace the derived endpoints.
/// A collapsed range around a non-zero value `v` expands to one decade below
/// and above `10^floor(log10(v))`; a zero value or no data at all falls back
/// to `[1, 10]`.
pub(crate) fn resolve_range(derived: Option<(f64, f64)>, opts: &TickOptions) -> (f64, f64) {
    let mut min = derived.map(|(lo, _)| lo);
    let mut max = derived.map(|(_, hi)| hi);
    if let Some(m) = opts.max {
        max = Some(m);
    }
    if let Some(m) = opts.min {
        min = Some(m);
    }

    // A single known endpoint behaves like a collapsed range at that value.
    let (min, max) = match (min, max) {
        (None, None) => return DEFAULT_RANGE,
        (Some(v), None) | (None, Some(v)) => (v, v),
        (Some(lo), Some(hi)) => (lo, hi),
    };

    if min == max {
        if min != 0.0 {
            let exp = min.log10().floor();
            #[allow(
                clippy::cast_possible_truncation,
                reason = "decade exponents of finite chart data fit in i32"
            )]
            let exp = exp.clamp(i32::MIN as f64 + 1.0, i32::MAX as f64 - 1.0) as i32;
            (10_f64.powi(exp - 1), 10_f64.powi(exp + 1))
        } else {
            DEFAULT_RANGE
        }
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use logax_core::Series;

    use super::*;

    fn y_axis() -> AxisId {
        AxisId(0)
    }

    #[test]
    fn flat_extent_skips_nan_points() {
        let mut set = SeriesSet::new();
        set.push(Series::new(SeriesKind(0), vec![3.0, f64::NAN, 9.0]));
        assert_eq!(flat_extent(&set, y_axis(), false), Some((3.0, 9.0)));
    }

    #[test]
    fn flat_extent_is_none_without_numeric_data() {
        let mut set = SeriesSet::new();
        set.push(Series::new(SeriesKind(0), vec![f64::NAN]));
        assert_eq!(flat_extent(&set, y_axis(), false), None);
    }

    #[test]
    fn stacked_extent_sums_same_kind_per_index() {
        let mut set = SeriesSet::new();
        set.push(Series::new(SeriesKind(1), vec![3.0, 4.0]));
        set.push(Series::new(SeriesKind(1), vec![5.0, 1.0]));
        // Sums are [8, 5].
        assert_eq!(stacked_extent(&set, y_axis(), false, false), Some((5.0, 8.0)));
    }

    #[test]
    fn stacked_extent_keeps_kinds_independent() {
        let mut set = SeriesSet::new();
        set.push(Series::new(SeriesKind(1), vec![1.0, 2.0]));
        set.push(Series::new(SeriesKind(2), vec![10.0, 20.0]));
        assert_eq!(stacked_extent(&set, y_axis(), false, false), Some((1.0, 20.0)));
    }

    #[test]
    fn stacked_extent_aligns_longer_later_series_from_zero() {
        let mut set = SeriesSet::new();
        set.push(Series::new(SeriesKind(1), vec![3.0, 4.0]));
        set.push(Series::new(SeriesKind(1), vec![5.0, 1.0, 2.0]));
        // Sums are [8, 5, 2]; the fresh third slot started at 0.
        assert_eq!(stacked_extent(&set, y_axis(), false, false), Some((2.0, 8.0)));
    }

    #[test]
    fn relative_mode_pins_every_slot_to_100() {
        let mut set = SeriesSet::new();
        set.push(Series::new(SeriesKind(1), vec![3.0, 4.0]));
        set.push(Series::new(SeriesKind(1), vec![5.0, 1.0]));
        assert_eq!(
            stacked_extent(&set, y_axis(), false, true),
            Some((100.0, 100.0))
        );
    }

    #[test]
    fn resolve_range_defaults_without_data() {
        assert_eq!(resolve_range(None, &TickOptions::default()), (1.0, 10.0));
    }

    #[test]
    fn resolve_range_expands_collapsed_ranges_by_a_decade_each_way() {
        let opts = TickOptions::default();
        assert_eq!(resolve_range(Some((1.0, 1.0)), &opts), (0.1, 10.0));
        assert_eq!(resolve_range(Some((100.0, 100.0)), &opts), (10.0, 1000.0));
        assert_eq!(resolve_range(Some((50.0, 50.0)), &opts), (1.0, 100.0));
    }

    #[test]
    fn resolve_range_falls_back_for_a_collapsed_zero() {
        assert_eq!(
            resolve_range(Some((0.0, 0.0)), &TickOptions::default()),
            (1.0, 10.0)
        );
    }

    #[test]
    fn overrides_replace_derived_endpoints() {
        let opts = TickOptions {
            min: Some(2.0),
            max: Some(200.0),
            reverse: false,
        };
        assert_eq!(resolve_range(Some((5.0, 80.0)), &opts), (2.0, 200.0));
    }

    #[test]
    fn a_single_override_without_data_expands_around_itself() {
        let opts = TickOptions {
            min: Some(100.0),
            max: None,
            reverse: false,
        };
        assert_eq!(resolve_range(None, &opts), (10.0, 1000.0));
    }
}
