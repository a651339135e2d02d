// Copyright 2026 the Logax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decade tick generation for a log axis.
//!
//! The ladder is dense: nine mantissa steps per decade
//! (`1, 2, ..., 9, 10, 20, ..., 90, 100, ...`) plus a closing power of ten.
//! Formatting decides which of these actually get labels; see
//! [`crate::log_tick_label`].

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis::TickOptions;

/// The final tick set and the endpoints pixel mapping runs between.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TickLayout {
    /// Tick values in render order.
    pub(crate) values: Vec<f64>,
    /// Smallest covered value (overrides take precedence).
    pub(crate) min: f64,
    /// Largest covered value (overrides take precedence).
    pub(crate) max: f64,
    /// Mapping endpoint for the band start; equals `max` when reversed.
    pub(crate) start: f64,
    /// Mapping endpoint for the band end; equals `min` when reversed.
    pub(crate) end: f64,
}

fn decade_exponent(v: f64) -> i32 {
    let e = v.clamp(i32::MIN as f64 + 1.0, i32::MAX as f64 - 1.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to the i32 range"
    )]
    {
        e as i32
    }
}

/// Derives the ordered tick set for `[min, max]` in a single pass.
///
/// The transformations run in a fixed order: ladder generation, endpoint
/// pinning for configured overrides, vertical-axis reversal (largest value
/// renders at the top of the screen), min/max re-derivation from the ticks
/// with overrides reapplied, and the user-requested reversal which also swaps
/// the mapping endpoints.
///
/// Pinning may locally break sortedness when an override falls inside its
/// decade; the ladder is otherwise strictly increasing before reversal.
pub(crate) fn derive_ticks(
    min: f64,
    max: f64,
    vertical: bool,
    opts: &TickOptions,
) -> TickLayout {
    let min_exp = decade_exponent(min.log10().floor());
    let max_exp = decade_exponent(max.log10().ceil());

    let mut values = Vec::new();
    for exp in min_exp..max_exp {
        for mantissa in 1..10 {
            values.push(f64::from(mantissa) * 10_f64.powi(exp));
        }
    }
    values.push(10_f64.powi(max_exp));

    if opts.min.is_some() {
        values[0] = min;
    }
    if opts.max.is_some() {
        let last = values.len() - 1;
        values[last] = max;
    }

    if vertical {
        values.reverse();
    }

    // The ladder may have expanded the range; re-derive it from the ticks,
    // but configured overrides keep final precedence.
    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if let Some(m) = opts.min {
        min = m;
    }
    if let Some(m) = opts.max {
        max = m;
    }

    let (start, end) = if opts.reverse {
        values.reverse();
        (max, min)
    } else {
        (min, max)
    };

    TickLayout {
        values,
        min,
        max,
        start,
        end,
    }
}
