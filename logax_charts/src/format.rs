// Copyright 2026 the Logax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default tick labeling for log axes.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Returns the label for a log tick, or an empty string for unlabeled ticks.
///
/// The dense decade ladder would be unreadable fully labeled, so only ticks
/// whose mantissa is exactly 1, 2 or 5 get text, in exponential notation
/// (`2e1` for 20). Everything else renders as a bare gridline.
pub fn log_tick_label(value: f64) -> String {
    let exp = value.log10().floor();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "decade exponents of finite chart data fit in i32"
    )]
    let exp = exp.clamp(i32::MIN as f64 + 1.0, i32::MAX as f64 - 1.0) as i32;
    let mantissa = value / 10_f64.powi(exp);

    if mantissa == 1.0 || mantissa == 2.0 || mantissa == 5.0 {
        format!("{value:e}")
    } else {
        String::new()
    }
}
