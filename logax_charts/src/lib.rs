// Copyright 2026 the Logax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logarithmic chart axis built on `logax_core` series data.
//!
//! One component lives here: [`LogAxis`]. Each recompute pass derives a data
//! range from the visible bound series (flat or stacked), corrects degenerate
//! ranges, generates a dense power-of-ten tick ladder, applies min/max
//! overrides and reversal, and exposes value→pixel mapping along the axis
//! band.
//!
//! Drawing gridlines and labels is the host renderer's job; [`log_tick_label`]
//! only tells it which ticks carry text. Log axes cannot represent a
//! non-positive domain: zero and negative data values propagate `NaN` through
//! the mapping rather than being rejected.

#![no_std]

extern crate alloc;

mod axis;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod range;
mod ticks;

pub use axis::{Axis, AxisConfig, AxisPosition, LogAxis, TickOptions};
pub use format::log_tick_label;
pub use geometry::AxisGeometry;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("logax_charts requires either the `std` or `libm` feature");
