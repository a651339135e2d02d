// Copyright 2026 the Logax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series storage for logax chart axes.
//!
//! This crate holds the data-side vocabulary shared by axis implementations:
//! - typed ids ([`AxisId`], [`SeriesKind`]),
//! - the [`SeriesData`] access trait (a raw datum is a number or absent),
//! - [`Series`] and [`SeriesSet`], the read-only store axes derive ranges from.
//!
//! Axis computation itself lives in `logax_charts`; this crate never reads
//! configuration and never mutates series.

#![no_std]

extern crate alloc;

mod series;

pub use series::{Series, SeriesData, SeriesSet};

/// Identifier of an axis a series is bound to.
///
/// A series carries one x-binding and one y-binding; a horizontal axis selects
/// series by their x-binding, a vertical axis by their y-binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisId(pub u32);

/// The series-type key used to group series for stacked aggregation.
///
/// Series of the same kind are summed per data-point index when an axis is
/// stacked; distinct kinds are stacked independently and then combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeriesKind(pub u32);
