// Copyright 2026 the Logax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Log-axis demo.
//!
//! Builds a couple of decades-spanning series, recomputes a left log axis
//! against them, and writes an SVG whose gridlines, labels and data points
//! all come straight out of the public axis API.

use std::fmt::Write as _;

use kurbo::{Insets, Rect};
use logax_charts::{Axis, AxisConfig, AxisGeometry, LogAxis, TickOptions, log_tick_label};
use logax_core::{AxisId, Series, SeriesKind, SeriesSet};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 400.0;
const MARGIN: f64 = 48.0;

fn main() {
    let mut set = SeriesSet::new();
    let growth = set.push(Series::new(
        SeriesKind(0),
        vec![1.5, 4.0, 11.0, 30.0, 85.0, 240.0, 700.0, 1900.0],
    ));
    let noisy = set.push(Series::new(
        SeriesKind(0),
        vec![55.0, 20.0, 140.0, 35.0, 400.0, 90.0, 800.0, 260.0],
    ));

    let plot = Rect::new(MARGIN, MARGIN, WIDTH - MARGIN, HEIGHT - MARGIN);
    let geometry = AxisGeometry::new(plot).with_padding(Insets::new(0.0, 8.0, 0.0, 8.0));
    let mut y_axis = LogAxis::new(
        AxisId(0),
        AxisConfig::default().with_ticks(TickOptions::default()),
        geometry,
    );
    y_axis.recompute(&set);

    let svg = render(&y_axis, &set, &[(growth, "#4477aa"), (noisy, "#cc6677")]);
    std::fs::write("logax_demo.svg", svg).expect("write logax_demo.svg");
    println!(
        "wrote logax_demo.svg (y range [{}, {}], {} ticks)",
        y_axis.min(),
        y_axis.max(),
        y_axis.ticks().len()
    );
}

/// X position for a data point: indices spread evenly across the plot.
fn x_for_index(plot: Rect, index: usize, count: usize) -> f64 {
    let step = plot.width() / (count.saturating_sub(1).max(1)) as f64;
    plot.x0 + step * index as f64
}

fn render(y_axis: &LogAxis, set: &SeriesSet, series: &[(usize, &str)]) -> String {
    let plot = y_axis.geometry().bounds;
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect x="0" y="0" width="{WIDTH}" height="{HEIGHT}" fill="white"/>"#
    );

    // Gridlines and labels, straight from the tick table.
    for (index, &tick) in y_axis.ticks().iter().enumerate() {
        let y = y_axis.pixel_for_tick(index);
        let label = log_tick_label(tick);
        let stroke = if label.is_empty() { "#eeeeee" } else { "#cccccc" };
        let _ = writeln!(
            svg,
            r#"  <line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{stroke}"/>"#,
            plot.x0, plot.x1
        );
        if !label.is_empty() {
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{y}" font-size="11" text-anchor="end" dominant-baseline="middle">{label}</text>"#,
                plot.x0 - 6.0
            );
        }
    }

    let _ = writeln!(
        svg,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
        plot.x0, plot.y0, plot.x0, plot.y1
    );

    for &(series_index, color) in series {
        let Some(s) = set.get(series_index) else {
            continue;
        };
        let mut path = String::new();
        for point in 0..s.len() {
            let value = y_axis.label_for_index(set, point, series_index);
            if value.is_nan() {
                continue;
            }
            let x = x_for_index(plot, point, s.len());
            let y = y_axis.pixel_for_value(value);
            let cmd = if path.is_empty() { 'M' } else { 'L' };
            let _ = write!(path, "{cmd}{x:.2} {y:.2} ");
            let _ = writeln!(
                svg,
                r#"  <circle cx="{x:.2}" cy="{y:.2}" r="3" fill="{color}"/>"#
            );
        }
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{color}" stroke-width="1.5"/>"#,
            path.trim_end()
        );
    }

    svg.push_str("</svg>\n");
    svg
}
