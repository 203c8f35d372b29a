//! Heatmap renderer: one colored cell per (year, month) record.
//!
//! The whole surface is cleared and redrawn on every draw. Nothing is drawn
//! when the year or variance range cannot be computed, and in that case the
//! surface is left exactly as it was.

use crate::axis::{Orient, Tick, axis};
use crate::color::THERMAL_RAMP;
use crate::models::{MonthlyRecord, month_name};
use crate::scale::{BandScale, LinearScale, SequentialColorScale, TimeScale, extent, year_start};
use crate::svg::Element;
use crate::tooltip::ensure_tooltip;
use crate::ui::Document;
use chrono::Datelike;
use std::sync::Arc;
use tracing::{debug, warn};

pub const WIDTH: f64 = 1600.0;
pub const HEIGHT: f64 = 560.0;
pub const MARGIN: Margin = Margin {
    top: 20.0,
    right: 20.0,
    bottom: 100.0,
    left: 60.0,
};
pub const LEGEND_WIDTH: f64 = 400.0;
pub const LEGEND_HEIGHT: f64 = 20.0;
const YEAR_TICK_STEP: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Month names ordered December first, so January takes the topmost band.
fn months_bottom_up() -> Vec<&'static str> {
    (1..=12).rev().filter_map(month_name).collect()
}

pub struct HeatmapScales {
    pub x: TimeScale,
    pub y: BandScale<&'static str>,
    pub color: SequentialColorScale,
    pub legend: LinearScale,
    /// Width of one year, measured from the first year and applied to all.
    pub cell_width: f64,
}

impl HeatmapScales {
    pub fn build(records: &[MonthlyRecord]) -> Option<Self> {
        let (min_year, max_year) = extent(records.iter().map(|r| r.year))?;
        let variance_range = extent(records.iter().map(|r| r.variance))?;

        let first = year_start(min_year)?;
        let next = year_start(min_year + 1)?;
        // A single year still gets one year of horizontal extent.
        let last = if max_year > min_year {
            year_start(max_year)?
        } else {
            next
        };

        let x = TimeScale::new((first, last), (MARGIN.left, WIDTH - MARGIN.right));
        let y = BandScale::new(months_bottom_up(), (HEIGHT - MARGIN.bottom, MARGIN.top));
        let color = SequentialColorScale::new(variance_range, &THERMAL_RAMP);
        let legend = LinearScale::new(variance_range, (0.0, LEGEND_WIDTH));
        let cell_width = x.apply(next) - x.apply(first);

        Some(Self {
            x,
            y,
            color,
            legend,
            cell_width,
        })
    }
}

/// Draws the full heatmap into `surface`; returns whether anything was drawn.
pub fn draw_heatmap(
    records: &[MonthlyRecord],
    base_temperature: f64,
    surface: Option<&mut Element>,
    tooltip: &mut Option<Element>,
) -> bool {
    let Some(surface) = surface else {
        debug!("drawing surface not available, skipping heatmap");
        return false;
    };
    if records.is_empty() {
        return false;
    }
    let Some(scales) = HeatmapScales::build(records) else {
        debug!("degenerate year or variance range, skipping heatmap");
        return false;
    };

    ensure_tooltip(tooltip);

    surface.clear();
    surface.set_attr("width", WIDTH);
    surface.set_attr("height", HEIGHT);

    surface.append(x_axis(&scales));
    surface.append(y_axis(&scales));
    surface.append(cells(records, base_temperature, &scales));
    surface.append(legend(&scales));
    true
}

fn x_axis(scales: &HeatmapScales) -> Element {
    let ticks: Vec<Tick> = scales
        .x
        .year_ticks(YEAR_TICK_STEP)
        .into_iter()
        .map(|date| Tick::new(scales.x.apply(date), date.year().to_string()))
        .collect();

    axis(Orient::Bottom, scales.x.range(), &ticks)
        .attr("id", "x-axis")
        .attr("transform", format!("translate(0, {})", HEIGHT - MARGIN.bottom))
}

fn y_axis(scales: &HeatmapScales) -> Element {
    let half_band = scales.y.bandwidth() / 2.0;
    let ticks: Vec<Tick> = scales
        .y
        .domain()
        .iter()
        .filter_map(|name| {
            scales
                .y
                .position(name)
                .map(|pos| Tick::new(pos + half_band, *name))
        })
        .collect();

    axis(Orient::Left, scales.y.range(), &ticks)
        .attr("id", "y-axis")
        .attr("transform", format!("translate({}, 0)", MARGIN.left))
}

fn cells(records: &[MonthlyRecord], base_temperature: f64, scales: &HeatmapScales) -> Element {
    let mut group = Element::new("g").attr("id", "cells");
    let height = scales.y.bandwidth();

    for record in records {
        let (Some(month_index), Some(name)) = (record.month_index(), record.month_name()) else {
            warn!(
                "skipping record {}-{} with month outside 1..=12",
                record.year, record.month
            );
            continue;
        };
        let (Some(date), Some(y)) = (year_start(record.year), scales.y.position(&name)) else {
            warn!("skipping record {}-{} outside the drawable range", record.year, record.month);
            continue;
        };

        group.append(
            Element::new("rect")
                .attr("class", "cell")
                .attr("data-month", month_index)
                .attr("data-year", record.year)
                .attr("data-temp", record.absolute_temp(base_temperature))
                .attr("data-variance", record.variance)
                .attr("x", scales.x.apply(date))
                .attr("y", y)
                .attr("width", scales.cell_width)
                .attr("height", height)
                .attr("fill", scales.color.apply(record.variance)),
        );
    }
    group
}

fn legend(scales: &HeatmapScales) -> Element {
    let swatch_width = LEGEND_WIDTH / THERMAL_RAMP.len() as f64;
    let mut group = Element::new("g").attr("id", "legend").attr(
        "transform",
        format!("translate({}, {})", MARGIN.left, HEIGHT - MARGIN.bottom + 50.0),
    );

    for (i, color) in THERMAL_RAMP.iter().enumerate() {
        group.append(
            Element::new("rect")
                .attr("class", "swatch")
                .attr("x", swatch_width * i as f64)
                .attr("width", swatch_width)
                .attr("height", LEGEND_HEIGHT)
                .attr("fill", color.hex())
                .attr("stroke", "black"),
        );
    }

    let ticks: Vec<Tick> = scales
        .legend
        .ticks(THERMAL_RAMP.len())
        .into_iter()
        .map(|value| Tick::new(scales.legend.apply(value), format!("{value:.1}")))
        .collect();
    group.append(
        axis(Orient::Bottom, scales.legend.range(), &ticks)
            .attr("transform", format!("translate(0, {LEGEND_HEIGHT})")),
    );
    group
}

/// Chart component: redraws only when handed a different record sequence.
#[derive(Default)]
pub struct Chart {
    drawn: Option<Arc<[MonthlyRecord]>>,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when a redraw ran.
    pub fn update(
        &mut self,
        records: &Arc<[MonthlyRecord]>,
        base_temperature: f64,
        document: &mut Document,
    ) -> bool {
        if self
            .drawn
            .as_ref()
            .is_some_and(|drawn| Arc::ptr_eq(drawn, records))
        {
            return false;
        }
        self.drawn = Some(Arc::clone(records));
        let Document { surface, tooltip } = document;
        draw_heatmap(records, base_temperature, surface.as_mut(), tooltip)
    }
}
