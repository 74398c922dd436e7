use plotters::prelude::*;
use std::f64::consts::PI;
use crate::errors::{AppError, AppResult};
use crate::models::{EarningsPoint, StatusCount};

pub const CHART_WIDTH: u32 = 480;
pub const CHART_HEIGHT: u32 = 260;
const PADDING: i32 = 12;

const BAR_COLOR: RGBColor = RGBColor(0x3B, 0x82, 0xF6);
const AXIS_COLOR: RGBColor = RGBColor(0xD1, 0xD5, 0xDB);
const EMPTY_COLOR: RGBColor = RGBColor(0xE5, 0xE7, 0xEB);

fn chart_error(e: impl std::fmt::Display) -> AppError {
    tracing::error!("Failed to draw chart: {}", e);
    AppError::Chart(e.to_string())
}

/// Bar chart of monthly earnings as an inline SVG document. Labels are
/// rendered by the page, so the drawing needs no fonts.
pub fn earnings_bar_chart(points: &[EarningsPoint]) -> AppResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let width = CHART_WIDTH as i32;
        let baseline = CHART_HEIGHT as i32 - PADDING;
        let plot_height = baseline - PADDING;
        let max = points.iter().map(|p| p.earnings).fold(0.0, f64::max);
        let slot = (width - 2 * PADDING) / points.len().max(1) as i32;

        for (i, point) in points.iter().enumerate() {
            let height = if max > 0.0 {
                (point.earnings / max * plot_height as f64).round() as i32
            } else {
                0
            };
            let left = PADDING + i as i32 * slot + slot / 5;
            let right = PADDING + (i as i32 + 1) * slot - slot / 5;
            root.draw(&Rectangle::new(
                [(left, baseline - height), (right, baseline)],
                BAR_COLOR.filled(),
            ))
            .map_err(chart_error)?;
        }

        root.draw(&PathElement::new(
            vec![(PADDING, baseline), (width - PADDING, baseline)],
            &AXIS_COLOR,
        ))
        .map_err(chart_error)?;
        root.present().map_err(chart_error)?;
    }
    Ok(svg)
}

/// Pie chart of the status distribution as an inline SVG document. Slices
/// start at twelve o'clock and follow the breakdown order.
pub fn status_pie_chart(breakdown: &[StatusCount]) -> AppResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let center = (CHART_WIDTH as i32 / 2, CHART_HEIGHT as i32 / 2);
        let radius = (CHART_HEIGHT as i32 / 2 - PADDING) as f64;
        let total: usize = breakdown.iter().map(|s| s.count).sum();

        if total == 0 {
            root.draw(&Circle::new(center, radius as i32, EMPTY_COLOR.filled()))
                .map_err(chart_error)?;
        } else {
            let mut start = -PI / 2.0;
            for slice in breakdown.iter().filter(|s| s.count > 0) {
                let sweep = slice.count as f64 / total as f64 * 2.0 * PI;
                let (r, g, b) = slice.status.chart_color();
                root.draw(&Polygon::new(
                    wedge(center, radius, start, sweep),
                    RGBColor(r, g, b).filled(),
                ))
                .map_err(chart_error)?;
                start += sweep;
            }
        }
        root.present().map_err(chart_error)?;
    }
    Ok(svg)
}

// Polygon approximating a circular sector, one vertex per degree of arc
fn wedge(center: (i32, i32), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = ((sweep.to_degrees()).ceil() as usize).max(1);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let angle = start + sweep * step as f64 / steps as f64;
        points.push((
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 + (radius * angle.sin()).round() as i32,
        ));
    }
    points
}
