//! Plot builders for the dashboard views.
use plotly::common::Mode;
use plotly::layout::{Axis, Layout};
use plotly::{Bar, Plot, Scatter};

use crate::dataset::JoinedRecord;
use crate::query::{CumulativeRecord, TimeSeries};

/// Pixels per chart unit; chart dimensions are configured in [1, 25] units.
const PX_PER_UNIT: usize = 60;

fn sized_layout(title: &str, x_title: &str, y_title: &str, width: usize, height: usize) -> Layout {
    Layout::new()
        .title(title)
        .x_axis(Axis::new().title(x_title))
        .y_axis(Axis::new().title(y_title))
        .width(width * PX_PER_UNIT)
        .height(height * PX_PER_UNIT)
}

/// Line chart of one country's production over the years.
pub fn production_line_plot(series: &TimeSeries, width: usize, height: usize) -> Plot {
    let years: Vec<f64> = series.points.iter().map(|(year, _)| *year as f64).collect();
    let production: Vec<f64> = series.points.iter().map(|(_, value)| *value).collect();

    let trace = Scatter::new(years, production)
        .mode(Mode::Lines)
        .name(&series.country_name);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(sized_layout(
        &format!("Production of {} by Year", series.country_name),
        "Year",
        "Production (TMT)",
        width,
        height,
    ));

    plot
}

/// Bar chart of the largest producers in one year.
pub fn top_year_bar_plot(records: &[JoinedRecord], year: i32, width: usize, height: usize) -> Plot {
    let names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
    let production: Vec<f64> = records.iter().map(|r| r.production).collect();

    let mut plot = Plot::new();
    plot.add_trace(Bar::new(names, production));
    plot.set_layout(sized_layout(
        &format!("Top {} Producers in {}", records.len(), year),
        "Country",
        "Production (TMT)",
        width,
        height,
    ));

    plot
}

/// Bar chart of the largest cumulative producers across all years.
pub fn cumulative_bar_plot(records: &[CumulativeRecord], width: usize, height: usize) -> Plot {
    let names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
    let totals: Vec<f64> = records.iter().map(|r| r.total_production).collect();

    let mut plot = Plot::new();
    plot.add_trace(Bar::new(names, totals));
    plot.set_layout(sized_layout(
        &format!("Top {} Cumulative Producers", records.len()),
        "Country",
        "Cumulative Production (TMT)",
        width,
        height,
    ));

    plot
}
