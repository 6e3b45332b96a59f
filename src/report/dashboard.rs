//! Assembles the full production dashboard report.
use anyhow::Result;
use maud::{html, Markup};

use crate::config::ReportConfig;
use crate::dataset::{Dataset, JoinedRecord};
use crate::query::{self, CumulativeRecord};
use crate::report::plots;
use crate::report::{Report, ReportSection};
use crate::summary::{self, SummaryReport};

/// Build the dashboard report for one dataset and configuration.
///
/// Sections: raw table, per-country time series, top producers in a year,
/// cumulative top producers, and the two summary panels.
pub fn build_report(dataset: &Dataset, config: &ReportConfig) -> Result<Report> {
    config.validate()?;

    let mut report = Report::new(
        "PetroReport",
        env!("CARGO_PKG_VERSION"),
        None,
        "Crude-Oil Production by Country",
    );

    /* Section 1: Raw data table */
    {
        let mut section = ReportSection::new("Raw Data");
        let rows = query::raw_table(dataset, config.sort_column, config.table_rows);
        section.add_content(html! {
            p {
                "First " (rows.len()) " of " (dataset.len())
                " joined records, sorted descending by " (config.sort_column.as_str()) "."
            }
            @if let Some((min_year, max_year)) = dataset.year_range() {
                p { "The dataset covers " (min_year) " to " (max_year) "." }
            }
            (joined_table(&rows))
        });
        report.add_section(section);
    }

    /* Section 2: Production of one country over the years */
    {
        let mut section = ReportSection::new("Country Production Over Time");
        let series = query::country_time_series(dataset, &config.country);
        if series.points.is_empty() {
            section.add_content(html! {
                p { "No production records for " (config.country) "." }
            });
        } else {
            section.add_plot(plots::production_line_plot(
                &series,
                config.chart_width,
                config.chart_height,
            ));
        }
        report.add_section(section);
    }

    /* Section 3: Largest producers in the selected year */
    {
        let mut section = ReportSection::new("Top Producers by Year");
        let top = query::top_n_by_year(dataset, config.top_year, config.top_countries);
        if top.is_empty() {
            section.add_content(html! {
                p { "No production records for " (config.top_year) "." }
            });
        } else {
            section.add_plot(plots::top_year_bar_plot(
                &top,
                config.top_year,
                config.chart_width,
                config.chart_height,
            ));
        }
        report.add_section(section);
    }

    /* Section 4: Largest cumulative producers */
    let cumulative_top = query::cumulative_top_n(dataset, config.cumulative_countries);
    {
        let mut section = ReportSection::new("Top Cumulative Producers");
        if cumulative_top.is_empty() {
            section.add_content(html! {
                p { "No production records in the dataset." }
            });
        } else {
            section.add_plot(plots::cumulative_bar_plot(
                &cumulative_top,
                config.chart_width,
                config.chart_height,
            ));
        }
        report.add_section(section);
    }

    /* Section 5: Cumulative summary (over the top-N set) */
    {
        let mut section = ReportSection::new("Cumulative Summary");
        let summary = summary::cumulative_summary(&cumulative_top);
        section.add_content(cumulative_summary_content(&summary));
        report.add_section(section);
    }

    /* Section 6: Summary for the selected year (over the full year slice) */
    {
        let mut section = ReportSection::new(&format!("Summary for {}", config.summary_year));
        let summary = summary::year_summary(dataset, config.summary_year);
        section.add_content(year_summary_content(&summary, config.summary_year));
        report.add_section(section);
    }

    Ok(report)
}

fn joined_table(rows: &[JoinedRecord]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Code" }
                    th { "Country" }
                    th { "Numeric Code" }
                    th { "Region" }
                    th { "Sub-Region" }
                    th { "Year" }
                    th { "Production (TMT)" }
                }
            }
            tbody {
                @for row in rows {
                    tr {
                        td { (row.country_code) }
                        td { (row.name) }
                        td { (row.numeric_code) }
                        td { (row.region) }
                        td { (row.sub_region) }
                        td { (row.year) }
                        td { (row.production) }
                    }
                }
            }
        }
    }
}

fn country_details(
    name: &str,
    code: &str,
    region: &str,
    sub_region: &str,
    value_label: &str,
    value: f64,
) -> Markup {
    html! {
        ul {
            li { "Country: " (name) }
            li { "Code: " (code) }
            li { "Region: " (region) }
            li { "Sub-region: " (sub_region) }
            li { (value_label) ": " (value) " TMT" }
        }
    }
}

fn zero_joined_table(rows: &[JoinedRecord]) -> Markup {
    html! {
        @if rows.is_empty() {
            p { "None." }
        } @else {
            table {
                thead {
                    tr {
                        th { "Country" }
                        th { "Code" }
                        th { "Region" }
                        th { "Sub-Region" }
                        th { "Production (TMT)" }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            td { (row.name) }
                            td { (row.country_code) }
                            td { (row.region) }
                            td { (row.sub_region) }
                            td { (row.production) }
                        }
                    }
                }
            }
        }
    }
}

fn zero_cumulative_table(rows: &[CumulativeRecord]) -> Markup {
    html! {
        @if rows.is_empty() {
            p { "None." }
        } @else {
            table {
                thead {
                    tr {
                        th { "Country" }
                        th { "Code" }
                        th { "Region" }
                        th { "Sub-Region" }
                        th { "Cumulative Production (TMT)" }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            td { (row.name) }
                            td { (row.country_code) }
                            td { (row.region) }
                            td { (row.sub_region) }
                            td { (row.total_production) }
                        }
                    }
                }
            }
        }
    }
}

fn cumulative_summary_content(summary: &SummaryReport<CumulativeRecord>) -> Markup {
    html! {
        @if let (Some(max), Some(min)) = (&summary.nonzero_max, &summary.nonzero_min) {
            h3 { "Largest cumulative producer" }
            (country_details(&max.name, &max.country_code, &max.region, &max.sub_region,
                "Cumulative production", max.total_production))
            h3 { "Smallest cumulative producer (above zero)" }
            (country_details(&min.name, &min.country_code, &min.region, &min.sub_region,
                "Cumulative production", min.total_production))
        } @else {
            p { "No countries with cumulative production above zero." }
        }
        h3 { "Countries with zero cumulative production" }
        (zero_cumulative_table(&summary.zero))
    }
}

fn year_summary_content(summary: &SummaryReport<JoinedRecord>, year: i32) -> Markup {
    html! {
        @if let (Some(max), Some(min)) = (&summary.nonzero_max, &summary.nonzero_min) {
            h3 { "Largest producer in " (year) }
            (country_details(&max.name, &max.country_code, &max.region, &max.sub_region,
                "Production", max.production))
            h3 { "Smallest producer (above zero) in " (year) }
            (country_details(&min.name, &min.country_code, &min.region, &min.sub_region,
                "Production", min.production))
        } @else {
            p { "No countries with production above zero in " (year) "." }
        }
        h3 { "Countries with zero production in " (year) }
        (zero_joined_table(&summary.zero))
    }
}
