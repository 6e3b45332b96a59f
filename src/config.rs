//! Report configuration.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::query::SortColumn;

/// Smallest and largest accepted chart dimension, in chart units.
pub const CHART_DIM_MIN: usize = 1;
pub const CHART_DIM_MAX: usize = 25;

/// Parameters for one report run.
///
/// Chart dimensions, raw-table row count and sort column, the country for
/// the time-series view, the year and country count for the per-year view,
/// the country count for the cumulative view, and the summary year.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Chart width in chart units, within [1, 25].
    pub chart_width: usize,
    /// Chart height in chart units, within [1, 25].
    pub chart_height: usize,
    /// Rows shown in the raw table view.
    pub table_rows: usize,
    /// Column the raw table is sorted (descending) by.
    pub sort_column: SortColumn,
    /// Country shown in the time-series view.
    pub country: String,
    /// Year for the top producers view.
    pub top_year: i32,
    /// Number of countries in the top producers view.
    pub top_countries: usize,
    /// Number of countries in the cumulative view.
    pub cumulative_countries: usize,
    /// Year for the per-year summary panel.
    pub summary_year: i32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart_width: 16,
            chart_height: 5,
            table_rows: 10,
            sort_column: SortColumn::Production,
            country: "Indonesia".to_string(),
            top_year: 1990,
            top_countries: 10,
            cumulative_countries: 10,
            summary_year: 1990,
        }
    }
}

impl ReportConfig {
    /// Load a report configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
        let config: ReportConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Reject out-of-range chart dimensions and zero row counts.
    pub fn validate(&self) -> Result<()> {
        for (label, dim) in [("chart_width", self.chart_width), ("chart_height", self.chart_height)] {
            if !(CHART_DIM_MIN..=CHART_DIM_MAX).contains(&dim) {
                anyhow::bail!(
                    "{} must be between {} and {}, got {}",
                    label,
                    CHART_DIM_MIN,
                    CHART_DIM_MAX,
                    dim
                );
            }
        }
        for (label, count) in [
            ("table_rows", self.table_rows),
            ("top_countries", self.top_countries),
            ("cumulative_countries", self.cumulative_countries),
        ] {
            if count == 0 {
                anyhow::bail!("{} must be at least 1", label);
            }
        }
        Ok(())
    }
}
