//! The four read-only query views over a joined dataset.
//!
//! Every view is a stateless function taking `&Dataset`; sorting is stable
//! throughout, so ties keep production-file order.
use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use crate::dataset::{Dataset, JoinedRecord};
use crate::error::ColumnError;

/// Columns of the joined table a caller may sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    CountryCode,
    Name,
    NumericCode,
    Region,
    SubRegion,
    Year,
    Production,
}

impl SortColumn {
    /// All permitted column names, in table order.
    pub const NAMES: [&'static str; 7] = [
        "country_code",
        "name",
        "numeric_code",
        "region",
        "sub_region",
        "year",
        "production",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::CountryCode => "country_code",
            SortColumn::Name => "name",
            SortColumn::NumericCode => "numeric_code",
            SortColumn::Region => "region",
            SortColumn::SubRegion => "sub_region",
            SortColumn::Year => "year",
            SortColumn::Production => "production",
        }
    }

    fn compare(&self, a: &JoinedRecord, b: &JoinedRecord) -> Ordering {
        match self {
            SortColumn::CountryCode => a.country_code.cmp(&b.country_code),
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::NumericCode => a.numeric_code.cmp(&b.numeric_code),
            SortColumn::Region => a.region.cmp(&b.region),
            SortColumn::SubRegion => a.sub_region.cmp(&b.sub_region),
            SortColumn::Year => a.year.cmp(&b.year),
            SortColumn::Production => a
                .production
                .partial_cmp(&b.production)
                .unwrap_or(Ordering::Equal),
        }
    }
}

impl FromStr for SortColumn {
    type Err = ColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "country_code" => Ok(SortColumn::CountryCode),
            "name" => Ok(SortColumn::Name),
            "numeric_code" => Ok(SortColumn::NumericCode),
            "region" => Ok(SortColumn::Region),
            "sub_region" => Ok(SortColumn::SubRegion),
            "year" => Ok(SortColumn::Year),
            "production" => Ok(SortColumn::Production),
            _ => Err(ColumnError::Unknown(s.to_string())),
        }
    }
}

/// One country's production over the years, for the line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub country_name: String,
    /// (year, production) pairs, ascending by year.
    pub points: Vec<(i32, f64)>,
}

/// Per-country production summed across all years in the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeRecord {
    pub country_code: String,
    pub name: String,
    pub numeric_code: String,
    pub region: String,
    pub sub_region: String,
    pub total_production: f64,
}

/// All joined records sorted descending by `sort`, truncated to `limit` rows.
pub fn raw_table(dataset: &Dataset, sort: SortColumn, limit: usize) -> Vec<JoinedRecord> {
    let mut rows = dataset.records().to_vec();
    rows.sort_by(|a, b| sort.compare(b, a));
    rows.truncate(limit);
    rows
}

/// Production over the years for the named country.
///
/// Unknown names and countries with no joined records both yield an empty
/// series; the view renders that as "no data", not an error.
pub fn country_time_series(dataset: &Dataset, country_name: &str) -> TimeSeries {
    let mut points: Vec<(i32, f64)> = match dataset.resolve_country_code(country_name) {
        Some(code) => dataset
            .records()
            .iter()
            .filter(|r| r.country_code == code)
            .map(|r| (r.year, r.production))
            .collect(),
        None => Vec::new(),
    };
    points.sort_by_key(|(year, _)| *year);

    TimeSeries {
        country_name: country_name.to_string(),
        points,
    }
}

/// All records for one year, in production-file order.
pub fn year_slice(dataset: &Dataset, year: i32) -> Vec<JoinedRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| r.year == year)
        .cloned()
        .collect()
}

/// The `n` largest producers in one year, descending by production.
pub fn top_n_by_year(dataset: &Dataset, year: i32, n: usize) -> Vec<JoinedRecord> {
    let mut rows = year_slice(dataset, year);
    rows.sort_by(|a, b| {
        b.production
            .partial_cmp(&a.production)
            .unwrap_or(Ordering::Equal)
    });
    rows.truncate(n);
    rows
}

/// Sum production per country across all years, in first-seen country order.
pub fn cumulative_by_country(dataset: &Dataset) -> Vec<CumulativeRecord> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CumulativeRecord> = Vec::new();

    for record in dataset.records() {
        match index.get(record.country_code.as_str()) {
            Some(&i) => totals[i].total_production += record.production,
            None => {
                index.insert(record.country_code.as_str(), totals.len());
                totals.push(CumulativeRecord {
                    country_code: record.country_code.clone(),
                    name: record.name.clone(),
                    numeric_code: record.numeric_code.clone(),
                    region: record.region.clone(),
                    sub_region: record.sub_region.clone(),
                    total_production: record.production,
                });
            }
        }
    }

    totals
}

/// The `n` largest cumulative producers, descending by total production.
pub fn cumulative_top_n(dataset: &Dataset, n: usize) -> Vec<CumulativeRecord> {
    let mut totals = cumulative_by_country(dataset);
    totals.sort_by(|a, b| {
        b.total_production
            .partial_cmp(&a.total_production)
            .unwrap_or(Ordering::Equal)
    });
    totals.truncate(n);
    totals
}
