//! The joined, immutable dataset all query views operate on.
//!
//! `Dataset::join` attaches country metadata to production records by country
//! code and drops records without a metadata match, so every retained record
//! carries a name, numeric code, region, and sub-region. The value is built
//! once per run and passed by reference into the query functions.
use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

use crate::io::{read_country_codes, read_production_csv, CountryMeta, ProductionRecord};

/// A production record enriched with its country's reference metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRecord {
    pub country_code: String,
    pub name: String,
    pub numeric_code: String,
    pub region: String,
    pub sub_region: String,
    pub year: i32,
    pub production: f64,
}

/// The loaded and joined data for one run, read-only after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<JoinedRecord>,
    countries: Vec<CountryMeta>,
}

impl Dataset {
    /// Join production records onto the country reference table.
    ///
    /// Records whose country code has no reference entry are dropped. Codes
    /// present only in the reference table simply contribute no rows.
    pub fn join(production: Vec<ProductionRecord>, countries: Vec<CountryMeta>) -> Dataset {
        let mut by_code: HashMap<&str, &CountryMeta> = HashMap::new();
        for country in &countries {
            by_code.entry(country.country_code.as_str()).or_insert(country);
        }

        let total = production.len();
        let records: Vec<JoinedRecord> = production
            .into_iter()
            .filter_map(|record| {
                by_code.get(record.country_code.as_str()).map(|meta| JoinedRecord {
                    country_code: record.country_code.clone(),
                    name: meta.name.clone(),
                    numeric_code: meta.numeric_code.clone(),
                    region: meta.region.clone(),
                    sub_region: meta.sub_region.clone(),
                    year: record.year,
                    production: record.production,
                })
            })
            .collect();

        log::info!(
            "Joined {} of {} production records onto {} reference countries",
            records.len(),
            total,
            countries.len()
        );

        Dataset { records, countries }
    }

    /// Load both input files and join them in one step.
    pub fn from_files<P: AsRef<Path>>(production_path: P, countries_path: P) -> Result<Dataset> {
        let production = read_production_csv(production_path)?;
        let countries = read_country_codes(countries_path)?;
        Ok(Dataset::join(production, countries))
    }

    /// All joined records, in production-file order.
    pub fn records(&self) -> &[JoinedRecord] {
        &self.records
    }

    /// The full country reference table, including countries with no
    /// production rows.
    pub fn countries(&self) -> &[CountryMeta] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Country names offered by the time-series view selector.
    pub fn country_names(&self) -> Vec<&str> {
        self.countries.iter().map(|c| c.name.as_str()).collect()
    }

    /// Resolve a country name to its 3-letter code via the reference table.
    pub fn resolve_country_code(&self, name: &str) -> Option<&str> {
        self.countries
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.country_code.as_str())
    }

    /// Minimum and maximum year present in the joined records.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(min, max), year| {
            (min.min(year), max.max(year))
        }))
    }
}
