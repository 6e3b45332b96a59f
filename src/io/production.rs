//! Production CSV reader.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

/// One annual production figure for one country, in thousand metric tons.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionRecord {
    /// 3-letter country code.
    pub country_code: String,
    pub year: i32,
    pub production: f64,
}

/// Column names expected in the production CSV header.
#[derive(Debug, Clone)]
pub struct ProductionColumns {
    pub country_code: String,
    pub year: String,
    pub production: String,
}

impl Default for ProductionColumns {
    fn default() -> Self {
        Self {
            country_code: "kode_negara".to_string(),
            year: "tahun".to_string(),
            production: "produksi".to_string(),
        }
    }
}

/// Read a production CSV file into a vector of records.
pub fn read_production_csv<P: AsRef<Path>>(path: P) -> Result<Vec<ProductionRecord>> {
    read_production_csv_with_columns(path, &ProductionColumns::default())
}

/// Read a production CSV file using custom column names.
pub fn read_production_csv_with_columns<P: AsRef<Path>>(
    path: P,
    columns: &ProductionColumns,
) -> Result<Vec<ProductionRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open production file: {}", path.as_ref().display()))?;

    let headers = reader
        .headers()
        .context("Failed to read production header row")?
        .clone();

    let code_idx = find_column(&headers, &columns.country_code)
        .ok_or_else(|| anyhow!("Missing country code column '{}'", columns.country_code))?;
    let year_idx = find_column(&headers, &columns.year)
        .ok_or_else(|| anyhow!("Missing year column '{}'", columns.year))?;
    let production_idx = find_column(&headers, &columns.production)
        .ok_or_else(|| anyhow!("Missing production column '{}'", columns.production))?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;

        let country_code = record
            .get(code_idx)
            .ok_or_else(|| anyhow!("Missing country code at row {}", row_idx + 1))?
            .trim()
            .to_string();

        let year = record
            .get(year_idx)
            .ok_or_else(|| anyhow!("Missing year at row {}", row_idx + 1))?
            .trim()
            .parse::<i32>()
            .with_context(|| format!("Invalid year at row {}", row_idx + 1))?;

        let production = record
            .get(production_idx)
            .ok_or_else(|| anyhow!("Missing production at row {}", row_idx + 1))?
            .trim()
            .parse::<f64>()
            .with_context(|| format!("Invalid production value at row {}", row_idx + 1))?;

        records.push(ProductionRecord {
            country_code,
            year,
            production,
        });
    }

    Ok(records)
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}
