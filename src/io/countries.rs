//! Country-code reference JSON reader.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One entry of the country-code reference table.
///
/// `region` and `sub_region` default to empty strings because a few entries in
/// the reference file (e.g. Antarctica) carry no regional grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryMeta {
    /// 3-letter country code, the join key against production records.
    #[serde(rename = "alpha-3")]
    pub country_code: String,
    /// Numeric ISO code, kept as a string to preserve leading zeros.
    #[serde(rename = "country-code")]
    pub numeric_code: String,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(rename = "sub-region", default)]
    pub sub_region: String,
}

/// Read the country-code reference file (a JSON array of country entries).
pub fn read_country_codes<P: AsRef<Path>>(path: P) -> Result<Vec<CountryMeta>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read country codes: {}", path.as_ref().display()))?;
    let countries: Vec<CountryMeta> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse country codes: {}", path.as_ref().display()))?;
    Ok(countries)
}
