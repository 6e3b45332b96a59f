//! IO utilities for loading the two input datasets.

pub mod countries;
pub mod production;

pub use countries::{read_country_codes, CountryMeta};
pub use production::{read_production_csv, ProductionRecord};
