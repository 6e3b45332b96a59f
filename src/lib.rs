//! petroreport: report builder for annual crude-oil production data.
//!
//! This crate loads two small reference datasets (per-country annual crude-oil
//! production, and a country-code/region lookup table), joins them into an
//! immutable [`dataset::Dataset`], and answers four read-only query views over
//! the joined data plus nonzero/zero production summaries. The `report` module
//! renders the views into a self-contained HTML dashboard.
//!
//! The design favors small, testable modules: all queries are stateless
//! functions over a `Dataset` value constructed once per run.
pub mod config;
pub mod dataset;
pub mod error;
pub mod io;
pub mod query;
pub mod report;
pub mod summary;
