//! Integration tests for the four query views and sort-column resolution.

use petroreport::dataset::Dataset;
use petroreport::error::ColumnError;
use petroreport::io::{CountryMeta, ProductionRecord};
use petroreport::query::{
    country_time_series, cumulative_by_country, cumulative_top_n, raw_table, top_n_by_year,
    SortColumn,
};

fn meta(code: &str, numeric: &str, name: &str) -> CountryMeta {
    CountryMeta {
        country_code: code.to_string(),
        numeric_code: numeric.to_string(),
        name: name.to_string(),
        region: "Americas".to_string(),
        sub_region: "Northern America".to_string(),
    }
}

fn production(code: &str, year: i32, value: f64) -> ProductionRecord {
    ProductionRecord {
        country_code: code.to_string(),
        year,
        production: value,
    }
}

/// Shared fixture: USA twice, Canada once, one unmatched code.
fn sample_dataset() -> Dataset {
    Dataset::join(
        vec![
            production("USA", 2000, 100.0),
            production("USA", 2001, 0.0),
            production("CAN", 2000, 50.0),
            production("XXX", 2000, 999.0),
        ],
        vec![
            meta("USA", "840", "United States of America"),
            meta("CAN", "124", "Canada"),
        ],
    )
}

// ---------------------------------------------------------------------------
// SortColumn
// ---------------------------------------------------------------------------

#[test]
fn sort_column_parses_all_names() {
    for name in SortColumn::NAMES {
        let column: SortColumn = name.parse().unwrap();
        assert_eq!(column.as_str(), name);
    }
}

#[test]
fn sort_column_unknown_errors() {
    let result: Result<SortColumn, ColumnError> = "bogus".parse();
    assert_eq!(result, Err(ColumnError::Unknown("bogus".to_string())));
}

#[test]
fn sort_column_parse_is_case_insensitive() {
    let column: SortColumn = "Production".parse().unwrap();
    assert_eq!(column, SortColumn::Production);
}

// ---------------------------------------------------------------------------
// raw_table
// ---------------------------------------------------------------------------

#[test]
fn raw_table_sorts_descending_and_limits() {
    let dataset = sample_dataset();
    let rows = raw_table(&dataset, SortColumn::Production, 2);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].production, 100.0);
    assert_eq!(rows[1].production, 50.0);
}

#[test]
fn raw_table_limit_larger_than_dataset() {
    let dataset = sample_dataset();
    let rows = raw_table(&dataset, SortColumn::Year, 100);
    assert_eq!(rows.len(), 3);
    for pair in rows.windows(2) {
        assert!(pair[0].year >= pair[1].year);
    }
}

#[test]
fn raw_table_sorts_string_columns() {
    let dataset = sample_dataset();
    let rows = raw_table(&dataset, SortColumn::Name, 10);
    assert_eq!(rows[0].name, "United States of America");
    assert_eq!(rows.last().unwrap().name, "Canada");
}

#[test]
fn raw_table_ties_keep_load_order() {
    let dataset = Dataset::join(
        vec![
            production("USA", 2000, 50.0),
            production("CAN", 2000, 50.0),
        ],
        vec![
            meta("USA", "840", "United States of America"),
            meta("CAN", "124", "Canada"),
        ],
    );
    let rows = raw_table(&dataset, SortColumn::Production, 10);
    assert_eq!(rows[0].country_code, "USA");
    assert_eq!(rows[1].country_code, "CAN");
}

// ---------------------------------------------------------------------------
// country_time_series
// ---------------------------------------------------------------------------

#[test]
fn time_series_ordered_by_year() {
    let dataset = sample_dataset();
    let series = country_time_series(&dataset, "United States of America");
    assert_eq!(series.points, vec![(2000, 100.0), (2001, 0.0)]);
}

#[test]
fn time_series_unknown_country_is_empty() {
    let dataset = sample_dataset();
    let series = country_time_series(&dataset, "Atlantis");
    assert!(series.points.is_empty());
}

#[test]
fn time_series_metadata_only_country_is_empty() {
    let dataset = Dataset::join(
        vec![production("USA", 2000, 100.0)],
        vec![
            meta("USA", "840", "United States of America"),
            meta("CAN", "124", "Canada"),
        ],
    );
    let series = country_time_series(&dataset, "Canada");
    assert!(series.points.is_empty());
}

// ---------------------------------------------------------------------------
// top_n_by_year
// ---------------------------------------------------------------------------

#[test]
fn top_n_by_year_picks_largest_producer() {
    let dataset = sample_dataset();
    let top = top_n_by_year(&dataset, 2000, 1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].country_code, "USA");
    assert_eq!(top[0].production, 100.0);
}

#[test]
fn top_n_by_year_excludes_other_years() {
    let dataset = sample_dataset();
    let top = top_n_by_year(&dataset, 2001, 10);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].year, 2001);
}

#[test]
fn top_n_by_year_empty_year() {
    let dataset = sample_dataset();
    assert!(top_n_by_year(&dataset, 1950, 5).is_empty());
}

#[test]
fn top_n_by_year_excludes_unjoined_codes() {
    // The XXX row would top the 2000 chart if the join had kept it
    let dataset = sample_dataset();
    let top = top_n_by_year(&dataset, 2000, 10);
    assert!(top.iter().all(|r| r.country_code != "XXX"));
}

// ---------------------------------------------------------------------------
// cumulative views
// ---------------------------------------------------------------------------

#[test]
fn cumulative_top_n_sums_per_country() {
    let dataset = sample_dataset();
    let top = cumulative_top_n(&dataset, 2);

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].country_code, "USA");
    assert_eq!(top[0].total_production, 100.0);
    assert_eq!(top[1].country_code, "CAN");
    assert_eq!(top[1].total_production, 50.0);
}

#[test]
fn cumulative_totals_are_non_increasing() {
    let dataset = sample_dataset();
    let top = cumulative_top_n(&dataset, 10);
    for pair in top.windows(2) {
        assert!(pair[0].total_production >= pair[1].total_production);
    }
}

#[test]
fn cumulative_row_count_bounded_by_distinct_codes() {
    let dataset = sample_dataset();
    assert_eq!(cumulative_top_n(&dataset, 10).len(), 2);
    assert_eq!(cumulative_top_n(&dataset, 1).len(), 1);
}

#[test]
fn cumulative_by_country_keeps_first_seen_order() {
    let dataset = sample_dataset();
    let totals = cumulative_by_country(&dataset);
    assert_eq!(totals[0].country_code, "USA");
    assert_eq!(totals[1].country_code, "CAN");
}

#[test]
fn cumulative_record_carries_metadata() {
    let dataset = sample_dataset();
    let top = cumulative_top_n(&dataset, 1);
    assert_eq!(top[0].name, "United States of America");
    assert_eq!(top[0].numeric_code, "840");
    assert_eq!(top[0].region, "Americas");
    assert_eq!(top[0].sub_region, "Northern America");
}
