//! Integration tests for report rendering and dashboard assembly.

use maud::html;

use petroreport::config::ReportConfig;
use petroreport::dataset::Dataset;
use petroreport::io::{CountryMeta, ProductionRecord};
use petroreport::report::dashboard::build_report;
use petroreport::report::{Report, ReportSection};

fn meta(code: &str, name: &str) -> CountryMeta {
    CountryMeta {
        country_code: code.to_string(),
        numeric_code: "000".to_string(),
        name: name.to_string(),
        region: "Asia".to_string(),
        sub_region: "South-eastern Asia".to_string(),
    }
}

fn production(code: &str, year: i32, value: f64) -> ProductionRecord {
    ProductionRecord {
        country_code: code.to_string(),
        year,
        production: value,
    }
}

fn sample_dataset() -> Dataset {
    Dataset::join(
        vec![
            production("IDN", 1990, 74.0),
            production("IDN", 1991, 80.0),
            production("MYS", 1990, 30.0),
            production("MYS", 1991, 0.0),
        ],
        vec![meta("IDN", "Indonesia"), meta("MYS", "Malaysia")],
    )
}

// ---------------------------------------------------------------------------
// Report container
// ---------------------------------------------------------------------------

#[test]
fn report_renders_sections_in_order() {
    let mut report = Report::new("PetroReport", "0.1.0", None, "Test Report");

    let mut first = ReportSection::new("First Section");
    first.add_content(html! { p { "alpha" } });
    report.add_section(first);

    let mut second = ReportSection::new("Second Section");
    second.add_content(html! { p { "beta" } });
    report.add_section(second);

    let rendered = report.render();
    let first_pos = rendered.find("First Section").unwrap();
    let second_pos = rendered.find("Second Section").unwrap();
    assert!(first_pos < second_pos);
    assert!(rendered.contains("alpha"));
    assert!(rendered.contains("beta"));
}

#[test]
fn report_renders_title_and_footer() {
    let report = Report::new("PetroReport", "0.1.0", None, "Test Report");
    let rendered = report.render();
    assert!(rendered.contains("<title>Test Report</title>"));
    assert!(rendered.contains("Generated by PetroReport 0.1.0"));
}

#[test]
fn report_save_to_file_writes_html() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");

    let report = Report::new("PetroReport", "0.1.0", None, "Test Report");
    report.save_to_file(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<!DOCTYPE html>"));
}

// ---------------------------------------------------------------------------
// Dashboard assembly
// ---------------------------------------------------------------------------

#[test]
fn dashboard_contains_all_sections() {
    let dataset = sample_dataset();
    let config = ReportConfig {
        country: "Indonesia".to_string(),
        ..ReportConfig::default()
    };

    let report = build_report(&dataset, &config).unwrap();
    let rendered = report.render();

    assert!(rendered.contains("Raw Data"));
    assert!(rendered.contains("Country Production Over Time"));
    assert!(rendered.contains("Top Producers by Year"));
    assert!(rendered.contains("Top Cumulative Producers"));
    assert!(rendered.contains("Cumulative Summary"));
    assert!(rendered.contains("Summary for 1990"));
}

#[test]
fn dashboard_raw_table_lists_joined_rows() {
    let dataset = sample_dataset();
    let config = ReportConfig::default();

    let rendered = build_report(&dataset, &config).unwrap().render();
    assert!(rendered.contains("Indonesia"));
    assert!(rendered.contains("Malaysia"));
    assert!(rendered.contains("South-eastern Asia"));
}

#[test]
fn dashboard_unknown_country_renders_no_data_message() {
    let dataset = sample_dataset();
    let config = ReportConfig {
        country: "Atlantis".to_string(),
        ..ReportConfig::default()
    };

    let rendered = build_report(&dataset, &config).unwrap().render();
    assert!(rendered.contains("No production records for Atlantis."));
}

#[test]
fn dashboard_empty_year_renders_no_data_message() {
    let dataset = sample_dataset();
    let config = ReportConfig {
        top_year: 1800,
        summary_year: 1800,
        country: "Indonesia".to_string(),
        ..ReportConfig::default()
    };

    let rendered = build_report(&dataset, &config).unwrap().render();
    assert!(rendered.contains("No production records for 1800."));
    assert!(rendered.contains("No countries with production above zero in 1800."));
}

#[test]
fn dashboard_year_summary_names_extremes() {
    let dataset = sample_dataset();
    let config = ReportConfig {
        country: "Indonesia".to_string(),
        ..ReportConfig::default()
    };

    let rendered = build_report(&dataset, &config).unwrap().render();
    // 1990: Indonesia 74 (max), Malaysia 30 (min), nobody at zero
    assert!(rendered.contains("Largest producer in 1990"));
    assert!(rendered.contains("Smallest producer (above zero) in 1990"));
}

#[test]
fn dashboard_rejects_invalid_config() {
    let dataset = sample_dataset();
    let config = ReportConfig {
        chart_width: 0,
        ..ReportConfig::default()
    };

    assert!(build_report(&dataset, &config).is_err());
}
