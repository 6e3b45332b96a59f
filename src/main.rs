use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use petroreport::config::ReportConfig;
use petroreport::dataset::Dataset;
use petroreport::query::{self, SortColumn};
use petroreport::report::dashboard::build_report;
use petroreport::summary;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("PETROREPORT_LOG", "error,petroreport=info"))
        .init();

    let matches = Command::new("petroreport")
        .version(clap::crate_version!())
        .about("\u{1F6E2} PetroReport CLI - Crude-Oil Production Report Builder")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("report")
                .about("Render the full production dashboard to an HTML file")
                .arg(
                    Arg::new("production")
                        .help("Path to the production CSV file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("countries")
                        .help("Path to the country-code reference JSON file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Path to write the HTML report. Defaults to petroreport_report.html.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("Path to a report JSON configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("country")
                        .long("country")
                        .help("Country shown in the time-series view. Overrides the config.")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("year")
                        .long("year")
                        .help("Year for the top producers view and the per-year summary. Overrides the config.")
                        .value_parser(clap::value_parser!(i32)),
                )
                .arg(
                    Arg::new("rows")
                        .long("rows")
                        .help("Rows shown in the raw table view. Overrides the config.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("sort_by")
                        .long("sort-by")
                        .help("Column the raw table is sorted by. Overrides the config.")
                        .value_parser(SortColumn::NAMES)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("top")
                        .long("top")
                        .help("Number of countries in the top producers view. Overrides the config.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("cumulative_top")
                        .long("cumulative-top")
                        .help("Number of countries in the cumulative view. Overrides the config.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("width")
                        .long("width")
                        .help("Chart width in chart units, 1 to 25. Overrides the config.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("height")
                        .long("height")
                        .help("Chart height in chart units, 1 to 25. Overrides the config.")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Print the cumulative and per-year production summaries")
                .arg(
                    Arg::new("production")
                        .help("Path to the production CSV file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("countries")
                        .help("Path to the country-code reference JSON file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("year")
                        .long("year")
                        .help("Year for the per-year summary. Defaults to 1990.")
                        .value_parser(clap::value_parser!(i32)),
                )
                .arg(
                    Arg::new("cumulative_top")
                        .long("cumulative-top")
                        .help("Number of countries the cumulative summary is computed over. Defaults to 10.")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("report", sub_m)) => handle_report(sub_m),
        Some(("summary", sub_m)) => handle_summary(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn load_config_with_overrides(matches: &ArgMatches) -> Result<ReportConfig> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        eprintln!("[PetroReport] Using config: {:?}", config_path);
        ReportConfig::load(config_path)?
    } else {
        ReportConfig::default()
    };

    if let Some(country) = matches.get_one::<String>("country") {
        config.country = country.clone();
    }
    if let Some(&year) = matches.get_one::<i32>("year") {
        config.top_year = year;
        config.summary_year = year;
    }
    if let Some(&rows) = matches.get_one::<usize>("rows") {
        config.table_rows = rows;
    }
    if let Some(sort_by) = matches.get_one::<String>("sort_by") {
        config.sort_column = SortColumn::from_str(sort_by)?;
    }
    if let Some(&top) = matches.get_one::<usize>("top") {
        config.top_countries = top;
    }
    if let Some(&cumulative_top) = matches.get_one::<usize>("cumulative_top") {
        config.cumulative_countries = cumulative_top;
    }
    if let Some(&width) = matches.get_one::<usize>("width") {
        config.chart_width = width;
    }
    if let Some(&height) = matches.get_one::<usize>("height") {
        config.chart_height = height;
    }

    config.validate()?;
    Ok(config)
}

fn handle_report(matches: &ArgMatches) -> Result<()> {
    let production_path: &PathBuf = matches.get_one("production").unwrap();
    let countries_path: &PathBuf = matches.get_one("countries").unwrap();
    eprintln!("[PetroReport] Loading production data: {:?}", production_path);

    let config = load_config_with_overrides(matches)?;
    if matches.get_one::<PathBuf>("config").is_none() {
        let default_json = serde_json::to_string_pretty(&config).unwrap_or_default();
        eprintln!("[PetroReport] No config provided; using:\n{}", default_json);
    }

    let dataset = Dataset::from_files(production_path, countries_path)?;
    if let Some((min_year, max_year)) = dataset.year_range() {
        log::info!("Dataset covers {} to {}", min_year, max_year);
    }

    let report = build_report(&dataset, &config)?;
    let output_path = matches
        .get_one::<PathBuf>("output_file")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("petroreport_report.html"));
    report.save_to_file(&output_path)?;
    eprintln!(
        "[PetroReport] Wrote report for {} records to {:?}",
        dataset.len(),
        output_path
    );
    Ok(())
}

fn handle_summary(matches: &ArgMatches) -> Result<()> {
    let production_path: &PathBuf = matches.get_one("production").unwrap();
    let countries_path: &PathBuf = matches.get_one("countries").unwrap();
    let year = matches.get_one::<i32>("year").copied().unwrap_or(1990);
    let cumulative_top = matches
        .get_one::<usize>("cumulative_top")
        .copied()
        .unwrap_or(10);

    let dataset = Dataset::from_files(production_path, countries_path)?;

    let top = query::cumulative_top_n(&dataset, cumulative_top);
    let cumulative = summary::cumulative_summary(&top);
    println!("----- Cumulative Summary (top {}) -----", cumulative_top);
    match (&cumulative.nonzero_max, &cumulative.nonzero_min) {
        (Some(max), Some(min)) => {
            println!(
                "Largest: {} ({}) - {} TMT",
                max.name, max.country_code, max.total_production
            );
            println!(
                "Smallest above zero: {} ({}) - {} TMT",
                min.name, min.country_code, min.total_production
            );
        }
        _ => println!("No countries with cumulative production above zero."),
    }
    println!("Zero production: {} countries", cumulative.zero.len());
    for record in &cumulative.zero {
        println!("  {} ({})", record.name, record.country_code);
    }

    let yearly = summary::year_summary(&dataset, year);
    println!("----- Summary for {} -----", year);
    match (&yearly.nonzero_max, &yearly.nonzero_min) {
        (Some(max), Some(min)) => {
            println!(
                "Largest: {} ({}) - {} TMT",
                max.name, max.country_code, max.production
            );
            println!(
                "Smallest above zero: {} ({}) - {} TMT",
                min.name, min.country_code, min.production
            );
        }
        _ => println!("No countries with production above zero in {}.", year),
    }
    println!("Zero production: {} countries", yearly.zero.len());
    for record in &yearly.zero {
        println!("  {} ({})", record.name, record.country_code);
    }

    Ok(())
}
