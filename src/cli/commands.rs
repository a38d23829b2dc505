//! CLI command implementations
//!
//! - serve: resolve config, then run the data service on a tokio runtime
//! - dashboard: load the dataset, then hand the terminal to the dashboard
//! - summary: load, filter, compute the view battery, print one JSON object

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::{json, Value};

use crate::dataset::{Dataset, DatasetLoader};
use crate::filter::{DashboardFilters, FilterSet, Selection};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::service::{DataService, ServiceConfig};
use crate::views::ViewBattery;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port, data } => serve(config.as_deref(), port, data),
        Command::Dashboard { data, delimiter } => dashboard(&data, delimiter),
        Command::Summary {
            data,
            delimiter,
            school,
            sex,
            age_min,
            age_max,
            predicates,
        } => summary(&SummaryRequest {
            data,
            delimiter,
            school,
            sex,
            age_min,
            age_max,
            predicates,
        }),
    }
}

/// Merge the optional config file with flag overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    port: Option<u16>,
    data: Option<PathBuf>,
) -> CliResult<ServiceConfig> {
    let mut config = match config_path {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data) = data {
        config.dataset_path = data;
    }

    config.validate()?;
    Ok(config)
}

pub fn serve(config_path: Option<&Path>, port: Option<u16>, data: Option<PathBuf>) -> CliResult<()> {
    let config = resolve_config(config_path, port, data)?;

    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("addr", &config.socket_addr()),
            ("dataset_path", &config.dataset_path.display().to_string()),
            ("delimiter", &config.delimiter.to_string()),
        ],
    );

    let service = DataService::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        service
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

fn delimiter_byte(delimiter: char) -> CliResult<u8> {
    if delimiter.is_ascii() && delimiter != '"' && delimiter != '\n' {
        Ok(delimiter as u8)
    } else {
        Err(CliError::config_error(format!(
            "delimiter {:?} must be a single ASCII character other than quote or newline",
            delimiter
        )))
    }
}

fn load_dataset(path: &Path, delimiter: char) -> CliResult<Dataset> {
    let loader = DatasetLoader::new(path).with_delimiter(delimiter_byte(delimiter)?);
    Ok(loader.load()?)
}

/// Load failures surface here, before the terminal is taken over
pub fn dashboard(data: &Path, delimiter: char) -> CliResult<()> {
    let dataset = load_dataset(data, delimiter)?;
    crate::dashboard::run(dataset)
        .map_err(|e| CliError::io_error(format!("Dashboard terminal error: {}", e)))
}

/// Inputs of the summary command
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub data: PathBuf,
    pub delimiter: char,
    pub school: String,
    pub sex: String,
    pub age_min: u8,
    pub age_max: u8,
    pub predicates: Vec<String>,
}

/// Build the summary document without printing it
pub fn build_summary(request: &SummaryRequest) -> CliResult<Value> {
    let filters = DashboardFilters {
        school: Selection::from_choice(&request.school),
        sex: Selection::from_choice(&request.sex),
        ..DashboardFilters::default()
    }
    .with_age(request.age_min, request.age_max);

    let mut filter_set = filters.to_filter_set();
    for predicate in FilterSet::parse_all(request.predicates.as_slice())?.predicates() {
        filter_set.push(predicate.clone());
    }

    let dataset = load_dataset(&request.data, request.delimiter)?;
    let subset = filter_set.apply(dataset.records());
    let battery = ViewBattery::compute(&subset);

    log_event_with_fields(
        Event::FilterApplied,
        &[
            ("filters", &filter_set.describe()),
            ("matched", &subset.len().to_string()),
            ("records", &dataset.len().to_string()),
        ],
    );

    Ok(json!({
        "source": dataset.source().display().to_string(),
        "loaded_at": dataset.loaded_at().to_rfc3339(),
        "generated_at": Utc::now().to_rfc3339(),
        "records": dataset.len(),
        "filters": serde_json::to_value(&filters)?,
        "predicates": filter_set.describe(),
        "views": serde_json::to_value(&battery)?,
    }))
}

/// Print the summary envelope; stdout carries nothing else
pub fn summary(request: &SummaryRequest) -> CliResult<()> {
    let was_stderr_only = Logger::is_stderr_only();
    Logger::set_stderr_only(true);
    let outcome = build_summary(request);
    Logger::set_stderr_only(was_stderr_only);

    match outcome {
        Ok(document) => write_response(document),
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}
