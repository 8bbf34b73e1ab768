use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use care_metrics::utils::{parse_date, success_envelope};
use care_metrics::{
    CareMetricsError, DashboardFilters, ForecastConfig, RecordStore, SmoothingMethod,
    compute_dashboard_metrics, compute_forecast_with,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;

/// Healthcare dashboard analytics
#[derive(Parser, Debug)]
#[command(name = "care-metrics")]
#[command(about = "Dashboard aggregation and workload forecasting over admission records")]
#[command(version)]
struct Cli {
    /// JSON file holding an array of patient records; the sample data is used otherwise
    #[arg(short, long)]
    records: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

/// Record selection shared by the listing and the dashboard
#[derive(Args, Debug)]
struct FilterArgs {
    /// First admission date included
    #[arg(long)]
    from: Option<String>,
    /// Last admission date included
    #[arg(long)]
    to: Option<String>,
    /// Department to keep
    #[arg(long)]
    department: Option<String>,
    /// Pathology group to keep; repeat for several
    #[arg(long = "pathology")]
    pathology_groups: Vec<String>,
}

impl FilterArgs {
    fn into_filters(self) -> Result<DashboardFilters> {
        let mut filters = DashboardFilters::none().with_pathology_groups(self.pathology_groups);
        if let Some(department) = self.department {
            filters = filters.with_department(department);
        }
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                Ok(filters.with_date_range(date_arg(&from)?, date_arg(&to)?))
            }
            (None, None) => Ok(filters),
            _ => Err(anyhow!("--from and --to must be given together")),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the records matching the filters
    Records {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Patient, operational and geographic metrics over the filtered records
    Dashboard {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Project daily admissions past the end of the history
    Forecast {
        /// Days to project
        #[arg(long)]
        days: Option<u32>,
        /// Smoothing method: moving-average or exponential-smoothing
        #[arg(long)]
        method: Option<String>,
        /// Exponential smoothing factor
        #[arg(long)]
        alpha: Option<f64>,
        /// Days of history before the end date
        #[arg(long, default_value_t = 30)]
        historical_days: u32,
        /// Last day of history; defaults to the latest admission
        #[arg(long)]
        end_date: Option<String>,
        /// JSON forecast configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let store = match &cli.records {
        Some(path) => {
            info!("Loading records from: {}", path.display());
            RecordStore::load_json(path)
                .with_context(|| format!("Failed to load records from {}", path.display()))?
        }
        None => {
            info!("No record file given, using sample data");
            RecordStore::with_sample_data()
        }
    };

    match cli.command {
        Command::Records { filters } => {
            let selected = store.query(&filters.into_filters()?);
            info!("{} of {} records match", selected.len(), store.len());
            match cli.format {
                OutputFormat::Json => print_envelope(&selected)?,
                OutputFormat::Text => {
                    for record in selected {
                        println!(
                            "{}  {}  {}  {}  {}",
                            record.id,
                            record.admission_date,
                            record.pathology_group,
                            record.department,
                            record.city_label().unwrap_or("-")
                        );
                    }
                }
            }
        }
        Command::Dashboard { filters } => {
            let metrics = compute_dashboard_metrics(store.all(), &filters.into_filters()?);
            match cli.format {
                OutputFormat::Json => print_envelope(&metrics)?,
                OutputFormat::Text => print!("{}", metrics.summary()),
            }
        }
        Command::Forecast {
            days,
            method,
            alpha,
            historical_days,
            end_date,
            config,
        } => {
            let mut forecast_config = match &config {
                Some(path) => ForecastConfig::from_json_file(path)
                    .with_context(|| format!("Failed to read configuration {}", path.display()))?,
                None => ForecastConfig::default(),
            };
            if let Some(days) = days {
                forecast_config = forecast_config.with_horizon(days);
            }
            if let Some(name) = method {
                forecast_config =
                    forecast_config.with_method(SmoothingMethod::from_name_or_default(&name));
            }
            if let Some(alpha) = alpha {
                forecast_config = forecast_config.with_alpha(alpha);
            }

            let end = match end_date {
                Some(date) => date_arg(&date)?,
                None => store
                    .last_admission()
                    .ok_or_else(|| anyhow!("No admissions to forecast from"))?,
            };
            let history = store.daily_admissions(end, historical_days);
            info!("Forecast history: {} days ending {}", history.len(), end);

            let report = compute_forecast_with(&history, &forecast_config);
            match cli.format {
                OutputFormat::Json => print_envelope(&report)?,
                OutputFormat::Text => {
                    print!("{forecast_config}");
                    println!();
                    print!("{}", report.summary());
                }
            }
        }
    }

    Ok(())
}

fn date_arg(value: &str) -> Result<NaiveDate> {
    parse_date(value).ok_or_else(|| CareMetricsError::InvalidDate(value.to_string()).into())
}

/// Print the payload inside the success envelope
fn print_envelope<T: Serialize + ?Sized>(payload: &T) -> Result<()> {
    let envelope = success_envelope(payload)?;
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
