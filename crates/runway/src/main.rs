use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{WrapErr, bail};
use runway::{PlanData, init_logging, load_plan, report, save_plan};
use runway_core::expenses::category_totals;
use runway_core::{ForecastBuilder, ForecastConfig, YearMonth, build_forecast, forecast_scenarios};

#[derive(Parser, Debug)]
#[command(name = "runway")]
#[command(about = "Revenue, burn and runway forecasts for SaaS plans")]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Forecast a single plan
    Forecast {
        /// Plan file (YAML)
        plan: PathBuf,

        /// Override the plan horizon
        #[arg(short, long)]
        months: Option<usize>,

        /// Override the first month (YYYY-MM or any date)
        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Also print expense totals per category
        #[arg(long)]
        categories: bool,
    },

    /// Compare the summary metrics of several plans
    Compare {
        #[arg(required = true, num_args = 1..)]
        plans: Vec<PathBuf>,
    },

    /// Write a starter plan with every default spelled out
    Init {
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn plan_name(plan: &PlanData, path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    plan.display_name(&stem).to_string()
}

fn load_config(path: &Path) -> color_eyre::Result<(String, ForecastConfig)> {
    let plan = load_plan(path)?;
    let config = plan
        .to_forecast_config()
        .wrap_err_with(|| format!("Invalid plan {}", path.display()))?;
    Ok((plan_name(&plan, path), config))
}

fn run_forecast(
    plan: &Path,
    months: Option<usize>,
    start: Option<&str>,
    format: Format,
    categories: bool,
) -> color_eyre::Result<()> {
    let (name, mut config) = load_config(plan)?;
    if let Some(months) = months {
        config = config.with_months(months);
    }
    if let Some(start) = start {
        config.start_month = YearMonth::parse_date_like(start)
            .wrap_err_with(|| format!("Invalid --start {start:?}"))?;
    }
    config.check_horizon()?;

    tracing::info!(plan = %name, start = %config.start_month, months = config.months, "forecasting");
    let result = build_forecast(&config);

    let totals = categories.then(|| category_totals(&config));
    match format {
        Format::Json => {
            let output = report::json_output(&result, totals.as_ref());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Format::Table => {
            println!("{name}\n");
            print!("{}", report::monthly_table(&result));
            println!();
            print!("{}", report::summary_block(&result));
            if let Some(totals) = &totals {
                println!();
                print!("{}", report::category_table(totals));
            }
        }
    }

    Ok(())
}

fn run_compare(paths: &[PathBuf]) -> color_eyre::Result<()> {
    let loaded = paths
        .iter()
        .map(|path| load_config(path))
        .collect::<color_eyre::Result<Vec<_>>>()?;

    let configs: Vec<ForecastConfig> = loaded.iter().map(|(_, config)| config.clone()).collect();
    let results = forecast_scenarios(&configs);
    tracing::info!(scenarios = results.len(), "compared plans");

    let named: Vec<_> = loaded
        .into_iter()
        .map(|(name, _)| name)
        .zip(results)
        .collect();
    print!("{}", report::compare_table(&named));
    Ok(())
}

fn run_init(path: &Path, force: bool) -> color_eyre::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let config = ForecastBuilder::new().build();
    let plan = PlanData::from_forecast_config(Some("New plan".to_string()), &config);
    save_plan(path, &plan)?;

    println!("Wrote {}", path.display());
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::Forecast {
            plan,
            months,
            start,
            format,
            categories,
        } => run_forecast(&plan, months, start.as_deref(), format, categories),
        Command::Compare { plans } => run_compare(&plans),
        Command::Init { path, force } => run_init(&path, force),
    }
}
