mod location;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Args as ClapArgs, Parser, Subcommand};
use kairos::{
    parse_birth_moment, AspectCalculator, Chart, ChartBuilder, DayFailurePolicy, Ephemeris,
    ForecastEngine, TableEphemeris,
};
use kairos_config::KairosSettings;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Config file (default: search for configs/kairos.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Read planetary longitudes from a JSON table instead of the Swiss Ephemeris.
    #[arg(long, global = true)]
    sky: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a natal chart and print it.
    Chart {
        #[command(flatten)]
        birth: BirthArgs,

        /// Print one `Point: Gate G.L (Sign)` line per point instead of JSON.
        #[arg(long)]
        summary: bool,

        /// Also list conjunctions, squares, oppositions and trines between points.
        #[arg(long)]
        aspects: bool,
    },
    /// Build a natal chart and list the transit events of the coming days.
    Forecast {
        #[command(flatten)]
        birth: BirthArgs,

        /// Days to scan (default from config).
        #[arg(long)]
        days: Option<u32>,

        /// First day to scan, YYYY-MM-DD (default: today, UTC).
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Leave out days whose transit lookup fails instead of aborting.
        #[arg(long)]
        skip_failed_days: bool,
    },
}

#[derive(ClapArgs, Debug)]
pub(crate) struct BirthArgs {
    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// Local birth time, HH:MM or HH:MM:SS.
    #[arg(long, default_value = "12:00")]
    time: String,

    /// UTC offset of the birth time in minutes east of Greenwich.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    offset: i32,

    /// Birth place, looked up in the config's [places] table.
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub(crate) place: Option<String>,

    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub(crate) lat: Option<f64>,

    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub(crate) lon: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let settings = match &args.config {
        Some(path) => kairos_config::load_settings_from(path)?,
        None => kairos_config::load_settings()?,
    };
    let ephemeris = open_ephemeris(args.sky.as_deref(), &settings)?;

    match args.command {
        Command::Chart {
            birth,
            summary,
            aspects,
        } => {
            let natal = build_natal(ephemeris.as_ref(), &birth, &settings)?;
            let found = if aspects {
                AspectCalculator::new().compute_chart_aspects(&natal)
            } else {
                Vec::new()
            };
            if summary {
                for line in natal.summary_lines() {
                    println!("{line}");
                }
                for aspect in &found {
                    println!(
                        "{} {} {} (orb {:.2})",
                        aspect.from, aspect.aspect_type, aspect.to, aspect.orb
                    );
                }
            } else if aspects {
                let out = json!({ "chart": natal, "aspects": found });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&natal)?);
            }
        }
        Command::Forecast {
            birth,
            days,
            start,
            skip_failed_days,
        } => {
            let natal = build_natal(ephemeris.as_ref(), &birth, &settings)?;
            let horizon = days.unwrap_or(settings.horizon_days);
            let start = start.unwrap_or_else(|| Utc::now().date_naive());
            let policy = if skip_failed_days {
                DayFailurePolicy::Skip
            } else {
                settings.on_day_failure
            };

            let events = ForecastEngine::new(ephemeris.as_ref())
                .forecast_with_policy(&natal, start, horizon, policy)
                .context("forecast failed")?;
            log::info!("{} event(s) over {} day(s) from {}", events.len(), horizon, start);

            let out = json!({
                "natal": natal,
                "start": start,
                "horizonDays": horizon,
                "events": events,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

fn build_natal(
    ephemeris: &dyn Ephemeris,
    birth: &BirthArgs,
    settings: &KairosSettings,
) -> anyhow::Result<Chart> {
    let moment = parse_birth_moment(&birth.date, &birth.time, birth.offset)?;
    let place = location::birth_location(birth, settings);
    ChartBuilder::new(ephemeris)
        .build(moment, place.lat, place.lon)
        .with_context(|| format!("could not build chart for {moment}"))
}

fn open_ephemeris(
    sky: Option<&Path>,
    settings: &KairosSettings,
) -> anyhow::Result<Box<dyn Ephemeris>> {
    if let Some(path) = sky {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read sky table {}", path.display()))?;
        let table: TableEphemeris = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse sky table {}", path.display()))?;
        log::debug!(
            "using sky table {} ({} entries)",
            path.display(),
            table.entry_count()
        );
        return Ok(Box::new(table));
    }
    open_swiss(settings)
}

#[cfg(feature = "swiss")]
fn open_swiss(settings: &KairosSettings) -> anyhow::Result<Box<dyn Ephemeris>> {
    let adapter = kairos::SwissEphemerisAdapter::new(settings.ephemeris_path.clone())
        .context("Swiss Ephemeris unavailable")?;
    Ok(Box::new(adapter))
}

#[cfg(not(feature = "swiss"))]
fn open_swiss(_settings: &KairosSettings) -> anyhow::Result<Box<dyn Ephemeris>> {
    anyhow::bail!("no ephemeris: pass --sky <table.json> or build with --features swiss")
}
