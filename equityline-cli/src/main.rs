//! Equity Line CLI: projected equity for a saved market scenario.
//!
//! Commands:
//! - `project`: load a scenario (TOML or JSON) and print the equity label
//!   for a hypothetical price
//! - `config`: validate an indicator config file, or print the defaults

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use equityline_core::{IndicatorConfig, LabelTone, MarketSnapshot, label_text};

#[derive(Parser)]
#[command(
    name = "equityline-cli",
    about = "Equity Line CLI: projected account equity at a hypothetical price"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project equity for the positions in a scenario file.
    Project {
        /// Scenario file: account, symbol quote and open positions.
        #[arg(long)]
        scenario: PathBuf,

        /// Hypothetical price. Defaults to the configured offset above the bid.
        #[arg(long)]
        price: Option<f64>,

        /// Indicator config supplying the default offset.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the projection as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Validate a config file or print the default config.
    Config {
        /// Config file to validate.
        #[arg(long, conflicts_with = "default")]
        path: Option<PathBuf>,

        /// Print the default config as TOML.
        #[arg(long, default_value_t = false)]
        default: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Project { scenario, price, config, json } => {
            run_project(&scenario, price, config.as_deref(), json)?
        }
        Commands::Config { path, default } => run_config(path.as_deref(), default)?,
    };
    println!("{output}");
    Ok(())
}

fn run_project(
    scenario_path: &Path,
    price: Option<f64>,
    config_path: Option<&Path>,
    json: bool,
) -> Result<String> {
    let config = match config_path {
        Some(path) => IndicatorConfig::load(path)?,
        None => IndicatorConfig::default(),
    };
    let snapshot = MarketSnapshot::load(scenario_path)
        .with_context(|| format!("loading scenario {}", scenario_path.display()))?;

    let symbol = &snapshot.symbol;
    let price = match price {
        Some(p) if !p.is_finite() || p <= 0.0 => bail!("--price must be a positive number, got {p}"),
        Some(p) => p,
        None => symbol.offset_by_pips(symbol.bid, config.initial_offset_pips),
    };
    log::debug!(
        "projecting {} positions in {} at {price}",
        snapshot.active_positions().count(),
        symbol.name
    );

    let projection = snapshot.project(price);
    let tone = LabelTone::for_projection(&projection);
    let label = label_text(&projection, &snapshot.account.asset);

    if json {
        let value = serde_json::json!({
            "symbol": symbol.name,
            "price": price,
            "pips_from_bid": symbol.pips_between(symbol.bid, price),
            "projection": projection,
            "tone": format!("{tone:?}"),
            "color": tone.color(&config).to_string(),
            "label": label,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let digits = symbol.digits as usize;
    Ok(format!(
        "{} @ {:.*} ({:+.1} pips from bid)\n{}\nTone: {:?} ({})",
        symbol.name,
        digits,
        price,
        symbol.pips_between(symbol.bid, price),
        label,
        tone,
        tone.color(&config),
    ))
}

fn run_config(path: Option<&Path>, default: bool) -> Result<String> {
    match (path, default) {
        (Some(path), _) => {
            let config = IndicatorConfig::load(path)?;
            Ok(config.to_toml_string())
        }
        (None, true) => Ok(IndicatorConfig::default().to_toml_string()),
        (None, false) => bail!("one of --path or --default is required"),
    }
}
