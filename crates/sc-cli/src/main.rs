//! SpinCraft balancing CLI
//!
//! Usage:
//!   sc init --output game.json          - Write a standard starter config
//!   sc validate --input game.json       - Check a config for well-formedness
//!   sc balance --input game.json all    - Rebalance and print/write the result
//!
//! Configs are JSON by default; files ending in .yaml/.yml are read and
//! written as YAML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use sc_balance::{auto_balance, distribute_reel_weights, normalize_weights, populate_payouts};
use sc_model::{ConfigParser, GameConfig};

#[derive(Parser)]
#[command(name = "sc", about = "SpinCraft symbol economy tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a standard 5-reel starter config
    Init {
        /// Game name
        #[arg(short, long, default_value = "New Game")]
        name: String,
        /// Output path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Check a config for well-formedness
    Validate {
        /// Config file to check
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Rebalance a config's symbol economy
    Balance {
        /// Config file to rebalance
        #[arg(short, long)]
        input: PathBuf,
        /// Output path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Which balancing pass to run
        #[arg(value_enum, default_value_t = BalanceOp::All)]
        op: BalanceOp,
    },
}

/// The balancing passes the wizard exposes as buttons
#[derive(Debug, Clone, Copy, ValueEnum)]
enum BalanceOp {
    /// Optimize global appearance weights
    Weights,
    /// Auto-populate payout tables
    Payouts,
    /// Auto-balance per-reel frequencies
    Reels,
    /// All passes (payouts, then weights, then reels)
    All,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { name, output } => init(&name, &output),
        Commands::Validate { input } => validate(&input),
        Commands::Balance { input, output, op } => balance(&input, output.as_deref(), op),
    }
}

fn init(name: &str, output: &Path) -> Result<()> {
    let config = GameConfig::standard(name);
    write_config(&config, Some(output))?;
    info!("wrote starter config to {}", output.display());
    Ok(())
}

fn validate(input: &Path) -> Result<()> {
    let config = load_config(input)?;
    println!(
        "{}: OK ({} symbols, {:?}, {} reels)",
        config.name,
        config.symbols.len(),
        config.pay_mechanism,
        config.reel_count
    );
    Ok(())
}

fn balance(input: &Path, output: Option<&Path>, op: BalanceOp) -> Result<()> {
    let mut config = load_config(input)?;
    info!("running {op:?} on {:?}", config.name);

    config.symbols = match op {
        BalanceOp::Weights => normalize_weights(&config.symbols),
        BalanceOp::Payouts => {
            populate_payouts(&config.symbols, config.pay_mechanism, config.reel_count)
        }
        BalanceOp::Reels => distribute_reel_weights(&config.symbols, config.reel_count),
        BalanceOp::All => auto_balance(&config),
    };

    write_config(&config, output)
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let parser = ConfigParser::new();
    let config = if is_yaml(path) {
        parser.parse_yaml(&raw)?
    } else {
        parser.parse_json(&raw)?
    };
    Ok(config)
}

fn write_config(config: &GameConfig, output: Option<&Path>) -> Result<()> {
    let parser = ConfigParser::new();
    match output {
        Some(path) => {
            let rendered = if is_yaml(path) {
                parser.to_yaml(config)?
            } else {
                parser.to_json_pretty(config)?
            };
            fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{}", parser.to_json_pretty(config)?),
    }
    Ok(())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}
