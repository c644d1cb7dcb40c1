mod config;
mod input;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use pointstable_core::{MatchResult, PointsRule, compute_standings_with};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "pointstable", version, about = "Build a tournament points table from match results")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Compute and print the points table
    Table(TableArgs),
    /// Create a default config file at ~/.config/pointstable/config.toml
    Init,
}

#[derive(Parser)]
struct TableArgs {
    /// File with match results: a JSON array, or one `team1,team2,result[,winner]` per line.
    /// Reads stdin when omitted.
    #[arg(long)]
    matches: Option<PathBuf>,

    /// Output JSON instead of table
    #[arg(long)]
    json: bool,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/pointstable/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Points for a win. Default: 2.
    #[arg(long)]
    win_points: Option<u32>,

    /// Points each side gets for a tie. Default: 1.
    #[arg(long)]
    tie_points: Option<u32>,

    /// Points each side gets for an abandoned match. Default: 1.
    #[arg(long)]
    no_result_points: Option<u32>,
}

/// Load matches from --matches file, or stdin.
fn load_matches(args: &TableArgs) -> Result<Vec<MatchResult>> {
    let content = match args.matches {
        Some(ref path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read matches file {}", path.display()))?,
        None => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                anyhow::bail!("No matches provided. Use --matches <file> or pipe results via stdin.");
            }
            let mut content = String::new();
            stdin.read_to_string(&mut content).context("Failed to read from stdin")?;
            content
        }
    };

    input::parse_matches(&content)
}

/// Merge the points rule: CLI arg > config file > built-in default.
fn resolve_rule(args: &TableArgs, cfg: &config::PointsTableConfig) -> PointsRule {
    let default = PointsRule::default();
    PointsRule {
        win: args.win_points.or(cfg.win_points).unwrap_or(default.win),
        tie: args.tie_points.or(cfg.tie_points).unwrap_or(default.tie),
        no_result: args.no_result_points.or(cfg.no_result_points).unwrap_or(default.no_result),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Table(args) => {
            init_logging(args.verbose);
            run_table(args)
        }
        Commands::Init => {
            init_logging(false);
            run_init()
        }
    };

    if let Err(e) = result {
        bail(format!("{e:#}"));
    }
}

fn run_init() -> Result<()> {
    let path = config::config_path()?;
    config::create_default_config(&path)?;
    println!("Created config at {}", path.display());
    println!("Edit it to change how many points each result is worth.");
    Ok(())
}

fn run_table(args: TableArgs) -> Result<()> {
    println!("{}", render_standings(&args)?);
    Ok(())
}

/// Load config and matches, compute the table and render it as text or JSON.
fn render_standings(args: &TableArgs) -> Result<String> {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = match args.config.clone() {
        Some(path) => path,
        None => config::config_path()?,
    };
    let cfg = config::load_config(&config_path)?;
    let rule = resolve_rule(args, &cfg);

    let matches = load_matches(args)?;
    info!(
        "Loaded {} matches (win = {}, tie = {}, no result = {})",
        matches.len(),
        rule.win,
        rule.tie,
        rule.no_result,
    );

    let table = compute_standings_with(&matches, &rule)?;
    debug!("{} teams in table", table.len());

    if args.json {
        Ok(output::render_json(&table, matches.len())?)
    } else {
        Ok(output::render_table(&table, matches.len()))
    }
}
