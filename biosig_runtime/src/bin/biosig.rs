//! biosig — command-line front end for the biosignature evolution engine.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};

use biosig_engine::pressures::rule_for;
use biosig_engine::Environment;
use biosig_runtime::config::SimulationConfig;
use biosig_runtime::logging::init_tracing;
use biosig_runtime::record::{load_record, verify_record_hash, RunRecord};
use biosig_runtime::replay::replay_record;
use biosig_runtime::run::run;
use biosig_runtime::summary::{summarize, MutationSummary};

#[derive(Parser)]
#[command(name = "biosig")]
#[command(about = "Simulate protein evolution under extraterrestrial pressures", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "BIOSIG_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (overrides config; RUST_LOG overrides both)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit JSON logs
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation
    Simulate {
        /// Protein sequence, one letter per residue
        #[arg(short, long)]
        sequence: String,

        /// Environment name (Mars, Europa, Enceladus, Titan)
        #[arg(short, long)]
        environment: Option<String>,

        /// Elapsed years
        #[arg(short, long)]
        years: Option<f64>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Write a run record into this directory
        #[arg(long)]
        record_dir: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List environments and their pressures
    Environments {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Re-run a run record and check it reproduces
    Replay {
        /// Path to a run record
        record: PathBuf,
    },

    /// Check a run record's stored hash against its content
    Verify {
        /// Path to a run record
        record: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = SimulationConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.log_json {
        config.logging.json = true;
    }
    init_tracing(&config.logging);

    match cli.command {
        Commands::Simulate {
            sequence,
            environment,
            years,
            seed,
            record_dir,
            format,
        } => {
            if let Some(environment) = environment {
                config.environment = environment;
            }
            if let Some(years) = years {
                config.years = years;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            if record_dir.is_some() {
                config.record_dir = record_dir;
            }
            simulate(&sequence, &config, format)
        }
        Commands::Environments { format } => list_environments(format),
        Commands::Replay { record } => replay(&record),
        Commands::Verify { record } => verify(&record),
    }
}

fn simulate(sequence: &str, config: &SimulationConfig, format: OutputFormat) -> anyhow::Result<()> {
    let outcome = run(sequence, config)?;
    let summary = summarize(sequence, &outcome.record.result);

    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "record": outcome.record,
                "summary": summary,
                "recordPath": outcome.record_path,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => print_run(&outcome.record, &summary),
    }
    Ok(())
}

fn print_run(record: &RunRecord, summary: &MutationSummary) {
    println!(
        "{} | {} years | seed {}",
        record.environment, record.years, record.seed
    );
    println!("original: {}", record.original_sequence);
    println!("evolved:  {}", record.result.evolved_sequence);
    println!(
        "{} of {} positions changed (identity {}.{:02}%)",
        summary.changed,
        summary.length,
        summary.identity / 100,
        summary.identity % 100
    );
    for change in &record.result.changes {
        println!(
            "  {:>5}  {} -> {}  {}",
            change.position + 1,
            change.original_residue,
            change.evolved_residue,
            change.reason
        );
    }
    println!("hash: {}", record.hash);
}

fn list_environments(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let envs: Vec<_> = Environment::ALL
                .iter()
                .map(|env| {
                    let pressures: Vec<_> = env
                        .pressures()
                        .iter()
                        .map(|(kind, weight)| {
                            serde_json::json!({
                                "pressure": kind.label(),
                                "weight": weight,
                                "mutates": rule_for(*kind).is_some(),
                            })
                        })
                        .collect();
                    serde_json::json!({
                        "name": env.name(),
                        "description": env.description(),
                        "pressures": pressures,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&envs)?);
        }
        OutputFormat::Text => {
            for env in Environment::ALL {
                println!("{:<10} {}", env.name(), env.description());
                for (kind, weight) in env.pressures() {
                    let note = if rule_for(*kind).is_some() { "" } else { " (descriptive)" };
                    println!("{:<10}   {:<13} {:.2}{}", "", kind.label(), weight, note);
                }
            }
        }
    }
    Ok(())
}

fn replay(path: &Path) -> anyhow::Result<()> {
    let record = load_record(path)?;
    let result = replay_record(&record)
        .with_context(|| format!("replay of {} failed", path.display()))?;
    println!(
        "replay OK: seed {} reproduced {} changes, hash {}",
        record.seed,
        result.change_count(),
        record.hash
    );
    Ok(())
}

fn verify(path: &Path) -> anyhow::Result<()> {
    let record = load_record(path)?;
    if !verify_record_hash(&record) {
        bail!(
            "hash mismatch in {}: recorded {}, content hashes to {}",
            path.display(),
            record.hash,
            record.recompute_hash()
        );
    }
    println!("verify OK: {}", record.hash);
    Ok(())
}
