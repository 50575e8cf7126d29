//! informativa 命令行入口

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use informativa::analyzer::{global_scanner, init_scanner_with_options};
use informativa::utils::truncate_chars;
use informativa::{
    AnalyzerConfig, Category, CustomConfigBuilder, PolicyAnalyzer, hints_json, pack_hints,
};

/// Revisione di informative privacy italiane: evidenze tramite pattern + checklist valutata da LLM
#[derive(Parser)]
#[command(name = "informativa")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Full analysis: hints + checklist + LLM, result written as JSON
    Analyze {
        /// Policy text file (.txt)
        policy: PathBuf,
        /// Output directory for the JSON result
        #[arg(long, value_name = "DIR")]
        outdir: Option<PathBuf>,
        /// Checklist JSON file
        #[arg(long, value_name = "PATH")]
        checklist: Option<PathBuf>,
    },
    /// Print raw pattern matches as JSON
    Scan {
        policy: PathBuf,
        /// Restrict to these categories (repeatable); all categories when omitted
        #[arg(long = "category", value_name = "NAME")]
        categories: Vec<String>,
    },
    /// Print checklist id -> evidence snippets as JSON
    Evidence { policy: PathBuf },
    /// Print the packed hints block sent to the LLM
    Hints {
        policy: PathBuf,
        #[arg(long, value_name = "N")]
        max_items: Option<usize>,
    },
    /// List pattern categories with their pattern counts
    Categories,
}

fn init_logging(verbose: bool) -> Result<()> {
    tracing_log::LogTracer::init()?;
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}

async fn read_policy(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read policy {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = AnalyzerConfig::from_env()?;
    init_scanner_with_options(config.scan).context("pattern catalog failed to compile")?;

    match cli.command {
        Command::Analyze {
            policy,
            outdir,
            checklist,
        } => {
            let mut builder = CustomConfigBuilder::from_config(config);
            if let Some(dir) = outdir {
                builder = builder.output_dir(dir);
            }
            if let Some(path) = checklist {
                builder = builder.checklist_path(path);
            }
            let analyzer = PolicyAnalyzer::new(builder.build()).await?;
            let out_path = analyzer.analyze_to_file(&policy).await?;
            let name = policy
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!("[OK] {} → {}", name, out_path.display());
        }
        Command::Scan { policy, categories } => {
            let text = read_policy(&policy).await?;
            for name in &categories {
                if name.parse::<Category>().is_err() {
                    warn!("Unknown category ignored: {}", name);
                }
            }
            let selected: Vec<&str> = categories.iter().map(String::as_str).collect();
            let filter = (!selected.is_empty()).then_some(selected.as_slice());
            let records = global_scanner()?.scan(&text, filter);
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Evidence { policy } => {
            let text = read_policy(&policy).await?;
            let evidence = global_scanner()?.evidence_by_checklist(&text);
            println!("{}", serde_json::to_string_pretty(&evidence)?);
        }
        Command::Hints { policy, max_items } => {
            let text = read_policy(&policy).await?;
            let excerpt = truncate_chars(&text, config.max_chars);
            let records = global_scanner()?.scan_all(excerpt);
            let hints = pack_hints(
                &records,
                max_items.unwrap_or(config.max_hints),
                config.hint_snippet_chars,
            );
            println!("{}", hints_json(&hints)?);
        }
        Command::Categories => {
            for category in global_scanner()?.catalog().categories() {
                println!("{:<24} {}", category.name, category.patterns.len());
            }
        }
    }

    Ok(())
}
