use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use prospect::skills::SkillRegistry;
use prospect::{Config, Pipeline, SkillInput};

#[derive(Parser)]
#[command(name = "prospect")]
#[command(about = "LinkedIn profiles and a news digest for a person and company", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, env = "PROSPECT_CONFIG", help = "TOML config file")]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print single-line JSON")]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search profiles, then summarize company news
    Run {
        #[arg(long, help = "Name of the person")]
        name: String,
        #[arg(long, help = "Company name")]
        company: String,
        #[arg(long, help = "Location (defaults to the configured location)")]
        location: Option<String>,
    },
    /// Invoke a single skill, e.g. `NewsPlugin.summarize_news`
    Invoke {
        skill: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// List registered skills and their parameters
    Skills,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let credentials = config.require_keys()?;
    let registry = SkillRegistry::from_config(&config, &credentials)?;

    match cli.command {
        Commands::Run {
            name,
            company,
            location,
        } => {
            let location = location.unwrap_or_else(|| config.default_location.clone());
            let input = SkillInput::new(name, company).with_location(location);

            let report = Pipeline::new(registry).run(&input).await?;
            print_json(&report, cli.compact)?;
        }
        Commands::Invoke {
            skill,
            name,
            company,
            location,
        } => {
            let (plugin, function) = skill
                .split_once('.')
                .ok_or_else(|| anyhow!("Skill must be given as Plugin.function"))?;
            let input = SkillInput {
                name,
                company,
                location: location.or_else(|| Some(config.default_location.clone())),
            };

            let output = registry.invoke(plugin, function, &input).await?;
            print_json(&output.for_host(), cli.compact)?;
        }
        Commands::Skills => print_json(&registry.descriptors(), cli.compact)?,
    }

    Ok(())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prospect=info"));

    // stdout carries the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", rendered);
    Ok(())
}
