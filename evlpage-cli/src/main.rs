mod caldav;
mod fetch;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use owo_colors::OwoColorize;

use evlpage_core::config::{AccessConfig, CONFIG_TEMPLATE};
use evlpage_core::extract::extract_event;
use evlpage_core::page::render_page;
use evlpage_core::select::{recent_past, upcoming};

#[derive(Parser)]
#[command(name = "evlpage")]
#[command(about = "Generate the public events page from the EVL CalDAV calendar")]
struct Cli {
    /// Path to the CalDAV access config (defaults to ~/.config/evlpage/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the page to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => match AccessConfig::default_path() {
            Ok(path) => path,
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                return ExitCode::FAILURE;
            }
        },
    };

    let config = match AccessConfig::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!(
                "{}",
                format!("Invalid config file {}: {}", config_path.display(), err).red()
            );
            eprintln!("It must look like:\n");
            for line in CONFIG_TEMPLATE.lines() {
                eprintln!("\t{line}");
            }
            eprintln!("\nAbort.");
            return ExitCode::FAILURE;
        }
    };

    match run(&config, cli.output.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("{err:#}").red());
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &AccessConfig, output: Option<&Path>) -> Result<()> {
    let raw_events = fetch::fetch_raw_events(config).await?;
    let today = Utc::now().date_naive();

    let mut events = Vec::new();
    for raw in raw_events {
        match extract_event(raw) {
            Ok(event) => events.push(event),
            Err(err) => eprintln!("{}", format!("Skipping event: {err}").yellow()),
        }
    }

    let page = render_page(
        &upcoming(&events, today),
        &recent_past(&events, today),
        today,
    );

    match output {
        Some(path) => std::fs::write(path, format!("{page}\n"))?,
        None => println!("{page}"),
    }

    Ok(())
}
