use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dotenv::dotenv;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;
use vehicle_identifier::{
    config::MODEL_ENV,
    models::{ModelParams, DEFAULT_MODEL},
    render::{detail_panels, Panel},
    ClientConfig, GenerativeModel, IdentificationSession, SessionError, UploadedImage,
    VehicleRecord,
};

/// Identify a vehicle from a photo using Gemini.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Photo of the vehicle
    image: Option<PathBuf>,

    /// Gemini model to use
    #[arg(long, env = MODEL_ENV, default_value = DEFAULT_MODEL)]
    model: String,

    /// Print the record and raw response as JSON
    #[arg(long)]
    json: bool,

    /// Do not print the raw API response
    #[arg(long)]
    no_raw: bool,
}

fn spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message("Identifying...");
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

fn print_panel(panel: &Panel<'_>) {
    println!("{}", panel.title.yellow().bold());
    println!("{}", panel.body);
    println!("{}", "─".repeat(50).bright_black());
}

fn print_record(record: &VehicleRecord) {
    println!("\n{}", "🚗 Identified Vehicle Details".bright_blue().bold());
    println!("{}", "═".repeat(50).bright_blue());

    if let Some(message) = record.error() {
        println!("{}", message.bright_red());
        return;
    }

    for panel in detail_panels(record) {
        print_panel(&panel);
    }
}

fn print_raw_response(raw: &str) {
    println!("\n{}", "📝 API Response".bright_magenta().bold());
    println!("{}", "═".repeat(50).bright_magenta());
    println!("{}", raw);
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    config.params = ModelParams::from(cli.model);
    let mut session = IdentificationSession::new(GenerativeModel::from_config(config));

    if let Some(path) = &cli.image {
        let image = UploadedImage::from_path(path)
            .await
            .with_context(|| format!("Failed to load image {}", path.display()))?;
        session.select_image(image);
    }

    let bar = (!cli.json).then(spinner);
    let submitted = session.submit().await;
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    if submitted == Err(SessionError::NoImageSelected) {
        eprintln!("{}", SessionError::NoImageSelected.to_string().yellow());
        std::process::exit(2);
    }
    submitted?;

    let record = session
        .record()
        .context("submission finished without a record")?;

    if cli.json {
        let output = serde_json::json!({
            "record": record,
            "rawResponse": session.raw_response(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_record(record);
    if let Some(raw) = session.raw_response().filter(|_| !cli.no_raw) {
        print_raw_response(raw);
    }

    Ok(())
}
