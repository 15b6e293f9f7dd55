//! Code Red Console - Entry Point
//!
//! Serves the convoy console API, or runs a single route analysis with
//! `--analyze`.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use anyhow::Context;
use codered::analyst::analyze_route;
use codered::analyst::genai::GenAiAnalyst;
use codered::app::run::run;
use codered::logs::init_logging;
use codered::models::analysis::{RiskLevel, RouteAnalysis, RouteRequest};
use codered::storage::settings::Settings;
use codered::utils::version_info;

use colored::Colorize;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut cli_args: HashMap<String, String> = HashMap::new();

    for arg in args.iter().skip(1) {
        if let Some((key, value)) = arg.split_once('=') {
            // Handle --key=value format
            let clean_key = key.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), value.to_string());
        } else if arg.starts_with("--") {
            // Handle standalone flags like --version
            let clean_key = arg.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), "true".to_string());
        }
    }

    if cli_args.contains_key("version") {
        match serde_json::to_string_pretty(&version_info()) {
            Ok(version) => println!("{}", version),
            Err(e) => eprintln!("Failed to render version: {e}"),
        }
        return;
    }

    let config_path = cli_args.get("config").map(PathBuf::from);
    let settings = match Settings::load(config_path.as_deref()).await {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Unable to read settings: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    let _log_guard = match init_logging(settings.log_options()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    let api_key = settings.api_key_from_env();

    if cli_args.contains_key("analyze") {
        if let Err(e) = analyze_once(&settings, &cli_args, api_key).await {
            error!("Analysis failed: {e:#}");
            std::process::exit(2);
        }
        return;
    }

    let options = settings.app_options(api_key);
    info!("Running Code Red console with options: {:?}", options);
    if let Err(e) = run(options, await_shutdown_signal()).await {
        error!("Failed to run the console: {e}");
        std::process::exit(1);
    }
}

async fn analyze_once(
    settings: &Settings,
    cli_args: &HashMap<String, String>,
    api_key: Option<secrecy::SecretString>,
) -> anyhow::Result<()> {
    let vehicles = match cli_args.get("vehicles") {
        Some(v) => v
            .parse::<u32>()
            .with_context(|| format!("invalid --vehicles value {v:?}"))?,
        None => 5,
    };
    let request = RouteRequest::new(
        cli_args.get("start").cloned().unwrap_or_default(),
        cli_args.get("end").cloned().unwrap_or_default(),
        vehicles,
    );
    request.validate().context("invalid route request")?;

    let analyst = GenAiAnalyst::new(settings.analyst_options(api_key))
        .context("unable to build the route analyst")?;
    let analysis = analyze_route(&analyst, &request).await;

    if cli_args.contains_key("json") {
        let rendered =
            serde_json::to_string_pretty(&analysis).context("unable to render the analysis")?;
        println!("{}", rendered);
    } else {
        print_report(&request, &analysis);
    }
    Ok(())
}

fn print_report(request: &RouteRequest, analysis: &RouteAnalysis) {
    let risk = match analysis.risk_level {
        RiskLevel::High => analysis.risk_level.as_str().red().bold(),
        RiskLevel::Medium => analysis.risk_level.as_str().yellow().bold(),
        RiskLevel::Low => analysis.risk_level.as_str().green().bold(),
    };

    println!("{} {}", "ROUTE".bold(), analysis.route_id);
    println!("  {} -> {} ({} vehicles)", request.start, request.end, request.vehicle_count);
    println!("  RISK: {}", risk);
    println!("  EST. DURATION: {}", analysis.estimated_duration);
    println!("  TRAFFIC CONGESTION: {}%", analysis.traffic_congestion);
    if let Some(weather) = &analysis.weather_impact {
        println!("  WEATHER: {}", weather);
    }
    println!("  CHECKPOINTS:");
    for (idx, checkpoint) in analysis.checkpoints.iter().enumerate() {
        println!("    {}. {}", idx + 1, checkpoint);
    }
    println!("  NOTE: {}", analysis.strategic_note.as_str().italic());
}

async fn await_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(term), Ok(int)) => (term, int),
                _ => {
                    error!("Unable to install signal handlers, falling back to Ctrl+C");
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };

        tokio::select! {
            _ = sigterm.recv() => {
                info!("SIGTERM received, shutting down...");
            }
            _ = sigint.recv() => {
                info!("SIGINT received, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {e}");
        }
        info!("Ctrl+C received, shutting down...");
    }
}
