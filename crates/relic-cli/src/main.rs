mod api;
mod config;

use clap::{Parser, Subcommand};
use config::RelicConfig;
use relic_probe::SignalCollector;

#[derive(Parser)]
#[command(name = "relic")]
#[command(about = "Score expired domains for SEO rebuild value")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Analyze {
        #[arg(help = "Domain to analyze, with or without scheme")]
        domain: String,
        #[arg(short = 'f', long, help = "Path to config file")]
        config: Option<String>,
    },
    Serve {
        #[arg(short = 'f', long, help = "Path to config file")]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relic=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { domain, config } => run_analyze(domain, config).await,
        Commands::Serve { config } => run_serve(config).await,
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<RelicConfig, Box<dyn std::error::Error>> {
    match path {
        Some(p) => RelicConfig::from_file(p)
            .map_err(|e| format!("failed to load config {}: {}", p, e).into()),
        None => Ok(RelicConfig::default()),
    }
}

fn collector_from(config: &RelicConfig) -> SignalCollector {
    SignalCollector::with_heuristic(config.probe_config(), Box::new(config.heuristic()))
}

async fn run_analyze(
    domain: String,
    config_path: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path.as_deref())?;
    let collector = collector_from(&config);

    println!("analyzing {}...", domain);

    let signals = collector.collect(&domain).await?;
    let report = relic_score::assemble(signals);

    println!("\n--- report for {} ---", report.signals.domain);
    println!(
        "dns resolves: {}",
        if report.signals.dns_resolves { "yes" } else { "no" }
    );
    println!(
        "https: {}",
        if report.signals.https_supported {
            "supported"
        } else {
            "unreachable"
        }
    );
    if report.signals.http_status != 0 {
        println!("http status: {}", report.signals.http_status);
    } else {
        println!("http status: no response");
    }
    println!("archive snapshots: {}", report.signals.archive_snapshots);
    println!(
        "spam indicators: {}",
        if report.signals.is_spam_like { "yes" } else { "no" }
    );
    println!("tld: .{}", report.signals.tld);

    println!("\nseo score: {}/100", report.score);
    println!("risk: {:?}", report.risk);
    println!("strategy: {}", report.strategy);

    Ok(())
}

async fn run_serve(config_path: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path.as_deref())?;
    let collector = collector_from(&config);
    api::run_api(&config.api_bind(), config.api_port(), collector).await
}
