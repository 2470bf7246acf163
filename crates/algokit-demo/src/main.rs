use algokit_demo::{Cli, Runner};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli
        .resolve_config()
        .context("Failed to resolve configuration")?;
    info!(
        case = ?config.case_sensitivity,
        pairs = ?config.pair_policy,
        "algokit demo starting"
    );

    let mut runner = Runner::new(config);
    let reports = runner.run(&cli.command)?;

    if cli.json {
        let rendered = if reports.len() == 1 {
            serde_json::to_string_pretty(&reports[0])
        } else {
            serde_json::to_string_pretty(&reports)
        };
        println!("{}", rendered.context("Failed to serialize report")?);
    } else {
        for report in &reports {
            println!("{report}");
        }
    }

    Ok(())
}
