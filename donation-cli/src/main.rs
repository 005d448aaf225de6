use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use donation_cli::app::{self, Catalogs};
use donation_cli::config::AppConfig;
use donation_cli::render::CatalogListing;
use donation_cli::{csv_loader, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Donation form calculator.
///
/// Loads donation forms from a CSV file, prints each form's summary and
/// submits it to the configured payment backend.
#[derive(Debug, Parser)]
struct Cli {
    /// CSV file with one donation form per row.
    #[arg(long, required_unless_present = "list")]
    forms: Option<PathBuf>,

    /// Configuration file. Defaults to `donate.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Charity catalog CSV, overriding the config file.
    #[arg(long)]
    charities: Option<PathBuf>,

    /// Referral sources CSV, overriding the config file.
    #[arg(long)]
    referrals: Option<PathBuf>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level or filter directive, e.g. `debug` or `donation_core=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Print the charity and referral catalogs and exit.
    #[arg(long)]
    list: bool,
}

impl Cli {
    /// Folds command-line overrides into `config`.
    fn apply_to(
        &self,
        config: &mut AppConfig,
    ) {
        if let Some(path) = &self.charities {
            config.catalog.charities = Some(path.clone());
        }
        if let Some(path) = &self.referrals {
            config.catalog.referral_sources = Some(path.clone());
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::resolve(cli.config.as_deref()).context("loading configuration")?;
    cli.apply_to(&mut config);

    logging::init_logging(&config.logging.level, config.logging.stdout);
    if let Some(path) = &config.logging.file {
        logging::enable_file_logging(path)?;
    }
    debug!(?config, "configuration resolved");

    let catalogs = Catalogs::load(
        config.catalog.charities.as_deref(),
        config.catalog.referral_sources.as_deref(),
    )
    .context("loading catalogs")?;

    if cli.list {
        println!(
            "{}",
            CatalogListing {
                charities: &catalogs.charities,
                referrals: &catalogs.referrals,
            }
        );
        return Ok(());
    }

    let Some(forms_path) = cli.forms.as_deref() else {
        anyhow::bail!("--forms is required");
    };
    let forms = csv_loader::load_from_file(forms_path, &catalogs.charities, &catalogs.referrals)
        .with_context(|| format!("loading forms from '{}'", forms_path.display()))?;

    let gateway_config = config.gateway_config();
    debug!("creating {} submission backend", gateway_config.backend);
    let registry = app::build_registry();
    let gateway = registry
        .create(&gateway_config)
        .await
        .context("creating submission backend")?;

    let report = app::run_batch(
        forms,
        &catalogs.charities,
        gateway.as_ref(),
        gateway_config.timeout,
    )
    .await;
    println!("{report}");
    info!(
        confirmed = report.confirmed(),
        awaiting_transfer = report.awaiting_transfer(),
        not_submitted = report.not_submitted(),
        "batch complete"
    );

    Ok(())
}
