use anyhow::Context;
use clap::Parser;
use listing_site::config::DEFAULT_API_BASE;
use listing_site::{build_site, ApiClient, Environment, SiteConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate the static listings site from the content API
#[derive(Debug, Parser)]
#[command(name = "listing-site", version)]
struct Cli {
    /// Root of the content API
    #[arg(long, env = "LISTING_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Directory the exported site is written to
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Build for production (serve under the deployment subpath);
    /// also enabled by SITE_ENV=production
    #[arg(long)]
    production: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = SiteConfig::new(cli.api_base, cli.out_dir, Environment::detect(cli.production));

    info!("Listing site generator");
    info!("API: {}", config.api_base);
    info!("Environment: {:?}", config.environment);

    let api = ApiClient::new(&config.api_base)?;
    let report = build_site(&api, &config)
        .await
        .context("Site generation failed")?;

    info!(
        "Wrote {} pages to {} ({} property pages)",
        report.pages,
        config.out_dir.display(),
        report.property_ids.len()
    );
    if !report.missing.is_empty() {
        info!("Properties rendered as not found: {:?}", report.missing);
    }

    Ok(())
}
