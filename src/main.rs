//! Resolve a page's render manifest against the site configuration and print the elements.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, prelude::*};

use ssr_asset_links::{AssetsPrefix, SiteConfig, load_manifest};

const LOG_ENV: &str = "SSR_ASSETS_LOG";
const LOG_JSON_ENV: &str = "SSR_ASSETS_LOG_JSON";

#[derive(Debug, Parser)]
#[command(name = "ssr-assets", version, about)]
struct Cli {
    /// Render manifest listing the page's stylesheets and scripts.
    manifest: PathBuf,

    /// Site configuration file (JSON or YAML). Discovered in the current directory when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured site base.
    #[arg(long)]
    base: Option<String>,

    /// Override the configured assets prefix with a literal prefix.
    #[arg(long)]
    assets_prefix: Option<String>,

    /// Print single-line JSON.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SiteConfig::from_path(path)?,
        None => {
            let cwd = env::current_dir().context("failed to read current directory")?;
            SiteConfig::discover(&cwd)
        }
    };

    let mut linker = config.linker();
    if let Some(base) = cli.base.as_deref() {
        linker = linker.with_base(Some(base));
    }
    if let Some(prefix) = cli.assets_prefix {
        linker = linker.with_assets_prefix(AssetsPrefix::Literal(prefix));
    }
    debug!(base = ?linker.base(), assets_prefix = ?linker.assets_prefix(), "resolved site config");

    let manifest = load_manifest(&cli.manifest)?;
    let rendered = manifest.render(&linker);

    let output = if cli.compact {
        serde_json::to_string(&rendered)?
    } else {
        serde_json::to_string_pretty(&rendered)?
    };
    println!("{output}");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = env::var(LOG_JSON_ENV).is_ok_and(|value| value == "1" || value == "true");

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "ssr-assets",
            "page.json",
            "--base",
            "/docs",
            "--assets-prefix",
            "https://cdn",
            "--compact",
        ]);
        assert_eq!(cli.manifest, PathBuf::from("page.json"));
        assert_eq!(cli.base.as_deref(), Some("/docs"));
        assert_eq!(cli.assets_prefix.as_deref(), Some("https://cdn"));
        assert!(cli.compact);
        assert!(cli.config.is_none());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
