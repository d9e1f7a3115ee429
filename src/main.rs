use clap::Parser;
use folio_site::utils::{logger, validation::Validate};
use folio_site::{
    CliConfig, ConfigProvider, DataSource, FileSource, HttpSource, LocalStorage, Page, Phase,
    SiteEngine,
};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse().merged()?;

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting folio-site");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!(
            "❌ Configuration validation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let (phase, written) = if config.is_remote() {
        render_site(HttpSource::new(config.data_url()), &config).await?
    } else {
        let storage = LocalStorage::new(".");
        render_site(FileSource::new(storage, config.data_url()), &config).await?
    };

    match phase {
        Phase::Rendered => {
            tracing::info!("✅ Page rendered successfully!");
            println!("✅ Page rendered successfully!");
            println!("📁 Output saved to: {}", written.display());
        }
        Phase::Loading | Phase::Failed => {
            // The error page was still written, mirroring what a visitor
            // would have seen; the exit code reports the failure.
            eprintln!("❌ Page rendering failed; error page written to {}", written.display());
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn render_site<D: DataSource>(
    source: D,
    config: &CliConfig,
) -> folio_site::Result<(Phase, PathBuf)> {
    let mut engine = SiteEngine::new(source, Page::portfolio_shell());
    let phase = engine.run().await;

    let output = LocalStorage::new(config.output_path());
    let written = output
        .write_page(config.output_file(), &engine.page().to_html())
        .await?;

    Ok((phase, written))
}
