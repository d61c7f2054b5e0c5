use clap::Parser;
use fii_etl::utils::logger;
use fii_etl::{CliConfig, ExportEngine, ListingPipeline, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fii-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let profile = match config.resolve_profile() {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::new(profile.output.directory.clone());
    let pipeline = ListingPipeline::new(storage, profile);
    let engine = ExportEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Export completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
