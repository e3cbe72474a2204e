use clap::Parser;
use postakodu_etl::utils::error::ErrorSeverity;
use postakodu_etl::utils::{logger, validation::Validate};
use postakodu_etl::{CliConfig, EtlEngine, HttpTransport, LocalStorage, ScrapePipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // log başlat
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting postakodu-etl");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let transport = match HttpTransport::new(&config.source) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    let storage = LocalStorage::new(config.load.output_dir.clone());
    let pipeline = ScrapePipeline::new(transport, storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Scrape completed successfully");
            println!("✅ Tamamlandı: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Scrape failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Öneri: {}", e.recovery_suggestion());

            // kısmi kayıt yok; her hata sıfır olmayan çıkış kodu verir
            let exit_code = match e.severity() {
                ErrorSeverity::Low | ErrorSeverity::High => 1,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
