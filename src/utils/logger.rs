//! Tanı logları stderr'e gider; stdout yalnızca ilerleme satırlarını taşır.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "postakodu_etl=debug,reqwest=info,warn"
    } else {
        "postakodu_etl=info,warn"
    }
}

/// `RUST_LOG` verilmişse ona, verilmemişse `--verbose` bayrağına göre filtre.
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .compact(),
        )
        .init();
}
