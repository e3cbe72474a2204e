pub mod toml_config;

use crate::utils::error::Result;
use clap::Parser;
use toml_config::{PacingConfig, TomlConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "postakodu-etl")]
#[command(about = "İl / ilçe / mahalle posta kodu listesini PTT formundan çekip JSON olarak kaydeder")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the form endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the JSON output directory
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Override the status document whose "Son Güncelleme" line is rewritten
    #[arg(long)]
    pub status_file: Option<String>,

    /// Disable the pacing delays between requests
    #[arg(long)]
    pub no_delay: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Dosya (varsa) + komut satırı üzerine yazmaları birleştirilmiş yapılandırma.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.load.output_dir = output_dir.clone();
        }
        if let Some(status_file) = &self.status_file {
            config.load.status_file = status_file.clone();
        }
        if self.no_delay {
            config.pacing = PacingConfig::disabled();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_resolves_to_defaults() {
        let cli = CliConfig::parse_from(["postakodu-etl"]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.source.endpoint, toml_config::DEFAULT_ENDPOINT);
        assert_eq!(config.pacing.province_delay_ms, 2000);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let cli = CliConfig::parse_from([
            "postakodu-etl",
            "--endpoint",
            "http://127.0.0.1:9000/",
            "--output-dir",
            "/tmp/pk",
            "--no-delay",
            "-v",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.source.endpoint, "http://127.0.0.1:9000/");
        assert_eq!(config.load.output_dir, "/tmp/pk");
        assert_eq!(config.pacing.district_delay_ms, 0);
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig::parse_from([
            "postakodu-etl",
            "--config",
            "/nonexistent/postakodu.toml",
        ]);
        assert!(cli.resolve().is_err());
    }
}
