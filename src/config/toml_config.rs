use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://postakodu.ptt.gov.tr/";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub form: FormConfig,
    pub pacing: PacingConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout_seconds: Option<u64>,
    pub headers: HashMap<String, String>,
}

/// Üç seviyeli dropdown'ların `name` nitelikleri.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub province_list: String,
    pub district_list: String,
    pub neighborhood_list: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub province_delay_ms: u64,
    pub district_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub output_dir: String,
    pub output_file: String,
    pub status_file: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        let headers = HashMap::from([
            (
                "Accept".to_string(),
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
            ),
            ("Accept-Language".to_string(), "tr-TR,tr;q=0.9,en;q=0.8".to_string()),
        ]);
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: None,
            headers,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            province_list: "ctl00$MainContent$DropDownList1".to_string(),
            district_list: "ctl00$MainContent$DropDownList2".to_string(),
            neighborhood_list: "ctl00$MainContent$DropDownList3".to_string(),
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            province_delay_ms: 2000,
            district_delay_ms: 1000,
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_dir: "data".to_string(),
            output_file: "posta_kodlari.json".to_string(),
            status_file: "README.md".to_string(),
        }
    }
}

impl PacingConfig {
    pub fn province_delay(&self) -> Duration {
        Duration::from_millis(self.province_delay_ms)
    }

    pub fn district_delay(&self) -> Duration {
        Duration::from_millis(self.district_delay_ms)
    }

    pub fn disabled() -> Self {
        Self {
            province_delay_ms: 0,
            district_delay_ms: 0,
        }
    }
}

impl TomlConfig {
    /// TOML dosyasından yükler; eksik bölümler varsayılan değerleri alır.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// `${VAR}` biçimindeki ortam değişkenlerini yerine koyar; tanımsız olanlar
    /// olduğu gibi kalır.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

        ENV_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn endpoint(&self) -> &str {
        &self.source.endpoint
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;
        validation::validate_non_empty_string("source.user_agent", &self.source.user_agent)?;
        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_range("source.timeout_seconds", timeout, 1, 600)?;
        }

        validation::validate_non_empty_string("form.province_list", &self.form.province_list)?;
        validation::validate_non_empty_string("form.district_list", &self.form.district_list)?;
        validation::validate_non_empty_string(
            "form.neighborhood_list",
            &self.form.neighborhood_list,
        )?;

        validation::validate_range(
            "pacing.province_delay_ms",
            self.pacing.province_delay_ms,
            0,
            60_000,
        )?;
        validation::validate_range(
            "pacing.district_delay_ms",
            self.pacing.district_delay_ms,
            0,
            60_000,
        )?;

        validation::validate_path("load.output_dir", &self.load.output_dir)?;
        validation::validate_path("load.output_file", &self.load.output_file)?;
        validation::validate_path("load.status_file", &self.load.status_file)?;

        Ok(())
    }
}
