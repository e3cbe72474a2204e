pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod parsing;
pub mod utils;

pub use crate::adapters::{HttpTransport, LocalStorage};
pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{etl::EtlEngine, pipeline::ScrapePipeline};
pub use crate::utils::error::{EtlError, Result};
