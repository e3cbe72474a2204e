use crate::domain::model::{Province, ScrapeResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Cookie ve varsayılan başlıkları koruyan HTTP oturumu.
/// Başarısız HTTP durumları hata olarak döner.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> impl std::future::Future<Output = Result<String>> + Send;
    fn post(
        &self,
        url: &str,
        fields: &[(String, String)],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Çıktı hedefi. `write_file` yazılan dosyanın tam yolunu döner.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Province>>;
    async fn transform(&self, data: Vec<Province>) -> Result<ScrapeResult>;
    async fn load(&self, result: ScrapeResult) -> Result<String>;
}
