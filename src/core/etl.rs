use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract → transform → load sırasıyla çalışır; herhangi bir aşamadaki
    /// hata tüm çalışmayı durdurur, ara kayıt yapılmaz.
    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("🚀 Starting postal code scrape");

        let phase = Instant::now();
        let provinces = self.pipeline.extract().await?;
        tracing::info!(
            "📥 Extracted {} provinces in {:?}",
            provinces.len(),
            phase.elapsed()
        );

        let result = self.pipeline.transform(provinces).await?;
        tracing::info!(
            "🔧 Transformed: {} provinces, {} districts, {} neighborhoods",
            result.summary.provinces,
            result.summary.districts,
            result.summary.neighborhoods
        );

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("💾 Output saved to {} (total {:?})", output_path, started.elapsed());

        Ok(output_path)
    }
}
