use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Çıktıyı yerel bir dizine yazar. Dosya önce aynı dizinde geçici bir
/// dosyaya yazılır, sonra hedefin üzerine taşınır; yarım kalan bir yazma
/// önceki çıktıyı bozmaz.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    output_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn write_atomic(&self, target: &Path, data: &[u8]) -> Result<()> {
        let dir = target.parent().unwrap_or(&self.output_dir);
        fs::create_dir_all(dir)?;

        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(data)?;
        staged.as_file().sync_all()?;
        staged.persist(target).map_err(|e| e.error)?;
        Ok(())
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let target = self.output_dir.join(name);
        self.write_atomic(&target, data)?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), target.display());
        Ok(target)
    }
}
