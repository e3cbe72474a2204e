use crate::adapters::status::{update_status_document, StatusUpdate};
use crate::config::toml_config::TomlConfig;
use crate::core::{
    District, Neighborhood, Pipeline, Province, ScrapeResult, ScrapeSummary, Storage, Transport,
};
use crate::domain::model::OptionEntry;
use crate::parsing::{
    build_postback, extract_form_state, fetch_neighborhoods, parse_districts, parse_provinces,
};
use crate::utils::error::{EtlError, Result};
use crate::utils::text::{clean_identifier, normalize_label, split_postal_code};
use std::time::Duration;

/// İl → ilçe → mahalle ağacını ASP.NET formu üzerinden sırayla dolaşan
/// pipeline. Tüm istekler tek oturumda, ardışık yapılır.
pub struct ScrapePipeline<T: Transport, S: Storage> {
    transport: T,
    storage: S,
    config: TomlConfig,
}

impl<T: Transport, S: Storage> ScrapePipeline<T, S> {
    pub fn new(transport: T, storage: S, config: TomlConfig) -> Self {
        Self {
            transport,
            storage,
            config,
        }
    }

    async fn pause(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    async fn scrape_districts(
        &self,
        province: &OptionEntry,
        province_markup: &str,
    ) -> Result<Vec<District>> {
        let url = self.config.endpoint();
        let form = &self.config.form;
        let entries = parse_districts(province_markup, &form.district_list);
        let total = entries.len();

        let mut districts = Vec::with_capacity(total);
        for (index, entry) in entries.iter().enumerate() {
            if index > 0 {
                Self::pause(self.config.pacing.district_delay()).await;
            }

            // il seviyesindeki token'lar her ilçe için yeniden kullanılır
            let raw = fetch_neighborhoods(
                &self.transport,
                url,
                form,
                province_markup,
                &province.value,
                &entry.value,
            )
            .await?;
            let neighborhoods: Vec<Neighborhood> = raw.iter().map(to_neighborhood).collect();

            let name = normalize_label(&entry.label);
            println!(
                "  ({}/{}) İlçe: {} - {} mahalle",
                index + 1,
                total,
                name,
                neighborhoods.len()
            );

            districts.push(District {
                id: entry.value.trim().to_string(),
                name,
                neighborhoods,
            });
        }

        Ok(districts)
    }
}

fn to_neighborhood(entry: &OptionEntry) -> Neighborhood {
    let label = normalize_label(&entry.label);
    let (name, postal_code) = split_postal_code(&label);
    Neighborhood {
        id: clean_identifier(&entry.value),
        name,
        postal_code,
    }
}

/// Aynı il arka arkaya gelirse öncekinin yerine geçer, aksi halde eklenir.
pub fn upsert_province(provinces: &mut Vec<Province>, province: Province) {
    match provinces.last_mut() {
        Some(last) if last.id == province.id => *last = province,
        _ => provinces.push(province),
    }
}

#[async_trait::async_trait]
impl<T: Transport, S: Storage> Pipeline for ScrapePipeline<T, S> {
    async fn extract(&self) -> Result<Vec<Province>> {
        let url = self.config.endpoint();
        let form = &self.config.form;

        println!("Ana sayfa yükleniyor: {}", url);
        let root = self.transport.get(url).await?;
        let mut current_state =
            extract_form_state(&root).ok_or_else(|| EtlError::MissingFormStateError {
                page: url.to_string(),
            })?;
        let entries = parse_provinces(&root, &form.province_list)?;
        let total = entries.len();
        println!("{} il bulundu", total);

        let mut provinces: Vec<Province> = Vec::with_capacity(total);
        let mut neighborhood_count = 0usize;

        for (index, entry) in entries.iter().enumerate() {
            if index > 0 {
                Self::pause(self.config.pacing.province_delay()).await;
            }

            let name = normalize_label(&entry.label);
            println!("[{}/{}] İl: {} ({})", index + 1, total, name, entry.value);

            let fields = build_postback(
                &current_state,
                &form.province_list,
                &[(form.province_list.as_str(), entry.value.as_str())],
            );
            let province_markup = self.transport.post(url, &fields).await?;

            // sonraki il seçimi bu yanıtın token'larıyla gönderilir
            match extract_form_state(&province_markup) {
                Some(state) => current_state = state,
                None => tracing::warn!(
                    "Province {} page has no form state, keeping previous tokens",
                    entry.value
                ),
            }

            let districts = self.scrape_districts(entry, &province_markup).await?;
            neighborhood_count += districts.iter().map(|d| d.neighborhoods.len()).sum::<usize>();
            println!(
                "[{}/{}] {} tamamlandı: {} ilçe, toplam {} mahalle",
                index + 1,
                total,
                name,
                districts.len(),
                neighborhood_count
            );

            upsert_province(
                &mut provinces,
                Province {
                    id: entry.value.trim().to_string(),
                    name,
                    districts,
                },
            );
        }

        Ok(provinces)
    }

    async fn transform(&self, data: Vec<Province>) -> Result<ScrapeResult> {
        let mut provinces = data;

        for district in provinces.iter_mut().flat_map(|p| p.districts.iter_mut()) {
            let before = district.neighborhoods.len();
            district.neighborhoods.retain(|n| !n.id.is_empty());
            let dropped = before - district.neighborhoods.len();
            if dropped > 0 {
                tracing::warn!(
                    "Dropped {} neighborhoods with empty identifiers in district {}",
                    dropped,
                    district.id
                );
            }
        }

        let summary = ScrapeSummary::from_provinces(&provinces);
        if summary.missing_postal_codes > 0 {
            tracing::warn!(
                "{} neighborhoods have no postal code",
                summary.missing_postal_codes
            );
        }

        Ok(ScrapeResult { provinces, summary })
    }

    async fn load(&self, result: ScrapeResult) -> Result<String> {
        let json = serde_json::to_string_pretty(&result.provinces)?;
        let output_path = self
            .storage
            .write_file(&self.config.load.output_file, json.as_bytes())
            .await?
            .to_string_lossy()
            .into_owned();

        println!(
            "Toplam {} il, {} ilçe, {} mahalle kaydedildi: {}",
            result.summary.provinces,
            result.summary.districts,
            result.summary.neighborhoods,
            output_path
        );

        let now = chrono::Local::now().naive_local();
        match update_status_document(&self.config.load.status_file, &now)? {
            StatusUpdate::Updated(stamp) => {
                println!("{} güncellendi: {}", self.config.load.status_file, stamp)
            }
            StatusUpdate::MissingDocument => {
                println!(
                    "{} bulunamadı, güncelleme tarihi yazılmadı",
                    self.config.load.status_file
                )
            }
            StatusUpdate::NoStampLine => {
                tracing::warn!(
                    "No 'Son Güncelleme' line in {}, left unchanged",
                    self.config.load.status_file
                )
            }
        }

        Ok(output_path)
    }
}
