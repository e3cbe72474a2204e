use crate::config::toml_config::FormConfig;
use crate::domain::model::OptionEntry;
use crate::domain::ports::Transport;
use crate::parsing::form_state::{build_postback, extract_form_state};
use crate::utils::error::{EtlError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// "Seçiniz" satırının değeri; hiçbir zaman sonuca girmez.
pub const PLACEHOLDER_VALUE: &str = "-1";

static OPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<option\b[^>]*\bvalue="([^"]*)"[^>]*>(.*?)</option>"#).unwrap()
});

/// `name` ya da `id` niteliği `anchor` olan `<select>` bloğundaki seçenekleri
/// sırasıyla döner. Blok bulunamazsa `None`.
pub fn parse_options(html: &str, anchor: &str) -> Option<Vec<OptionEntry>> {
    let escaped = regex::escape(anchor);
    let select_re = Regex::new(&format!(
        r#"(?is)<select\b[^>]*\b(?:name|id)="{escaped}"[^>]*>(.*?)</select>"#
    ))
    .ok()?;
    let block = select_re.captures(html)?;

    let mut seen = HashSet::new();
    let options = OPTION_RE
        .captures_iter(&block[1])
        .filter_map(|caps| {
            let value = caps[1].trim().to_string();
            if value == PLACEHOLDER_VALUE || value.is_empty() {
                return None;
            }
            // aynı değer tekrar ederse ilki kalır
            if !seen.insert(value.clone()) {
                return None;
            }
            Some(OptionEntry {
                value,
                label: caps[2].to_string(),
            })
        })
        .collect();

    Some(options)
}

/// İl listesi zorunludur; anchor yoksa çalışma devam edemez.
pub fn parse_provinces(html: &str, anchor: &str) -> Result<Vec<OptionEntry>> {
    parse_options(html, anchor).ok_or_else(|| EtlError::MissingAnchorError {
        anchor: anchor.to_string(),
    })
}

pub fn parse_districts(html: &str, anchor: &str) -> Vec<OptionEntry> {
    parse_options(html, anchor).unwrap_or_else(|| {
        tracing::debug!("District list '{}' not present in response", anchor);
        Vec::new()
    })
}

/// Mahalle listesi ancak il ve ilçe seçimi sunucuya gönderildikten sonra
/// dolar. `province_markup` içindeki token'larla ikinci seçim POST edilir;
/// token yoksa boş liste döner.
pub async fn fetch_neighborhoods<T: Transport>(
    transport: &T,
    url: &str,
    form: &FormConfig,
    province_markup: &str,
    province_id: &str,
    district_id: &str,
) -> Result<Vec<OptionEntry>> {
    let Some(state) = extract_form_state(province_markup) else {
        tracing::warn!(
            "No form state for province {} / district {}, skipping neighborhoods",
            province_id,
            district_id
        );
        return Ok(Vec::new());
    };

    let fields = build_postback(
        &state,
        &form.district_list,
        &[
            (form.province_list.as_str(), province_id),
            (form.district_list.as_str(), district_id),
        ],
    );

    let body = transport.post(url, &fields).await?;

    Ok(parse_options(&body, &form.neighborhood_list).unwrap_or_else(|| {
        tracing::debug!(
            "Neighborhood list '{}' not present for district {}",
            form.neighborhood_list,
            district_id
        );
        Vec::new()
    }))
}
