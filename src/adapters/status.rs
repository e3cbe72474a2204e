//! README gibi bir durum belgesindeki "Son Güncelleme" satırını yeniden yazar.

use crate::utils::error::Result;
use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

const TURKISH_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

// `## 📅 Son Güncelleme` başlığının altındaki kalın etiketli satır
static SECTION_STAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(## 📅 Son Güncelleme\s*\n\s*\*\*Son güncelleme:\*\*)[^\r\n]*").unwrap()
});

// başlıksız belgeler için; satır sonu (\r dahil) eşleşmeye girmez
static LINE_STAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^([^\r\n]*?Son Güncelleme:(?:\*\*)?)[^\r\n]*").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdate {
    Updated(String),
    MissingDocument,
    NoStampLine,
}

/// `17 Ekim 2026, 14:05`
pub fn format_turkish_timestamp(dt: &NaiveDateTime) -> String {
    format!(
        "{} {} {}, {:02}:{:02}",
        dt.day(),
        TURKISH_MONTHS[dt.month0() as usize],
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

/// Yalnızca ilk damga satırının değer kısmını `<etiket> <damga>` olarak
/// yeniden yazar. Önce başlıklı bölüm aranır; eşleşme yoksa `None`.
pub fn rewrite_status_line(content: &str, stamp: &str) -> Option<String> {
    let re = [&*SECTION_STAMP_RE, &*LINE_STAMP_RE]
        .into_iter()
        .find(|re| re.is_match(content))?;
    let rewritten = re.replacen(content, 1, |caps: &regex::Captures| {
        format!("{} {}", &caps[1], stamp)
    });
    Some(rewritten.into_owned())
}

pub fn update_status_document<P: AsRef<Path>>(
    path: P,
    now: &NaiveDateTime,
) -> Result<StatusUpdate> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(StatusUpdate::MissingDocument);
    }

    let content = std::fs::read_to_string(path)?;
    let stamp = format_turkish_timestamp(now);

    match rewrite_status_line(&content, &stamp) {
        Some(rewritten) => {
            std::fs::write(path, rewritten)?;
            tracing::debug!("Status document {} stamped with {}", path.display(), stamp);
            Ok(StatusUpdate::Updated(stamp))
        }
        None => Ok(StatusUpdate::NoStampLine),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_format_turkish_timestamp() {
        assert_eq!(
            format_turkish_timestamp(&at(2026, 10, 17, 14, 5)),
            "17 Ekim 2026, 14:05"
        );
        assert_eq!(
            format_turkish_timestamp(&at(2025, 2, 1, 9, 0)),
            "1 Şubat 2025, 09:00"
        );
        assert_eq!(
            format_turkish_timestamp(&at(2024, 8, 30, 23, 59)),
            "30 Ağustos 2024, 23:59"
        );
    }

    #[test]
    fn test_rewrite_section_heading_layout() {
        let content = "# PTT\n\n## 📅 Son Güncelleme\n\n**Son güncelleme:** 15 Ocak 2024, 14:30\n\n## Lisans\nMIT\n";
        let rewritten = rewrite_status_line(content, "17 Ekim 2026, 14:05").unwrap();
        assert_eq!(
            rewritten,
            "# PTT\n\n## 📅 Son Güncelleme\n\n**Son güncelleme:** 17 Ekim 2026, 14:05\n\n## Lisans\nMIT\n"
        );
    }

    #[test]
    fn test_section_heading_wins_over_earlier_plain_line() {
        let content = "Son güncelleme: elle yazıldı\n## 📅 Son Güncelleme\n**Son güncelleme:** eski\n";
        let rewritten = rewrite_status_line(content, "yeni").unwrap();
        assert_eq!(
            rewritten,
            "Son güncelleme: elle yazıldı\n## 📅 Son Güncelleme\n**Son güncelleme:** yeni\n"
        );
    }

    #[test]
    fn test_rewrite_keeps_bold_marker() {
        let content = "# Posta Kodları\n\n**Son Güncelleme:** 1 Ocak 2024, 10:00\n";
        let rewritten = rewrite_status_line(content, "17 Ekim 2026, 14:05").unwrap();
        assert_eq!(
            rewritten,
            "# Posta Kodları\n\n**Son Güncelleme:** 17 Ekim 2026, 14:05\n"
        );
    }

    #[test]
    fn test_rewrite_preserves_crlf() {
        let content = "Başlık\r\nSon Güncelleme: eski\r\nalt satır\r\n";
        let rewritten = rewrite_status_line(content, "yeni").unwrap();
        assert_eq!(rewritten, "Başlık\r\nSon Güncelleme: yeni\r\nalt satır\r\n");
    }

    #[test]
    fn test_no_stamp_line() {
        assert!(rewrite_status_line("# Başlık\nmetin\n", "x").is_none());
    }
}
