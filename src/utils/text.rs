//! Etiket metinleri için normalizasyon yardımcıları.
//!
//! Sunucudan gelen dropdown etiketleri HTML entity içerir, büyük harflidir ve
//! Türkçe'ye özgü harfler genel `to_lowercase` ile doğru küçülmez (`I` → `ı`,
//! `İ` → `i`). Bu yüzden küçültme sabit bir tablo üzerinden yapılır.

use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

/// Genel case folding'in yanlış işlediği Türkçe büyük harfler.
const TURKISH_LOWER: &[(char, char)] = &[
    ('I', 'ı'),
    ('İ', 'i'),
    ('Ç', 'ç'),
    ('Ğ', 'ğ'),
    ('Ö', 'ö'),
    ('Ş', 'ş'),
    ('Ü', 'ü'),
];

/// Kimliklerde `_` ile değiştirilen yol ayırıcıları.
const PATH_SEPARATORS: &[char] = &['/', '\\'];

// çözülemeyen entity kalıntıları küçültülmez
static ENTITY_LIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#?[0-9A-Za-z]+;").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static POSTAL_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{5})").unwrap());

/// HTML5 entity tablosunun tamamıyla (named ve numeric) çözer. Tanınmayan
/// entity metin olarak kalır.
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }
    let fragment = Html::parse_fragment(input);
    fragment.root_element().text().collect()
}

pub fn collapse_whitespace(input: &str) -> String {
    WHITESPACE_RE.replace_all(input.trim(), " ").into_owned()
}

pub fn turkish_lowercase(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match TURKISH_LOWER.iter().find(|(upper, _)| *upper == ch) {
            Some((_, lower)) => out.push(*lower),
            None => out.extend(ch.to_lowercase()),
        }
    }
    out
}

fn lowercase_outside_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;
    for m in ENTITY_LIKE_RE.find_iter(input) {
        out.push_str(&turkish_lowercase(&input[last..m.start()]));
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&turkish_lowercase(&input[last..]));
    out
}

/// Her kelimenin ilk harfi korunur, kalanı Türkçe kurallarıyla küçültülür.
pub fn turkish_title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut titled = String::with_capacity(word.len());
                    titled.push(first);
                    titled.push_str(&lowercase_outside_entities(chars.as_str()));
                    titled
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// decode → trim → boşlukları birleştir → title-case
pub fn normalize_label(raw: &str) -> String {
    let decoded = decode_entities(raw);
    let collapsed = collapse_whitespace(&decoded);
    turkish_title_case(&collapsed)
}

/// `/` ve `\` karakterlerini `_` yapar, `[A-Za-z0-9_]` dışındaki her şeyi
/// atar. İki kez uygulamak bir kez uygulamakla aynı sonucu verir.
pub fn clean_identifier(raw: &str) -> String {
    raw.chars()
        .map(|c| if PATH_SEPARATORS.contains(&c) { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Mahalle etiketindeki ilk 5 ardışık rakamı posta kodu olarak alır ve
/// etiketi ilk `/` karakterinden keser.
pub fn split_postal_code(label: &str) -> (String, Option<String>) {
    let postal_code = POSTAL_CODE_RE
        .captures(label)
        .map(|caps| caps[1].to_string());

    let name = match label.find('/') {
        Some(idx) => &label[..idx],
        None => label,
    };

    (name.trim().to_string(), postal_code)
}
