use serde::{Deserialize, Serialize};

/// Dropdown içindeki ham `<option value="..">label</option>` girdisi.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
}

/// ASP.NET formunun bir sonraki POST'u kabul etmesi için gereken gizli alanlar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub view_state: String,
    pub event_validation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    #[serde(rename = "il_id")]
    pub id: String,
    #[serde(rename = "il_adi")]
    pub name: String,
    #[serde(rename = "ilceler")]
    pub districts: Vec<District>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    #[serde(rename = "ilce_id")]
    pub id: String,
    #[serde(rename = "ilce_adi")]
    pub name: String,
    #[serde(rename = "mahalleler")]
    pub neighborhoods: Vec<Neighborhood>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
    #[serde(rename = "mahalle_id")]
    pub id: String,
    #[serde(rename = "mahalle_adi")]
    pub name: String,
    #[serde(rename = "posta_kodu")]
    pub postal_code: Option<String>,
}

/// Çalışma boyunca tutulan sayaçlar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrapeSummary {
    pub provinces: usize,
    pub districts: usize,
    pub neighborhoods: usize,
    pub missing_postal_codes: usize,
}

impl ScrapeSummary {
    pub fn from_provinces(provinces: &[Province]) -> Self {
        let mut summary = Self {
            provinces: provinces.len(),
            ..Self::default()
        };
        for district in provinces.iter().flat_map(|p| &p.districts) {
            summary.districts += 1;
            summary.neighborhoods += district.neighborhoods.len();
            summary.missing_postal_codes += district
                .neighborhoods
                .iter()
                .filter(|n| n.postal_code.is_none())
                .count();
        }
        summary
    }
}

#[derive(Debug, Clone)]
pub struct ScrapeResult {
    pub provinces: Vec<Province>,
    pub summary: ScrapeSummary,
}
