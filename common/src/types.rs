//! 掲載データの型定義
//!
//! 市場調査テーブルの1行 = 1件の掲載（Listing）。
//! 上流（LLM）の出力そのままの文字列を保持し、数値への変換は
//! [`crate::fields`] の正規化関数で都度行う。

use crate::fields;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// テーブルの既知カラム
///
/// 想定ヘッダ: `ID | Portal | Año | Horas | Precio | País | Enlace`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingField {
    Id,
    Portal,
    Year,
    Hours,
    Price,
    Country,
    Link,
}

impl ListingField {
    /// 想定ヘッダ順の全カラム
    pub const ALL: [ListingField; 7] = [
        ListingField::Id,
        ListingField::Portal,
        ListingField::Year,
        ListingField::Hours,
        ListingField::Price,
        ListingField::Country,
        ListingField::Link,
    ];

    /// 上流テーブルでのヘッダ表記
    pub fn label(&self) -> &'static str {
        match self {
            ListingField::Id => "ID",
            ListingField::Portal => "Portal",
            ListingField::Year => "Año",
            ListingField::Hours => "Horas",
            ListingField::Price => "Precio",
            ListingField::Country => "País",
            ListingField::Link => "Enlace",
        }
    }

    /// ヘッダ文字列からカラムを判定
    ///
    /// 大文字小文字・アクセントの有無を無視し、英語表記も受け付ける。
    pub fn from_header(header: &str) -> Option<Self> {
        match fold_header(header).as_str() {
            "id" => Some(ListingField::Id),
            "portal" => Some(ListingField::Portal),
            "ano" | "year" => Some(ListingField::Year),
            "horas" | "hours" => Some(ListingField::Hours),
            "precio" | "price" => Some(ListingField::Price),
            "pais" | "country" => Some(ListingField::Country),
            "enlace" | "link" | "url" => Some(ListingField::Link),
            _ => None,
        }
    }
}

impl std::fmt::Display for ListingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn fold_header(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' => 'a',
            'é' | 'è' => 'e',
            'í' | 'ì' => 'i',
            'ó' | 'ò' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// 掲載1件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    pub id: String,
    pub portal: String,
    pub year: String,        // Año
    pub hours: String,       // Horas
    pub price: String,       // Precio
    pub country: String,     // País
    pub link: String,        // Enlace

    /// 既知カラムに該当しないヘッダのセル
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Listing {
    /// ヘッダとセルを位置で対応付けて生成
    ///
    /// 同じカラムに該当するヘッダが複数ある場合は後のセルが勝つ。
    pub fn from_cells<H, C>(headers: &[H], cells: &[C]) -> Self
    where
        H: AsRef<str>,
        C: AsRef<str>,
    {
        let mut listing = Listing::default();
        for (header, cell) in headers.iter().zip(cells) {
            let header = header.as_ref();
            let cell = cell.as_ref().to_string();
            match ListingField::from_header(header) {
                Some(field) => listing.set(field, cell),
                None => {
                    listing.extra.insert(header.to_string(), cell);
                }
            }
        }
        listing
    }

    pub fn get(&self, field: ListingField) -> &str {
        match field {
            ListingField::Id => &self.id,
            ListingField::Portal => &self.portal,
            ListingField::Year => &self.year,
            ListingField::Hours => &self.hours,
            ListingField::Price => &self.price,
            ListingField::Country => &self.country,
            ListingField::Link => &self.link,
        }
    }

    pub fn set(&mut self, field: ListingField, value: String) {
        let slot = match field {
            ListingField::Id => &mut self.id,
            ListingField::Portal => &mut self.portal,
            ListingField::Year => &mut self.year,
            ListingField::Hours => &mut self.hours,
            ListingField::Price => &mut self.price,
            ListingField::Country => &mut self.country,
            ListingField::Link => &mut self.link,
        };
        *slot = value;
    }

    /// 稼働時間（数字以外を除去して解釈）
    pub fn parsed_hours(&self) -> Option<u64> {
        fields::parse_hours(&self.hours)
    }

    /// 価格（数字以外を除去して解釈）
    pub fn parsed_price(&self) -> Option<u64> {
        fields::parse_price(&self.price)
    }

    /// 掲載URL（見つからなければ空文字）
    pub fn url(&self) -> String {
        fields::extract_url(&self.link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header_spanish_and_english() {
        assert_eq!(ListingField::from_header("Año"), Some(ListingField::Year));
        assert_eq!(ListingField::from_header("ano"), Some(ListingField::Year));
        assert_eq!(ListingField::from_header(" PAÍS "), Some(ListingField::Country));
        assert_eq!(ListingField::from_header("Price"), Some(ListingField::Price));
        assert_eq!(ListingField::from_header("URL"), Some(ListingField::Link));
        assert_eq!(ListingField::from_header("Modelo"), None);
    }

    #[test]
    fn test_labels_round_trip_through_from_header() {
        for field in ListingField::ALL {
            assert_eq!(ListingField::from_header(field.label()), Some(field));
        }
    }

    #[test]
    fn test_display_uses_header_label() {
        assert_eq!(ListingField::Year.to_string(), "Año");
        assert_eq!(format!("{}", ListingField::Country), "País");
    }

    #[test]
    fn test_get_matches_set() {
        let mut listing = Listing::default();
        for (i, field) in ListingField::ALL.into_iter().enumerate() {
            listing.set(field, format!("v{}", i));
        }
        assert_eq!(listing.get(ListingField::Id), "v0");
        assert_eq!(listing.get(ListingField::Hours), "v3");
        assert_eq!(listing.get(ListingField::Link), "v6");
        assert_eq!(listing.hours, "v3");
    }

    #[test]
    fn test_from_cells_zips_by_position() {
        let headers = ["ID", "Portal", "Año", "Horas", "Precio", "País", "Enlace"];
        let cells = ["R1", "Mascus", "2018", "4.500 h", "85.000 €", "España", "[ver](https://m.com/1)"];

        let listing = Listing::from_cells(&headers, &cells);
        assert_eq!(listing.id, "R1");
        assert_eq!(listing.portal, "Mascus");
        assert_eq!(listing.year, "2018");
        assert_eq!(listing.parsed_hours(), Some(4500));
        assert_eq!(listing.parsed_price(), Some(85000));
        assert_eq!(listing.country, "España");
        assert_eq!(listing.url(), "https://m.com/1");
        assert!(listing.extra.is_empty());
    }

    #[test]
    fn test_from_cells_keeps_unknown_columns() {
        let headers = ["ID", "Modelo", "Precio"];
        let cells = ["R7", "6175R", "90.000"];

        let listing = Listing::from_cells(&headers, &cells);
        assert_eq!(listing.id, "R7");
        assert_eq!(listing.price, "90.000");
        assert_eq!(listing.extra.get("Modelo").map(String::as_str), Some("6175R"));
        // ヘッダに無いカラムは空
        assert_eq!(listing.hours, "");
    }

    #[test]
    fn test_from_cells_duplicate_header_last_wins() {
        let headers = ["Precio", "Price"];
        let cells = ["50.000", "52.000"];

        let listing = Listing::from_cells(&headers, &cells);
        assert_eq!(listing.price, "52.000");
    }

    #[test]
    fn test_listing_serialize_skips_empty_extra() {
        let listing = Listing {
            id: "R1".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&listing).expect("シリアライズ失敗");
        assert!(json.contains("\"id\":\"R1\""));
        assert!(!json.contains("extra"));
    }
}
