//! 表示用フォーマット
//!
//! 金額は `.` 区切り + 通貨記号（`45.000 €`）。

use crate::types::{Listing, ListingField};
use crate::valuation::Valuation;

/// 3桁ごとに `.` を挟む
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

pub fn format_currency(value: u64, symbol: &str) -> String {
    format!("{} {}", format_thousands(value), symbol)
}

/// 平均値は整数に丸めて表示
pub fn format_mean(mean: f64, symbol: &str) -> String {
    let rounded = if mean.is_finite() && mean > 0.0 {
        mean.round() as u64
    } else {
        0
    };
    format_currency(rounded, symbol)
}

/// 表示行で「見出し: 値」と出すカラム
const LABELED_FIELDS: [ListingField; 4] = [
    ListingField::Year,
    ListingField::Hours,
    ListingField::Price,
    ListingField::Country,
];

/// 掲載1件の表示行
///
/// `markdown` なら IDを太字にし、リンクを `[Ver anuncio](url)` で出す。
pub fn listing_line(listing: &Listing, markdown: bool) -> String {
    let id = if markdown {
        format!("**{}**", listing.id)
    } else {
        listing.id.clone()
    };

    let mut parts = vec![id, listing.get(ListingField::Portal).to_string()];
    for field in LABELED_FIELDS {
        parts.push(format!("{}: {}", field, listing.get(field)));
    }
    let mut line = parts.join(" | ");

    let url = listing.url();
    if !url.is_empty() {
        if markdown {
            line.push_str(&format!(" | [Ver anuncio]({})", url));
        } else {
            line.push_str(&format!(" | {}", url));
        }
    }

    line
}

/// 評価結果の要約行
pub fn valuation_summary(valuation: &Valuation, symbol: &str) -> Vec<String> {
    vec![
        format!("Media recortada: {}", format_mean(valuation.mean, symbol)),
        format!("Mínimo: {}", format_currency(valuation.min, symbol)),
        format!("Máximo: {}", format_currency(valuation.max, symbol)),
        format!("Anuncios usados: {}", valuation.n),
    ]
}
