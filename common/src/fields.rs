//! セル値の正規化
//!
//! LLMが書いた自由記述のセル（価格・稼働時間・リンク）から
//! 使える値を取り出す。どの関数も失敗時はパニックせず空値を返す。

use regex::Regex;

/// 「価格要相談」を意味する表記（小文字で比較）
///
/// `"-"` を含むため、範囲表記（`30.000-35.000`）も無効扱いになる。
pub const PRICE_PLACEHOLDERS: &[&str] = &[
    "consultar",
    "a consultar",
    "a convenir",
    "consult",
    "precio a",
    "-",
];

lazy_static::lazy_static! {
    // Markdownリンク `[texto](url)` のURL部分
    static ref MARKDOWN_LINK_RE: Regex = Regex::new(r"\((https?://[^)]+)\)").unwrap();
    // 裸のURL（空白まで）
    static ref BARE_URL_RE: Regex = Regex::new(r"(https?://\S+)").unwrap();
}

/// セルからURLを抽出
///
/// 抽出優先順位:
/// 1. Markdownリンクの `(https://...)`
/// 2. 裸の `https://...`
/// 3. 空文字
///
/// # Examples
/// ```
/// use tasacion_common::extract_url;
///
/// assert_eq!(extract_url("[ver](https://x.com/a)"), "https://x.com/a");
/// assert_eq!(extract_url("no link"), "");
/// ```
pub fn extract_url(cell: &str) -> String {
    if cell.is_empty() {
        return String::new();
    }

    if let Some(cap) = MARKDOWN_LINK_RE.captures(cell) {
        return cap[1].to_string();
    }

    BARE_URL_RE
        .captures(cell)
        .map(|cap| cap[1].to_string())
        .unwrap_or_default()
}

/// 価格セルが数値として使えるか判定
pub fn is_valid_price(cell: &str) -> bool {
    if cell.is_empty() {
        return false;
    }

    let lower = cell.to_lowercase();
    if PRICE_PLACEHOLDERS.iter().any(|p| lower.contains(p)) {
        return false;
    }

    cell.chars().any(|c| c.is_ascii_digit())
}

/// 稼働時間を整数で取得
///
/// 数字以外をすべて除去して解釈するため、`"1.200 h"` は `1200` になる
/// （桁区切りと小数点は区別しない）。
pub fn parse_hours(cell: &str) -> Option<u64> {
    parse_digits(cell)
}

/// 価格を整数で取得（[`parse_hours`] と同じ規則）
pub fn parse_price(cell: &str) -> Option<u64> {
    parse_digits(cell)
}

fn parse_digits(cell: &str) -> Option<u64> {
    let digits: String = cell.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    // u64を超える桁数は解釈不能として扱う
    digits.parse().ok()
}
