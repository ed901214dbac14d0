//! Markdownテーブルパーサー
//!
//! LLMの市場調査レスポンス（要約文 + Markdownテーブル）から
//! 掲載一覧を取り出す。
//!
//! 寛容な解析方針:
//! - `|` で始まる行だけをテーブル行とみなす
//! - 2行目は区切り行（`---|---`）として検証せずに読み飛ばす
//! - ヘッダとセル数が一致しない行は捨てる（[`ParsedTable::rejected`] に記録）

use crate::types::Listing;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// ヘッダ + 区切り + データ1行
pub const MIN_TABLE_LINES: usize = 3;

/// セル数不一致で捨てた行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    /// 入力全体での行番号（1始まり）
    pub line_number: usize,
    pub line: String,
    pub expected_cells: usize,
    pub found_cells: usize,
}

/// パース結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTable {
    /// ヘッダのセル（テーブルが無ければ空）
    pub headers: Vec<String>,
    /// 採用した掲載（元の行順）
    pub listings: Vec<Listing>,
    /// `|` で始まる行の数
    pub table_lines: usize,
    pub rejected: Vec<RejectedRow>,
}

impl ParsedTable {
    /// テーブルとして解釈できる行があったか
    ///
    /// `false` なら「テーブル無し」、`true` で `listings` が空なら
    /// 「テーブルはあるが使える行が無い」。
    pub fn has_table(&self) -> bool {
        self.table_lines >= MIN_TABLE_LINES
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Markdownテーブルをパース
///
/// # Arguments
/// * `text` - LLMレスポンス全文
///
/// # Returns
/// 掲載一覧と捨てた行の記録。テーブルが見つからなくてもエラーにはしない。
///
/// # Examples
/// ```
/// use tasacion_common::parse_markdown_table;
///
/// let text = "| ID | Precio |\n|---|---|\n| R1 | 45.000 € |";
/// let table = parse_markdown_table(text);
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.listings[0].price, "45.000 €");
/// ```
pub fn parse_markdown_table(text: &str) -> ParsedTable {
    let table_lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| line.starts_with('|'))
        .collect();

    if table_lines.len() < MIN_TABLE_LINES {
        debug!(found = table_lines.len(), "no markdown table in response");
        return ParsedTable {
            table_lines: table_lines.len(),
            ..Default::default()
        };
    }

    let headers: Vec<String> = split_row(table_lines[0].1)
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut listings = Vec::new();
    let mut rejected = Vec::new();

    // table_lines[1] は区切り行
    for &(line_number, line) in &table_lines[2..] {
        let cells = split_row(line);
        if cells.len() == headers.len() {
            listings.push(Listing::from_cells(&headers, &cells));
        } else {
            debug!(
                line_number,
                expected = headers.len(),
                found = cells.len(),
                "dropping table row with mismatched cell count"
            );
            rejected.push(RejectedRow {
                line_number,
                line: line.to_string(),
                expected_cells: headers.len(),
                found_cells: cells.len(),
            });
        }
    }

    ParsedTable {
        headers,
        listings,
        table_lines: table_lines.len(),
        rejected,
    }
}

/// 前後の `|` を落として `|` で分割し、各セルをtrim
fn split_row(line: &str) -> Vec<&str> {
    line.trim_matches('|').split('|').map(str::trim).collect()
}
