//! 評価額算出
//!
//! 選択中かつ価格が読める掲載から、最安・最高を1件ずつ除いた
//! 平均（トリム平均）を求める。外れ値を1件ずつ落とすため最低3件必要。

use crate::selection::SelectionState;
use crate::types::Listing;
use serde::{Deserialize, Serialize};

/// トリム平均に必要な最小件数
pub const MIN_SAMPLE: usize = 3;

/// 評価結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// トリム平均
    pub mean: f64,
    /// 最安値（トリム前）
    pub min: u64,
    /// 最高値（トリム前）
    pub max: u64,
    /// 使用した件数（除外した両端を含む）
    pub n: usize,
}

/// 選択中の掲載から評価額を算出
///
/// 件数不足なら `None`（呼び出し側で「データ不足」を表示する）。
pub fn estimate(listings: &[Listing], selection: &SelectionState) -> Option<Valuation> {
    estimate_with_min_sample(listings, selection, MIN_SAMPLE)
}

/// 最小件数を指定して算出（[`MIN_SAMPLE`] 未満の指定は切り上げ）
pub fn estimate_with_min_sample(
    listings: &[Listing],
    selection: &SelectionState,
    min_sample: usize,
) -> Option<Valuation> {
    let prices: Vec<u64> = listings
        .iter()
        .filter(|l| selection.is_selected(&l.id))
        .filter_map(Listing::parsed_price)
        .collect();

    if prices.len() < min_sample.max(MIN_SAMPLE) {
        return None;
    }

    trimmed_mean(&prices)
}

/// 価格列のトリム平均
pub fn trimmed_mean(prices: &[u64]) -> Option<Valuation> {
    if prices.len() < MIN_SAMPLE {
        return None;
    }

    let mut sorted = prices.to_vec();
    sorted.sort_unstable();

    let trimmed = &sorted[1..sorted.len() - 1];
    let sum: u128 = trimmed.iter().map(|&p| p as u128).sum();
    let mean = sum as f64 / trimmed.len() as f64;

    Some(Valuation {
        mean,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        n: sorted.len(),
    })
}
