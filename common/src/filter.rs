//! 掲載の絞込み
//!
//! 判定順（最初に該当した理由で除外）:
//! 1. 価格が使えない
//! 2. 稼働時間が読めない
//! 3. 目標稼働時間から許容幅を超えて離れている（目標0なら判定しない）

use crate::error::{Error, Result};
use crate::fields;
use crate::types::Listing;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 稼働時間の許容幅（±時間）
pub const DEFAULT_TOLERANCE_HOURS: u64 = 1000;

/// 目標稼働時間
///
/// 0は「稼働時間で絞り込まない」。負の値は構築時に拒否する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct TargetHours(u64);

impl TargetHours {
    /// 絞込みなし
    pub const NONE: TargetHours = TargetHours(0);

    pub fn new(hours: i64) -> Result<Self> {
        u64::try_from(hours)
            .map(TargetHours)
            .map_err(|_| Error::NegativeTargetHours(hours))
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 稼働時間による絞込みが有効か
    pub fn is_active(&self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<i64> for TargetHours {
    type Error = Error;

    fn try_from(hours: i64) -> Result<Self> {
        TargetHours::new(hours)
    }
}

impl From<u64> for TargetHours {
    fn from(hours: u64) -> Self {
        TargetHours(hours)
    }
}

impl From<TargetHours> for u64 {
    fn from(target: TargetHours) -> Self {
        target.0
    }
}

/// 絞込みオプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// 目標稼働時間からの許容幅
    pub tolerance_hours: u64,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            tolerance_hours: DEFAULT_TOLERANCE_HOURS,
        }
    }
}

/// 除外理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// 価格が空・要相談・範囲表記など
    InvalidPrice,
    /// 稼働時間に数字が無い
    MissingHours,
    /// 許容幅の外
    OutsideWindow { hours: u64, diff: u64 },
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::InvalidPrice => write!(f, "precio no utilizable"),
            DropReason::MissingHours => write!(f, "horas no legibles"),
            DropReason::OutsideWindow { hours, diff } => {
                write!(f, "{} h fuera de la ventana (diferencia {} h)", hours, diff)
            }
        }
    }
}

/// 1件を判定（`None` なら残す）
pub fn classify(
    listing: &Listing,
    target: TargetHours,
    options: &FilterOptions,
) -> Option<DropReason> {
    if !fields::is_valid_price(&listing.price) {
        return Some(DropReason::InvalidPrice);
    }

    let hours = match fields::parse_hours(&listing.hours) {
        Some(h) => h,
        None => return Some(DropReason::MissingHours),
    };

    if target.is_active() {
        let diff = hours.abs_diff(target.value());
        if diff > options.tolerance_hours {
            return Some(DropReason::OutsideWindow { hours, diff });
        }
    }

    None
}

/// 既定の許容幅（±1000h）で絞り込む
pub fn filter_listings(listings: &[Listing], target: TargetHours) -> Vec<Listing> {
    filter_listings_with(listings, target, &FilterOptions::default())
}

/// 許容幅を指定して絞り込む（元の順序を保持）
pub fn filter_listings_with(
    listings: &[Listing],
    target: TargetHours,
    options: &FilterOptions,
) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| match classify(listing, target, options) {
            Some(reason) => {
                debug!(id = %listing.id, %reason, "listing filtered out");
                false
            }
            None => true,
        })
        .cloned()
        .collect()
}
