//! 調査セッション
//!
//! 直近の調査テキスト・絞込み結果・選択状態をまとめた値。
//! 呼び出し側が所有し、`scan` で古いセッションを受け取って新しいものを返す。
//! パイプライン自体は状態を持たない。

use crate::filter::{filter_listings_with, FilterOptions, TargetHours};
use crate::parser::{parse_markdown_table, ParsedTable};
use crate::selection::{ResetPolicy, SelectionState};
use crate::types::Listing;
use crate::valuation::{estimate_with_min_sample, Valuation, MIN_SAMPLE};
use serde::{Deserialize, Serialize};
use tracing::info;

/// セッションの動作設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub filter: FilterOptions,
    pub reset_policy: ResetPolicy,
    pub min_sample: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            filter: FilterOptions::default(),
            reset_policy: ResetPolicy::default(),
            min_sample: MIN_SAMPLE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// 最後に受け取ったLLMレスポンス
    pub raw_text: String,
    pub target_hours: TargetHours,
    /// パース結果（絞込み前）
    pub table: ParsedTable,
    /// 絞込み後の掲載（表示・選択対象）
    pub listings: Vec<Listing>,
    pub selection: SelectionState,
}

impl Session {
    /// 新しい調査結果を取り込む
    pub fn scan(
        mut self,
        raw_text: impl Into<String>,
        target_hours: TargetHours,
        options: &SessionOptions,
    ) -> Session {
        let raw_text = raw_text.into();
        let table = parse_markdown_table(&raw_text);
        let listings = filter_listings_with(&table.listings, target_hours, &options.filter);

        self.selection.reset(&listings, options.reset_policy);

        info!(
            parsed = table.len(),
            rejected = table.rejected.len(),
            kept = listings.len(),
            target_hours = target_hours.value(),
            "scan processed"
        );

        Session {
            raw_text,
            target_hours,
            table,
            listings,
            selection: self.selection,
        }
    }

    /// 選択を切り替えて新しい値を返す
    pub fn toggle(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    pub fn set_selected(&mut self, id: &str, selected: bool) {
        self.selection.set(id, selected);
    }

    pub fn selected_listings(&self) -> Vec<&Listing> {
        self.selection.selected(&self.listings)
    }

    /// 現在の選択で評価額を算出
    pub fn valuation(&self, options: &SessionOptions) -> Option<Valuation> {
        estimate_with_min_sample(&self.listings, &self.selection, options.min_sample)
    }
}
