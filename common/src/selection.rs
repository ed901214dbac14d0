//! 評価対象の選択状態
//!
//! 掲載ID → 評価に含めるか。UI側が切り替え、評価額算出時に参照する。
//! IDが重複した場合は後の行が同じエントリを上書きする。

use crate::types::Listing;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 新しい調査結果を受け取ったときの選択状態の扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResetPolicy {
    /// 毎回すべて選択状態に戻す
    #[default]
    Always,
    /// 選択状態が空のときだけ初期化（既存の切替は保持）
    WhenEmpty,
}

impl std::str::FromStr for ResetPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(ResetPolicy::Always),
            "when-empty" | "when_empty" | "empty" => Ok(ResetPolicy::WhenEmpty),
            _ => Err(format!("Unknown reset policy: {}. Use always or when-empty", s)),
        }
    }
}

impl std::fmt::Display for ResetPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetPolicy::Always => write!(f, "always"),
            ResetPolicy::WhenEmpty => write!(f, "when-empty"),
        }
    }
}

/// 選択状態
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    flags: HashMap<String, bool>,
}

impl SelectionState {
    /// 全件選択で初期化
    pub fn all_selected(listings: &[Listing]) -> Self {
        let mut state = Self::default();
        state.reset(listings, ResetPolicy::Always);
        state
    }

    /// 新しい掲載一覧に合わせて初期化
    pub fn reset(&mut self, listings: &[Listing], policy: ResetPolicy) {
        match policy {
            ResetPolicy::Always => {
                self.flags = listings.iter().map(|l| (l.id.clone(), true)).collect();
            }
            ResetPolicy::WhenEmpty if self.flags.is_empty() => {
                self.flags = listings.iter().map(|l| (l.id.clone(), true)).collect();
            }
            ResetPolicy::WhenEmpty => {
                // 未知のIDだけ選択状態で追加
                for listing in listings {
                    self.flags.entry(listing.id.clone()).or_insert(true);
                }
            }
        }
    }

    /// 選択されているか（エントリが無いIDは非選択）
    pub fn is_selected(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: impl Into<String>, selected: bool) {
        self.flags.insert(id.into(), selected);
    }

    /// 切り替えて新しい値を返す
    pub fn toggle(&mut self, id: &str) -> bool {
        let flag = self.flags.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// 選択中の掲載を元の順序で返す
    pub fn selected<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.is_selected(&l.id)).collect()
    }

    /// 選択中の件数（掲載一覧基準）
    pub fn count_selected(&self, listings: &[Listing]) -> usize {
        listings.iter().filter(|l| self.is_selected(&l.id)).count()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str) -> Listing {
        Listing {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_selected() {
        let rows = vec![listing("R1"), listing("R2")];
        let state = SelectionState::all_selected(&rows);
        assert!(state.is_selected("R1"));
        assert!(state.is_selected("R2"));
        assert!(!state.is_selected("R3"));
        assert_eq!(state.count_selected(&rows), 2);
    }

    #[test]
    fn test_toggle_and_set() {
        let rows = vec![listing("R1"), listing("R2")];
        let mut state = SelectionState::all_selected(&rows);

        assert!(!state.toggle("R1"));
        assert!(!state.is_selected("R1"));
        assert!(state.toggle("R1"));

        state.set("R2", false);
        let selected: Vec<&str> = state.selected(&rows).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(selected, vec!["R1"]);
    }

    #[test]
    fn test_reset_always_discards_previous_flags() {
        let rows = vec![listing("R1"), listing("R2")];
        let mut state = SelectionState::all_selected(&rows);
        state.set("R1", false);

        let next = vec![listing("R1"), listing("R5")];
        state.reset(&next, ResetPolicy::Always);
        assert!(state.is_selected("R1"));
        assert!(state.is_selected("R5"));
        assert!(!state.is_selected("R2"));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_reset_when_empty_keeps_flags() {
        let rows = vec![listing("R1"), listing("R2")];
        let mut state = SelectionState::default();
        state.reset(&rows, ResetPolicy::WhenEmpty);
        assert_eq!(state.count_selected(&rows), 2);

        state.set("R1", false);
        let next = vec![listing("R1"), listing("R3")];
        state.reset(&next, ResetPolicy::WhenEmpty);
        assert!(!state.is_selected("R1"));
        assert!(state.is_selected("R3"));
    }

    #[test]
    fn test_duplicate_ids_share_entry() {
        let rows = vec![listing("R1"), listing("R1"), listing("")];
        let mut state = SelectionState::all_selected(&rows);
        assert_eq!(state.len(), 2);

        state.set("R1", false);
        assert_eq!(state.count_selected(&rows), 1);
        assert!(state.is_selected(""));
    }

    #[test]
    fn test_reset_policy_from_str() {
        assert_eq!("always".parse::<ResetPolicy>(), Ok(ResetPolicy::Always));
        assert_eq!("when-empty".parse::<ResetPolicy>(), Ok(ResetPolicy::WhenEmpty));
        assert!("sometimes".parse::<ResetPolicy>().is_err());
    }
}
