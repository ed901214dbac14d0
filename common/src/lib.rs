//! Tasación Common Library
//!
//! 市場調査テーブルの解析・絞込み・評価額算出（UIに依存しない部分）
//!
//! 流れ: LLMレスポンス → [`parse_markdown_table`] → [`filter_listings`]
//! → [`SelectionState`]（全件選択で初期化） → [`estimate`]

pub mod types;
pub mod error;
pub mod fields;
pub mod parser;
pub mod filter;
pub mod selection;
pub mod valuation;
pub mod session;
pub mod format;

pub use types::{Listing, ListingField};
pub use error::{Error, Result};
pub use fields::{extract_url, is_valid_price, parse_hours, parse_price};
pub use parser::{parse_markdown_table, ParsedTable, RejectedRow};
pub use filter::{
    classify, filter_listings, filter_listings_with, DropReason, FilterOptions, TargetHours,
    DEFAULT_TOLERANCE_HOURS,
};
pub use selection::{ResetPolicy, SelectionState};
pub use valuation::{estimate, estimate_with_min_sample, trimmed_mean, Valuation, MIN_SAMPLE};
pub use session::{Session, SessionOptions};
