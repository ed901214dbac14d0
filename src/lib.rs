//! Tasación: 中古トラクターの市場調査結果から評価額を出すCLI
//!
//! 解析ロジックは `tasacion-common` にあり、ここは入出力と対話部分。

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;
pub mod selector;
