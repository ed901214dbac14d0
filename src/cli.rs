use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tasacion")]
#[command(about = "Tasación 2.0 – barrido de mercado de tractores usados", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 調査結果（Markdown）を絞り込み、選択した掲載から評価額を算出
    Scan {
        /// LLMレスポンスのファイル（`-` で標準入力）
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// 目標稼働時間（0 = 絞込みなし、省略時は設定値）
        #[arg(long, allow_negative_numbers = true)]
        hours: Option<i64>,

        /// 許容幅（±時間、省略時は設定値）
        #[arg(long)]
        tolerance: Option<u64>,

        /// 対話選択をせず全件を使用
        #[arg(long)]
        all: bool,

        /// 評価対象から外すID（複数指定可、指定時は対話選択なし）
        #[arg(short, long, value_delimiter = ',')]
        deselect: Vec<String>,

        /// 結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 元のレスポンス全文も表示
        #[arg(long)]
        show_raw: bool,
    },

    /// テーブルのパース結果だけを表示（絞込みなし）
    Parse {
        /// LLMレスポンスのファイル（`-` で標準入力）
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 稼働時間の許容幅を設定
        #[arg(long)]
        set_tolerance: Option<u64>,

        /// 既定値に戻す
        #[arg(long)]
        reset: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
