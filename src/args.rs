// src/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// One-line usage shown when required flags are missing or malformed.
pub const USAGE: &str =
    "product_grouper --file=input.csv --unique-combinations=output.csv [--format=csv|json|xml]";

#[derive(Parser, Debug)]
#[command(
    name = "product_grouper",
    version,
    about = "商品レコードを属性の組み合わせごとに集計するツール (CSV / JSON / XML)"
)]
pub struct Args {
    /// 入力ファイル
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// 集計結果の出力先
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub unique_combinations: PathBuf,

    /// 入力フォーマット (csv, json, xml)
    #[arg(long, value_name = "FORMAT", default_value = "csv")]
    pub format: String,

    /// 出力フォーマット (省略時は --format と同じ)
    #[arg(long, value_name = "FORMAT")]
    pub output_format: Option<String>,

    /// 処理の詳細を stderr に出力
    #[arg(short, long)]
    pub verbose: bool,
}
