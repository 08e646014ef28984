use bfhl_client_common::FilterOption;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bfhl-client")]
#[command(about = "BFHL APIフォーム送信クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 入力JSONを検証してBFHLエンドポイントへ送信
    Submit {
        /// 入力JSONファイル（トップレベルに data 配列を持つこと）
        #[arg(required = true)]
        input: PathBuf,

        /// file_b64 パートに入れるBase64文字列
        #[arg(long, default_value = "")]
        file_b64: String,

        /// ファイルを読み込んでBase64化し file_b64 パートに入れる
        #[arg(long, conflicts_with = "file_b64")]
        file_b64_from: Option<PathBuf>,

        /// image パートとして添付する画像ファイル
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// 表示フィルタ (numbers/alphabets/highest-lowercase-alphabet)、複数指定可
        #[arg(short, long)]
        filter: Vec<FilterOption>,

        /// 生の応答JSONだけ表示（フィルタ行・画像詳細を出さない）
        #[arg(long)]
        raw_only: bool,

        /// 送信先エンドポイント（設定・環境変数より優先）
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// 入力JSONをオフラインで検証（送信しない）
    Validate {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// エンドポイントURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// エンドポイントを既定値に戻す
        #[arg(long)]
        reset_endpoint: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
