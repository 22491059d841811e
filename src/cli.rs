use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "statement-dash")]
#[command(about = "取引明細PDFをアップロードして融資適格性の解析結果を表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 送信先の上書き
#[derive(Args, Debug, Clone, Default)]
pub struct EndpointArgs {
    /// 解析エンドポイントURL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// タイムアウト（秒）
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 取引明細を解析して結果を表示
    Analyze {
        /// PDFファイルまたはフォルダ
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        #[command(flatten)]
        endpoint: EndpointArgs,
    },

    /// 対話モード（解析・フィードバック・チャット）
    Session {
        /// PDFファイルまたはフォルダ
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        #[command(flatten)]
        endpoint: EndpointArgs,
    },

    /// チャットパネルのみ起動
    Chat,

    /// 設定
    Config {
        /// 解析エンドポイントURLを保存
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト（秒）を保存
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
