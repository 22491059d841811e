use clap::Parser;
use statement_dash::{cli, client, config, error, interactive, report, scanner, session};
use cli::{Cli, Commands, EndpointArgs};
use client::HttpBackend;
use config::Config;
use error::Result;
use session::Dashboard;
use statement_dash_common::render::MAX_RECOMMENDED_FILES;
use statement_dash_common::{ChatPanel, UploadState};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// ファイル収集と読み込み
async fn prepare_uploads(
    paths: &[PathBuf],
    recursive: bool,
) -> Result<Vec<client::StatementUpload>> {
    println!("[1/2] 取引明細をスキャン中...");
    let files = scanner::collect_statements(paths, recursive)?;

    if files.is_empty() {
        let joined = paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(error::DashError::NoStatementsFound(joined));
    }
    if files.len() > MAX_RECOMMENDED_FILES {
        tracing::warn!(
            files = files.len(),
            limit = MAX_RECOMMENDED_FILES,
            "推奨上限を超えるファイル数です"
        );
    }
    println!("✔ {}件のPDFを検出\n", files.len());

    client::load_uploads(&files).await
}

fn backend_for(config: Config, args: EndpointArgs) -> Result<HttpBackend> {
    let config = config.with_overrides(args.endpoint, args.timeout);
    tracing::debug!(endpoint = %config.endpoint, timeout = config.timeout_seconds, "接続設定");
    HttpBackend::new(&config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { paths, output, recursive, endpoint } => {
            println!("📄 statement-dash - 取引明細解析\n");

            let uploads = prepare_uploads(&paths, recursive).await?;
            let backend = backend_for(config, endpoint)?;

            println!("[2/2] 解析中... ({})", backend.endpoint());
            let mut dashboard = Dashboard::new(backend);
            interactive::analyze_with_spinner(&mut dashboard, &uploads).await;

            println!("{}", report::render_view(dashboard.view(), dashboard.feedback()));

            match dashboard.view().state() {
                UploadState::Success(results) => {
                    if let Some(output) = output {
                        let json = serde_json::to_string_pretty(results)?;
                        std::fs::write(&output, json)?;
                        println!("✔ 結果を保存: {}", output.display());
                    }
                    println!("\n✅ 解析完了");
                }
                UploadState::Error(e) => return Err(e.clone().into()),
                UploadState::Idle | UploadState::Loading => {}
            }
        }

        Commands::Session { paths, recursive, endpoint } => {
            let uploads = prepare_uploads(&paths, recursive).await?;
            let backend = backend_for(config, endpoint)?;
            let mut dashboard = Dashboard::new(backend);
            interactive::run_session(&mut dashboard, &uploads).await?;
        }

        Commands::Chat => {
            let mut panel = ChatPanel::new();
            interactive::run_chat_loop(|text| panel.submit(text).cloned())?;
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let mut config = config;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(secs) = set_timeout {
                config.set_timeout(secs)?;
                println!("✔ タイムアウトを設定しました");
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  フィールド名: {}", config.field_name);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
