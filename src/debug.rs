//! デバッグとログ機能
//!
//! プロジェクト全体のデバッグとログ機能を提供

use std::fs;
use std::path::PathBuf;
use tracing::{Level, debug, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// ログファイル名の接頭辞
const LOG_FILE_PREFIX: &str = "stroke-recall.log";

/// デバッグ設定
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// ログレベル
    pub log_level: Level,
    /// ファイルログを有効にするか
    pub enable_file_logging: bool,
    /// ログファイルのディレクトリ
    pub log_directory: PathBuf,
    /// コンソールログを有効にするか
    pub enable_console_logging: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: Level::WARN,
            enable_file_logging: false,
            log_directory: PathBuf::from("logs"),
            enable_console_logging: true,
        }
    }
}

impl DebugConfig {
    /// 本番環境用の設定
    pub fn production() -> Self {
        Self {
            log_level: Level::INFO,
            enable_file_logging: true,
            log_directory: PathBuf::from("logs"),
            enable_console_logging: false,
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_log_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.log_directory = directory.into();
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("stroke_recall={}", self.log_level)))
    }
}

/// ログシステムを初期化
///
/// コンソールへは標準エラー出力に書く（標準出力は結果のJSON用に空けておく）。
/// ファイルログはJSON形式で日次ローテーション。
pub fn init_logging(config: &DebugConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = config.filter();

    match (config.enable_file_logging, config.enable_console_logging) {
        (true, console) => {
            fs::create_dir_all(&config.log_directory)?;
            let file_appender =
                RollingFileAppender::new(Rotation::DAILY, &config.log_directory, LOG_FILE_PREFIX);

            if console {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_writer(file_appender.and(std::io::stderr))
                    .with_ansi(false)
                    .json()
                    .try_init()?;
            } else {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_writer(file_appender)
                    .json()
                    .try_init()?;
            }
        }
        (false, true) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .try_init()?;
        }
        (false, false) => return Ok(()),
    }

    info!("ログシステムが初期化されました");
    debug!("デバッグ設定: {:?}", config);

    Ok(())
}

/// パフォーマンス測定用のマクロ
#[macro_export]
macro_rules! measure_time {
    ($name:expr, $block:block) => {{
        let start = std::time::Instant::now();
        let result = $block;
        let duration = start.elapsed();
        tracing::debug!(
            operation = $name,
            duration_us = duration.as_micros() as u64,
            "操作完了"
        );
        result
    }};
}

/// デバッグ用のヘルパー関数
pub mod debug_helpers {
    use tracing::error;

    /// エラーの詳細情報をログに出力
    pub fn log_error_details(error: &(dyn std::error::Error + 'static), context: &str) {
        error!(
            context = context,
            error = %error,
            "エラーが発生しました"
        );

        // エラーチェーンをログに出力
        let mut source = error.source();
        let mut level = 1;
        while let Some(err) = source {
            error!(
                context = context,
                level = level,
                source_error = %err,
                "エラーの原因"
            );
            source = err.source();
            level += 1;
        }
    }
}
