//! # Stroke Recall
//!
//! 参照画像をなぞった一筆書きと、記憶だけで描き直した一筆書きを比較して
//! 0〜100 のスコアを付ける描画練習エンジン
//!
//! このクレートは Domain-Driven Design (DDD) 原則に基づいて設計されており、
//! 以下の層に分かれています：
//!
//! - **Domain Layer**: ストロークの再サンプリング・正規化・比較
//! - **Application Layer**: 練習セッションを扱うユースケース
//! - **Infrastructure Layer**: セッションの永続化
//! - **Interface Layer**: ストロークファイルとコンソール表示

// Rust 2024 Edition 準拠の構造
pub mod domain;
pub mod debug;
pub mod application;
pub mod infrastructure;
pub mod interfaces;

// 公開API
pub use domain::*;

use crate::domain::analysis::ComparisonConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 比較に使うストロークの最小点数（これ未満は描画ミスとみなす）
pub const DEFAULT_MIN_STROKE_POINTS: usize = 6;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// アプリケーション全体の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: String,
    /// セッションファイルの保存先
    pub data_dir: PathBuf,
    pub min_stroke_points: usize,
    pub comparison: ComparisonConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            data_dir: PathBuf::from("data"),
            min_stroke_points: DEFAULT_MIN_STROKE_POINTS,
            comparison: ComparisonConfig::default(),
        }
    }
}

impl AppConfig {
    /// JSONファイルから読み込む（省略した項目は既定値）
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_stroke_points < 2 {
            return Err(ConfigError::Invalid(format!(
                "min_stroke_points must be at least 2, got {}",
                self.min_stroke_points
            )));
        }
        self.comparison
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
