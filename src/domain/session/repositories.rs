//! 練習セッションのリポジトリトレイト
//!
//! 永続化された状態の読み込み・保存を明示的な呼び出しとして定義

use super::entities::PracticeSession;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// セッションリポジトリのエラー
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
pub enum RepositoryError {
    #[error("Storage I/O error: {message}")]
    Io { message: String },
    #[error("Serialization error: {message}")]
    Serialization { message: String },
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl RepositoryError {
    /// エラーが一時的なものかチェック
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<std::io::Error> for RepositoryError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}

/// 練習セッションリポジトリトレイト
#[async_trait]
pub trait PracticeSessionRepository: Send + Sync {
    /// 保存済みのセッションを読み込む（未保存なら `None`）
    async fn load(&self) -> Result<Option<PracticeSession>, RepositoryError>;

    /// セッションを保存（既存の状態は上書き）
    async fn save(&self, session: &PracticeSession) -> Result<(), RepositoryError>;

    /// 保存済みの状態を削除
    async fn clear(&self) -> Result<(), RepositoryError>;

    /// 保存済みのセッションがあるかチェック
    async fn exists(&self) -> Result<bool, RepositoryError> {
        Ok(self.load().await?.is_some())
    }

    /// 保存済みのセッション、なければ新規セッション
    async fn load_or_new(&self) -> Result<PracticeSession, RepositoryError> {
        Ok(self.load().await?.unwrap_or_default())
    }
}

#[async_trait]
impl<T> PracticeSessionRepository for Arc<T>
where
    T: PracticeSessionRepository + ?Sized,
{
    async fn load(&self) -> Result<Option<PracticeSession>, RepositoryError> {
        (**self).load().await
    }

    async fn save(&self, session: &PracticeSession) -> Result<(), RepositoryError> {
        (**self).save(session).await
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        (**self).clear().await
    }
}
