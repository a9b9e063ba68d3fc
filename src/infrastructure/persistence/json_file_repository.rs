use crate::domain::session::{PracticeSession, PracticeSessionRepository, RepositoryError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// セッションファイル名
pub const SESSION_FILE_NAME: &str = "session.json";

/// JSONファイルに練習セッションを保存するリポジトリ
pub struct JsonFileSessionRepository {
    path: PathBuf,
}

impl JsonFileSessionRepository {
    /// データディレクトリ直下の `session.json` を使う
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SESSION_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl PracticeSessionRepository for JsonFileSessionRepository {
    async fn load(&self) -> Result<Option<PracticeSession>, RepositoryError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "保存済みセッションなし");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        // 壊れた保存データは読み飛ばして新規扱い
        match serde_json::from_slice(&bytes) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "保存済みセッションを解析できませんでした");
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &PracticeSession) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(session)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, json).await?;
        fs::rename(&temp_path, &self.path).await?;

        info!(path = %self.path.display(), session_id = %session.id, "セッションを保存しました");
        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                info!(path = %self.path.display(), "セッションを削除しました");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
