use crate::domain::session::{PracticeSession, PracticeSessionRepository, RepositoryError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// インメモリの練習セッションリポジトリ実装
#[derive(Default, Clone)]
pub struct InMemorySessionRepository {
    session: Arc<RwLock<Option<PracticeSession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存のセッションを持った状態で作成
    pub fn with_session(session: PracticeSession) -> Self {
        Self {
            session: Arc::new(RwLock::new(Some(session))),
        }
    }
}

#[async_trait]
impl PracticeSessionRepository for InMemorySessionRepository {
    async fn load(&self) -> Result<Option<PracticeSession>, RepositoryError> {
        Ok(self.session.read().await.clone())
    }

    async fn save(&self, session: &PracticeSession) -> Result<(), RepositoryError> {
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        *self.session.write().await = None;
        Ok(())
    }
}
