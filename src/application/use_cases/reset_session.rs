use crate::application::errors::UseCaseError;
use crate::domain::session::PracticeSessionRepository;
use tracing::info;

/// 保存済みの練習状態を削除するユースケース
pub struct ResetSessionUseCase<R> {
    repository: R,
}

impl<R> ResetSessionUseCase<R>
where
    R: PracticeSessionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<(), UseCaseError> {
        self.repository.clear().await?;
        info!("練習セッションをリセットしました");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::PracticeSession;
    use crate::infrastructure::persistence::InMemorySessionRepository;

    #[tokio::test]
    async fn test_reset_clears_session() {
        let repo = InMemorySessionRepository::with_session(PracticeSession::new());
        ResetSessionUseCase::new(repo.clone()).execute().await.unwrap();
        assert!(!repo.exists().await.unwrap());

        // 空の状態でも成功する
        ResetSessionUseCase::new(repo).execute().await.unwrap();
    }
}
