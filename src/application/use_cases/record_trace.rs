use crate::application::errors::{StrokeRole, UseCaseError};
use crate::domain::session::{PracticeSession, PracticeSessionRepository};
use crate::domain::stroke::Stroke;
use std::path::PathBuf;
use tracing::info;

/// なぞり描きをセッションに記録するユースケース
pub struct RecordTraceUseCase<R> {
    repository: R,
    min_stroke_points: usize,
}

impl<R> RecordTraceUseCase<R>
where
    R: PracticeSessionRepository,
{
    pub fn new(repository: R, min_stroke_points: usize) -> Self {
        Self {
            repository,
            min_stroke_points,
        }
    }

    /// 参照画像を指定した場合は新しい練習として始め直す
    pub async fn execute(
        &self,
        trace: Stroke,
        reference_image: Option<PathBuf>,
    ) -> Result<PracticeSession, UseCaseError> {
        trace
            .validate(self.min_stroke_points)
            .map_err(|e| UseCaseError::invalid(StrokeRole::Trace, e))?;

        let mut session = self.repository.load_or_new().await?;
        if let Some(image) = reference_image {
            session.start_with_image(image);
        }

        let points = trace.len();
        session.record_trace(trace);
        self.repository.save(&session).await?;

        info!(session_id = %session.id, points, "なぞり描きを記録しました");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stroke::StrokeError;
    use crate::infrastructure::persistence::InMemorySessionRepository;
    use std::sync::Arc;

    fn trace() -> Stroke {
        (0..8).map(|i| (i as f64 * 10.0, (i % 2) as f64 * 5.0)).collect::<Vec<_>>().into()
    }

    #[tokio::test]
    async fn test_record_trace_with_image() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let use_case = RecordTraceUseCase::new(repo.clone(), 6);

        let session = use_case
            .execute(trace(), Some(PathBuf::from("butterfly.png")))
            .await
            .unwrap();

        assert_eq!(session.reference_image, Some(PathBuf::from("butterfly.png")));
        assert_eq!(session.trace, Some(trace()));
        assert_eq!(repo.load().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn test_record_trace_keeps_existing_image() {
        let mut existing = PracticeSession::new();
        existing.start_with_image("cat.png");
        let repo = Arc::new(InMemorySessionRepository::with_session(existing.clone()));

        let session = RecordTraceUseCase::new(repo, 6)
            .execute(trace(), None)
            .await
            .unwrap();

        assert_eq!(session.id, existing.id);
        assert_eq!(session.reference_image, Some(PathBuf::from("cat.png")));
    }

    #[tokio::test]
    async fn test_rejects_short_trace() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let err = RecordTraceUseCase::new(repo.clone(), 6)
            .execute(Stroke::default(), None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            UseCaseError::InvalidStroke {
                role: StrokeRole::Trace,
                source: StrokeError::Empty
            }
        ));
        assert!(!repo.exists().await.unwrap());
    }
}
