use crate::application::errors::UseCaseError;
use crate::application::use_cases::analyze_drawing::AnalysisReport;
use crate::domain::session::PracticeSessionRepository;
use crate::domain::shared::value_objects::Point;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// 前回の結果を復元した状態
#[derive(Debug, Clone, Serialize)]
pub struct ResumedSession {
    pub report: AnalysisReport,
    pub reference_image: Option<PathBuf>,
    /// なぞり描きの始点と終点
    pub trace_endpoints: Option<(Point, Point)>,
}

/// 保存済みの結果を再表示するユースケース
pub struct ResumeSessionUseCase<R> {
    repository: R,
}

impl<R> ResumeSessionUseCase<R>
where
    R: PracticeSessionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<ResumedSession, UseCaseError> {
        let Some(session) = self.repository.load().await? else {
            debug!("保存済みセッションがありません");
            return Err(UseCaseError::NoSavedResult);
        };

        let trace_endpoints = session.trace_endpoints();
        let result = session.last_result.ok_or(UseCaseError::NoSavedResult)?;
        info!(session_id = %session.id, score = result.score(), "前回の結果を復元しました");

        Ok(ResumedSession {
            report: AnalysisReport::new(result, session.attempts),
            reference_image: session.reference_image,
            trace_endpoints,
        })
    }
}
