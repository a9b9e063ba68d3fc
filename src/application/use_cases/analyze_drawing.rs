use crate::application::errors::{StrokeRole, UseCaseError};
use crate::domain::analysis::{
    AnalysisResult, ErrorProfile, ErrorRegion, ScoreGrade, StrokeComparator,
};
use crate::domain::session::PracticeSessionRepository;
use crate::domain::shared::value_objects::Color;
use crate::domain::stroke::Stroke;
use serde::Serialize;
use tracing::{info, instrument};

/// 記憶描きの比較リクエスト
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub memory: Stroke,
    /// 記憶描き中にヒントを表示したか
    pub hint_used: bool,
    /// 指定した場合は保存済みのなぞり描きの代わりに使い、セッションにも記録する
    pub trace: Option<Stroke>,
}

impl AnalyzeRequest {
    pub fn new(memory: Stroke) -> Self {
        Self {
            memory,
            hint_used: false,
            trace: None,
        }
    }

    pub fn with_hint_used(mut self, hint_used: bool) -> Self {
        self.hint_used = hint_used;
        self
    }

    pub fn with_trace(mut self, trace: Stroke) -> Self {
        self.trace = Some(trace);
        self
    }
}

/// 表示層向けの比較結果の要約
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub grade: ScoreGrade,
    pub error_profile: Option<ErrorProfile>,
    pub weakest_region: ErrorRegion,
    pub heat_colors: Vec<Color>,
    pub attempts: u32,
}

impl AnalysisReport {
    pub fn new(result: AnalysisResult, attempts: u32) -> Self {
        let error_profile = result.error_profile();
        let weakest_region = error_profile
            .map(|profile| profile.highest_region())
            .unwrap_or(ErrorRegion::Throughout);

        Self {
            grade: result.grade(),
            heat_colors: result.heat_colors(),
            error_profile,
            weakest_region,
            attempts,
            result,
        }
    }

    pub fn score(&self) -> f64 {
        self.result.score()
    }
}

pub struct AnalyzeDrawingUseCase<R> {
    repository: R,
    comparator: StrokeComparator,
    min_stroke_points: usize,
}

impl<R> AnalyzeDrawingUseCase<R>
where
    R: PracticeSessionRepository,
{
    pub fn new(repository: R, comparator: StrokeComparator, min_stroke_points: usize) -> Self {
        Self {
            repository,
            comparator,
            min_stroke_points,
        }
    }

    #[instrument(
        skip_all,
        fields(memory_points = request.memory.len(), hint_used = request.hint_used)
    )]
    pub async fn execute(&self, request: AnalyzeRequest) -> Result<AnalysisReport, UseCaseError> {
        let mut session = self.repository.load_or_new().await?;

        // 1. なぞり描きの決定（明示指定があればセッションに記録）
        if let Some(trace) = request.trace {
            trace
                .validate(self.min_stroke_points)
                .map_err(|e| UseCaseError::invalid(StrokeRole::Trace, e))?;
            session.record_trace(trace);
        }
        let trace = session.trace.clone().ok_or(UseCaseError::NoTraceRecorded)?;
        trace
            .validate(self.min_stroke_points)
            .map_err(|e| UseCaseError::invalid(StrokeRole::Trace, e))?;

        // 2. 記憶描きの検証
        request
            .memory
            .validate(self.min_stroke_points)
            .map_err(|e| UseCaseError::invalid(StrokeRole::Memory, e))?;

        // 3. 比較
        let result = crate::measure_time!("analyze_strokes", {
            self.comparator.analyze(&trace, &request.memory)
        })?
        .with_hint_used(request.hint_used);

        // 4. 結果を記録して保存
        session.record_result(result.clone());
        self.repository.save(&session).await?;

        let report = AnalysisReport::new(result, session.attempts);
        info!(
            score = report.score(),
            grade = %report.grade,
            weakest_region = %report.weakest_region,
            attempts = report.attempts,
            "記憶描きを採点しました"
        );

        Ok(report)
    }
}
