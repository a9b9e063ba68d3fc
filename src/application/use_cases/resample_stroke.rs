use crate::application::errors::{StrokeRole, UseCaseError};
use crate::domain::stroke::{ResampledStroke, Stroke, StrokeError, resample};
use tracing::debug;

/// ストロークを等間隔の点列に変換するユースケース
#[derive(Debug, Default, Clone, Copy)]
pub struct ResampleStrokeUseCase;

impl ResampleStrokeUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, stroke: &Stroke, count: usize) -> Result<ResampledStroke, UseCaseError> {
        if count < 2 {
            return Err(StrokeError::InvalidSampleCount(count).into());
        }
        stroke
            .validate(1)
            .map_err(|e| UseCaseError::invalid(StrokeRole::Trace, e))?;

        let resampled = resample(stroke, count);
        debug!(input = stroke.len(), output = resampled.len(), "ストロークを再サンプリング");
        Ok(resampled)
    }
}
