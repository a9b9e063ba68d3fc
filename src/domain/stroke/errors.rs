use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrokeError {
    #[error("Stroke has no points")]
    Empty,

    #[error("Stroke too short: at least {required} points required, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("Non-finite coordinate at point {index}")]
    NonFinitePoint { index: usize },

    #[error("Invalid sample count: {0} (must be at least 2)")]
    InvalidSampleCount(usize),

    #[error("Invalid comparison parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl StrokeError {
    /// ユーザーが描き直せば解消するエラーか
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StrokeError::Empty | StrokeError::TooFewPoints { .. }
        )
    }
}
