use crate::domain::session::RepositoryError;
use crate::domain::stroke::StrokeError;
use std::fmt;
use thiserror::Error;

/// 検証対象のストロークの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeRole {
    Trace,
    Memory,
}

impl fmt::Display for StrokeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrokeRole::Trace => write!(f, "trace"),
            StrokeRole::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Error, Debug)]
pub enum UseCaseError {
    #[error("Invalid {role} stroke: {source}")]
    InvalidStroke {
        role: StrokeRole,
        #[source]
        source: StrokeError,
    },

    #[error("Stroke processing failed: {0}")]
    Stroke(#[from] StrokeError),

    #[error("Session storage failed: {0}")]
    Repository(#[from] RepositoryError),

    #[error("No trace has been recorded yet")]
    NoTraceRecorded,

    #[error("No saved result to resume")]
    NoSavedResult,
}

impl UseCaseError {
    pub(crate) fn invalid(role: StrokeRole, source: StrokeError) -> Self {
        Self::InvalidStroke { role, source }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            UseCaseError::InvalidStroke { source, .. } => source.is_recoverable(),
            UseCaseError::Repository(e) => e.is_transient(),
            UseCaseError::NoTraceRecorded | UseCaseError::NoSavedResult => true,
            UseCaseError::Stroke(_) => false,
        }
    }
}
