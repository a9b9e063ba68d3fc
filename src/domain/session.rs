//! 練習セッション集約
//!
//! 前回の結果やなぞり描きの永続化に関するモジュール

pub mod entities;
pub mod repositories;

pub use entities::{PracticeSession, SessionId};
pub use repositories::{PracticeSessionRepository, RepositoryError};
