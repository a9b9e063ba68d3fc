//! 比較分析集約
//!
//! なぞり描きと記憶描きの比較、スコア算出、結果の要約に関するモジュール

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::AnalysisResult;
pub use services::{StrokeComparator, analyze};
pub use value_objects::{ComparisonConfig, ErrorProfile, ErrorRegion, SCORE_SENSITIVITY, ScoreGrade};
