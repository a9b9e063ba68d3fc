//! アプリケーション層
//!
//! ドメインサービスとセッションリポジトリを組み合わせたユースケース

pub mod errors;
pub mod use_cases;

pub use errors::{StrokeRole, UseCaseError};
