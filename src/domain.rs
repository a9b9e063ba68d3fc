//! ドメイン層
//!
//! ストローク比較のロジックとドメインモデルを含む層

pub mod analysis;
pub mod session;
pub mod shared;
pub mod stroke;
