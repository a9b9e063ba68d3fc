//! 共有カーネル
//!
//! 複数の集約で使用される共通の値オブジェクトを定義

pub mod value_objects;

pub use value_objects::{Color, Point};
