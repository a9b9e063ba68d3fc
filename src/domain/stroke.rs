//! ストローク集約
//!
//! 一筆書きストロークのリサンプルと正規化に関するモジュール

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::StrokeError;
pub use services::{CANONICAL_SIZE, DEFAULT_SAMPLE_COUNT, normalize, resample};
pub use value_objects::{BoundingBox, NormalizedStroke, ResampledStroke, Stroke};
