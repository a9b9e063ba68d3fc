//! インターフェース層
//!
//! ストロークファイルの入出力とコンソール表示

pub mod console;
pub mod stroke_file;

pub use stroke_file::{StrokeFileError, parse_stroke, read_stroke, stroke_to_json, write_stroke};
