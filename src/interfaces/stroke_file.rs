//! ストロークのJSONファイル入出力
//!
//! `[{"x": 0, "y": 0}, ...]` 形式と `[[0, 0], ...]` 形式の両方を受け付ける。

use crate::domain::shared::value_objects::Point;
use crate::domain::stroke::Stroke;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StrokeFileError {
    #[error("Failed to read stroke file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write stroke file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid stroke JSON: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StrokeDocument {
    Points(Vec<Point>),
    Pairs(Vec<[f64; 2]>),
}

impl From<StrokeDocument> for Stroke {
    fn from(document: StrokeDocument) -> Self {
        match document {
            StrokeDocument::Points(points) => Stroke::new(points),
            StrokeDocument::Pairs(pairs) => {
                pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect()
            }
        }
    }
}

pub fn parse_stroke(json: &str) -> Result<Stroke, StrokeFileError> {
    let document: StrokeDocument = serde_json::from_str(json)?;
    Ok(document.into())
}

pub async fn read_stroke(path: impl AsRef<Path>) -> Result<Stroke, StrokeFileError> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StrokeFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let stroke = parse_stroke(&json)?;
    debug!(path = %path.display(), points = stroke.len(), "ストロークを読み込みました");
    Ok(stroke)
}

/// `{x, y}` オブジェクトの配列として書き出す
pub fn stroke_to_json(stroke: &Stroke) -> Result<String, StrokeFileError> {
    Ok(serde_json::to_string_pretty(stroke)?)
}

pub async fn write_stroke(path: impl AsRef<Path>, stroke: &Stroke) -> Result<(), StrokeFileError> {
    let path = path.as_ref();
    let json = stroke_to_json(stroke)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|source| StrokeFileError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_parse_point_objects() {
        let stroke = parse_stroke(r#"[{"x": 1, "y": 2.5}, {"x": -3, "y": 4}]"#).unwrap();
        assert_eq!(stroke.points(), &[Point::new(1.0, 2.5), Point::new(-3.0, 4.0)]);
    }

    #[test]
    fn test_parse_pairs() {
        let stroke = parse_stroke("[[0, 0], [10, 5]]").unwrap();
        assert_eq!(stroke.points(), &[Point::new(0.0, 0.0), Point::new(10.0, 5.0)]);
    }

    #[test]
    fn test_parse_empty_and_invalid() {
        assert!(parse_stroke("[]").unwrap().is_empty());
        assert!(matches!(parse_stroke(r#"{"x": 1}"#), Err(StrokeFileError::Format(_))));
        assert!(matches!(parse_stroke("[[1, 2, 3]]"), Err(StrokeFileError::Format(_))));
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let path = std::env::temp_dir().join(format!("stroke-{}.json", Uuid::new_v4()));
        let stroke = Stroke::from(vec![(0.0, 0.0), (5.5, 1.25), (10.0, 0.0)]);

        write_stroke(&path, &stroke).await.unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"x\""));
        assert_eq!(read_stroke(&path).await.unwrap(), stroke);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = read_stroke("/nonexistent/stroke.json").await.unwrap_err();
        assert!(matches!(err, StrokeFileError::Read { .. }));
    }
}
