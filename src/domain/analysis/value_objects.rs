use crate::domain::shared::value_objects::Color;
use crate::domain::stroke::{CANONICAL_SIZE, DEFAULT_SAMPLE_COUNT, StrokeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 平均誤差1単位（正規化空間）あたりの減点
///
/// 典型的な誤差 0〜40 が 0〜100 点に収まるよう選んだ線形ペナルティ
pub const SCORE_SENSITIVITY: f64 = 2.5;

/// ストローク比較の設定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// リサンプル後の点数
    pub samples: usize,
    /// 正規化後の長辺の長さ
    pub canonical_size: f64,
    /// スコアの減点係数
    pub sensitivity: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLE_COUNT,
            canonical_size: CANONICAL_SIZE,
            sensitivity: SCORE_SENSITIVITY,
        }
    }
}

impl ComparisonConfig {
    pub fn validate(&self) -> Result<(), StrokeError> {
        if self.samples < 2 {
            return Err(StrokeError::InvalidSampleCount(self.samples));
        }

        if !(self.canonical_size.is_finite() && self.canonical_size > 0.0) {
            return Err(StrokeError::InvalidParameter {
                name: "canonical_size",
                value: self.canonical_size,
            });
        }

        if !(self.sensitivity.is_finite() && self.sensitivity >= 0.0) {
            return Err(StrokeError::InvalidParameter {
                name: "sensitivity",
                value: self.sensitivity,
            });
        }

        Ok(())
    }
}

/// スコアの評価段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreGrade {
    /// 80点超
    Excellent,
    /// 50点超
    Fair,
    Poor,
}

impl ScoreGrade {
    pub fn from_score(score: f64) -> Self {
        if score > 80.0 {
            ScoreGrade::Excellent
        } else if score > 50.0 {
            ScoreGrade::Fair
        } else {
            ScoreGrade::Poor
        }
    }

    /// スコア表示色
    pub fn color(&self) -> Color {
        match self {
            ScoreGrade::Excellent => Color::green(),
            ScoreGrade::Fair => Color::yellow(),
            ScoreGrade::Poor => Color::red(),
        }
    }
}

impl fmt::Display for ScoreGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreGrade::Excellent => write!(f, "excellent"),
            ScoreGrade::Fair => write!(f, "fair"),
            ScoreGrade::Poor => write!(f, "poor"),
        }
    }
}

/// ストロークのうち誤差が最も大きい区間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorRegion {
    Beginning,
    Middle,
    End,
    /// 突出した区間がない
    Throughout,
}

impl fmt::Display for ErrorRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorRegion::Beginning => "at the beginning",
            ErrorRegion::Middle => "in the middle section",
            ErrorRegion::End => "towards the end",
            ErrorRegion::Throughout => "throughout the shape",
        };
        f.write_str(text)
    }
}

/// 序盤・中盤・終盤それぞれの平均誤差
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorProfile {
    pub beginning: f64,
    pub middle: f64,
    pub end: f64,
}

impl ErrorProfile {
    /// 点ごとの誤差列を3分割して平均を取る
    ///
    /// 各区間は `len / 3` 点、余りは終盤に含める。3点未満なら `None`。
    /// 終盤の平均は余りを含めた実際の点数で割る（`len / 3` で割ると終盤が過大になる）。
    pub fn from_diffs(diffs: &[f64]) -> Option<Self> {
        let part = diffs.len() / 3;
        if part == 0 {
            return None;
        }

        Some(Self {
            beginning: mean(&diffs[..part]),
            middle: mean(&diffs[part..part * 2]),
            end: mean(&diffs[part * 2..]),
        })
    }

    /// 他の2区間より厳密に大きい区間。なければ全体
    pub fn highest_region(&self) -> ErrorRegion {
        let Self { beginning, middle, end } = *self;

        if beginning > middle && beginning > end {
            ErrorRegion::Beginning
        } else if middle > beginning && middle > end {
            ErrorRegion::Middle
        } else if end > beginning && end > middle {
            ErrorRegion::End
        } else {
            ErrorRegion::Throughout
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
