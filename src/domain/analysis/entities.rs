//! 比較結果のエンティティ

use super::value_objects::{ErrorProfile, ScoreGrade};
use crate::domain::shared::value_objects::{Color, Point};
use crate::domain::stroke::{NormalizedStroke, ResampledStroke, Stroke};
use serde::{Deserialize, Serialize};

/// 一回の比較の結果
///
/// 比較器が一度だけ生成し、以後は読み取り専用。シリアライズ形式は
/// そのまま永続化できる（フィールド名は camelCase）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    score: f64,
    diffs: Vec<f64>,
    normalized_trace: NormalizedStroke,
    normalized_memory: NormalizedStroke,
    raw_trace: ResampledStroke,
    raw_memory: ResampledStroke,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_hint_used: Option<bool>,
}

impl AnalysisResult {
    pub(crate) fn new(
        score: f64,
        diffs: Vec<f64>,
        normalized_trace: NormalizedStroke,
        normalized_memory: NormalizedStroke,
        raw_trace: ResampledStroke,
        raw_memory: ResampledStroke,
    ) -> Self {
        Self {
            score,
            diffs,
            normalized_trace,
            normalized_memory,
            raw_trace,
            raw_memory,
            is_hint_used: None,
        }
    }

    /// 記憶描画中にヒントを表示したかを記録
    pub fn with_hint_used(mut self, used: bool) -> Self {
        self.is_hint_used = Some(used);
        self
    }

    /// 0〜100 の一致度
    pub fn score(&self) -> f64 {
        self.score
    }

    /// 点ごとの誤差（正規化空間の距離）
    pub fn diffs(&self) -> &[f64] {
        &self.diffs
    }

    pub fn normalized_trace(&self) -> &NormalizedStroke {
        &self.normalized_trace
    }

    pub fn normalized_memory(&self) -> &NormalizedStroke {
        &self.normalized_memory
    }

    /// 元の座標系でリサンプルしたなぞり描き（表示用）
    pub fn raw_trace(&self) -> &ResampledStroke {
        &self.raw_trace
    }

    /// 元の座標系でリサンプルした記憶描き（表示用）
    pub fn raw_memory(&self) -> &ResampledStroke {
        &self.raw_memory
    }

    pub fn is_hint_used(&self) -> bool {
        self.is_hint_used.unwrap_or(false)
    }

    pub fn mean_diff(&self) -> f64 {
        if self.diffs.is_empty() {
            return 0.0;
        }
        self.diffs.iter().sum::<f64>() / self.diffs.len() as f64
    }

    /// 誤差が最大の点（インデックスと誤差）
    pub fn max_diff(&self) -> Option<(usize, f64)> {
        self.diffs
            .iter()
            .copied()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.score)
    }

    pub fn error_profile(&self) -> Option<ErrorProfile> {
        ErrorProfile::from_diffs(&self.diffs)
    }

    /// 点ごとのヒートマップ色
    pub fn heat_colors(&self) -> Vec<Color> {
        self.diffs.iter().map(|d| Color::heat_for_diff(*d)).collect()
    }

    /// 記憶描き（0）からなぞり描き（1）へ補間したストローク
    pub fn morph(&self, ratio: f64) -> Stroke {
        let ratio = ratio.clamp(0.0, 1.0);
        self.raw_memory
            .points()
            .iter()
            .zip(self.raw_trace.points())
            .map(|(memory, trace): (&Point, &Point)| memory.lerp(trace, ratio))
            .collect()
    }
}
