use super::entities::AnalysisResult;
use super::value_objects::ComparisonConfig;
use crate::domain::stroke::{ResampledStroke, Stroke, StrokeError, normalize, resample};
use tracing::debug;

/// なぞり描きと記憶描きを比較するサービス
///
/// 両ストロークを同じ点数にリサンプルし、インデックス i を「全長の i% 地点」として
/// 対応付ける。弧長による対応は近似であり、曲線部分を異なる速度で描いた場合は
/// 見た目が近くても誤差が大きく出ることがある。回転の違いは補正しない。
#[derive(Debug, Clone, Default)]
pub struct StrokeComparator {
    config: ComparisonConfig,
}

impl StrokeComparator {
    pub fn new(config: ComparisonConfig) -> Result<Self, StrokeError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// 2本のストロークを比較して結果を生成
    ///
    /// 最小点数の検証は呼び出し側の責務。空のストロークは境界ボックスが
    /// 定義できないためエラーになる。
    pub fn analyze(&self, trace: &Stroke, memory: &Stroke) -> Result<AnalysisResult, StrokeError> {
        // 1. 同じ点数にリサンプル（元の座標系のまま）
        let raw_trace = self.resample_for_comparison(trace)?;
        let raw_memory = self.resample_for_comparison(memory)?;

        // 2. 位置と大きさの違いを除去（スコア計算専用）
        let normalized_trace = normalize(&raw_trace, self.config.canonical_size);
        let normalized_memory = normalize(&raw_memory, self.config.canonical_size);

        // 3. 点ごとの距離
        let diffs: Vec<f64> = normalized_trace
            .points()
            .iter()
            .zip(normalized_memory.points())
            .map(|(t, m)| t.distance_to(m))
            .collect();

        // 4. 平均距離からスコアを算出
        let score = self.score(&diffs);
        debug!(
            score,
            samples = diffs.len(),
            trace_points = trace.len(),
            memory_points = memory.len(),
            "ストローク比較完了"
        );

        Ok(AnalysisResult::new(
            score,
            diffs,
            normalized_trace,
            normalized_memory,
            raw_trace,
            raw_memory,
        ))
    }

    fn resample_for_comparison(&self, stroke: &Stroke) -> Result<ResampledStroke, StrokeError> {
        match stroke.points() {
            [] => Err(StrokeError::Empty),
            [only] => Ok(ResampledStroke::repeated(*only, self.config.samples)),
            _ => Ok(resample(stroke, self.config.samples)),
        }
    }

    fn score(&self, diffs: &[f64]) -> f64 {
        let mean = diffs.iter().sum::<f64>() / diffs.len() as f64;
        (100.0 - mean * self.config.sensitivity).clamp(0.0, 100.0)
    }
}

/// 既定設定（100点、基準サイズ100、係数2.5）で比較
pub fn analyze(trace: &Stroke, memory: &Stroke) -> Result<AnalysisResult, StrokeError> {
    StrokeComparator::default().analyze(trace, memory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::Point;

    const EPSILON: f64 = 1e-9;

    fn line() -> Stroke {
        Stroke::from(vec![(0.0, 0.0), (100.0, 0.0)])
    }

    fn loop_stroke() -> Stroke {
        Stroke::from(vec![
            (50.0, 10.0),
            (80.0, 20.0),
            (95.0, 50.0),
            (80.0, 80.0),
            (50.0, 90.0),
            (20.0, 80.0),
            (5.0, 50.0),
            (20.0, 20.0),
            (48.0, 12.0),
        ])
    }

    #[test]
    fn test_identical_strokes_score_100() {
        for stroke in [line(), loop_stroke()] {
            let result = analyze(&stroke, &stroke).unwrap();
            assert!((result.score() - 100.0).abs() < EPSILON);
            assert!(result.diffs().iter().all(|d| d.abs() < EPSILON));
        }
    }

    #[test]
    fn test_shifted_line_scores_100() {
        let memory = Stroke::from(vec![(0.0, 100.0), (100.0, 100.0)]);
        let result = analyze(&line(), &memory).unwrap();
        assert!((result.score() - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_half_scale_line_scores_100() {
        let memory = Stroke::from(vec![(0.0, 0.0), (50.0, 0.0)]);
        let result = analyze(&line(), &memory).unwrap();
        assert!((result.score() - 100.0).abs() < EPSILON);
        assert!(result.diffs().iter().all(|d| d.abs() < 1e-6));
    }

    #[test]
    fn test_bent_path_scores_below_100() {
        let memory = Stroke::from(vec![(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)]);
        let result = analyze(&line(), &memory).unwrap();
        assert!(result.score() < 100.0);
        assert!(result.score() >= 0.0);
    }

    #[test]
    fn test_result_invariants() {
        let trace = loop_stroke();
        let memory =
            Stroke::from(vec![(3.0, 3.0), (40.0, 9.0), (44.0, 70.0), (12.0, 61.0), (9.0, 20.0)]);
        let result = analyze(&trace, &memory).unwrap();

        assert_eq!(result.diffs().len(), 100);
        assert_eq!(result.normalized_trace().len(), 100);
        assert_eq!(result.normalized_memory().len(), 100);
        assert_eq!(result.raw_trace().len(), 100);
        assert_eq!(result.raw_memory().len(), 100);

        assert_eq!(result.raw_trace().first(), trace.first());
        assert_eq!(result.raw_trace().last(), trace.last());
        assert_eq!(result.raw_memory().first(), memory.first());
        assert_eq!(result.raw_memory().last(), memory.last());
    }

    #[test]
    fn test_score_monotonic_under_outward_perturbation() {
        // 終点を外側へずらすほど各点の誤差が大きくなる
        // 正規化後の誤差は d * |i/99 - 1/2|、100点の平均は d * 25/99
        let mut previous = f64::INFINITY;
        for offset in [0.0, 5.0, 10.0, 20.0, 40.0] {
            let memory = Stroke::from(vec![(0.0, 0.0), (100.0, offset)]);
            let score = analyze(&line(), &memory).unwrap().score();
            assert!((score - (100.0 - 2.5 * offset * 25.0 / 99.0)).abs() < 1e-6);
            assert!(score <= previous, "offset {offset}: {score} > {previous}");
            previous = score;
        }
    }

    #[test]
    fn test_score_clamped_to_zero() {
        let trace = Stroke::from(vec![(0.0, 0.0), (100.0, 0.0)]);
        let memory = Stroke::from(vec![(100.0, 0.0), (0.0, 0.0)]);
        let comparator = StrokeComparator::new(ComparisonConfig {
            sensitivity: 100.0,
            ..Default::default()
        })
        .unwrap();
        let result = comparator.analyze(&trace, &memory).unwrap();
        assert_eq!(result.score(), 0.0);
    }

    #[test]
    fn test_degenerate_strokes() {
        assert_eq!(analyze(&Stroke::default(), &line()).unwrap_err(), StrokeError::Empty);
        assert_eq!(analyze(&line(), &Stroke::default()).unwrap_err(), StrokeError::Empty);

        let dot = Stroke::from(vec![(10.0, 10.0)]);
        let result = analyze(&dot, &line()).unwrap();
        assert_eq!(result.raw_trace().len(), 100);
        assert!(result.raw_trace().points().iter().all(|p| *p == Point::new(10.0, 10.0)));
        assert!((0.0..=100.0).contains(&result.score()));
    }

    #[test]
    fn test_custom_sample_count() {
        let comparator = StrokeComparator::new(ComparisonConfig {
            samples: 32,
            ..Default::default()
        })
        .unwrap();
        let result = comparator.analyze(&loop_stroke(), &line()).unwrap();
        assert_eq!(result.diffs().len(), 32);

        let invalid = StrokeComparator::new(ComparisonConfig {
            samples: 0,
            ..Default::default()
        });
        assert!(invalid.is_err());
    }

    #[test]
    fn test_deterministic() {
        let memory = loop_stroke().translate(3.0, -8.0).scale(1.3);
        let a = analyze(&loop_stroke(), &memory).unwrap();
        let b = analyze(&loop_stroke(), &memory).unwrap();
        assert_eq!(a, b);
    }
}
