//! ストロークのリサンプルと正規化
//!
//! どちらも入力だけに依存する純粋関数

use super::value_objects::{NormalizedStroke, ResampledStroke, Stroke};
use crate::domain::shared::value_objects::Point;

/// 比較に使うリサンプル点数の既定値
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// 正規化後の長辺の長さ
pub const CANONICAL_SIZE: f64 = 100.0;

/// ストロークを弧長で等間隔な `count` 個の点にリサンプル
///
/// 点が2個未満のストロークはそのまま返す。全長が0（全点が一致）の場合は
/// 始点を `count` 個並べる。始点と終点は元の値をそのまま複製するため、
/// 浮動小数点の累積誤差で終点がずれることはない。
///
/// 隣接出力点の間隔は弧長で等しく、弦の長さ（直線距離）は曲がり角で短くなる。
pub fn resample(stroke: &Stroke, count: usize) -> ResampledStroke {
    let points = stroke.points();

    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 2 => (*first, *last),
        _ => return ResampledStroke::from_points(points.to_vec()),
    };

    if count < 2 {
        return ResampledStroke::from_points(points.iter().take(count).copied().collect());
    }

    let total_length = stroke.length();
    if total_length <= 0.0 {
        return ResampledStroke::repeated(first, count);
    }

    let interval = total_length / (count - 1) as f64;
    let mut resampled: Vec<Point> = Vec::with_capacity(count);
    resampled.push(first);

    // カーソル: 現在のセグメント始点、終点インデックス、始点までの累積距離
    let mut segment_start = first;
    let mut next_index = 1;
    let mut traveled = 0.0;

    for i in 1..count - 1 {
        let target = i as f64 * interval;

        let mut segment_length = segment_start.distance_to(&points[next_index]);
        while traveled + segment_length < target && next_index < points.len() - 1 {
            traveled += segment_length;
            segment_start = points[next_index];
            next_index += 1;
            segment_length = segment_start.distance_to(&points[next_index]);
        }

        let t = if segment_length > 0.0 {
            ((target - traveled) / segment_length).clamp(0.0, 1.0)
        } else {
            0.0
        };
        resampled.push(segment_start.lerp(&points[next_index], t));
    }

    resampled.push(last);

    // 累積誤差で不足した場合は終点で埋める
    while resampled.len() < count {
        resampled.push(last);
    }

    ResampledStroke::from_points(resampled)
}

/// ストロークを基準座標系に正規化
///
/// 境界ボックス中心を原点へ移動し、長辺が `canonical_size` になるよう
/// 縦横同じ倍率で拡大縮小する（アスペクト比は保持、回転は補正しない）。
/// 幅・高さが0の場合に備えて除数は最低1とする。
pub fn normalize(stroke: &Stroke, canonical_size: f64) -> NormalizedStroke {
    let Some(bounds) = stroke.bounding_box() else {
        return NormalizedStroke::default();
    };

    let center = bounds.center();
    let scale = canonical_size / bounds.longer_side().max(1.0);

    NormalizedStroke::from_points(
        stroke
            .points()
            .iter()
            .map(|p| Point::new((p.x - center.x) * scale, (p.y - center.y) * scale))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_strokes_close(a: &Stroke, b: &Stroke, epsilon: f64) {
        assert_eq!(a.len(), b.len());
        for (i, (p, q)) in a.points().iter().zip(b.points()).enumerate() {
            assert!(p.approx_eq(q, epsilon), "point {i}: {p} != {q}");
        }
    }

    fn wobbly_stroke() -> Stroke {
        Stroke::from(vec![
            (12.0, 40.0),
            (13.5, 42.0),
            (20.0, 55.0),
            (20.0, 55.0),
            (35.0, 61.0),
            (60.0, 58.5),
            (71.0, 30.0),
            (65.0, 12.0),
            (40.0, 9.0),
        ])
    }

    #[test]
    fn test_resample_length_and_endpoints() {
        let stroke = wobbly_stroke();
        for count in [2, 3, 10, 64, 100, 257] {
            let resampled = resample(&stroke, count);
            assert_eq!(resampled.len(), count);
            assert_eq!(resampled.first(), stroke.first());
            assert_eq!(resampled.last(), stroke.last());
        }
    }

    #[test]
    fn test_resample_equal_arc_spacing_on_straight_line() {
        // 不均一な間隔の直線
        let stroke =
            Stroke::from(vec![(0.0, 0.0), (1.0, 0.0), (7.0, 0.0), (9.0, 0.0), (99.0, 0.0)]);
        let resampled = resample(&stroke, 100);

        for (i, p) in resampled.points().iter().enumerate() {
            assert!(p.approx_eq(&Point::new(i as f64, 0.0), EPSILON), "index {i}: {p}");
        }
    }

    #[test]
    fn test_resample_chords_shorten_on_corners() {
        let stroke = Stroke::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let resampled = resample(&stroke, 4);
        let chords: Vec<f64> = resampled
            .points()
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .collect();

        // 弧長間隔は 20/3、角をまたぐ弦はそれより短い
        assert!((chords[0] - 20.0 / 3.0).abs() < EPSILON);
        assert!(chords[1] < 20.0 / 3.0);
        assert!((chords[2] - 20.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_resample_idempotent_for_same_count() {
        let line = Stroke::from(vec![(0.0, 0.0), (3.0, 1.0), (9.0, 3.0), (30.0, 10.0)]);
        let once = resample(&line, 50);
        let twice = resample(&once, 50);
        assert_strokes_close(&once, &twice, 1e-6);

        // 角がサンプル位置に乗る正方形（周長400、間隔4）
        let square = Stroke::from(vec![
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 100.0),
            (0.0, 100.0),
            (0.0, 0.0),
        ]);
        let once = resample(&square, 101);
        let twice = resample(&once, 101);
        assert_strokes_close(&once, &twice, 1e-6);
    }

    #[test]
    fn test_resample_degenerate_inputs() {
        assert!(resample(&Stroke::default(), 100).is_empty());

        let single = Stroke::from(vec![(5.0, 5.0)]);
        assert_eq!(resample(&single, 100).as_stroke(), &single);

        let collapsed = Stroke::from(vec![(3.0, 4.0), (3.0, 4.0), (3.0, 4.0)]);
        let resampled = resample(&collapsed, 10);
        assert_eq!(resampled.len(), 10);
        assert!(resampled.points().iter().all(|p| *p == Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_resample_below_contract_count() {
        let stroke = wobbly_stroke();
        assert!(resample(&stroke, 0).is_empty());
        assert_eq!(resample(&stroke, 1).points(), &[Point::new(12.0, 40.0)]);
    }

    #[test]
    fn test_normalize_centers_and_scales() {
        let stroke = Stroke::from(vec![(10.0, 10.0), (50.0, 10.0), (50.0, 30.0)]);
        let normalized = normalize(&stroke, CANONICAL_SIZE);
        let bounds = normalized.bounding_box().unwrap();

        assert!((bounds.width() - 100.0).abs() < EPSILON);
        assert!((bounds.height() - 50.0).abs() < EPSILON);
        assert!(bounds.center().approx_eq(&Point::default(), EPSILON));
        assert_eq!(normalized.len(), stroke.len());
    }

    #[test]
    fn test_normalize_scale_invariance() {
        let stroke = wobbly_stroke();
        let base = normalize(&stroke, CANONICAL_SIZE);
        // 長辺が1未満になると除数の下限が効くため、それより大きい倍率のみ
        for k in [0.05, 0.5, 3.0, 250.0] {
            assert_strokes_close(&base, &normalize(&stroke.scale(k), CANONICAL_SIZE), 1e-6);
        }
    }

    #[test]
    fn test_normalize_translation_invariance() {
        let stroke = wobbly_stroke();
        let base = normalize(&stroke, CANONICAL_SIZE);
        for (dx, dy) in [(100.0, 0.0), (-37.5, 812.0), (0.001, -0.001)] {
            let moved = normalize(&stroke.translate(dx, dy), CANONICAL_SIZE);
            assert_strokes_close(&base, &moved, 1e-6);
        }
    }

    #[test]
    fn test_normalize_is_not_rotation_invariant() {
        let horizontal = Stroke::from(vec![(0.0, 0.0), (100.0, 0.0)]);
        let vertical = Stroke::from(vec![(0.0, 0.0), (0.0, 100.0)]);
        let a = normalize(&horizontal, CANONICAL_SIZE);
        let b = normalize(&vertical, CANONICAL_SIZE);
        assert!(!a.points()[0].approx_eq(&b.points()[0], 1.0));
    }

    #[test]
    fn test_normalize_zero_extent_uses_divisor_floor() {
        let dot = Stroke::from(vec![(7.0, 7.0), (7.0, 7.0)]);
        let normalized = normalize(&dot, CANONICAL_SIZE);
        assert!(normalized.points().iter().all(|p| *p == Point::default()));

        // 長辺 0.5 は除数1に切り上げ
        let tiny = Stroke::from(vec![(0.0, 0.0), (0.5, 0.0)]);
        let normalized = normalize(&tiny, CANONICAL_SIZE);
        assert!(normalized.points()[1].approx_eq(&Point::new(25.0, 0.0), EPSILON));

        assert!(normalize(&Stroke::default(), CANONICAL_SIZE).is_empty());
    }
}
