//! ストロークの値オブジェクト
//!
//! 一筆書きの生データ、等間隔リサンプル結果、正規化結果を型で区別する

use super::errors::StrokeError;
use crate::domain::shared::value_objects::Point;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// 一筆のストローク（描画順に並んだ点列）
///
/// 点が0個または1個のストロークは縮退しているが、値としては有効。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// 折れ線としての全長（隣接点間距離の総和）
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }

    /// 軸平行な境界ボックス。空のストロークには存在しない
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.points)
    }

    /// 全点を平行移動したストローク
    pub fn translate(&self, dx: f64, dy: f64) -> Stroke {
        self.points.iter().map(|p| p.translate(dx, dy)).collect()
    }

    /// 全点を原点中心に拡大縮小したストローク
    pub fn scale(&self, factor: f64) -> Stroke {
        self.points.iter().map(|p| p.scale(factor)).collect()
    }

    /// 比較前の入力検証（最小点数と座標の有限性）
    pub fn validate(&self, min_points: usize) -> Result<(), StrokeError> {
        if self.points.is_empty() {
            return Err(StrokeError::Empty);
        }

        if self.points.len() < min_points {
            return Err(StrokeError::TooFewPoints {
                required: min_points,
                actual: self.points.len(),
            });
        }

        if let Some(index) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(StrokeError::NonFinitePoint { index });
        }

        Ok(())
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl From<Vec<(f64, f64)>> for Stroke {
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        pairs.into_iter().map(Point::from).collect()
    }
}

impl FromIterator<Point> for Stroke {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// 弧長で等間隔にリサンプルされたストローク
///
/// 始点と終点は元のストロークの始点・終点と完全に一致する。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResampledStroke(Stroke);

impl ResampledStroke {
    pub(crate) fn from_points(points: Vec<Point>) -> Self {
        Self(Stroke::new(points))
    }

    /// 同じ点を `count` 個並べたストローク（長さ0のストロークのリサンプル結果）
    pub(crate) fn repeated(point: Point, count: usize) -> Self {
        Self::from_points(vec![point; count])
    }

    pub fn as_stroke(&self) -> &Stroke {
        &self.0
    }

    pub fn into_stroke(self) -> Stroke {
        self.0
    }
}

impl Deref for ResampledStroke {
    type Target = Stroke;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// 境界ボックス中心を原点に移し、長辺を基準サイズに揃えたストローク
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedStroke(Stroke);

impl NormalizedStroke {
    pub(crate) fn from_points(points: Vec<Point>) -> Self {
        Self(Stroke::new(points))
    }

    pub fn as_stroke(&self) -> &Stroke {
        &self.0
    }

    pub fn into_stroke(self) -> Stroke {
        self.0
    }
}

impl Deref for NormalizedStroke {
    type Target = Stroke;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// 軸平行境界ボックス
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// 点列から境界ボックスを計算
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let init = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        Some(rest.iter().fold(init, |bounds, p| Self {
            min_x: bounds.min_x.min(p.x),
            max_x: bounds.max_x.max(p.x),
            min_y: bounds.min_y.min(p.y),
            max_y: bounds.max_y.max(p.y),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// 長辺の長さ
    pub fn longer_side(&self) -> f64 {
        self.width().max(self.height())
    }
}
