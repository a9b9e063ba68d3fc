//! 共有値オブジェクト
//!
//! 複数の集約で使用される共通の値オブジェクトを定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// 2次元座標を表す値オブジェクト（入力デバイスのピクセル座標系）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// 新しい座標を作成
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 他の座標とのユークリッド距離を計算
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// 線形補間（t = 0 で self、t = 1 で other）
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// 平行移動
    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// 原点を中心に拡大縮小
    pub fn scale(&self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    /// 両座標が有限値かチェック
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// 許容誤差内で等しいかチェック
    pub fn approx_eq(&self, other: &Point, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 差分ヒートマップで赤に達する正規化距離
pub const HEAT_SATURATION_DIFF: f64 = 15.0;

/// 色の値を表す値オブジェクト
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// RGB値から作成
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 高得点の表示色
    pub const fn green() -> Self {
        Self::from_rgb(0, 200, 0)
    }

    /// 中間得点の表示色
    pub const fn yellow() -> Self {
        Self::from_rgb(255, 200, 0)
    }

    /// 低得点の表示色
    pub const fn red() -> Self {
        Self::from_rgb(255, 0, 0)
    }

    /// 点ごとの誤差をヒートマップ色に変換
    ///
    /// 強度 `min(1, d / 15)` が 0.5 未満なら緑→黄、それ以上なら黄→赤。
    pub fn heat_for_diff(diff: f64) -> Self {
        let intensity = (diff.max(0.0) / HEAT_SATURATION_DIFF).min(1.0);

        if intensity < 0.5 {
            Self::from_rgb((255.0 * (intensity * 2.0)).round() as u8, 200, 0)
        } else {
            Self::from_rgb(255, (200.0 * (1.0 - (intensity - 0.5) * 2.0)).round() as u8, 0)
        }
    }

    /// 16進数文字列として出力
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
