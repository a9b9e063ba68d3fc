//! 練習セッションのエンティティ
//!
//! 参照画像・なぞり描き・最新の比較結果をまとめた永続化対象の状態

use crate::domain::analysis::AnalysisResult;
use crate::domain::shared::value_objects::Point;
use crate::domain::stroke::Stroke;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// セッションID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// 新しいIDを生成
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 練習セッション
///
/// アプリケーションの起動時に読み込み、状態が変わるたびに保存する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeSession {
    pub id: SessionId,
    pub reference_image: Option<PathBuf>,
    pub trace: Option<Stroke>,
    pub last_result: Option<AnalysisResult>,
    /// 現在のなぞり描きに対する記憶描きの回数
    pub attempts: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for PracticeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PracticeSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::generate(),
            reference_image: None,
            trace: None,
            last_result: None,
            attempts: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// 新しい参照画像で練習を始める（なぞり描きと結果は破棄）
    pub fn start_with_image(&mut self, image: impl AsRef<Path>) {
        debug!(image = %image.as_ref().display(), "参照画像を設定");
        self.reference_image = Some(image.as_ref().to_path_buf());
        self.trace = None;
        self.last_result = None;
        self.attempts = 0;
        self.touch();
    }

    /// なぞり描きを記録（以前の結果は別の線に対するものなので破棄）
    pub fn record_trace(&mut self, trace: Stroke) {
        self.trace = Some(trace);
        self.last_result = None;
        self.attempts = 0;
        self.touch();
    }

    /// 記憶描きの比較結果を記録
    pub fn record_result(&mut self, result: AnalysisResult) {
        self.last_result = Some(result);
        self.attempts = self.attempts.saturating_add(1);
        self.touch();
    }

    /// 記憶描きのガイドに使う始点と終点
    pub fn trace_endpoints(&self) -> Option<(Point, Point)> {
        let trace = self.trace.as_ref()?;
        Some((*trace.first()?, *trace.last()?))
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
