//! コンソール向けの結果表示

use crate::application::use_cases::{AnalysisReport, ResumedSession};
use crate::domain::analysis::ScoreGrade;
use std::fmt::Write;

fn grade_mark(grade: ScoreGrade) -> &'static str {
    match grade {
        ScoreGrade::Excellent => "✅",
        ScoreGrade::Fair => "⚠️",
        ScoreGrade::Poor => "❌",
    }
}

pub fn render_report(report: &AnalysisReport) -> String {
    let result = &report.result;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} スコア: {:.0} / 100 ({}, {})",
        grade_mark(report.grade),
        report.score(),
        report.grade,
        report.grade.color().to_hex()
    );
    let _ = writeln!(out, "  平均誤差: {:.2}", result.mean_diff());
    if let Some((index, diff)) = result.max_diff() {
        let _ = writeln!(out, "  最大誤差: {diff:.2} (点 #{index})");
    }
    if let Some(profile) = report.error_profile {
        let _ = writeln!(
            out,
            "  区間ごとの平均誤差: 始め {:.2} / 中盤 {:.2} / 終わり {:.2}",
            profile.beginning, profile.middle, profile.end
        );
    }
    let _ = writeln!(out, "  ずれが大きい区間: {}", report.weakest_region);
    let _ = writeln!(
        out,
        "  ヒント: {}",
        if result.is_hint_used() { "使用" } else { "なし" }
    );
    let _ = write!(out, "  試行回数: {}", report.attempts);
    out
}

pub fn render_resumed(resumed: &ResumedSession) -> String {
    let mut out = String::new();
    if let Some(image) = &resumed.reference_image {
        let _ = writeln!(out, "参照画像: {}", image.display());
    }
    if let Some((start, end)) = resumed.trace_endpoints {
        let _ = writeln!(out, "始点: {start}  終点: {end}");
    }
    out.push_str(&render_report(&resumed.report));
    out
}
