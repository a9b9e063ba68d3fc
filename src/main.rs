mod cli;

use crate::cli::{Cli, Commands};
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::{Level, info};

use stroke_recall::AppConfig;
use stroke_recall::application::UseCaseError;
use stroke_recall::application::use_cases::{
    AnalyzeDrawingUseCase, AnalyzeRequest, RecordTraceUseCase, ResampleStrokeUseCase,
    ResetSessionUseCase, ResumeSessionUseCase,
};
use stroke_recall::debug::{DebugConfig, debug_helpers, init_logging};
use stroke_recall::domain::analysis::StrokeComparator;
use stroke_recall::infrastructure::persistence::JsonFileSessionRepository;
use stroke_recall::interfaces::console::{render_report, render_resumed};
use stroke_recall::interfaces::{read_stroke, stroke_to_json, write_stroke};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(data_dir) = cli.data_dir.clone() {
        config.data_dir = data_dir;
    }

    // Initialize logging
    let debug_config = if config.is_production() {
        DebugConfig::production().with_log_directory(config.data_dir.join("logs"))
    } else {
        DebugConfig::default()
    };
    let debug_config = if cli.verbose {
        debug_config.with_level(Level::DEBUG)
    } else {
        debug_config
    };
    if let Err(e) = init_logging(&debug_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli.command, &config).await {
        debug_helpers::log_error_details(&*e, "command");
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    // Dependency injection
    let repository = Arc::new(JsonFileSessionRepository::new(&config.data_dir));

    match command {
        Commands::Trace { input, image } => {
            info!("Executing trace command...");
            let stroke = read_stroke(&input).await?;
            let use_case = RecordTraceUseCase::new(repository, config.min_stroke_points);
            let session = use_case.execute(stroke, image).await?;

            println!("✅ なぞり描きを記録しました");
            if let Some((start, end)) = session.trace_endpoints() {
                println!("    始点: {start}  終点: {end}");
            }
            println!("    次に記憶で描いて比較: stroke-recall analyze --memory <file>");
        }
        Commands::Analyze {
            memory,
            trace,
            hint_used,
            json,
        } => {
            info!("Executing analyze command...");
            let mut request =
                AnalyzeRequest::new(read_stroke(&memory).await?).with_hint_used(hint_used);
            if let Some(trace) = trace {
                request = request.with_trace(read_stroke(&trace).await?);
            }

            let comparator =
                StrokeComparator::new(config.comparison).context("Invalid comparison settings")?;
            let use_case =
                AnalyzeDrawingUseCase::new(repository, comparator, config.min_stroke_points);
            let report = use_case.execute(request).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render_report(&report));
            }
        }
        Commands::Resume { json } => {
            let use_case = ResumeSessionUseCase::new(repository);
            match use_case.execute().await {
                Ok(resumed) if json => println!("{}", serde_json::to_string_pretty(&resumed)?),
                Ok(resumed) => println!("{}", render_resumed(&resumed)),
                Err(UseCaseError::NoSavedResult) => {
                    println!("⚠️  保存済みの結果はありません");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Reset => {
            ResetSessionUseCase::new(repository).execute().await?;
            println!("✅ 練習セッションをリセットしました");
        }
        Commands::Resample {
            input,
            count,
            output,
        } => {
            let stroke = read_stroke(&input).await?;
            let resampled = ResampleStrokeUseCase::new()
                .execute(&stroke, count)?
                .into_stroke();

            match output {
                Some(path) => {
                    write_stroke(&path, &resampled).await?;
                    println!("✅ {} 点を {} に書き出しました", resampled.len(), path.display());
                }
                None => println!("{}", stroke_to_json(&resampled)?),
            }
        }
        Commands::Info => {
            println!("stroke-recall {}", env!("CARGO_PKG_VERSION"));
            println!("Build: {}", env!("BUILD_TIMESTAMP"));
            println!("Session file: {}", repository.path().display());
            println!("{}", serde_json::to_string_pretty(config)?);
        }
    }

    Ok(())
}
