pub mod analyze_drawing;
pub mod record_trace;
pub mod resample_stroke;
pub mod reset_session;
pub mod resume_session;

pub use analyze_drawing::{AnalysisReport, AnalyzeDrawingUseCase, AnalyzeRequest};
pub use record_trace::RecordTraceUseCase;
pub use resample_stroke::ResampleStrokeUseCase;
pub use reset_session::ResetSessionUseCase;
pub use resume_session::{ResumeSessionUseCase, ResumedSession};
