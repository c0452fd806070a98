mod async_engine;
mod record;

pub use async_engine::{EngineReport, SubmissionEngine};
pub use record::SubmissionRecord;
