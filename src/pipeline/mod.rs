pub mod actions;
pub mod analyzer;
pub mod classify;
pub mod extraction;
pub mod report;
pub mod scoring;
pub mod summarize;
pub mod symptoms;

pub use analyzer::{analyze, build_analyzer, ReportAnalyzer};
