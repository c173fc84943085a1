pub mod chunker;
pub mod hierarchical;
pub mod summarizer;

pub use chunker::chunk_text;
pub use hierarchical::summarize_document;
pub use summarizer::{
    MockSummarizer, OllamaSummarizer, ScriptedSummarizer, SummaryBounds, Summarizer,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Cannot reach summarization backend at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Backend returned status {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("Failed to parse summarizer response: {0}")]
    ResponseParsing(String),

    #[error("Summarizer produced empty output")]
    EmptyOutput,
}
