//! Two-pass hierarchical summarization.
//!
//! Chunks are summarized independently, then the concatenation of those
//! summaries is re-summarized into the final abstract. A failed chunk is
//! replaced with an inline error marker rather than aborting the batch; a
//! failed final pass substitutes a fixed fallback sentence. Once text has
//! passed classification, summarization trouble never aborts the pipeline.

use tracing::{debug, warn};

use super::chunker::chunk_text;
use super::summarizer::{Summarizer, SummaryBounds};

/// Only the first chunks are summarized; the rest of a very long document
/// is dropped from the abstract.
pub const MAX_SUMMARIZED_CHUNKS: usize = 5;

/// Length bounds for individual chunk summaries.
pub const CHUNK_SUMMARY_BOUNDS: SummaryBounds = SummaryBounds {
    min_tokens: 40,
    max_tokens: 120,
};

/// Length bounds for the final re-summarization pass.
pub const FINAL_SUMMARY_BOUNDS: SummaryBounds = SummaryBounds {
    min_tokens: 50,
    max_tokens: 200,
};

/// Substituted when the final re-summarization pass fails.
pub const FINAL_SUMMARY_FALLBACK: &str =
    "Summary generation incomplete due to processing limitations.";

/// Substituted when there is no content to summarize at all.
pub const NO_CONTENT_FALLBACK: &str =
    "Unable to generate detailed summary from document content.";

/// Summarize a document via chunking and a final re-summarization pass.
pub fn summarize_document(
    summarizer: &dyn Summarizer,
    text: &str,
    max_chunk_size: usize,
) -> String {
    let chunks = chunk_text(text, max_chunk_size);
    if chunks.is_empty() {
        return NO_CONTENT_FALLBACK.to_string();
    }

    let mut chunk_summaries = Vec::new();
    for (i, chunk) in chunks.iter().take(MAX_SUMMARIZED_CHUNKS).enumerate() {
        match summarizer.summarize(chunk, CHUNK_SUMMARY_BOUNDS) {
            Ok(summary) => {
                debug!(chunk = i, chars = chunk.len(), "Chunk summarized");
                chunk_summaries.push(summary);
            }
            Err(e) => {
                warn!(chunk = i, error = %e, "Chunk summarization failed, inserting marker");
                chunk_summaries.push(format!("Chunk processing error: {e}"));
            }
        }
    }

    let combined = chunk_summaries.join(" ");
    match summarizer.summarize(&combined, FINAL_SUMMARY_BOUNDS) {
        Ok(summary) => summary,
        Err(e) => {
            warn!(error = %e, "Final summarization pass failed, using fallback");
            FINAL_SUMMARY_FALLBACK.to_string()
        }
    }
}
