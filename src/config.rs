/// Application-level constants
pub const APP_NAME: &str = "DocWise";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "docwise=info"
}

/// Maximum number of characters of extracted text fed into the analysis
/// stages. Longer documents are truncated; summarization cost grows with
/// input length and the heuristics saturate well before this point.
pub const MAX_ANALYSIS_CHARS: usize = 10_000;

/// Default maximum chunk size for the summarizer, in characters.
/// The abstractive model's input ceiling sits well below a typical report,
/// so text is chunked at sentence boundaries near this limit.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 900;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_targets_crate() {
        assert!(default_log_filter().starts_with("docwise"));
    }

    #[test]
    fn app_name_is_docwise() {
        assert_eq!(APP_NAME, "DocWise");
    }
}
