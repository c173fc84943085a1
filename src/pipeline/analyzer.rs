//! Analysis orchestrator.
//!
//! Single entry point that drives the full document pipeline:
//! extract → classify (gate) → symptoms → diseases → actions, in parallel
//! conceptually with chunked summarization, then report assembly.
//!
//! The public boundary never raises: every failure path yields a
//! user-facing string. Engines are injected as trait objects so the whole
//! flow is testable with mocks.

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::{DEFAULT_MAX_CHUNK_SIZE, MAX_ANALYSIS_CHARS};
use crate::pipeline::extraction::{ExtractionError, OcrEngine, PdfReportExtractor};
use crate::pipeline::summarize::{summarize_document, OllamaSummarizer, Summarizer};
use crate::pipeline::{actions, classify, report, scoring, symptoms};

/// Errors internal to one analysis run. These never cross the `analyze`
/// boundary; they are rendered into the catch-all error string.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
}

pub const NO_TEXT_MESSAGE: &str = "❌ No extractable text found in the PDF document.\n\
This may be a scanned document - try using OCR-enabled PDFs.";

pub const NOT_MEDICAL_MESSAGE: &str = "⚠️ The uploaded document does not appear to be a medical report.\n\
Please upload a valid medical document for analysis.";

/// Orchestrates one PDF analysis from file path to formatted report.
///
/// Single-threaded and request-scoped: no state survives an invocation,
/// and the only shared data are the read-only knowledge tables. A host
/// should call this off its UI thread; summarization and OCR latency
/// dominate wall-clock time.
pub struct ReportAnalyzer {
    extractor: PdfReportExtractor,
    summarizer: Box<dyn Summarizer + Send + Sync>,
    max_chunk_size: usize,
}

impl ReportAnalyzer {
    pub fn new(
        ocr: Box<dyn OcrEngine + Send + Sync>,
        summarizer: Box<dyn Summarizer + Send + Sync>,
    ) -> Self {
        Self {
            extractor: PdfReportExtractor::new(ocr),
            summarizer,
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }

    pub fn with_max_chunk_size(mut self, max_chunk_size: usize) -> Self {
        self.max_chunk_size = max_chunk_size;
        self
    }

    /// Analyze the PDF at `path` and return the formatted report.
    ///
    /// Never fails past this boundary: extraction problems, non-medical
    /// rejections, and unexpected errors all come back as descriptive
    /// strings; summarization failures degrade inside the report itself.
    pub fn analyze(&self, path: &Path) -> String {
        match self.run(path) {
            Ok(rendered) => rendered,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Analysis failed");
                format!(
                    "❌ Analysis Error: {e}\nPlease ensure the PDF is not corrupted and try again."
                )
            }
        }
    }

    /// Run the post-extraction pipeline on already-extracted text.
    /// Same gating and degradation behavior as [`ReportAnalyzer::analyze`].
    pub fn analyze_text(&self, text: &str) -> String {
        self.analyze_extracted(text)
    }

    fn run(&self, path: &Path) -> Result<String, AnalysisError> {
        info!(path = %path.display(), "Starting report analysis");
        let pdf_bytes = std::fs::read(path)?;
        let extraction = self.extractor.extract(&pdf_bytes)?;
        Ok(self.analyze_extracted(&extraction.full_text))
    }

    fn analyze_extracted(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return NO_TEXT_MESSAGE.to_string();
        }

        if !classify::is_medical(text) {
            info!("Document rejected by medical keyword gate");
            return NOT_MEDICAL_MESSAGE.to_string();
        }

        let text = truncate_chars(text, MAX_ANALYSIS_CHARS);

        let snippets = symptoms::extract_symptoms(text);
        let diseases = scoring::score_diseases(&snippets, text);
        let suggested = actions::suggest_actions(&diseases, &snippets);

        let summary = summarize_document(&*self.summarizer, text, self.max_chunk_size);

        info!(
            snippets = snippets.len(),
            diseases = diseases.len(),
            actions = suggested.len(),
            "Analysis complete"
        );

        report::format_report(&summary, &snippets, &diseases, &suggested)
    }
}

/// First `max` characters of `text`, never splitting a UTF-8 sequence.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Build a `ReportAnalyzer` with production engines.
///
/// - OCR: bundled Tesseract when compiled with the `ocr` feature and
///   tessdata is found; otherwise a mock that recognizes nothing (digital
///   PDFs still work).
/// - Summarization: local Ollama instance.
pub fn build_analyzer() -> ReportAnalyzer {
    let summarizer = OllamaSummarizer::default_local();
    match summarizer.is_model_available() {
        Ok(true) => info!(model = summarizer.model(), "Summarization model confirmed"),
        Ok(false) => warn!(
            model = summarizer.model(),
            "Summarization model not installed — summaries will degrade to fallbacks"
        ),
        Err(e) => warn!(error = %e, "Cannot reach summarization backend"),
    }

    ReportAnalyzer::new(build_ocr_engine(), Box::new(summarizer))
}

/// Convenience entry point: analyze one PDF with production engines.
pub fn analyze(path: &Path) -> String {
    build_analyzer().analyze(path)
}

/// Build the OCR engine, respecting feature flags.
fn build_ocr_engine() -> Box<dyn OcrEngine + Send + Sync> {
    #[cfg(feature = "ocr")]
    {
        use crate::pipeline::extraction::ocr::{find_tessdata_dir, BundledTesseract};

        match find_tessdata_dir() {
            Ok(tessdata) => match BundledTesseract::new(&tessdata) {
                Ok(engine) => {
                    info!(tessdata = %tessdata.display(), "Tesseract OCR initialized");
                    return Box::new(engine);
                }
                Err(e) => warn!(error = %e, "Tesseract initialization failed"),
            },
            Err(e) => warn!(error = %e, "Tesseract data not found"),
        }
    }

    info!("Using mock OCR engine — scanned pages will not be recognized");
    Box::new(crate::pipeline::extraction::ocr::MockOcrEngine::new("", 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::actions::EMERGENCY_DIRECTIVE;
    use crate::pipeline::extraction::ocr::MockOcrEngine;
    use crate::pipeline::summarize::{MockSummarizer, ScriptedSummarizer, SummaryBounds, SummarizeError};

    /// Summarizer that must never be reached (gate tests).
    struct NoCallSummarizer;

    impl Summarizer for NoCallSummarizer {
        fn summarize(&self, _: &str, _: SummaryBounds) -> Result<String, SummarizeError> {
            panic!("summarizer must not be called for rejected documents");
        }
    }

    fn analyzer_with(summarizer: Box<dyn Summarizer + Send + Sync>) -> ReportAnalyzer {
        ReportAnalyzer::new(Box::new(MockOcrEngine::new("", 0.0)), summarizer)
    }

    #[test]
    fn empty_text_returns_no_text_message() {
        let analyzer = analyzer_with(Box::new(NoCallSummarizer));
        assert_eq!(analyzer.analyze_text("   \n "), NO_TEXT_MESSAGE);
    }

    #[test]
    fn non_medical_text_rejected_without_summarization() {
        let analyzer = analyzer_with(Box::new(NoCallSummarizer));
        let result = analyzer.analyze_text("Quarterly sales figures exceeded projections again.");
        assert_eq!(result, NOT_MEDICAL_MESSAGE);
    }

    #[test]
    fn medical_scenario_produces_full_report() {
        let analyzer = analyzer_with(Box::new(MockSummarizer::new(
            "Patient evaluated for acute chest symptoms.",
        )));
        let text = "The patient presented with chest pain and shortness of breath. \
                    A diagnosis is pending further tests.";
        let result = analyzer.analyze_text(text);

        assert!(result.contains("EXECUTIVE SUMMARY"));
        assert!(result.contains("Patient evaluated for acute chest symptoms."));
        assert!(result.to_lowercase().contains("chest pain"));
        assert!(result.contains("Coronary Artery Disease"));
        assert!(result.contains(EMERGENCY_DIRECTIVE));
    }

    #[test]
    fn degraded_summary_still_renders_report() {
        let analyzer = analyzer_with(Box::new(ScriptedSummarizer::new(vec![
            Err("backend offline".into()),
            Err("backend offline".into()),
        ])));
        let text = "The patient received treatment after the diagnosis was confirmed.";
        let result = analyzer.analyze_text(text);

        assert!(result.contains("EXECUTIVE SUMMARY"));
        assert!(result.contains("Summary generation incomplete"));
        assert!(result.contains("RECOMMENDED ACTIONS"));
    }

    #[test]
    fn missing_file_yields_error_string() {
        let analyzer = analyzer_with(Box::new(NoCallSummarizer));
        let result = analyzer.analyze(Path::new("/nonexistent/report.pdf"));
        assert!(result.starts_with("❌ Analysis Error:"), "got: {result}");
    }

    #[test]
    fn corrupt_pdf_yields_error_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.pdf");
        std::fs::write(&path, b"not really a pdf at all").unwrap();

        let analyzer = analyzer_with(Box::new(NoCallSummarizer));
        let result = analyzer.analyze(&path);
        assert!(result.starts_with("❌ Analysis Error:"), "got: {result}");
    }

    #[test]
    fn long_text_truncated_before_analysis() {
        let analyzer = analyzer_with(Box::new(MockSummarizer::new("Summary.")));
        // Keyword matches early; symptom mention far beyond the 10k cap
        // must not surface.
        let mut text = String::from("Patient diagnosis follows. ");
        text.push_str(&"Routine observation continues without incident. ".repeat(300));
        text.push_str("Severe wheezing was noted at the very end.");
        assert!(text.chars().count() > MAX_ANALYSIS_CHARS);

        let result = analyzer.analyze_text(&text);
        assert!(!result.to_lowercase().contains("wheezing"));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let s = "é".repeat(10);
        assert_eq!(truncate_chars(&s, 4), "éééé");
        assert_eq!(truncate_chars(&s, 100), s.as_str());
    }
}
