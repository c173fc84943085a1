use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// How a page's text was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionMethod {
    /// Native embedded text layer.
    PdfDirect,
    /// Optical character recognition over embedded raster images.
    Ocr,
}

/// Text recovered from a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    pub page_number: usize,
    pub text: String,
    pub method: ExtractionMethod,
}

/// Result of extracting a whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub pages: Vec<PageText>,
    pub full_text: String,
    pub page_count: usize,
}

/// Raw OCR output for one image.
#[derive(Debug, Clone)]
pub struct OcrOutput {
    pub text: String,
    /// Engine-reported mean confidence in 0.0..=1.0.
    pub confidence: f32,
}

/// OCR engine abstraction. Implementations take encoded image bytes
/// (PNG/JPEG/TIFF) and return recognized text; mocking this keeps the
/// pipeline testable without a Tesseract installation.
pub trait OcrEngine {
    fn ocr_image(&self, image_bytes: &[u8]) -> Result<OcrOutput, ExtractionError>;
}
