use std::io::Cursor;

use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, warn};

use super::types::{ExtractionMethod, ExtractionResult, OcrEngine, PageText};
use super::ExtractionError;

/// PDF report extractor.
///
/// Each page contributes its native text layer when one is present;
/// otherwise the page's embedded raster images are decoded and run through
/// the OCR engine. Pages that yield nothing are silently skipped — a wholly
/// unreadable page is not an error, it just contributes no text.
pub struct PdfReportExtractor {
    ocr: Box<dyn OcrEngine + Send + Sync>,
}

impl PdfReportExtractor {
    pub fn new(ocr: Box<dyn OcrEngine + Send + Sync>) -> Self {
        Self { ocr }
    }

    pub fn extract(&self, pdf_bytes: &[u8]) -> Result<ExtractionResult, ExtractionError> {
        let doc = Document::load_mem(pdf_bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

        // Native text layers, one string per page. A failure here does not
        // abort extraction: the OCR fallback can still recover scanned pages.
        let text_layers = match pdf_extract::extract_text_from_mem_by_pages(pdf_bytes) {
            Ok(layers) => layers,
            Err(e) => {
                warn!(error = %e, "Native text extraction failed, relying on OCR fallback");
                Vec::new()
            }
        };

        let page_ids: Vec<(u32, ObjectId)> = doc.get_pages().into_iter().collect();
        let mut pages = Vec::with_capacity(page_ids.len());

        for (idx, (page_number, page_id)) in page_ids.iter().enumerate() {
            let page_number = *page_number as usize;

            if let Some(layer) = text_layers.get(idx) {
                if !layer.trim().is_empty() {
                    pages.push(PageText {
                        page_number,
                        text: layer.clone(),
                        method: ExtractionMethod::PdfDirect,
                    });
                    continue;
                }
            }

            // No text layer: OCR the page's embedded images. Markedly more
            // expensive than native extraction, so only reached when needed.
            let ocr_text = self.ocr_page_images(&doc, *page_id, page_number);
            if !ocr_text.trim().is_empty() {
                pages.push(PageText {
                    page_number,
                    text: ocr_text,
                    method: ExtractionMethod::Ocr,
                });
            }
        }

        let full_text: String = pages.iter().map(|p| p.text.as_str()).collect();
        let page_count = page_ids.len();

        debug!(
            pages_with_text = pages.len(),
            page_count,
            text_length = full_text.len(),
            "PDF extraction complete"
        );

        Ok(ExtractionResult {
            pages,
            full_text,
            page_count,
        })
    }

    /// OCR every image XObject on a page, concatenating whatever text the
    /// engine recovers. Undecodable images and per-image OCR failures are
    /// logged and skipped.
    fn ocr_page_images(&self, doc: &Document, page_id: ObjectId, page_number: usize) -> String {
        let mut text = String::new();

        for stream in page_image_streams(doc, page_id) {
            let Some(bytes) = image_stream_bytes(stream) else {
                debug!(page_number, "Skipping image with unreadable stream content");
                continue;
            };

            let png = match decode_to_png(&bytes) {
                Ok(png) => png,
                Err(e) => {
                    debug!(page_number, error = %e, "Skipping undecodable embedded image");
                    continue;
                }
            };

            match self.ocr.ocr_image(&png) {
                Ok(output) => {
                    debug!(
                        page_number,
                        confidence = output.confidence,
                        "OCR'd embedded image"
                    );
                    text.push_str(&output.text);
                }
                Err(e) => {
                    warn!(page_number, error = %e, "OCR failed for embedded image");
                }
            }
        }

        text
    }
}

/// Collect the image XObject streams referenced by a page's resources.
fn page_image_streams<'a>(doc: &'a Document, page_id: ObjectId) -> Vec<&'a lopdf::Stream> {
    let mut streams = Vec::new();

    let Ok(page) = doc.get_dictionary(page_id) else {
        return streams;
    };
    let Some(resources) = resolve_dict(doc, page.get(b"Resources").ok()) else {
        return streams;
    };
    let Some(xobjects) = resolve_dict(doc, resources.get(b"XObject").ok()) else {
        return streams;
    };

    for (_name, obj) in xobjects.iter() {
        let stream = match obj {
            Object::Reference(id) => match doc.get_object(*id) {
                Ok(Object::Stream(s)) => s,
                _ => continue,
            },
            Object::Stream(s) => s,
            _ => continue,
        };
        if matches!(stream.dict.get(b"Subtype"), Ok(Object::Name(n)) if n == b"Image") {
            streams.push(stream);
        }
    }

    streams
}

/// Follow a possible indirect reference to a dictionary.
fn resolve_dict<'a>(doc: &'a Document, obj: Option<&'a Object>) -> Option<&'a Dictionary> {
    match obj? {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

/// Raw encoded bytes of an image stream.
///
/// DCTDecode streams hold a complete JPEG and are used verbatim; anything
/// else is decompressed and handed to the image decoder as-is.
fn image_stream_bytes(stream: &lopdf::Stream) -> Option<Vec<u8>> {
    if has_filter(stream, b"DCTDecode") {
        return Some(stream.content.clone());
    }
    stream.decompressed_content().ok()
}

fn has_filter(stream: &lopdf::Stream, name: &[u8]) -> bool {
    match stream.dict.get(b"Filter") {
        Ok(Object::Name(n)) => n == name,
        Ok(Object::Array(filters)) => filters
            .iter()
            .any(|f| matches!(f, Object::Name(n) if n == name)),
        _ => false,
    }
}

/// Decode an embedded image and normalize it to lossless PNG for the OCR
/// engine.
fn decode_to_png(bytes: &[u8]) -> Result<Vec<u8>, ExtractionError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ExtractionError::ImageProcessing(e.to_string()))?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| ExtractionError::ImageProcessing(e.to_string()))?;
    Ok(out.into_inner())
}
