//! Lossless PDF compression

use crate::io::document_to_bytes;
use crate::types::*;
use lopdf::Document;

/// Result of compressing a PDF
#[derive(Debug, Clone)]
pub struct CompressedPdf {
    pub bytes: Vec<u8>,
    pub original_size: usize,
    pub page_count: usize,
}

impl CompressedPdf {
    pub fn compressed_size(&self) -> usize {
        self.bytes.len()
    }

    /// Percentage of the original size saved; never negative
    pub fn savings_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        let saved = self.original_size.saturating_sub(self.bytes.len());
        saved as f64 * 100.0 / self.original_size as f64
    }
}

/// Drop unreferenced objects, renumber densely and Flate-compress every stream
pub fn compress_document(mut doc: Document) -> Document {
    let pruned = doc.prune_objects();
    doc.renumber_objects();
    doc.compress();
    log::debug!("Pruned {} unreferenced objects", pruned.len());
    doc
}

/// Compress serialized PDF data.
///
/// The original bytes are kept when recompression would make the file larger.
pub fn compress_pdf_bytes(bytes: &[u8]) -> Result<CompressedPdf> {
    let doc = Document::load_mem(bytes)?;
    let page_count = doc.get_pages().len();
    if page_count == 0 {
        return Err(PdfError::Malformed("document has no pages".to_string()));
    }

    let mut doc = compress_document(doc);
    let compressed = document_to_bytes(&mut doc)?;

    let original_size = bytes.len();
    let output = if compressed.len() < original_size {
        compressed
    } else {
        log::info!("Recompressed PDF is not smaller, keeping original");
        bytes.to_vec()
    };

    log::info!(
        "Compressed PDF: {} -> {} bytes ({} pages)",
        original_size,
        output.len(),
        page_count
    );
    Ok(CompressedPdf {
        bytes: output,
        original_size,
        page_count,
    })
}

/// Compress on the blocking pool
pub async fn compress_pdf(bytes: Vec<u8>) -> Result<CompressedPdf> {
    tokio::task::spawn_blocking(move || compress_pdf_bytes(&bytes)).await?
}
