mod compress;
mod constants;
mod convert;
mod io;
mod merge;
mod options;
mod types;

pub use compress::{CompressedPdf, compress_document, compress_pdf, compress_pdf_bytes};
pub use constants::*;
pub use convert::{
    ImagePageLayout, PdfRect, convert_images_to_pdf, image_page_layout, images_to_pdf,
};
pub use io::{document_to_bytes, load_multiple_pdfs, load_pdf, save_pdf};
pub use merge::{merge_documents, merge_pdfs};
pub use options::*;
pub use types::*;

pub use lopdf::Document;
