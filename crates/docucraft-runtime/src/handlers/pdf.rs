use super::{HandlerError, HandlerResult, ProgressReporter, ensure_parent_dir, file_size};
use crate::OperationOutput;
use docucraft_pdf::{
    ConversionOptions, compress_pdf, convert_images_to_pdf, load_multiple_pdfs, merge_pdfs,
    save_pdf,
};
use docucraft_raster::load_images;
use std::path::PathBuf;

pub async fn handle_images_to_pdf(
    inputs: Vec<PathBuf>,
    options: ConversionOptions,
    output_path: PathBuf,
    progress: &ProgressReporter<'_>,
) -> HandlerResult<OperationOutput> {
    if inputs.is_empty() {
        return Err(HandlerError::Input("No input images specified".to_string()));
    }
    options.validate()?;

    progress.step(0);
    let images = load_images(&inputs).await?;

    progress.step(1);
    let doc = convert_images_to_pdf(images, options).await?;

    progress.step(2);
    ensure_parent_dir(&output_path).await?;
    save_pdf(doc, &output_path).await?;

    progress.step(3);
    Ok(OperationOutput {
        operation: "Images to PDF".to_string(),
        size_bytes: file_size(&output_path).await?,
        summary: format!("{} pages", inputs.len()),
        path: output_path,
    })
}

pub async fn handle_merge_pdfs(
    inputs: Vec<PathBuf>,
    output_path: PathBuf,
    progress: &ProgressReporter<'_>,
) -> HandlerResult<OperationOutput> {
    if inputs.len() < 2 {
        return Err(HandlerError::Input(format!(
            "At least 2 PDFs are required, got {}",
            inputs.len()
        )));
    }

    progress.step(0);
    let documents = load_multiple_pdfs(&inputs).await?;

    progress.step(1);
    let merged = merge_pdfs(documents).await?;
    let page_count = merged.get_pages().len();

    progress.step(2);
    ensure_parent_dir(&output_path).await?;
    save_pdf(merged, &output_path).await?;

    progress.step(3);
    Ok(OperationOutput {
        operation: "Merge PDFs".to_string(),
        size_bytes: file_size(&output_path).await?,
        summary: format!("{} documents, {} pages", inputs.len(), page_count),
        path: output_path,
    })
}

pub async fn handle_compress_pdf(
    input: PathBuf,
    output_path: PathBuf,
    progress: &ProgressReporter<'_>,
) -> HandlerResult<OperationOutput> {
    progress.step(0);
    let bytes = tokio::fs::read(&input).await?;

    progress.step(1);
    let compressed = compress_pdf(bytes).await?;

    progress.step(2);
    ensure_parent_dir(&output_path).await?;
    tokio::fs::write(&output_path, &compressed.bytes).await?;

    progress.step(3);
    Ok(OperationOutput {
        operation: "Compress PDF".to_string(),
        size_bytes: compressed.compressed_size() as u64,
        summary: format!(
            "{} pages, {:.1}% smaller",
            compressed.page_count,
            compressed.savings_percent()
        ),
        path: output_path,
    })
}
