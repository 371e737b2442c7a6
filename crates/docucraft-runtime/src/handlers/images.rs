use super::{HandlerResult, ProgressReporter, file_size};
use crate::OperationOutput;
use docucraft_raster::{
    CropRegion, ImageCompressionOptions, LayoutSpec, MIN_COLLAGE_IMAGES, MergeError,
    OutputFormat, compress_image, crop_to_output, load_image, load_images, merge_images,
    save_bytes,
};
use std::path::PathBuf;

pub async fn handle_merge_images(
    inputs: Vec<PathBuf>,
    spec: LayoutSpec,
    output_dir: PathBuf,
    progress: &ProgressReporter<'_>,
) -> HandlerResult<OperationOutput> {
    // Fail before decoding anything
    if inputs.len() < MIN_COLLAGE_IMAGES {
        return Err(MergeError::InsufficientInput {
            provided: inputs.len(),
            required: MIN_COLLAGE_IMAGES,
        }
        .into());
    }
    spec.validate()?;

    progress.step(0);
    let images = load_images(&inputs).await?;

    progress.step(1);
    let composite = merge_images(images, spec).await?;

    progress.step(2);
    tokio::fs::create_dir_all(&output_dir).await?;
    let path = output_dir.join(&composite.filename);
    save_bytes(&composite.bytes, &path).await?;

    progress.step(3);
    Ok(OperationOutput {
        operation: "Merge images".to_string(),
        size_bytes: composite.size() as u64,
        summary: format!(
            "{} images, {}x{} {}",
            inputs.len(),
            composite.width(),
            composite.height(),
            composite.mime_type()
        ),
        path,
    })
}

pub async fn handle_compress_image(
    input: PathBuf,
    options: ImageCompressionOptions,
    output_dir: PathBuf,
    progress: &ProgressReporter<'_>,
) -> HandlerResult<OperationOutput> {
    options.validate()?;

    progress.step(0);
    let original_size = file_size(&input).await? as usize;
    let image = load_image(&input).await?;

    progress.step(1);
    let compressed = tokio::task::spawn_blocking(move || {
        compress_image(&image, original_size, &options)
    })
    .await??;

    progress.step(2);
    tokio::fs::create_dir_all(&output_dir).await?;
    let path = output_dir.join(&compressed.filename);
    save_bytes(&compressed.bytes, &path).await?;

    progress.step(3);
    Ok(OperationOutput {
        operation: "Compress image".to_string(),
        size_bytes: compressed.compressed_size() as u64,
        summary: format!(
            "{}x{} at quality {}, {:.1}% smaller",
            compressed.width,
            compressed.height,
            compressed.quality,
            compressed.savings_percent()
        ),
        path,
    })
}

pub async fn handle_crop_image(
    input: PathBuf,
    region: CropRegion,
    format: OutputFormat,
    output_dir: PathBuf,
    progress: &ProgressReporter<'_>,
) -> HandlerResult<OperationOutput> {
    progress.step(0);
    let image = load_image(&input).await?;

    progress.step(1);
    let cropped =
        tokio::task::spawn_blocking(move || crop_to_output(&image, region, format)).await??;

    progress.step(2);
    tokio::fs::create_dir_all(&output_dir).await?;
    let path = output_dir.join(&cropped.filename);
    save_bytes(&cropped.bytes, &path).await?;

    progress.step(3);
    Ok(OperationOutput {
        operation: "Crop image".to_string(),
        size_bytes: cropped.bytes.len() as u64,
        summary: format!("{}x{}", cropped.width, cropped.height),
        path,
    })
}

