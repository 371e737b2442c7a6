//! File I/O for raster inputs and outputs

use crate::codec::decode_image;
use crate::types::*;
use std::path::Path;

/// Load and decode a single image
pub async fn load_image(path: impl AsRef<Path>) -> Result<RasterImage> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let image = tokio::task::spawn_blocking(move || decode_image(&bytes)).await??;
    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Load and decode several images in parallel.
///
/// Results come back in input order; the first failure fails the whole call.
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<RasterImage>> {
    let handles: Vec<_> = paths
        .iter()
        .map(|path| tokio::spawn(load_image(path.as_ref().to_owned())))
        .collect();

    let mut images = Vec::with_capacity(handles.len());
    for handle in handles {
        images.push(handle.await??);
    }
    Ok(images)
}

/// Write encoded output to disk
pub async fn save_bytes(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
