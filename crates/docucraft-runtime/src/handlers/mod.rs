pub mod images;
pub mod pdf;

use crate::DocUpdate;
use std::path::Path;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    Raster(#[from] docucraft_raster::RasterError),
    #[error(transparent)]
    Merge(#[from] docucraft_raster::MergeError),
    #[error(transparent)]
    Pdf(#[from] docucraft_pdf::PdfError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("{0}")]
    Input(String),
}

pub type HandlerResult<T> = std::result::Result<T, HandlerError>;

/// Sends numbered progress steps for one command
pub struct ProgressReporter<'a> {
    operation: &'static str,
    total: usize,
    update_tx: &'a mpsc::UnboundedSender<DocUpdate>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new(
        operation: &'static str,
        total: usize,
        update_tx: &'a mpsc::UnboundedSender<DocUpdate>,
    ) -> Self {
        Self {
            operation,
            total,
            update_tx,
        }
    }

    pub fn step(&self, current: usize) {
        let _ = self.update_tx.send(DocUpdate::Progress {
            operation: self.operation.to_string(),
            current,
            total: self.total,
        });
    }
}

/// Create the directory an output file will be written into
pub async fn ensure_parent_dir(path: &Path) -> HandlerResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}

pub async fn file_size(path: &Path) -> HandlerResult<u64> {
    Ok(tokio::fs::metadata(path).await?.len())
}
