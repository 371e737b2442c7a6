use std::path::PathBuf;

mod handlers;
mod state;
mod worker;

pub use state::ProcessingState;
pub use worker::worker_task;

// Re-export types from library crates
pub use docucraft_pdf::ConversionOptions;
pub use docucraft_raster::{CropRegion, ImageCompressionOptions, LayoutSpec, OutputFormat};

/// Commands sent from the front end to the worker
#[derive(Debug, Clone)]
pub enum DocCommand {
    MergeImages {
        inputs: Vec<PathBuf>,
        spec: LayoutSpec,
        output_dir: PathBuf,
    },
    ImagesToPdf {
        inputs: Vec<PathBuf>,
        options: ConversionOptions,
        output_path: PathBuf,
    },
    MergePdfs {
        inputs: Vec<PathBuf>,
        output_path: PathBuf,
    },
    CompressPdf {
        input: PathBuf,
        output_path: PathBuf,
    },
    CompressImage {
        input: PathBuf,
        options: ImageCompressionOptions,
        output_dir: PathBuf,
    },
    CropImage {
        input: PathBuf,
        region: CropRegion,
        format: OutputFormat,
        output_dir: PathBuf,
    },
}

impl DocCommand {
    /// Human-readable operation name used in progress and error messages
    pub fn operation(&self) -> &'static str {
        match self {
            DocCommand::MergeImages { .. } => "Merge images",
            DocCommand::ImagesToPdf { .. } => "Images to PDF",
            DocCommand::MergePdfs { .. } => "Merge PDFs",
            DocCommand::CompressPdf { .. } => "Compress PDF",
            DocCommand::CompressImage { .. } => "Compress image",
            DocCommand::CropImage { .. } => "Crop image",
        }
    }
}

/// Updates sent from the worker to the front end
#[derive(Debug, Clone, PartialEq)]
pub enum DocUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    Complete {
        output: OperationOutput,
    },
    Error {
        message: String,
    },
}

impl DocUpdate {
    /// Whether this update ends a command
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DocUpdate::Progress { .. })
    }
}

/// What a finished command produced
#[derive(Debug, Clone, PartialEq)]
pub struct OperationOutput {
    pub operation: String,
    /// File written by the command
    pub path: PathBuf,
    pub size_bytes: u64,
    /// One-line description, e.g. canvas size or savings
    pub summary: String,
}
