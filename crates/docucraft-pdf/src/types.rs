use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Raster(#[from] docucraft_raster::RasterError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No images to convert")]
    NoImages,
    #[error("No documents to merge")]
    NoDocuments,
    #[error("Malformed PDF: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, PdfError>;

/// Page size for image conversion
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    /// Page matches the image exactly, without margins
    FitImage,
}

impl PageSize {
    /// Portrait dimensions in millimeters; `None` for [`PageSize::FitImage`]
    pub fn dimensions_mm(self) -> Option<(f32, f32)> {
        match self {
            PageSize::A4 => Some((210.0, 297.0)),
            PageSize::Letter => Some((215.9, 279.4)),
            PageSize::FitImage => None,
        }
    }
}

/// Page orientation for image conversion
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
    /// Landscape for images wider than tall, portrait otherwise
    Auto,
}

impl PageOrientation {
    /// Resolve to portrait (`false`) or landscape (`true`) for an image
    pub fn is_landscape_for(self, image_width: u32, image_height: u32) -> bool {
        match self {
            PageOrientation::Portrait => false,
            PageOrientation::Landscape => true,
            PageOrientation::Auto => image_width > image_height,
        }
    }
}
