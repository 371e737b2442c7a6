use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use docucraft_raster::{BackgroundColor, LayoutMode, OutputFormat};
use docucraft_runtime::{
    ConversionOptions, CropRegion, DocCommand, DocUpdate, ImageCompressionOptions, LayoutSpec,
    OperationOutput, ProcessingState, worker_task,
};
use std::path::PathBuf;
use tokio::sync::mpsc;

mod logger;

#[derive(Parser)]
#[command(name = "docucraft", about = "Local image and PDF tools", version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge images into a single collage
    Collage {
        /// Input images, in drawing order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Layout spec JSON; flags below override its fields
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the effective layout spec to this JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,

        /// Pixels between adjacent images
        #[arg(long)]
        spacing: Option<u32>,

        /// Background color as #rgb or #rrggbb
        #[arg(long)]
        background: Option<String>,

        /// Maximum canvas width in pixels
        #[arg(long)]
        max_width: Option<u32>,

        #[arg(long, value_enum)]
        format: Option<ImageFormatArg>,

        /// JPEG quality (1-100)
        #[arg(long)]
        quality: Option<u8>,
    },

    /// Convert images to a PDF, one page per image
    ToPdf {
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long, default_value = "a4", value_enum)]
        page_size: PageSizeArg,

        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Page margin in mm (ignored for --page-size fit)
        #[arg(long, default_value = "10.0")]
        margin: f32,
    },

    /// Concatenate PDFs in the given order
    MergePdf {
        #[arg(short, long, required = true, num_args = 2..)]
        input: Vec<PathBuf>,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Losslessly recompress a PDF
    CompressPdf {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Downscale and re-encode an image as JPEG
    CompressImage {
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Longest edge in pixels
        #[arg(long, default_value = "1920")]
        max_dimension: u32,

        /// Starting JPEG quality
        #[arg(long, default_value = "80")]
        quality: u8,

        /// Target size in kilobytes
        #[arg(long, default_value = "1024")]
        max_size_kb: usize,

        /// Lowest JPEG quality to try
        #[arg(long, default_value = "30")]
        min_quality: u8,
    },

    /// Cut a rectangle out of an image
    Crop {
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long)]
        x: f32,

        #[arg(long)]
        y: f32,

        #[arg(long)]
        width: f32,

        #[arg(long)]
        height: f32,

        /// Treat x/y/width/height as percentages of the image size
        #[arg(long)]
        percent: bool,

        #[arg(long, default_value = "png", value_enum)]
        format: ImageFormatArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Horizontal,
    Vertical,
    Grid,
}

#[derive(Clone, Copy, ValueEnum)]
enum ImageFormatArg {
    Jpeg,
    Png,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    A4,
    Letter,
    Fit,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
    Auto,
}

impl From<LayoutArg> for LayoutMode {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Horizontal => Self::Horizontal,
            LayoutArg::Vertical => Self::Vertical,
            LayoutArg::Grid => Self::Grid,
        }
    }
}

impl From<PageSizeArg> for docucraft_pdf::PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::A4 => Self::A4,
            PageSizeArg::Letter => Self::Letter,
            PageSizeArg::Fit => Self::FitImage,
        }
    }
}

impl From<OrientationArg> for docucraft_pdf::PageOrientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
            OrientationArg::Auto => Self::Auto,
        }
    }
}

impl ImageFormatArg {
    fn with_quality(self, quality: u8) -> OutputFormat {
        match self {
            ImageFormatArg::Jpeg => OutputFormat::Jpeg { quality },
            ImageFormatArg::Png => OutputFormat::Png,
        }
    }
}

/// Collage flags that override the loaded or default spec
struct CollageOverrides {
    layout: Option<LayoutArg>,
    spacing: Option<u32>,
    background: Option<String>,
    max_width: Option<u32>,
    format: Option<ImageFormatArg>,
    quality: Option<u8>,
}

async fn build_layout_spec(
    config: Option<PathBuf>,
    overrides: CollageOverrides,
) -> Result<LayoutSpec> {
    let mut spec = match config {
        Some(path) => LayoutSpec::load(&path).await?,
        None => LayoutSpec::default(),
    };

    if let Some(layout) = overrides.layout {
        spec.layout = layout.into();
    }
    if let Some(spacing) = overrides.spacing {
        spec.spacing = spacing;
    }
    if let Some(background) = overrides.background {
        spec.background_color = BackgroundColor::parse_hex(&background)?;
    }
    if let Some(max_width) = overrides.max_width {
        spec.max_width = max_width;
    }

    let current_quality = match spec.output_format {
        OutputFormat::Jpeg { quality } => quality,
        OutputFormat::Png => docucraft_raster::DEFAULT_JPEG_QUALITY,
    };
    let quality = overrides.quality.unwrap_or(current_quality);
    spec.output_format = match overrides.format {
        Some(format) => format.with_quality(quality),
        None => match spec.output_format {
            OutputFormat::Jpeg { .. } => OutputFormat::Jpeg { quality },
            OutputFormat::Png => OutputFormat::Png,
        },
    };

    spec.validate()?;
    Ok(spec)
}

/// Run one command on the worker, echoing progress, and return its output
async fn execute(command: DocCommand) -> Result<OperationOutput> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(command_rx, update_tx));

    command_tx.send(command)?;
    drop(command_tx);

    let mut state = ProcessingState::default().begin();
    while let Some(update) = update_rx.recv().await {
        if let DocUpdate::Progress {
            operation,
            current,
            total,
        } = &update
        {
            log::debug!("{operation}: step {current}/{total}");
        }
        state = state.apply(&update);
        if !state.is_processing {
            break;
        }
    }
    worker.await?;

    if let Some(message) = state.error {
        bail!(message);
    }
    match state.result {
        Some(output) => Ok(output),
        None => bail!("Worker stopped without reporting a result"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.verbose).init()?;

    let command = match cli.command {
        Commands::Collage {
            input,
            output,
            config,
            save_config,
            layout,
            spacing,
            background,
            max_width,
            format,
            quality,
        } => {
            let overrides = CollageOverrides {
                layout,
                spacing,
                background,
                max_width,
                format,
                quality,
            };
            let spec = build_layout_spec(config, overrides).await?;
            if let Some(path) = save_config {
                spec.save(&path).await?;
                println!("Saved layout spec → {}", path.display());
            }
            DocCommand::MergeImages {
                inputs: input,
                spec,
                output_dir: output,
            }
        }
        Commands::ToPdf {
            input,
            output,
            page_size,
            orientation,
            margin,
        } => DocCommand::ImagesToPdf {
            inputs: input,
            options: ConversionOptions {
                page_size: page_size.into(),
                orientation: orientation.into(),
                margin_mm: margin,
                ..Default::default()
            },
            output_path: output,
        },
        Commands::MergePdf { input, output } => DocCommand::MergePdfs {
            inputs: input,
            output_path: output,
        },
        Commands::CompressPdf { input, output } => DocCommand::CompressPdf {
            input,
            output_path: output,
        },
        Commands::CompressImage {
            input,
            output,
            max_dimension,
            quality,
            max_size_kb,
            min_quality,
        } => DocCommand::CompressImage {
            input,
            options: ImageCompressionOptions {
                max_dimension,
                quality,
                max_size_bytes: max_size_kb * 1024,
                min_quality,
            },
            output_dir: output,
        },
        Commands::Crop {
            input,
            output,
            x,
            y,
            width,
            height,
            percent,
            format,
        } => {
            let region = if percent {
                let image = docucraft_raster::load_image(&input).await?;
                CropRegion::from_percent(image.width(), image.height(), x, y, width, height)
            } else {
                if [x, y, width, height].iter().any(|v| *v < 0.0 || v.fract() != 0.0) {
                    bail!("Pixel crop values must be non-negative whole numbers");
                }
                CropRegion::new(x as u32, y as u32, width as u32, height as u32)
            };
            DocCommand::CropImage {
                input,
                region,
                format: format.with_quality(docucraft_raster::DEFAULT_JPEG_QUALITY),
                output_dir: output,
            }
        }
    };

    let result = execute(command).await?;
    println!(
        "{} complete: {}, {} bytes → {}",
        result.operation,
        result.summary,
        result.size_bytes,
        result.path.display()
    );

    Ok(())
}
