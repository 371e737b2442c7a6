use docucraft_raster::*;
use image::{Rgba, RgbaImage};

fn solid(width: u32, height: u32, color: [u8; 4]) -> RasterImage {
    RgbaImage::from_pixel(width, height, Rgba(color)).into()
}

fn spec(layout: LayoutMode) -> LayoutSpec {
    LayoutSpec {
        layout,
        spacing: 10,
        max_width: 1200,
        ..Default::default()
    }
}

fn sample_sets() -> Vec<Vec<RasterImage>> {
    vec![
        vec![solid(100, 200, [255, 0, 0, 255]), solid(300, 100, [0, 0, 255, 255])],
        vec![
            solid(1920, 1080, [10, 10, 10, 255]),
            solid(1080, 1920, [20, 20, 20, 255]),
            solid(640, 480, [30, 30, 30, 255]),
        ],
        (0..5).map(|i| solid(200 + i * 50, 150, [0, 0, 0, 255])).collect(),
        (0..7).map(|i| solid(90, 60 + i * 20, [0, 0, 0, 255])).collect(),
    ]
}

#[test]
fn test_horizontal_scenario() {
    let images = vec![solid(100, 200, [255, 0, 0, 255]), solid(300, 100, [0, 0, 255, 255])];
    let result = merge(&images, &spec(LayoutMode::Horizontal)).unwrap();

    assert_eq!(result.width(), 410);
    assert_eq!(result.height(), 200);
    assert!((result.layout.scale - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_vertical_scenario() {
    let images = vec![solid(100, 200, [255, 0, 0, 255]), solid(300, 100, [0, 0, 255, 255])];
    let result = merge(&images, &spec(LayoutMode::Vertical)).unwrap();

    assert_eq!(result.width(), 300);
    assert_eq!(result.height(), 310);
    assert!((result.layout.scale - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_single_image_is_rejected() {
    let images = vec![solid(100, 100, [0, 0, 0, 255])];
    for layout in [LayoutMode::Horizontal, LayoutMode::Vertical, LayoutMode::Grid] {
        let err = merge(&images, &spec(layout)).unwrap_err();
        assert!(matches!(
            err,
            MergeError::InsufficientInput { provided: 1, .. }
        ));
    }
}

#[test]
fn test_empty_input_is_rejected() {
    let err = merge(&[], &spec(LayoutMode::Grid)).unwrap_err();
    assert!(matches!(
        err,
        MergeError::InsufficientInput { provided: 0, .. }
    ));
}

#[test]
fn test_canvas_positive_and_width_bounded() {
    for images in sample_sets() {
        let n = images.len() as f64;
        for layout in [LayoutMode::Horizontal, LayoutMode::Vertical, LayoutMode::Grid] {
            let spec = spec(layout);
            let result = merge(&images, &spec).unwrap();

            assert!(result.width() > 0 && result.height() > 0);
            // Horizontal gutters are scaled along with the images and may push
            // past the budget by at most their own total width
            let allowance = spec.spacing as f64 * (n - 1.0);
            assert!(
                result.width() as f64 <= spec.max_width as f64 + allowance,
                "{:?}: width {} over budget",
                layout,
                result.width()
            );
        }
    }
}

#[test]
fn test_grid_counts() {
    let cases = [(2, 2, 1), (4, 2, 2), (5, 3, 2)];
    for (n, cols, rows) in cases {
        let images: Vec<RasterImage> = (0..n).map(|_| solid(50, 50, [0, 0, 0, 255])).collect();
        let result = merge(&images, &spec(LayoutMode::Grid)).unwrap();
        assert_eq!(result.layout.grid, Some(GridDimensions { cols, rows }));
    }
}

#[test]
fn test_merge_is_idempotent_in_dimensions() {
    for images in sample_sets() {
        for layout in [LayoutMode::Horizontal, LayoutMode::Vertical, LayoutMode::Grid] {
            let first = merge(&images, &spec(layout)).unwrap();
            let second = merge(&images, &spec(layout)).unwrap();
            assert_eq!(first.layout.canvas, second.layout.canvas);
            assert_eq!(first.layout.placements, second.layout.placements);
        }
    }
}

#[test]
fn test_result_metadata() {
    let images = vec![solid(40, 40, [0, 0, 0, 255]), solid(40, 40, [0, 0, 0, 255])];
    let result = merge(&images, &spec(LayoutMode::Horizontal)).unwrap();

    assert!(result.filename.starts_with("merged_images_"));
    assert!(result.filename.ends_with(".jpg"));
    assert_eq!(result.mime_type(), "image/jpeg");
    assert_eq!(result.size(), result.bytes.len());
    assert_eq!(sniff_mime(&result.bytes), Some("image/jpeg"));

    let decoded = decode_image(&result.bytes).unwrap();
    assert_eq!(decoded.dimensions(), (result.width(), result.height()));
}

#[test]
fn test_png_output_preserves_pixels() {
    let images = vec![solid(20, 20, [255, 0, 0, 255]), solid(20, 10, [0, 0, 255, 255])];
    let spec = LayoutSpec {
        spacing: 4,
        background_color: BackgroundColor::rgb(0, 255, 0),
        output_format: OutputFormat::Png,
        ..spec(LayoutMode::Horizontal)
    };

    let result = merge(&images, &spec).unwrap();
    assert!(result.filename.ends_with(".png"));

    let decoded = decode_image(&result.bytes).unwrap().into_inner().to_rgba8();
    assert_eq!(decoded.dimensions(), (44, 20));
    assert_eq!(decoded.get_pixel(5, 5), &Rgba([255, 0, 0, 255]));
    // Gutter between the images
    assert_eq!(decoded.get_pixel(21, 10), &Rgba([0, 255, 0, 255]));
    // Second image is centred vertically: rows 5..15
    assert_eq!(decoded.get_pixel(30, 2), &Rgba([0, 255, 0, 255]));
    assert_eq!(decoded.get_pixel(30, 10), &Rgba([0, 0, 255, 255]));
}

#[test]
fn test_oversize_canvas_is_unavailable() {
    // A vertical stack taller than any drawing surface allows
    let images: Vec<RasterImage> = (0..3).map(|_| solid(10, 12_000, [0, 0, 0, 255])).collect();
    let err = merge(&images, &spec(LayoutMode::Vertical)).unwrap_err();
    assert!(matches!(err, MergeError::CanvasUnavailable { .. }));
}

#[test]
fn test_invalid_quality_is_an_encode_error() {
    let images = vec![solid(10, 10, [0, 0, 0, 255]), solid(10, 10, [0, 0, 0, 255])];
    let spec = LayoutSpec {
        output_format: OutputFormat::Jpeg { quality: 0 },
        ..spec(LayoutMode::Horizontal)
    };
    let err = merge(&images, &spec).unwrap_err();
    assert!(matches!(err, MergeError::Encode(_)));
}

#[tokio::test]
async fn test_merge_images_async() {
    let images = vec![solid(100, 200, [255, 0, 0, 255]), solid(300, 100, [0, 0, 255, 255])];
    let result = merge_images(images, spec(LayoutMode::Horizontal))
        .await
        .unwrap();
    assert_eq!((result.width(), result.height()), (410, 200));
}
