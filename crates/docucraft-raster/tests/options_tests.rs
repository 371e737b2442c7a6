use docucraft_raster::*;

#[test]
fn test_layout_spec_defaults() {
    let spec = LayoutSpec::default();
    assert_eq!(spec.layout, LayoutMode::Horizontal);
    assert_eq!(spec.spacing, 10);
    assert_eq!(spec.background_color, BackgroundColor::WHITE);
    assert_eq!(spec.max_width, 1200);
    assert_eq!(spec.output_format, OutputFormat::Jpeg { quality: 90 });
}

#[test]
fn test_validation_zero_width() {
    let spec = LayoutSpec {
        max_width: 0,
        ..Default::default()
    };
    match spec.validate() {
        Err(RasterError::Config(msg)) => assert!(msg.contains("width")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_validation_quality_range() {
    let mut spec = LayoutSpec::default();
    spec.output_format = OutputFormat::Jpeg { quality: 101 };
    assert!(spec.validate().is_err());

    spec.output_format = OutputFormat::Jpeg { quality: 1 };
    assert!(spec.validate().is_ok());

    spec.output_format = OutputFormat::Png;
    assert!(spec.validate().is_ok());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_spec() {
    use tempfile::NamedTempFile;

    let spec = LayoutSpec {
        layout: LayoutMode::Grid,
        spacing: 4,
        background_color: BackgroundColor::rgb(0x12, 0x34, 0x56),
        max_width: 800,
        output_format: OutputFormat::Png,
    };

    let temp_file = NamedTempFile::new().unwrap();
    spec.save(temp_file.path()).await.unwrap();

    let json = std::fs::read_to_string(temp_file.path()).unwrap();
    assert!(json.contains("\"grid\""));
    assert!(json.contains("#123456"));

    let loaded = LayoutSpec::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded, spec);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_spec_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "layout": "vertical", "spacing": 0 }"#).unwrap();

    let loaded = LayoutSpec::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.layout, LayoutMode::Vertical);
    assert_eq!(loaded.spacing, 0);
    assert_eq!(loaded.max_width, 1200);
    assert_eq!(loaded.background_color, BackgroundColor::WHITE);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_bad_color() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r##"{ "background_color": "#zzzzzz" }"##).unwrap();

    let result = LayoutSpec::load(temp_file.path()).await;
    assert!(matches!(result, Err(RasterError::Config(_))));
}

#[test]
fn test_compression_option_defaults() {
    let options = ImageCompressionOptions::default();
    assert_eq!(options.max_dimension, 1920);
    assert_eq!(options.quality, 80);
    assert_eq!(options.min_quality, 30);
    assert_eq!(options.max_size_bytes, 1024 * 1024);
    assert!(options.validate().is_ok());
}
