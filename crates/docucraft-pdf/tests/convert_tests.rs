use docucraft_pdf::*;
use docucraft_raster::RasterImage;
use image::{DynamicImage, Rgba, RgbaImage};
use lopdf::Object;

fn solid(width: u32, height: u32) -> RasterImage {
    RasterImage::new(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([200, 40, 40, 255]),
    )))
}

fn media_box(doc: &Document, page_id: lopdf::ObjectId) -> Vec<f32> {
    doc.get_dictionary(page_id)
        .unwrap()
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_float().unwrap())
        .collect()
}

#[test]
fn test_one_page_per_image() {
    let images = vec![solid(40, 30), solid(30, 40), solid(50, 50)];
    let doc = images_to_pdf(&images, &ConversionOptions::default()).unwrap();
    assert_eq!(doc.get_pages().len(), 3);
}

#[test]
fn test_fit_image_pages_follow_input_order() {
    let images = vec![solid(400, 100), solid(100, 400)];
    let options = ConversionOptions {
        page_size: PageSize::FitImage,
        ..Default::default()
    };
    let doc = images_to_pdf(&images, &options).unwrap();

    let boxes: Vec<Vec<f32>> = doc
        .get_pages()
        .into_values()
        .map(|id| media_box(&doc, id))
        .collect();
    assert!((boxes[0][2] - 300.0).abs() < 0.01);
    assert!((boxes[0][3] - 75.0).abs() < 0.01);
    assert!((boxes[1][2] - 75.0).abs() < 0.01);
    assert!((boxes[1][3] - 300.0).abs() < 0.01);
}

#[test]
fn test_image_is_embedded_as_jpeg_xobject() {
    let doc = images_to_pdf(&[solid(16, 8)], &ConversionOptions::default()).unwrap();

    let page_id = doc.get_pages().into_values().next().unwrap();
    let resources = doc
        .get_dictionary(page_id)
        .unwrap()
        .get(b"Resources")
        .unwrap()
        .as_dict()
        .unwrap();
    let image_id = resources
        .get(b"XObject")
        .unwrap()
        .as_dict()
        .unwrap()
        .get(IMAGE_XOBJECT_NAME.as_bytes())
        .unwrap()
        .as_reference()
        .unwrap();

    let stream = doc.get_object(image_id).unwrap().as_stream().unwrap();
    assert_eq!(
        stream.dict.get(b"Filter").unwrap().as_name().unwrap(),
        b"DCTDecode"
    );
    assert_eq!(stream.dict.get(b"Width").unwrap().as_i64().unwrap(), 16);
    assert_eq!(stream.dict.get(b"Height").unwrap().as_i64().unwrap(), 8);
    assert!(stream.content.starts_with(&[0xFF, 0xD8]));
    assert!(matches!(stream.dict.get(b"Type"), Ok(Object::Name(_))));
}

#[test]
fn test_converted_document_reloads() {
    let mut doc = images_to_pdf(&[solid(20, 20), solid(20, 10)], &ConversionOptions::default())
        .unwrap();
    let bytes = document_to_bytes(&mut doc).unwrap();

    let reloaded = Document::load_mem(&bytes).unwrap();
    assert_eq!(reloaded.get_pages().len(), 2);
}

#[test]
fn test_no_images_fails() {
    let result = images_to_pdf(&[], &ConversionOptions::default());
    assert!(matches!(result, Err(PdfError::NoImages)));
}

#[test]
fn test_oversized_margin_is_rejected() {
    let options = ConversionOptions {
        margin_mm: 120.0,
        ..Default::default()
    };
    let result = images_to_pdf(&[solid(10, 10)], &options);
    assert!(matches!(result, Err(PdfError::Config(_))));
}

#[test]
fn test_bad_quality_is_rejected() {
    let options = ConversionOptions {
        jpeg_quality: 0,
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(PdfError::Config(_))));
}

#[tokio::test]
async fn test_convert_images_to_pdf_async() {
    let doc = convert_images_to_pdf(vec![solid(8, 8)], ConversionOptions::default())
        .await
        .unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}
