//! Image to PDF conversion
//!
//! Every image becomes one page. Images are embedded as JPEG (DCTDecode)
//! image XObjects and drawn with a single `cm`/`Do` pair.

use crate::constants::*;
use crate::options::ConversionOptions;
use crate::types::*;
use docucraft_raster::{OutputFormat, RasterError, RasterImage, encode_image};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

// =============================================================================
// Page Geometry
// =============================================================================

/// A rectangle in PDF user space (origin bottom-left, points)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PdfRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Page size and image rectangle for one converted image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePageLayout {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub image_rect: PdfRect,
}

/// Compute the page for an image of `width` x `height` pixels.
///
/// Fixed page sizes fit the image inside the margins, preserving its aspect
/// ratio, and centre it. [`PageSize::FitImage`] sizes the page to the image.
pub fn image_page_layout(
    width: u32,
    height: u32,
    options: &ConversionOptions,
) -> ImagePageLayout {
    let image_w_pt = px_to_pt(width);
    let image_h_pt = px_to_pt(height);

    let Some((base_w_mm, base_h_mm)) = options.page_size.dimensions_mm() else {
        return ImagePageLayout {
            page_width_pt: image_w_pt,
            page_height_pt: image_h_pt,
            image_rect: PdfRect {
                x: 0.0,
                y: 0.0,
                width: image_w_pt,
                height: image_h_pt,
            },
        };
    };

    let (page_w_mm, page_h_mm) = if options.orientation.is_landscape_for(width, height) {
        (base_h_mm, base_w_mm)
    } else {
        (base_w_mm, base_h_mm)
    };
    let page_width_pt = mm_to_pt(page_w_mm);
    let page_height_pt = mm_to_pt(page_h_mm);

    let margin_pt = mm_to_pt(options.margin_mm);
    let avail_w = page_width_pt - 2.0 * margin_pt;
    let avail_h = page_height_pt - 2.0 * margin_pt;

    let scale = (avail_w / image_w_pt).min(avail_h / image_h_pt);
    let draw_w = image_w_pt * scale;
    let draw_h = image_h_pt * scale;

    ImagePageLayout {
        page_width_pt,
        page_height_pt,
        image_rect: PdfRect {
            x: (page_width_pt - draw_w) / 2.0,
            y: (page_height_pt - draw_h) / 2.0,
            width: draw_w,
            height: draw_h,
        },
    }
}

// =============================================================================
// Conversion
// =============================================================================

/// Convert images to a PDF with one page per image, in input order
pub fn images_to_pdf(images: &[RasterImage], options: &ConversionOptions) -> Result<Document> {
    options.validate()?;
    if images.is_empty() {
        return Err(PdfError::NoImages);
    }

    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let mut kids = Vec::with_capacity(images.len());
    for image in images {
        let page_id = add_image_page(&mut doc, pages_id, image, options)?;
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(kids.len() as i64)),
        ("Kids", Object::Array(kids)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    log::info!("Converted {} images to PDF", images.len());
    Ok(doc)
}

/// Convert on the blocking pool
pub async fn convert_images_to_pdf(
    images: Vec<RasterImage>,
    options: ConversionOptions,
) -> Result<Document> {
    tokio::task::spawn_blocking(move || images_to_pdf(&images, &options)).await?
}

fn add_image_page(
    doc: &mut Document,
    parent_pages_id: ObjectId,
    image: &RasterImage,
    options: &ConversionOptions,
) -> Result<ObjectId> {
    let (width, height) = image.dimensions();
    let layout = image_page_layout(width, height, options);

    let jpeg = encode_image(
        image.pixels(),
        OutputFormat::Jpeg {
            quality: options.jpeg_quality,
        },
    )
    .map_err(RasterError::from)?;
    let image_id = doc.add_object(image_xobject(jpeg, width, height));

    let content = placement_command(IMAGE_XOBJECT_NAME, &layout.image_rect);
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set(IMAGE_XOBJECT_NAME, Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let page = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(parent_pages_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(layout.page_width_pt),
                Object::Real(layout.page_height_pt),
            ]),
        ),
        ("Resources", Object::Dictionary(resources)),
        ("Contents", Object::Reference(content_id)),
    ]);

    Ok(doc.add_object(page))
}

/// Build an RGB DCTDecode image XObject around JPEG data
fn image_xobject(jpeg: Vec<u8>, width: u32, height: u32) -> Stream {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    // Already compressed; Flate on top only wastes time
    Stream::new(dict, jpeg).with_compression(false)
}

/// Content stream drawing a named XObject into `rect`
fn placement_command(name: &str, rect: &PdfRect) -> String {
    format!(
        "q\n{:.4} 0 0 {:.4} {:.4} {:.4} cm\n/{} Do\nQ\n",
        rect.width, rect.height, rect.x, rect.y, name
    )
}
