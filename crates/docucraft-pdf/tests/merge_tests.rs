mod common;

use common::*;
use docucraft_pdf::*;
use lopdf::{Dictionary, Object, Stream};

#[test]
fn test_merge_concatenates_pages_in_order() {
    let docs = vec![
        create_test_pdf_with_width(2, 100),
        create_test_pdf_with_width(3, 200),
        create_test_pdf_with_width(1, 300),
    ];

    let merged = merge_documents(docs).unwrap();
    assert_eq!(page_widths(&merged), vec![100, 100, 200, 200, 200, 300]);
}

#[test]
fn test_merged_document_survives_save_and_reload() {
    let docs = vec![create_test_pdf(2), create_test_pdf(3)];
    let mut merged = merge_documents(docs).unwrap();

    let bytes = document_to_bytes(&mut merged).unwrap();
    let reloaded = Document::load_mem(&bytes).unwrap();
    assert_eq!(reloaded.get_pages().len(), 5);

    let catalog = reloaded.catalog().unwrap();
    let pages_id = catalog.get(b"Pages").unwrap().as_reference().unwrap();
    let pages = reloaded.get_dictionary(pages_id).unwrap();
    assert_eq!(pages.get(b"Count").unwrap().as_i64().unwrap(), 5);
}

#[test]
fn test_merge_reparents_appended_pages() {
    let merged = merge_documents(vec![create_test_pdf(1), create_test_pdf(2)]).unwrap();

    let pages_id = merged
        .catalog()
        .unwrap()
        .get(b"Pages")
        .unwrap()
        .as_reference()
        .unwrap();
    for page_id in merged.get_pages().into_values() {
        let page = merged.get_dictionary(page_id).unwrap();
        assert_eq!(
            page.get(b"Parent").unwrap().as_reference().unwrap(),
            pages_id
        );
    }
}

#[test]
fn test_merge_keeps_inherited_media_box() {
    // MediaBox lives on the page tree node only
    let mut inherited = Document::with_version("1.7");
    let pages_id = inherited.new_object_id();
    let content_id = inherited.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));
    let page_id = inherited.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        ("Contents", Object::Reference(content_id)),
    ]));
    inherited.objects.insert(
        pages_id,
        Object::Dictionary(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(vec![Object::Reference(page_id)])),
            ("Count", Object::Integer(1)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(420),
                    Object::Integer(595),
                ]),
            ),
        ])),
    );
    let catalog_id = inherited.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    inherited.trailer.set("Root", catalog_id);

    let merged = merge_documents(vec![create_test_pdf_with_width(1, 612), inherited]).unwrap();
    assert_eq!(page_widths(&merged), vec![612, 420]);
}

#[test]
fn test_merge_single_document_is_unchanged() {
    let merged = merge_documents(vec![create_test_pdf_with_width(4, 500)]).unwrap();
    assert_eq!(page_widths(&merged), vec![500; 4]);
}

#[test]
fn test_merge_nothing_fails() {
    let result = merge_documents(Vec::new());
    assert!(matches!(result, Err(PdfError::NoDocuments)));
}

#[tokio::test]
async fn test_merge_pdfs_async() {
    let merged = merge_pdfs(vec![create_test_pdf(2), create_test_pdf(2)])
        .await
        .unwrap();
    assert_eq!(merged.get_pages().len(), 4);
}
