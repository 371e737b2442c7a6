//! PDF merging
//!
//! Pages of every later document are appended to the page tree of the first
//! one. Source objects are renumbered past the target's highest id, so no
//! object ids collide.

use crate::types::*;
use lopdf::{Document, Object, ObjectId};

/// Attributes a page may inherit from its ancestors in the page tree
const INHERITABLE_KEYS: &[&[u8]] = &[b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against cyclic `Parent` chains in malformed files
const MAX_TREE_DEPTH: usize = 64;

/// Concatenate all pages of `documents`, in order, into one document
pub fn merge_documents(documents: Vec<Document>) -> Result<Document> {
    let total = documents.len();
    let mut documents = documents.into_iter();
    let mut merged = documents.next().ok_or(PdfError::NoDocuments)?;

    for doc in documents {
        append_document(&mut merged, doc)?;
    }

    log::info!(
        "Merged {} documents ({} pages)",
        total,
        merged.get_pages().len()
    );
    Ok(merged)
}

/// Merge on the blocking pool
pub async fn merge_pdfs(documents: Vec<Document>) -> Result<Document> {
    tokio::task::spawn_blocking(move || merge_documents(documents)).await?
}

fn append_document(target: &mut Document, mut source: Document) -> Result<()> {
    source.renumber_objects_with(target.max_id + 1);

    let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();

    // Pages are re-parented below, so anything they inherited must move onto them
    for &page_id in &page_ids {
        flatten_inherited_attributes(&mut source, page_id)?;
    }

    // The source catalog and page-tree nodes are superseded by the target's
    let mut superseded: Vec<ObjectId> = source
        .objects
        .iter()
        .filter(|(_, obj)| is_pages_node(obj))
        .map(|(&id, _)| id)
        .collect();
    if let Ok(root_id) = source.trailer.get(b"Root").and_then(Object::as_reference) {
        superseded.push(root_id);
    }
    for id in superseded {
        source.objects.remove(&id);
    }

    let source_max_id = source.max_id;
    target.objects.extend(source.objects);
    target.max_id = target.max_id.max(source_max_id);

    let pages_root_id = target
        .catalog()?
        .get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(|_| PdfError::Malformed("catalog has no page tree".to_string()))?;

    {
        let pages = target.get_object_mut(pages_root_id)?.as_dict_mut()?;
        let kids = pages.get_mut(b"Kids")?.as_array_mut()?;
        kids.extend(page_ids.iter().map(|&id| Object::Reference(id)));

        let count = pages.get(b"Count").and_then(Object::as_i64).unwrap_or(0);
        pages.set("Count", count + page_ids.len() as i64);
    }

    for &page_id in &page_ids {
        target
            .get_object_mut(page_id)?
            .as_dict_mut()?
            .set("Parent", pages_root_id);
    }

    Ok(())
}

/// Copy inheritable attributes from ancestor nodes onto the page itself
fn flatten_inherited_attributes(doc: &mut Document, page_id: ObjectId) -> Result<()> {
    let mut inherited: Vec<(&[u8], Object)> = Vec::new();

    {
        let page = doc.get_dictionary(page_id)?;
        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
        let mut depth = 0;

        while let Some(parent_id) = parent {
            depth += 1;
            if depth > MAX_TREE_DEPTH {
                return Err(PdfError::Malformed(format!(
                    "page tree deeper than {} levels",
                    MAX_TREE_DEPTH
                )));
            }

            let node = doc.get_dictionary(parent_id)?;
            for &key in INHERITABLE_KEYS {
                let already = page.has(key) || inherited.iter().any(|(k, _)| *k == key);
                if !already {
                    if let Ok(value) = node.get(key) {
                        inherited.push((key, value.clone()));
                    }
                }
            }
            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        }
    }

    if !inherited.is_empty() {
        let page = doc.get_dictionary_mut(page_id)?;
        for (key, value) in inherited {
            page.set(key, value);
        }
    }
    Ok(())
}

fn is_pages_node(obj: &Object) -> bool {
    obj.as_dict()
        .and_then(|dict| dict.get(b"Type"))
        .and_then(Object::as_name)
        .map(|name| name == b"Pages")
        .unwrap_or(false)
}
