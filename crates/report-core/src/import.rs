//! Verbatim page import
//!
//! Copies selected pages of a source document into the output document.
//!
//! The algorithm:
//! 1. Clone each selected page dictionary and materialize the attributes it
//!    inherits from its ancestors in the source page tree
//! 2. Walk every object reachable from the page, allocating a fresh id in the
//!    destination for each one the first time it is seen
//! 3. Rewrite references through that id map; references to pages that are
//!    not being copied become `null`
//! 4. Re-parent the copied page under the destination page tree
//!
//! Objects shared by several copied pages (fonts, images) are imported once.
//! If anything fails, every object added so far is removed again and the
//! destination page list is left untouched.

use crate::document::OutputDocument;
use crate::error::ReportError;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::{HashMap, HashSet};

/// Page attributes a page may inherit from ancestor `Pages` nodes
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guards against cyclic `Parent` chains in malformed files
const MAX_TREE_DEPTH: usize = 64;

/// Copy the zero-indexed `indices` of `source` to the end of `dest`, in order.
///
/// Indices past the end of the source are ignored; callers are expected to
/// have resolved them already. Returns the number of pages appended.
pub fn import_pages(
    dest: &mut OutputDocument,
    source: &Document,
    indices: &[u32],
) -> Result<usize, ReportError> {
    let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();
    let selected: Vec<ObjectId> = indices
        .iter()
        .filter_map(|&index| page_ids.get(index as usize).copied())
        .collect();
    if selected.is_empty() {
        return Ok(0);
    }

    let mut importer = Importer {
        source,
        dest: &mut dest.doc,
        ids: HashMap::new(),
        all_pages: page_ids.iter().copied().collect(),
        inserted: Vec::new(),
    };

    // Pre-assign ids so annotations and link targets can point at pages
    // that have not been copied yet.
    for &page_id in &selected {
        if !importer.ids.contains_key(&page_id) {
            let new_id = importer.dest.new_object_id();
            importer.ids.insert(page_id, new_id);
        }
    }

    let mut used = HashSet::new();
    let mut new_kids = Vec::with_capacity(selected.len());
    for &page_id in &selected {
        // A page listed twice needs a second page object of its own
        let new_id = if used.insert(page_id) {
            importer.ids[&page_id]
        } else {
            importer.dest.new_object_id()
        };
        match importer.copy_page(page_id, new_id, dest.pages_id) {
            Ok(()) => new_kids.push(new_id),
            Err(e) => {
                importer.rollback();
                return Err(e);
            }
        }
    }

    let count = new_kids.len();
    dest.kids.extend(new_kids);
    Ok(count)
}

struct Importer<'a> {
    source: &'a Document,
    dest: &'a mut Document,
    ids: HashMap<ObjectId, ObjectId>,
    all_pages: HashSet<ObjectId>,
    inserted: Vec<ObjectId>,
}

impl Importer<'_> {
    fn copy_page(
        &mut self,
        page_id: ObjectId,
        new_id: ObjectId,
        dest_parent: ObjectId,
    ) -> Result<(), ReportError> {
        let mut page = self.source.get_dictionary(page_id)?.clone();
        self.materialize_inherited(&mut page)?;
        page.remove(b"Parent");

        let mut copied = self.copy_dictionary(&page)?;
        copied.set("Parent", Object::Reference(dest_parent));

        self.dest.objects.insert(new_id, Object::Dictionary(copied));
        self.inserted.push(new_id);
        Ok(())
    }

    fn materialize_inherited(&self, page: &mut Dictionary) -> Result<(), ReportError> {
        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
        let mut depth = 0;
        while let Some(parent_id) = parent {
            if depth >= MAX_TREE_DEPTH {
                return Err(ReportError::Pdf("Page tree is too deep or cyclic".into()));
            }
            let node = self.source.get_dictionary(parent_id)?;
            for key in INHERITABLE {
                if !page.has(key) {
                    if let Ok(value) = node.get(key) {
                        page.set(key.to_vec(), value.clone());
                    }
                }
            }
            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
            depth += 1;
        }
        Ok(())
    }

    fn copy_object(&mut self, object: Object) -> Result<Object, ReportError> {
        Ok(match object {
            Object::Reference(id) => self.copy_reference(id)?,
            Object::Array(items) => Object::Array(
                items
                    .into_iter()
                    .map(|item| self.copy_object(item))
                    .collect::<Result<_, _>>()?,
            ),
            Object::Dictionary(dict) => Object::Dictionary(self.copy_dictionary(&dict)?),
            Object::Stream(mut stream) => {
                stream.dict = self.copy_dictionary(&stream.dict)?;
                Object::Stream(stream)
            }
            other => other,
        })
    }

    fn copy_dictionary(&mut self, dict: &Dictionary) -> Result<Dictionary, ReportError> {
        let mut copied = Dictionary::new();
        for (key, value) in dict.iter() {
            let value = self.copy_object(value.clone())?;
            copied.set(key.clone(), value);
        }
        Ok(copied)
    }

    fn copy_reference(&mut self, id: ObjectId) -> Result<Object, ReportError> {
        if let Some(&new_id) = self.ids.get(&id) {
            return Ok(Object::Reference(new_id));
        }
        if self.all_pages.contains(&id) {
            // Link to a page that stays behind
            return Ok(Object::Null);
        }

        let new_id = self.dest.new_object_id();
        self.ids.insert(id, new_id);

        let copied = match self.source.get_object(id) {
            Ok(object) => self.copy_object(object.clone())?,
            // Dangling references in the source are legal and read as null
            Err(_) => Object::Null,
        };
        self.dest.objects.insert(new_id, copied);
        self.inserted.push(new_id);
        Ok(Object::Reference(new_id))
    }

    fn rollback(&mut self) {
        for id in self.inserted.drain(..) {
            self.dest.objects.remove(&id);
        }
    }
}
