//! Output document under construction
//!
//! Wraps a lopdf [`Document`] with a flat page tree. Generated pages share one
//! set of font objects; imported pages bring their own resources.

use crate::canvas::PageCanvas;
use crate::error::ReportError;
use crate::style::Font;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;
use std::path::Path;

pub struct OutputDocument {
    pub(crate) doc: Document,
    pub(crate) pages_id: ObjectId,
    pub(crate) kids: Vec<ObjectId>,
    font_resources: Dictionary,
}

impl OutputDocument {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut font_resources = Dictionary::new();
        for font in Font::ALL {
            let font_dict = Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Font".to_vec())),
                ("Subtype", Object::Name(b"Type1".to_vec())),
                ("BaseFont", Object::Name(font.base_font().as_bytes().to_vec())),
                ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
            ]);
            let font_id = doc.add_object(font_dict);
            font_resources.set(font.resource_name().to_vec(), Object::Reference(font_id));
        }

        let catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]);
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        Self {
            doc,
            pages_id,
            kids: Vec::new(),
            font_resources,
        }
    }

    /// Append a generated page
    pub fn add_page(&mut self, canvas: PageCanvas) -> Result<ObjectId, ReportError> {
        let (width, height) = (canvas.width(), canvas.height());
        let content = canvas
            .into_content()
            .encode()
            .map_err(|e| ReportError::Pdf(format!("Failed to encode page content: {}", e)))?;
        let content_id = self
            .doc
            .add_object(Stream::new(Dictionary::new(), content));

        let resources = Dictionary::from_iter(vec![(
            "Font",
            Object::Dictionary(self.font_resources.clone()),
        )]);
        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(self.pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(width),
                    Object::Real(height),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]);
        let page_id = self.doc.add_object(page);
        self.kids.push(page_id);
        Ok(page_id)
    }

    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Finalize the page tree and serialize
    pub fn to_bytes(mut self) -> Result<Vec<u8>, ReportError> {
        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(self.kids.len() as i64)),
            (
                "Kids",
                Object::Array(self.kids.iter().map(|&id| Object::Reference(id)).collect()),
            ),
        ]);
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));

        self.doc.compress();

        let mut buffer = Vec::new();
        self.doc
            .save_to(&mut buffer)
            .map_err(|e| ReportError::Pdf(format!("Failed to save PDF: {}", e)))?;
        Ok(buffer)
    }

    /// Serialize and write to `path` in one step.
    ///
    /// Bytes go to a temporary file next to the destination which is renamed
    /// over it, so a failure never leaves a truncated report behind.
    pub fn save_atomic(self, path: &Path) -> Result<(), ReportError> {
        let bytes = self.to_bytes()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = tempfile::Builder::new()
            .prefix(".report-")
            .suffix(".pdf.tmp")
            .tempfile_in(dir)
            .map_err(|e| ReportError::io(dir, e))?;
        if let Err(e) = temp.write_all(&bytes).and_then(|_| temp.flush()) {
            return Err(ReportError::io(temp.path(), e));
        }
        temp.persist(path)
            .map_err(|e| ReportError::io(path, e.error))?;
        Ok(())
    }
}

impl Default for OutputDocument {
    fn default() -> Self {
        Self::new()
    }
}
