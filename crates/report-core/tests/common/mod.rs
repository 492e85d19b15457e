//! Shared fixtures for report-core integration tests
//!
//! The PDF builders mirror `src/test_support.rs`, which is only compiled
//! into the library's own unit tests.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat};
use report_core::pages::page_text;
use report_core::{CourseMapping, DocumentRef, Settings, TargetCourse, TopicPair};
use std::path::Path;

fn text_content(text: &str) -> Vec<u8> {
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![Object::Name(b"F1".to_vec()), Object::Integer(12)],
            ),
            Operation::new("Td", vec![Object::Integer(50), Object::Integer(700)]),
            Operation::new(
                "Tj",
                vec![Object::String(
                    text.as_bytes().to_vec(),
                    StringFormat::Literal,
                )],
            ),
            Operation::new("ET", vec![]),
        ],
    };
    content.encode().unwrap()
}

/// A letter-size PDF with one line of text per page
pub fn create_pdf_with_texts(texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));

    let mut page_ids = Vec::new();
    for text in texts {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), text_content(text)));
        let resources = Dictionary::from_iter(vec![(
            "Font",
            Object::Dictionary(Dictionary::from_iter(vec![(
                "F1",
                Object::Reference(font_id),
            )])),
        )]);
        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(doc.add_object(page));
    }

    let pages = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(page_ids.len() as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// `num_pages` pages reading `<prefix>-Page-<n>`, numbered from 1
pub fn create_test_pdf(num_pages: u32, prefix: &str) -> Vec<u8> {
    let texts: Vec<String> = (1..=num_pages)
        .map(|n| format!("{}-Page-{}", prefix, n))
        .collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    create_pdf_with_texts(&refs)
}

pub fn write_test_pdf(dir: &Path, name: &str, num_pages: u32, prefix: &str) {
    std::fs::write(dir.join(name), create_test_pdf(num_pages, prefix)).unwrap();
}

/// Settings with dividers off and a fixed date so output is reproducible
pub fn fixed_settings(base_dir: &Path) -> Settings {
    Settings {
        base_dir: base_dir.to_path_buf(),
        include_dividers: false,
        issued_on: Some("January 05, 2026".into()),
        ..Settings::default()
    }
}

pub fn mapping(code: &str, source: Option<DocumentRef>) -> CourseMapping {
    CourseMapping {
        code: code.into(),
        name: "Project Management".into(),
        category: Some("OE".into()),
        source,
        target: TargetCourse {
            name: "Project Management for Managers".into(),
            institute: "IIT Kharagpur".into(),
            duration: "12 Weeks".into(),
            course_id: Some("noc26_mg01".into()),
            url: None,
            instructor: None,
            document: None,
        },
        details: vec![],
        comparison: (1..=4)
            .map(|n| TopicPair {
                left: format!("Module {}: Planning", n),
                right: format!("Week {}: Planning", n),
                matched: Default::default(),
            })
            .collect(),
        overlap: None,
        note: None,
    }
}

/// Text of every page in the PDF at `path`
pub fn page_texts(path: &Path) -> Vec<String> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .values()
        .map(|&id| page_text(&doc, id))
        .collect()
}

/// Decompressed content streams of every page, used to compare copied pages
pub fn page_contents(path: &Path) -> Vec<Vec<u8>> {
    let mut doc = Document::load(path).unwrap();
    doc.decompress();
    doc.get_pages()
        .values()
        .map(|&id| doc.get_page_content(id).unwrap())
        .collect()
}
