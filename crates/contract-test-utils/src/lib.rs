//! Testing utilities for the contract renderer workspace
//!
//! Sample contract records and helpers for looking inside rendered
//! .docx packages.

#![allow(missing_docs)]

use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::{json, Value};
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Regular-template record used across tests
pub fn regular_record() -> Value {
    json!({
        "contract_type": "regular",
        "contractor_name": "Jane Doe",
        "signer_name": "",
        "relationship_to_vendor": "",
        "address": "3406 Duval St Unit B Austin TX 78705",
        "email": "jane@example.com",
        "vendor_account": "Needed",
        "number_of_content": 2,
        "amount": "5000",
        "due_date": "within 30 days",
        "end_date": "2025-12-31"
    })
}

/// Same record tagged for the campfire template
pub fn campfire_record() -> Value {
    let mut record = regular_record();
    record["contract_type"] = json!("campfire");
    record
}

/// Record with `key` removed
pub fn without(mut record: Value, key: &str) -> Value {
    if let Some(map) = record.as_object_mut() {
        map.remove(key);
    }
    record
}

/// Names of all entries in a .docx package
pub fn docx_part_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip archive");
    archive.file_names().map(str::to_string).collect()
}

/// Raw XML of one package part
pub fn docx_part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip archive");
    let mut entry = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part {name}"));
    let mut xml = String::new();
    entry.read_to_string(&mut xml).expect("utf-8 part");
    xml
}

/// Unescaped text of `word/document.xml`
///
/// Each `w:br` becomes a newline and each paragraph ends with one.
pub fn docx_plain_text(bytes: &[u8]) -> String {
    let xml = docx_part(bytes, "word/document.xml");
    let mut reader = Reader::from_str(&xml);
    let mut out = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event().expect("well-formed document.xml") {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text = true,
            Event::End(e) if e.name().as_ref() == b"w:t" => in_text = false,
            Event::End(e) if e.name().as_ref() == b"w:p" => out.push('\n'),
            Event::Empty(e) if e.name().as_ref() == b"w:br" => out.push('\n'),
            Event::Text(t) if in_text => {
                out.push_str(&t.unescape().expect("valid escapes"));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    out
}
