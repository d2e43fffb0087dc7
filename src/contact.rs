// src/contact.rs
//! Contact extraction: e-mail addresses scanned out of search-record text
//! and deduplicated per teacher.

use indexmap::IndexMap;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::{SearchRecord, Subject};

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z0-9._-]+@[a-z0-9._-]+\.[a-z0-9._-]+").unwrap()
});

/// One discovered address and the subject it was first found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEntry {
    pub address: String,
    pub subject: String,
}

/// Insertion-ordered `teacher label -> discovered addresses` map.
pub type ContactMap = IndexMap<String, Vec<AddressEntry>>;

/// Scans free text for e-mail-shaped substrings: case-insensitive,
/// non-overlapping, in left-to-right order of appearance. Pure function,
/// no node-emission side effects.
#[must_use]
pub fn scan_addresses(text: &str) -> Vec<&str> {
    ADDRESS_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Extracts per-teacher address lists from the search dataset.
///
/// Records without a text payload are malformed: logged and skipped.
/// Records whose id matches no subject code, or whose text holds no
/// addresses, are skipped silently. An address is appended to a teacher's
/// list only if no entry with that literal string exists yet; the first
/// discovering subject stays as the address's source. Teachers with no
/// discovered addresses never appear in the output.
#[must_use]
pub fn extract(records: &[SearchRecord], subjects_by_code: &HashMap<&str, &Subject>) -> ContactMap {
    let mut contacts = ContactMap::new();

    for record in records {
        let Some(text) = record.text.as_deref() else {
            log::warn!("search record {:?} has no text payload, skipping", record.id);
            continue;
        };
        let Some(subject) = subjects_by_code.get(record.id.as_str()) else {
            continue;
        };

        let found = scan_addresses(text);
        if found.is_empty() {
            continue;
        }

        let list = contacts.entry(subject.teacher.clone()).or_default();
        for address in found {
            if list.iter().any(|entry| entry.address == address) {
                continue;
            }
            list.push(AddressEntry {
                address: address.to_string(),
                subject: subject.code.clone(),
            });
        }
    }

    contacts
}
