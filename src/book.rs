//! The address book: records keyed by contact name.
//!
//! Names are unique keys. Adding a record under a name that is already
//! present replaces the stored record (last write wins) without moving the
//! name in iteration order. Iteration follows the order in which names were
//! first added.

use crate::domain::Field;
use crate::models::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// An owning, insertion-ordered collection of records keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name.
    ///
    /// Returns the record previously stored under that name, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().value().to_string();
        let previous = self.records.insert(key.clone(), record);

        if previous.is_some() {
            tracing::debug!(name = %key, "Record replaced");
        } else {
            tracing::debug!(name = %key, "Record added");
            self.order.push(key);
        }

        previous
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for editing in place.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// Returns the removed record, or `None` if the name was absent.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        tracing::debug!(name = %name, "Record deleted");
        Some(removed)
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            records: &self.records,
            keys: self.order.iter(),
        }
    }
}

/// Borrowing iterator over an [`AddressBook`], created by [`AddressBook::iter`].
pub struct Iter<'a> {
    records: &'a HashMap<String, Record>,
    keys: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.records.get(key).map(|record| (key.as_str(), record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a str, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Serde support - serialize as an ordered list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter().map(|(_, record)| record))
    }
}

// Serde support - later records replace earlier ones with the same name
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}
