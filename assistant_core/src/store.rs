//! In-memory contact storage.

use std::collections::HashMap;
use std::fmt;

use crate::error::{CommandError, Result};

/// A single name/phone pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phone)
    }
}

/// Contacts keyed by exact name, iterated in insertion order.
///
/// Overwriting an existing name updates the phone in place, so the contact
/// keeps the position it was first inserted at.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    index: HashMap<String, usize>,
}

impl ContactStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact or overwrite the phone of an existing one.
    pub fn put(&mut self, name: &str, phone: &str) {
        if let Some(&slot) = self.index.get(name) {
            self.contacts[slot].phone = phone.to_string();
            return;
        }

        self.index.insert(name.to_string(), self.contacts.len());
        self.contacts.push(Contact {
            name: name.to_string(),
            phone: phone.to_string(),
        });
    }

    pub fn get(&self, name: &str) -> Result<&str> {
        self.index
            .get(name)
            .map(|&slot| self.contacts[slot].phone.as_str())
            .ok_or(CommandError::NotFound)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All contacts in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.contacts.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
