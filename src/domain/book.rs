use super::*;
use std::collections::BTreeMap;

/// In-memory phone book keyed by contact name.
///
/// Each name maps to exactly one phone number. Iteration is ordered by name so
/// listings are stable between runs.
#[derive(Debug, Default)]
pub struct ContactBook {
    contacts: BTreeMap<String, String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new contact. An existing name is left untouched.
    pub fn add(&mut self, name: &str, phone: &str) -> AddOutcome {
        if self.contacts.contains_key(name) {
            return AddOutcome::Duplicate;
        }
        self.contacts.insert(name.to_string(), phone.to_string());
        AddOutcome::Added
    }

    /// Replaces the phone of an existing contact and returns the previous one.
    pub fn change(&mut self, name: &str, phone: &str) -> Result<String, AppError> {
        let stored = self
            .contacts
            .get_mut(name)
            .ok_or_else(|| AppError::NotFound(name.to_string()))?;

        Ok(std::mem::replace(stored, phone.to_string()))
    }

    pub fn phone(&self, name: &str) -> Result<&str, AppError> {
        self.contacts
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| AppError::NotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.contacts
            .iter()
            .map(|(name, phone)| (name.as_str(), phone.as_str()))
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
