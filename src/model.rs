//! Roster data model: records, their identifiers, and the gender choice set.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, immutable record identifier.
///
/// Backed by a UUIDv7 so identifiers are unique and sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identifier for a record being created now.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    /// Stored as the option value (e.g. `female`), never the display label.
    pub gender: String,
    pub age: u32,
}

impl Record {
    pub fn from_new(id: RecordId, new: NewRecord) -> Self {
        Self {
            id,
            name: new.name,
            gender: new.gender,
            age: new.age,
        }
    }
}

/// Validated field values that have not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub gender: String,
    pub age: u32,
}

/// A selectable gender value and the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderOption {
    pub value: String,
    #[serde(default)]
    pub label: String,
}

impl GenderOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Ordered set of gender options offered by the form and the inline editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderOptions {
    options: Vec<GenderOption>,
}

impl Default for GenderOptions {
    fn default() -> Self {
        Self {
            options: vec![
                GenderOption::new("male", "Male"),
                GenderOption::new("female", "Female"),
            ],
        }
    }
}

impl GenderOptions {
    /// Build an option set. Blank values and duplicate values are dropped,
    /// keeping the first occurrence.
    pub fn new(options: Vec<GenderOption>) -> Self {
        let mut kept: Vec<GenderOption> = Vec::with_capacity(options.len());
        for option in options {
            let value = option.value.trim();
            if value.is_empty() || kept.iter().any(|o| o.value == value) {
                continue;
            }
            let label = if option.label.trim().is_empty() {
                value.to_string()
            } else {
                option.label
            };
            kept.push(GenderOption::new(value, label));
        }
        Self { options: kept }
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenderOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Display label for a stored value, falling back to the value itself.
    pub fn label_for<'a>(&'a self, value: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
            .unwrap_or(value)
    }

    /// The option after `current`, wrapping around. An empty or unknown
    /// current value selects the first option.
    pub fn next_after(&self, current: &str) -> &str {
        match self.position(current) {
            Some(i) => &self.options[(i + 1) % self.options.len()].value,
            None => self.options.first().map(|o| o.value.as_str()).unwrap_or(""),
        }
    }

    /// The option before `current`, wrapping around. An empty or unknown
    /// current value selects the last option.
    pub fn prev_before(&self, current: &str) -> &str {
        match self.position(current) {
            Some(0) | None => self.options.last().map(|o| o.value.as_str()).unwrap_or(""),
            Some(i) => &self.options[i - 1].value,
        }
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }
}
