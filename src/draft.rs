//! The add-record form draft and the field validation rules shared with
//! inline editing.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::{GenderOptions, NewRecord};

/// An editable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Gender,
    Age,
}

impl Field {
    /// Fields in form and table column order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Gender, Field::Age];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Gender => "Gender",
            Field::Age => "Age",
        }
    }

    /// Key used in CSV headers and config files.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Gender => "gender",
            Field::Age => "age",
        }
    }

    pub fn next(&self) -> Field {
        match self {
            Field::Name => Field::Gender,
            Field::Gender => Field::Age,
            Field::Age => Field::Name,
        }
    }

    pub fn prev(&self) -> Field {
        match self {
            Field::Name => Field::Age,
            Field::Gender => Field::Name,
            Field::Age => Field::Gender,
        }
    }
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Gender is required")]
    GenderRequired,
    #[error("Valid age is required")]
    InvalidAge,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NameRequired => Field::Name,
            ValidationError::GenderRequired => Field::Gender,
            ValidationError::InvalidAge => Field::Age,
        }
    }
}

/// Validation errors keyed by the field they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: ValidationError) {
        self.0.insert(error.field(), error);
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Field, &ValidationError)> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.values().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Trimmed name, rejecting blank input.
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(name.to_string())
}

/// A gender value must be one of the configured options.
pub fn validate_gender(raw: &str, options: &GenderOptions) -> Result<String, ValidationError> {
    let gender = raw.trim();
    if gender.is_empty() || !options.contains(gender) {
        return Err(ValidationError::GenderRequired);
    }
    Ok(gender.to_string())
}

/// Ages are whole numbers of at least one year.
pub fn validate_age(raw: &str) -> Result<u32, ValidationError> {
    match raw.trim().parse::<u32>() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(ValidationError::InvalidAge),
    }
}

/// Pending values of the add-record form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    name: String,
    gender: String,
    age: String,
    errors: FieldErrors,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Gender => &self.gender,
            Field::Age => &self.age,
        }
    }

    /// Replace a field's text. Editing a field clears its error.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Gender => self.gender = value,
            Field::Age => self.age = value,
        }
        self.errors.clear(field);
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Check every field, collecting all failures rather than stopping at
    /// the first one.
    pub fn validate(&self, genders: &GenderOptions) -> Result<NewRecord, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = validate_name(&self.name).map_err(|e| errors.insert(e)).ok();
        let gender = validate_gender(&self.gender, genders)
            .map_err(|e| errors.insert(e))
            .ok();
        let age = validate_age(&self.age).map_err(|e| errors.insert(e)).ok();

        match (name, gender, age) {
            (Some(name), Some(gender), Some(age)) => Ok(NewRecord { name, gender, age }),
            _ => Err(errors),
        }
    }

    /// Empty every field and drop all errors.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.gender.is_empty() && self.age.is_empty()
    }
}
