//! Upload form state — named fields, each with its own validator.
//!
//! Values are read synchronously at submit time. Validation reports every
//! failing field, in form order, so the page can show all inline errors at once.

use std::fmt;

use serde::Deserialize;

const URL_SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];

/// Raw text submitted by the upload form. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadInput {
    #[serde(default, rename = "imageSrc")]
    pub image_src: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    ImageSrc,
    Name,
    Username,
    Key,
}

impl FieldName {
    /// Form control name, as submitted.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ImageSrc => "imageSrc",
            Self::Name => "name",
            Self::Username => "username",
            Self::Key => "key",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed field check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: FieldName },
    #[error("{field} must be a URL")]
    Pattern { field: FieldName },
}

impl FieldError {
    #[must_use]
    pub fn field(&self) -> FieldName {
        match self {
            Self::Required { field } | Self::Pattern { field } => *field,
        }
    }
}

pub type Validator = fn(FieldName, &str) -> Result<(), FieldError>;

/// One named form control with its current value.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: FieldName,
    pub value: String,
    pub required: bool,
    validator: Validator,
}

impl Field {
    fn new(name: FieldName, required: bool, validator: Validator) -> Self {
        Self { name, value: String::new(), required, validator }
    }

    /// # Errors
    ///
    /// Returns the field's [`FieldError`] when its value fails the validator.
    pub fn validate(&self) -> Result<(), FieldError> {
        (self.validator)(self.name, &self.value)
    }
}

/// The four upload fields.
#[derive(Debug, Clone)]
pub struct UploadForm {
    pub image_src: Field,
    pub name: Field,
    pub username: Field,
    pub key: Field,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            image_src: Field::new(FieldName::ImageSrc, true, required_url),
            name: Field::new(FieldName::Name, false, optional),
            username: Field::new(FieldName::Username, false, optional),
            key: Field::new(FieldName::Key, true, required),
        }
    }

    #[must_use]
    pub fn from_input(input: UploadInput) -> Self {
        let mut form = Self::new();
        form.image_src.value = input.image_src;
        form.name.value = input.name;
        form.username.value = input.username;
        form.key.value = input.key;
        form
    }

    #[must_use]
    pub fn fields(&self) -> [&Field; 4] {
        [&self.image_src, &self.name, &self.username, &self.key]
    }

    /// # Errors
    ///
    /// Returns every failing field's error, in form order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = self.fields().iter().filter_map(|f| f.validate().err()).collect();
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Discard all entered values.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Loose URL shape: a known scheme, something after it, no whitespace or quotes.
#[must_use]
pub fn is_url_shaped(value: &str) -> bool {
    let Some(rest) = URL_SCHEMES.iter().find_map(|scheme| value.strip_prefix(scheme)) else {
        return false;
    };
    !rest.is_empty() && !rest.chars().any(|c| c.is_whitespace() || c == '"')
}

fn optional(_field: FieldName, _value: &str) -> Result<(), FieldError> {
    Ok(())
}

fn required(field: FieldName, value: &str) -> Result<(), FieldError> {
    if value.is_empty() { Err(FieldError::Required { field }) } else { Ok(()) }
}

fn required_url(field: FieldName, value: &str) -> Result<(), FieldError> {
    required(field, value)?;
    if is_url_shaped(value) { Ok(()) } else { Err(FieldError::Pattern { field }) }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
