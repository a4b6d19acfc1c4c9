use derive_more::{AsRef, Display};

use crate::ValidationError;

/// Title of an exercise. Surrounding whitespace is stripped, casing is
/// preserved.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Title(String);

impl Title {
    pub fn new(title: &str) -> Result<Self, ValidationError> {
        let trimmed_title = title.trim();

        if trimmed_title.is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }

        Ok(Title(trimmed_title.to_string()))
    }
}
