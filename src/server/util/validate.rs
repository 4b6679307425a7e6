//! Field validation helpers used by the param constructors.
//!
//! Each check records a [`FieldError`](crate::server::error::validation::FieldError)
//! instead of returning early, so a single response lists every rejected field.

use std::ops::RangeInclusive;

use crate::server::error::validation::ValidationErrors;

#[derive(Debug, Default)]
pub struct FieldValidator {
    errors: ValidationErrors,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires a non-blank string whose character count lies within `len`.
    ///
    /// Returns the value, or an empty string when it was absent.
    pub fn text(
        &mut self,
        field: &'static str,
        label: &str,
        value: Option<String>,
        len: RangeInclusive<usize>,
    ) -> String {
        let value = match value {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                self.errors.push(field, format!("{} is mandatory", label));
                return String::new();
            }
        };

        let count = value.chars().count();
        if !len.contains(&count) {
            self.errors.push(
                field,
                format!(
                    "{} must be between {} and {} characters",
                    label,
                    len.start(),
                    len.end()
                ),
            );
        }

        value
    }

    /// Like [`text`](Self::text), additionally rejecting digits and whitespace.
    pub fn name_part(
        &mut self,
        field: &'static str,
        label: &str,
        value: Option<String>,
        len: RangeInclusive<usize>,
    ) -> String {
        let value = self.text(field, label, value, len);

        if value
            .chars()
            .any(|c| c.is_ascii_digit() || c.is_whitespace())
        {
            self.errors.push(
                field,
                format!("{} must not contain digits or whitespace", label),
            );
        }

        value
    }

    /// Requires a value to be present.
    pub fn required<T>(&mut self, field: &'static str, label: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.errors.push(field, format!("{} is mandatory", label));
        }
        value
    }

    /// Requires a syntactically valid email address.
    pub fn email(&mut self, field: &'static str, value: Option<String>) -> String {
        let value = self.text(field, "Email", value, 3..=254);

        if !value.is_empty() && !is_valid_email(&value) {
            self.errors.push(field, "Email is not valid");
        }

        value
    }

    /// Records a custom failure for `field`.
    pub fn reject(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(field, message);
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        self.errors.into_result()
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
