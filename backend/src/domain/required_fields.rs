//! Collects blank required inputs so a request reports all of them at once.

use serde_json::json;

use super::{EmailValidationError, Error};

/// Message returned for any request with blank required fields.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// One or more required fields were blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", .fields.join(", "))]
pub struct MissingFieldsError {
    fields: Vec<&'static str>,
}

impl MissingFieldsError {
    pub(crate) fn single(field: &'static str) -> Self {
        Self {
            fields: vec![field],
        }
    }

    /// Names of the blank fields, in request order.
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }
}

impl From<EmailValidationError> for MissingFieldsError {
    fn from(value: EmailValidationError) -> Self {
        match value {
            EmailValidationError::Empty => Self::single("email"),
        }
    }
}

impl From<MissingFieldsError> for Error {
    fn from(value: MissingFieldsError) -> Self {
        Error::invalid_request(MISSING_FIELDS_MESSAGE).with_details(json!({
            "fields": value.fields,
        }))
    }
}

/// Accumulator used by request constructors.
#[derive(Debug, Default)]
pub(crate) struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Trim `value`, recording `name` when the result is empty.
    pub(crate) fn text(&mut self, name: &'static str, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.missing.push(name);
        }
        trimmed.to_owned()
    }

    /// Pass `value` through, recording `name` when it is absent.
    pub(crate) fn present<T>(&mut self, name: &'static str, value: Option<T>) -> Option<T> {
        self.require(name, value.is_some());
        value
    }

    /// Record `name` when `present` is false.
    pub(crate) fn require(&mut self, name: &'static str, present: bool) {
        if !present {
            self.missing.push(name);
        }
    }

    pub(crate) fn finish(self) -> Result<(), MissingFieldsError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(MissingFieldsError {
                fields: self.missing,
            })
        }
    }
}
