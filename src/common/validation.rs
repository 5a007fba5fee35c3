// Common validation types and traits

use async_trait::async_trait;
use serde::Serialize;

use super::error::{ApiError, ValidationFailure};
use super::resource::ResourceKind;
use crate::dispatch::{Operation, OperationKind};

/// Closed set of validation failure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    RequiredFieldMissing,
    FieldTooLong,
    NumericOutOfRange,
    InvalidFormat,
    UnrecognizedEnumValue,
    HandleAlreadyExists,
    HandleNotFound,
    MalformedQuery,
    UnprocessableSearchPattern,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub code: ErrorCode,
    /// Dotted path for nested fields, e.g. `secureDns.maxSigLife`.
    pub field: String,
}

/// Ordered accumulator of every violation found for one request.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add_error(&mut self, code: ErrorCode, field: &str) {
        self.errors.push(ValidationError {
            code,
            field: field.to_string(),
        });
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_error_on(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    #[cfg(test)]
    pub fn count(&self, code: ErrorCode, field: &str) -> usize {
        self.errors
            .iter()
            .filter(|e| e.code == code && e.field == field)
            .count()
    }

    #[cfg(test)]
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Turns a failed result into the transport error for `resource`.
    ///
    /// The first recorded error decides status and top-level code; the
    /// body still lists every error in insertion order.
    pub fn into_api_error(self, resource: ResourceKind) -> ApiError {
        match self.errors.first() {
            Some(first) => {
                let (status, code) = first.code.transport_status(resource, &first.field);
                ApiError::Validation(ValidationFailure {
                    status,
                    code,
                    errors: self.errors,
                })
            }
            None => ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            ),
        }
    }
}

/// A resource validator. Which operation kinds it handles is an explicit
/// membership test, checked by the registry before `validate` runs.
#[async_trait]
pub trait Validator: Send + Sync {
    fn supported_kinds(&self) -> &'static [OperationKind];

    fn supports(&self, kind: OperationKind) -> bool {
        self.supported_kinds().contains(&kind)
    }

    /// Appends every violation to `result`. An `Err` means the validator
    /// could not do its job at all (store failure, wrong operation shape).
    async fn validate(
        &self,
        operation: &Operation,
        result: &mut ValidationResult,
    ) -> Result<(), ApiError>;
}
