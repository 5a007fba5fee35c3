// Reusable field checks composed by every validator.
//
// Each check appends at most one error to the shared result and reports
// whether the value passed. None of them stop the caller from running
// further checks.

use chrono::DateTime;
use regex::Regex;

use super::config::IntRange;
use super::enums::CanonicalName;
use super::error::ApiError;
use super::lookup::HandleLookup;
use super::resource::ResourceKind;
use super::validation::{ErrorCode, ValidationResult};

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

pub fn check_not_empty(value: Option<&str>, field: &str, result: &mut ValidationResult) -> bool {
    if is_blank(value) {
        result.add_error(ErrorCode::RequiredFieldMissing, field);
        return false;
    }
    true
}

/// Absent values pass; length is counted in characters.
pub fn check_max_length(
    value: Option<&str>,
    max: usize,
    field: &str,
    result: &mut ValidationResult,
) -> bool {
    match value {
        Some(v) if v.chars().count() > max => {
            result.add_error(ErrorCode::FieldTooLong, field);
            false
        }
        _ => true,
    }
}

pub fn check_not_empty_and_max_length(
    value: Option<&str>,
    max: usize,
    field: &str,
    result: &mut ValidationResult,
) -> bool {
    check_not_empty(value, field, result) && check_max_length(value, max, field, result)
}

/// Inclusive on both ends. Absent values pass.
pub fn check_min_max_int(
    value: Option<i64>,
    range: IntRange,
    field: &str,
    result: &mut ValidationResult,
) -> bool {
    match value {
        Some(v) if v < range.min || v > range.max => {
            result.add_error(ErrorCode::NumericOutOfRange, field);
            false
        }
        _ => true,
    }
}

/// Exact, case-sensitive match against the canonical names of `E`.
///
/// Skipped when `field` already carries an error, so an empty value
/// reported as missing is not also reported as unrecognized.
pub fn check_enum_membership<E: CanonicalName>(
    value: Option<&str>,
    field: &str,
    result: &mut ValidationResult,
) -> bool {
    if result.has_error_on(field) {
        return false;
    }
    match value {
        Some(v) if E::from_canonical_name(v).is_none() => {
            result.add_error(ErrorCode::UnrecognizedEnumValue, field);
            false
        }
        _ => true,
    }
}

/// One error per unrecognized element.
pub fn check_enum_values<E: CanonicalName>(
    values: &[String],
    field: &str,
    result: &mut ValidationResult,
) -> bool {
    let mut valid = true;
    for value in values {
        if E::from_canonical_name(value).is_none() {
            result.add_error(ErrorCode::UnrecognizedEnumValue, field);
            valid = false;
        }
    }
    valid
}

/// Absent values pass.
pub fn check_pattern(
    value: Option<&str>,
    pattern: &Regex,
    code: ErrorCode,
    field: &str,
    result: &mut ValidationResult,
) -> bool {
    match value {
        Some(v) if !pattern.is_match(v) => {
            result.add_error(code, field);
            false
        }
        _ => true,
    }
}

/// Absent values pass.
pub fn check_rfc3339(value: Option<&str>, field: &str, result: &mut ValidationResult) -> bool {
    match value {
        Some(v) if DateTime::parse_from_rfc3339(v.trim()).is_err() => {
            result.add_error(ErrorCode::InvalidFormat, field);
            false
        }
        _ => true,
    }
}

/// Fails with `HandleAlreadyExists` when the store already knows `handle`.
/// No lookup happens for a blank handle or one that already failed a check.
pub async fn check_handle_not_exist_for_create(
    lookup: &dyn HandleLookup,
    resource: ResourceKind,
    handle: Option<&str>,
    field: &str,
    result: &mut ValidationResult,
) -> Result<bool, ApiError> {
    let Some(handle) = handle.filter(|h| !h.trim().is_empty()) else {
        return Ok(true);
    };
    if result.has_error_on(field) {
        return Ok(true);
    }
    if lookup.exists(resource, handle).await? {
        result.add_error(ErrorCode::HandleAlreadyExists, field);
        return Ok(false);
    }
    Ok(true)
}

/// Fails with `HandleNotFound` when the store does not know `handle`.
pub async fn check_handle_exist_for_update(
    lookup: &dyn HandleLookup,
    resource: ResourceKind,
    handle: Option<&str>,
    field: &str,
    result: &mut ValidationResult,
) -> Result<bool, ApiError> {
    let Some(handle) = handle.filter(|h| !h.trim().is_empty()) else {
        return Ok(true);
    };
    if result.has_error_on(field) {
        return Ok(true);
    }
    if !lookup.exists(resource, handle).await? {
        result.add_error(ErrorCode::HandleNotFound, field);
        return Ok(false);
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::enums::DomainType;
    use crate::common::lookup::fake::{FailingHandles, FakeHandles};

    #[test]
    fn test_not_empty_rejects_absent_and_blank() {
        let mut result = ValidationResult::new();
        assert!(!check_not_empty(None, "handle", &mut result));
        assert!(!check_not_empty(Some("   "), "lang", &mut result));
        assert!(check_not_empty(Some("H-1"), "ldhName", &mut result));
        assert_eq!(result.errors().len(), 2);
        assert_eq!(result.count(ErrorCode::RequiredFieldMissing, "handle"), 1);
    }

    #[test]
    fn test_max_length_counts_characters() {
        let mut result = ValidationResult::new();
        // three characters, nine bytes
        assert!(check_max_length(Some("例例例"), 3, "unicodeName", &mut result));
        assert!(!check_max_length(Some("abcd"), 3, "ldhName", &mut result));
        assert!(check_max_length(None, 3, "idnTable", &mut result));
        assert_eq!(result.count(ErrorCode::FieldTooLong, "ldhName"), 1);
        assert_eq!(result.errors().len(), 1);
    }

    #[test]
    fn test_not_empty_and_max_length_reports_one_error() {
        let mut result = ValidationResult::new();
        check_not_empty_and_max_length(Some(""), 5, "handle", &mut result);
        check_not_empty_and_max_length(Some("toolong"), 5, "lang", &mut result);
        assert_eq!(result.count(ErrorCode::RequiredFieldMissing, "handle"), 1);
        assert_eq!(result.count(ErrorCode::FieldTooLong, "handle"), 0);
        assert_eq!(result.count(ErrorCode::FieldTooLong, "lang"), 1);
    }

    #[test]
    fn test_min_max_int_boundaries_pass() {
        let range = IntRange::new(-5, 10);
        let mut result = ValidationResult::new();
        assert!(check_min_max_int(Some(-5), range, "keyTag", &mut result));
        assert!(check_min_max_int(Some(10), range, "keyTag", &mut result));
        assert!(check_min_max_int(None, range, "keyTag", &mut result));
        assert!(!result.has_error());
    }

    #[test]
    fn test_min_max_int_outside_fails() {
        let range = IntRange::new(0, 65_535);
        for value in [i64::MIN, -1, 65_536, i64::MAX] {
            let mut result = ValidationResult::new();
            assert!(!check_min_max_int(Some(value), range, "keyTag", &mut result));
            assert_eq!(result.count(ErrorCode::NumericOutOfRange, "keyTag"), 1);
        }
    }

    #[test]
    fn test_enum_membership_skips_field_with_prior_error() {
        let mut result = ValidationResult::new();
        check_not_empty(Some(""), "type", &mut result);
        check_enum_membership::<DomainType>(Some(""), "type", &mut result);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].code, ErrorCode::RequiredFieldMissing);
    }

    #[test]
    fn test_enum_membership_ignores_errors_on_other_fields() {
        let mut result = ValidationResult::new();
        check_not_empty(None, "handle", &mut result);
        assert!(!check_enum_membership::<DomainType>(
            Some("idn"),
            "type",
            &mut result
        ));
        assert_eq!(result.count(ErrorCode::UnrecognizedEnumValue, "type"), 1);
    }

    #[test]
    fn test_enum_values_reports_each_bad_element() {
        let mut result = ValidationResult::new();
        let values = vec![
            "active".to_string(),
            "sleeping".to_string(),
            "Active".to_string(),
        ];
        assert!(!check_enum_values::<crate::common::enums::Status>(
            &values,
            "status",
            &mut result
        ));
        assert_eq!(result.count(ErrorCode::UnrecognizedEnumValue, "status"), 2);
    }

    #[test]
    fn test_pattern_and_date_checks() {
        let pattern = Regex::new(r"^[A-Z0-9-]+$").unwrap();
        let mut result = ValidationResult::new();
        assert!(check_pattern(
            Some("ABC-1"),
            &pattern,
            ErrorCode::InvalidFormat,
            "handle",
            &mut result
        ));
        assert!(!check_pattern(
            Some("abc 1"),
            &pattern,
            ErrorCode::InvalidFormat,
            "handle",
            &mut result
        ));
        assert!(check_rfc3339(
            Some("2024-01-01T00:00:00Z"),
            "eventDate",
            &mut result
        ));
        assert!(!check_rfc3339(Some("2024-01-01"), "eventDate", &mut result));
        assert_eq!(result.errors().len(), 2);
    }

    async fn check_create(
        handles: &FakeHandles,
        resource: ResourceKind,
        handle: &str,
        field: &str,
        result: &mut ValidationResult,
    ) {
        check_handle_not_exist_for_create(handles, resource, Some(handle), field, result)
            .await
            .unwrap();
    }

    async fn check_update(
        handles: &FakeHandles,
        resource: ResourceKind,
        handle: &str,
        result: &mut ValidationResult,
    ) {
        check_handle_exist_for_update(handles, resource, Some(handle), "handle", result)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_handle_not_exist_for_create() {
        let handles = FakeHandles::with(ResourceKind::Domain, &["D-1"]);
        let mut result = ValidationResult::new();

        check_create(&handles, ResourceKind::Domain, "D-1", "handle", &mut result).await;
        check_create(&handles, ResourceKind::Domain, "D-2", "other", &mut result).await;
        // same handle under a different resource kind is free
        check_create(&handles, ResourceKind::Entity, "D-1", "entity", &mut result).await;

        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.count(ErrorCode::HandleAlreadyExists, "handle"), 1);
    }

    #[tokio::test]
    async fn test_handle_check_is_idempotent() {
        let handles = FakeHandles::with(ResourceKind::Domain, &["D-1"]);
        for handle in ["D-1", "D-2"] {
            let mut first = ValidationResult::new();
            let mut second = ValidationResult::new();
            check_create(&handles, ResourceKind::Domain, handle, "handle", &mut first).await;
            check_create(&handles, ResourceKind::Domain, handle, "handle", &mut second).await;
            assert_eq!(first.errors(), second.errors());
        }
    }

    #[tokio::test]
    async fn test_handle_lookup_skipped_for_blank_or_failed_handle() {
        let handles = FakeHandles::new();
        let mut result = ValidationResult::new();
        check_create(&handles, ResourceKind::Domain, " ", "handle", &mut result).await;

        result.add_error(ErrorCode::FieldTooLong, "handle");
        check_update(&handles, ResourceKind::Domain, "X", &mut result).await;

        assert_eq!(handles.calls(), 0);
    }

    #[tokio::test]
    async fn test_handle_exist_for_update() {
        let handles = FakeHandles::with(ResourceKind::Nameserver, &["NS-1"]);
        let mut result = ValidationResult::new();
        check_update(&handles, ResourceKind::Nameserver, "NS-1", &mut result).await;
        assert!(!result.has_error());

        check_update(&handles, ResourceKind::Nameserver, "NS-9", &mut result).await;
        assert_eq!(result.count(ErrorCode::HandleNotFound, "handle"), 1);
    }

    #[tokio::test]
    async fn test_lookup_failure_propagates() {
        let mut result = ValidationResult::new();
        let outcome = check_handle_not_exist_for_create(
            &FailingHandles,
            ResourceKind::Domain,
            Some("D-1"),
            "handle",
            &mut result,
        )
        .await;
        assert!(outcome.is_err());
        assert!(!result.has_error());
    }
}
