// src/domains/tests.rs

use std::sync::Arc;

use super::models::*;
use super::validators::DomainValidator;
use crate::common::lookup::fake::{FailingHandles, FakeHandles};
use crate::common::{
    ApiError, BaseValidator, ErrorCode, Event, HandleLookup, ResourceKind, ValidationLimits,
    ValidationResult, Validator,
};
use crate::dispatch::Operation;
use crate::search::models::DomainSearch;

fn validator_with(handles: Arc<dyn HandleLookup>) -> DomainValidator {
    DomainValidator::new(BaseValidator::new(
        Arc::new(ValidationLimits::default()),
        handles,
    ))
}

fn validator() -> DomainValidator {
    validator_with(Arc::new(FakeHandles::new()))
}

fn valid_command() -> DomainCommand {
    DomainCommand {
        handle: Some("EXAMPLE-1".to_string()),
        ldh_name: Some("example.com".to_string()),
        domain_type: Some("ASCII".to_string()),
        status: vec!["active".to_string()],
        events: vec![Event {
            event_action: Some("registration".to_string()),
            event_actor: Some("registrar-a".to_string()),
            event_date: Some("2024-01-15T10:00:00Z".to_string()),
        }],
        ..Default::default()
    }
}

async fn validate(operation: Operation) -> ValidationResult {
    let mut result = ValidationResult::new();
    validator()
        .validate(&operation, &mut result)
        .await
        .expect("validation runs");
    result
}

#[tokio::test]
async fn test_valid_domain_has_no_errors() {
    let result = validate(Operation::CreateDomain(valid_command())).await;
    assert!(!result.has_error(), "unexpected errors: {:?}", result.errors());
}

#[tokio::test]
async fn test_empty_handle_and_bad_type_both_reported() {
    let command = DomainCommand {
        handle: Some(String::new()),
        domain_type: Some("invalid-type".to_string()),
        ..valid_command()
    };

    let result = validate(Operation::CreateDomain(command)).await;

    assert!(result.has_error());
    assert_eq!(result.count(ErrorCode::RequiredFieldMissing, "handle"), 1);
    assert_eq!(result.count(ErrorCode::UnrecognizedEnumValue, "type"), 1);
}

#[tokio::test]
async fn test_negative_max_sig_life_is_single_range_error() {
    let command = DomainCommand {
        secure_dns: vec![SecureDns {
            max_sig_life: Some(-1),
            ..Default::default()
        }],
        ..valid_command()
    };

    let result = validate(Operation::CreateDomain(command)).await;

    assert_eq!(result.errors().len(), 1);
    assert_eq!(
        result.count(ErrorCode::NumericOutOfRange, "secureDns.maxSigLife"),
        1
    );
}

#[tokio::test]
async fn test_missing_type_reports_required_only() {
    let command = DomainCommand {
        domain_type: None,
        ..valid_command()
    };

    let result = validate(Operation::CreateDomain(command)).await;

    assert_eq!(result.count(ErrorCode::RequiredFieldMissing, "type"), 1);
    assert_eq!(result.count(ErrorCode::UnrecognizedEnumValue, "type"), 0);
}

#[tokio::test]
async fn test_type_is_case_sensitive() {
    let command = DomainCommand {
        domain_type: Some("idn".to_string()),
        ..valid_command()
    };

    let result = validate(Operation::CreateDomain(command)).await;

    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.count(ErrorCode::UnrecognizedEnumValue, "type"), 1);
}

#[tokio::test]
async fn test_variant_errors_accumulate_per_element() {
    let command = DomainCommand {
        variants: vec![
            Variant {
                ldh_name: None,
                unicode_name: Some("bücher.example".to_string()),
                idn_table: None,
            },
            Variant {
                ldh_name: Some("a".repeat(256)),
                unicode_name: None,
                idn_table: Some("x".repeat(65)),
            },
        ],
        ..valid_command()
    };

    let result = validate(Operation::CreateDomain(command)).await;

    assert_eq!(
        result.count(ErrorCode::RequiredFieldMissing, "variant.ldhName"),
        1
    );
    assert_eq!(result.count(ErrorCode::FieldTooLong, "variant.ldhName"), 1);
    assert_eq!(
        result.count(ErrorCode::RequiredFieldMissing, "variant.unicodeName"),
        1
    );
    assert_eq!(result.count(ErrorCode::FieldTooLong, "variant.idnTable"), 1);
    assert_eq!(result.errors().len(), 4);
}

#[tokio::test]
async fn test_ds_data_bounds_and_nested_events() {
    let command = DomainCommand {
        secure_dns: vec![SecureDns {
            zone_signed: Some(true),
            delegation_signed: Some(true),
            max_sig_life: Some(604800),
            ds_data: vec![DsData {
                key_tag: Some(65536),
                algorithm: Some(8),
                digest: Some(String::new()),
                digest_type: Some(256),
                events: vec![Event {
                    event_action: Some("signed".to_string()),
                    event_actor: None,
                    event_date: Some("yesterday".to_string()),
                }],
            }],
        }],
        ..valid_command()
    };

    let result = validate(Operation::CreateDomain(command)).await;

    assert_eq!(
        result.count(ErrorCode::NumericOutOfRange, "secureDns.dsData.keyTag"),
        1
    );
    assert!(!result.has_error_on("secureDns.dsData.algorithm"));
    assert_eq!(
        result.count(ErrorCode::NumericOutOfRange, "secureDns.dsData.digestType"),
        1
    );
    assert_eq!(
        result.count(ErrorCode::RequiredFieldMissing, "secureDns.dsData.digest"),
        1
    );
    assert_eq!(
        result.count(
            ErrorCode::UnrecognizedEnumValue,
            "secureDns.dsData.events.eventAction"
        ),
        1
    );
    assert_eq!(
        result.count(ErrorCode::InvalidFormat, "secureDns.dsData.events.eventDate"),
        1
    );
}

#[tokio::test]
async fn test_empty_lists_are_valid() {
    let command = DomainCommand {
        status: Vec::new(),
        variants: Vec::new(),
        secure_dns: Vec::new(),
        events: Vec::new(),
        ..valid_command()
    };

    let result = validate(Operation::CreateDomain(command)).await;
    assert!(!result.has_error());
}

#[tokio::test]
async fn test_unknown_status_reported_per_value() {
    let command = DomainCommand {
        status: vec![
            "active".to_string(),
            "Active".to_string(),
            "frozen".to_string(),
        ],
        ..valid_command()
    };

    let result = validate(Operation::CreateDomain(command)).await;
    assert_eq!(result.count(ErrorCode::UnrecognizedEnumValue, "status"), 2);
}

#[tokio::test]
async fn test_create_with_taken_handle() {
    let handles = Arc::new(FakeHandles::with(ResourceKind::Domain, &["EXAMPLE-1"]));
    let validator = validator_with(handles);
    let mut result = ValidationResult::new();

    validator
        .validate(&Operation::CreateDomain(valid_command()), &mut result)
        .await
        .unwrap();

    assert_eq!(result.count(ErrorCode::HandleAlreadyExists, "handle"), 1);
}

#[tokio::test]
async fn test_update_requires_existing_handle() {
    let handles = Arc::new(FakeHandles::with(ResourceKind::Domain, &["EXAMPLE-1"]));
    let validator = validator_with(handles);

    let mut found = ValidationResult::new();
    validator
        .validate(&Operation::UpdateDomain(valid_command()), &mut found)
        .await
        .unwrap();
    assert!(!found.has_error());

    let missing = DomainCommand {
        handle: Some("EXAMPLE-2".to_string()),
        ..valid_command()
    };
    let mut result = ValidationResult::new();
    validator
        .validate(&Operation::UpdateDomain(missing), &mut result)
        .await
        .unwrap();
    assert_eq!(result.count(ErrorCode::HandleNotFound, "handle"), 1);
}

#[tokio::test]
async fn test_lookup_failure_propagates() {
    let validator = validator_with(Arc::new(FailingHandles));
    let mut result = ValidationResult::new();

    let outcome = validator
        .validate(&Operation::CreateDomain(valid_command()), &mut result)
        .await;

    assert!(matches!(outcome, Err(ApiError::InternalServer(_))));
}

#[tokio::test]
async fn test_rejects_foreign_operation() {
    let mut result = ValidationResult::new();
    let outcome = validator()
        .validate(
            &Operation::SearchDomain(DomainSearch {
                name: "example.com".to_string(),
            }),
            &mut result,
        )
        .await;

    assert!(matches!(outcome, Err(ApiError::ContractViolation(_))));
    assert!(!result.has_error());
}

#[test]
fn test_command_deserializes_wire_names() {
    let command: DomainCommand = serde_json::from_str(
        r#"{
            "handle": "EXAMPLE-1",
            "ldhName": "example.com",
            "type": "IDN",
            "secureDns": [{"maxSigLife": 10, "dsData": [{"keyTag": 1, "digestType": 2}]}]
        }"#,
    )
    .unwrap();

    assert_eq!(command.domain_type.as_deref(), Some("IDN"));
    assert_eq!(command.secure_dns[0].max_sig_life, Some(10));
    assert_eq!(command.secure_dns[0].ds_data[0].key_tag, Some(1));
    assert!(command.variants.is_empty());
}
