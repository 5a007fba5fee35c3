// Event lists shared by every resource and by delegation-signer data

use serde::{Deserialize, Serialize};

use super::config::ValidationLimits;
use super::enums::{CanonicalName, EventAction};
use super::rules::{check_max_length, check_not_empty, check_rfc3339};
use super::validation::{ErrorCode, ValidationResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_action: Option<String>,
    pub event_actor: Option<String>,
    pub event_date: Option<String>,
}

/// Validates every event; `prefix` is the dotted path of the owner
/// (empty for top-level events).
pub fn validate_events(
    events: &[Event],
    prefix: &str,
    limits: &ValidationLimits,
    result: &mut ValidationResult,
) {
    if events.is_empty() {
        return;
    }

    let base = if prefix.is_empty() {
        "events".to_string()
    } else {
        format!("{prefix}.events")
    };
    let action_field = format!("{base}.eventAction");
    let date_field = format!("{base}.eventDate");
    let actor_field = format!("{base}.eventActor");

    for event in events {
        let action = event.event_action.as_deref();
        // per element: sibling events share one path
        if check_not_empty(action, &action_field, result)
            && action.and_then(EventAction::from_canonical_name).is_none()
        {
            result.add_error(ErrorCode::UnrecognizedEnumValue, &action_field);
        }

        let date = event.event_date.as_deref();
        if check_not_empty(date, &date_field, result) {
            check_rfc3339(date, &date_field, result);
        }

        check_max_length(
            event.event_actor.as_deref(),
            limits.event_actor_max_length,
            &actor_field,
            result,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(action: &str, date: &str) -> Event {
        Event {
            event_action: Some(action.to_string()),
            event_actor: None,
            event_date: Some(date.to_string()),
        }
    }

    #[test]
    fn test_valid_events() {
        let mut result = ValidationResult::new();
        validate_events(
            &[
                event("registration", "2024-01-01T00:00:00Z"),
                event("last changed", "2024-06-01T12:30:00+02:00"),
            ],
            "",
            &ValidationLimits::default(),
            &mut result,
        );
        assert!(!result.has_error(), "{:?}", result.errors());
    }

    #[test]
    fn test_every_bad_event_is_reported() {
        let mut result = ValidationResult::new();
        validate_events(
            &[
                event("born", "2024-01-01T00:00:00Z"),
                event("renamed", "yesterday"),
                Event::default(),
            ],
            "secureDns.dsData",
            &ValidationLimits::default(),
            &mut result,
        );

        let action = "secureDns.dsData.events.eventAction";
        let date = "secureDns.dsData.events.eventDate";
        assert_eq!(result.count(ErrorCode::UnrecognizedEnumValue, action), 2);
        assert_eq!(result.count(ErrorCode::InvalidFormat, date), 1);
        assert_eq!(result.count(ErrorCode::RequiredFieldMissing, action), 1);
        assert_eq!(result.count(ErrorCode::RequiredFieldMissing, date), 1);
    }

    #[test]
    fn test_actor_too_long() {
        let limits = ValidationLimits {
            event_actor_max_length: 3,
            ..ValidationLimits::default()
        };
        let mut result = ValidationResult::new();
        validate_events(
            &[Event {
                event_actor: Some("registrar".to_string()),
                ..event("transfer", "2024-01-01T00:00:00Z")
            }],
            "",
            &limits,
            &mut result,
        );
        assert_eq!(result.count(ErrorCode::FieldTooLong, "events.eventActor"), 1);
    }
}
