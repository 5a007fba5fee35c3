// Checks shared by every create/update command.
//
// Resource validators hold a `BaseValidator` and call into it rather than
// inheriting from a common parent.

use std::sync::Arc;

use super::config::ValidationLimits;
use super::enums::Status;
use super::error::ApiError;
use super::events::{validate_events, Event};
use super::lookup::HandleLookup;
use super::resource::ResourceKind;
use super::rules::{
    check_enum_values, check_handle_exist_for_update, check_handle_not_exist_for_create,
    check_max_length, check_not_empty_and_max_length,
};
use super::validation::ValidationResult;

/// Fields every provisioning command carries.
pub trait CommonFields {
    const RESOURCE: ResourceKind;

    fn handle(&self) -> Option<&str>;
    fn lang(&self) -> Option<&str>;
    fn port43(&self) -> Option<&str>;
    fn status(&self) -> &[String];
    fn events(&self) -> &[Event];

    /// Value indexed for name searches.
    fn search_name(&self) -> Option<&str>;

    fn ip_addresses(&self) -> Vec<String> {
        Vec::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleMode {
    /// The handle must not be registered yet.
    Create,
    /// The handle must already be registered.
    Update,
}

#[derive(Clone)]
pub struct BaseValidator {
    pub limits: Arc<ValidationLimits>,
    handles: Arc<dyn HandleLookup>,
}

impl BaseValidator {
    pub fn new(limits: Arc<ValidationLimits>, handles: Arc<dyn HandleLookup>) -> Self {
        Self { limits, handles }
    }

    /// Handle, handle registration state, lang, port43, status values and
    /// top-level events.
    pub async fn validate_common_fields<C>(
        &self,
        command: &C,
        mode: HandleMode,
        result: &mut ValidationResult,
    ) -> Result<(), ApiError>
    where
        C: CommonFields + Sync,
    {
        let handle = command.handle();
        check_not_empty_and_max_length(handle, self.limits.handle_max_length, "handle", result);

        match mode {
            HandleMode::Create => {
                check_handle_not_exist_for_create(
                    self.handles.as_ref(),
                    C::RESOURCE,
                    handle,
                    "handle",
                    result,
                )
                .await?;
            }
            HandleMode::Update => {
                check_handle_exist_for_update(
                    self.handles.as_ref(),
                    C::RESOURCE,
                    handle,
                    "handle",
                    result,
                )
                .await?;
            }
        }

        check_max_length(command.lang(), self.limits.lang_max_length, "lang", result);
        check_max_length(command.port43(), self.limits.port43_max_length, "port43", result);
        check_enum_values::<Status>(command.status(), "status", result);
        self.validate_events(command.events(), "", result);

        Ok(())
    }

    pub fn validate_events(&self, events: &[Event], prefix: &str, result: &mut ValidationResult) {
        validate_events(events, prefix, &self.limits, result);
    }
}
