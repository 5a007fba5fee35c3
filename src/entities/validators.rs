// src/entities/validators.rs

use async_trait::async_trait;

use super::models::*;
use crate::common::enums::EntityRole;
use crate::common::rules::{check_enum_values, check_not_empty_and_max_length};
use crate::common::{ApiError, BaseValidator, HandleMode, ValidationResult, Validator};
use crate::dispatch::{Operation, OperationKind};

pub struct EntityValidator {
    base: BaseValidator,
}

impl EntityValidator {
    pub const KINDS: &'static [OperationKind] =
        &[OperationKind::CreateEntity, OperationKind::UpdateEntity];

    pub fn new(base: BaseValidator) -> Self {
        Self { base }
    }

    async fn validate_command(
        &self,
        command: &EntityCommand,
        mode: HandleMode,
        result: &mut ValidationResult,
    ) -> Result<(), ApiError> {
        self.base
            .validate_common_fields(command, mode, result)
            .await?;

        check_not_empty_and_max_length(
            command.full_name.as_deref(),
            self.base.limits.entity_name_max_length,
            "fn",
            result,
        );
        check_enum_values::<EntityRole>(&command.roles, "roles", result);

        Ok(())
    }
}

#[async_trait]
impl Validator for EntityValidator {
    fn supported_kinds(&self) -> &'static [OperationKind] {
        Self::KINDS
    }

    async fn validate(
        &self,
        operation: &Operation,
        result: &mut ValidationResult,
    ) -> Result<(), ApiError> {
        match operation {
            Operation::CreateEntity(command) => {
                self.validate_command(command, HandleMode::Create, result)
                    .await
            }
            Operation::UpdateEntity(command) => {
                self.validate_command(command, HandleMode::Update, result)
                    .await
            }
            other => Err(ApiError::ContractViolation(format!(
                "entity validator cannot handle {:?}",
                other.kind()
            ))),
        }
    }
}
