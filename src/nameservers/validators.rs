// src/nameservers/validators.rs

use async_trait::async_trait;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::models::*;
use crate::common::rules::{check_max_length, check_not_empty_and_max_length};
use crate::common::{
    ApiError, BaseValidator, ErrorCode, HandleMode, ValidationResult, Validator,
};
use crate::dispatch::{Operation, OperationKind};

pub struct NameserverValidator {
    base: BaseValidator,
}

impl NameserverValidator {
    pub const KINDS: &'static [OperationKind] = &[
        OperationKind::CreateNameserver,
        OperationKind::UpdateNameserver,
    ];

    pub fn new(base: BaseValidator) -> Self {
        Self { base }
    }

    async fn validate_command(
        &self,
        command: &NameserverCommand,
        mode: HandleMode,
        result: &mut ValidationResult,
    ) -> Result<(), ApiError> {
        let limits = &self.base.limits;

        self.base
            .validate_common_fields(command, mode, result)
            .await?;

        check_not_empty_and_max_length(
            command.ldh_name.as_deref(),
            limits.ldh_name_max_length,
            "ldhName",
            result,
        );
        check_max_length(
            command.unicode_name.as_deref(),
            limits.unicode_name_max_length,
            "unicodeName",
            result,
        );

        if let Some(ips) = &command.ip_addresses {
            check_addresses::<Ipv4Addr>(&ips.v4, "ipAddresses.v4", result);
            check_addresses::<Ipv6Addr>(&ips.v6, "ipAddresses.v6", result);
        }

        Ok(())
    }
}

/// One `InvalidFormat` per entry that is not an address of family `A`.
fn check_addresses<A: FromStr>(addresses: &[String], field: &str, result: &mut ValidationResult) {
    for address in addresses {
        if address.trim().parse::<A>().is_err() {
            result.add_error(ErrorCode::InvalidFormat, field);
        }
    }
}

#[async_trait]
impl Validator for NameserverValidator {
    fn supported_kinds(&self) -> &'static [OperationKind] {
        Self::KINDS
    }

    async fn validate(
        &self,
        operation: &Operation,
        result: &mut ValidationResult,
    ) -> Result<(), ApiError> {
        match operation {
            Operation::CreateNameserver(command) => {
                self.validate_command(command, HandleMode::Create, result)
                    .await
            }
            Operation::UpdateNameserver(command) => {
                self.validate_command(command, HandleMode::Update, result)
                    .await
            }
            other => Err(ApiError::ContractViolation(format!(
                "nameserver validator cannot handle {:?}",
                other.kind()
            ))),
        }
    }
}
