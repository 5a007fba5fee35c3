// src/domains/validators.rs

use async_trait::async_trait;

use super::models::*;
use crate::common::enums::DomainType;
use crate::common::rules::{
    check_enum_membership, check_max_length, check_min_max_int, check_not_empty,
    check_not_empty_and_max_length,
};
use crate::common::{ApiError, BaseValidator, HandleMode, ValidationResult, Validator};
use crate::dispatch::{Operation, OperationKind};

// ============================================================================
// Domain Validators
// ============================================================================

pub struct DomainValidator {
    base: BaseValidator,
}

impl DomainValidator {
    pub const KINDS: &'static [OperationKind] =
        &[OperationKind::CreateDomain, OperationKind::UpdateDomain];

    pub fn new(base: BaseValidator) -> Self {
        Self { base }
    }

    async fn validate_command(
        &self,
        command: &DomainCommand,
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

        // both run; the membership check skips itself if "type" is missing
        let domain_type = command.domain_type.as_deref();
        check_not_empty(domain_type, "type", result);
        check_enum_membership::<DomainType>(domain_type, "type", result);

        self.validate_variants(&command.variants, result);
        self.validate_secure_dns(&command.secure_dns, result);

        Ok(())
    }

    fn validate_variants(&self, variants: &[Variant], result: &mut ValidationResult) {
        if variants.is_empty() {
            return;
        }
        let limits = &self.base.limits;

        for variant in variants {
            check_not_empty_and_max_length(
                variant.ldh_name.as_deref(),
                limits.ldh_name_max_length,
                "variant.ldhName",
                result,
            );
            check_not_empty_and_max_length(
                variant.unicode_name.as_deref(),
                limits.unicode_name_max_length,
                "variant.unicodeName",
                result,
            );
            check_max_length(
                variant.idn_table.as_deref(),
                limits.idn_table_max_length,
                "variant.idnTable",
                result,
            );
        }
    }

    fn validate_secure_dns(&self, records: &[SecureDns], result: &mut ValidationResult) {
        if records.is_empty() {
            return;
        }

        for record in records {
            check_min_max_int(
                record.max_sig_life,
                self.base.limits.max_sig_life,
                "secureDns.maxSigLife",
                result,
            );
            self.validate_ds_data(&record.ds_data, result);
        }
    }

    fn validate_ds_data(&self, ds_data: &[DsData], result: &mut ValidationResult) {
        if ds_data.is_empty() {
            return;
        }
        let limits = &self.base.limits;

        for ds in ds_data {
            check_min_max_int(ds.key_tag, limits.key_tag, "secureDns.dsData.keyTag", result);
            check_min_max_int(
                ds.algorithm,
                limits.algorithm,
                "secureDns.dsData.algorithm",
                result,
            );
            check_min_max_int(
                ds.digest_type,
                limits.digest_type,
                "secureDns.dsData.digestType",
                result,
            );
            check_not_empty_and_max_length(
                ds.digest.as_deref(),
                limits.digest_max_length,
                "secureDns.dsData.digest",
                result,
            );
            self.base
                .validate_events(&ds.events, "secureDns.dsData", result);
        }
    }
}

#[async_trait]
impl Validator for DomainValidator {
    fn supported_kinds(&self) -> &'static [OperationKind] {
        Self::KINDS
    }

    async fn validate(
        &self,
        operation: &Operation,
        result: &mut ValidationResult,
    ) -> Result<(), ApiError> {
        match operation {
            Operation::CreateDomain(command) => {
                self.validate_command(command, HandleMode::Create, result)
                    .await
            }
            Operation::UpdateDomain(command) => {
                self.validate_command(command, HandleMode::Update, result)
                    .await
            }
            other => Err(ApiError::ContractViolation(format!(
                "domain validator cannot handle {:?}",
                other.kind()
            ))),
        }
    }
}
