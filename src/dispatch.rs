// src/dispatch.rs
//! Operation kinds and the registry that routes each one to its validator.

use std::sync::Arc;
use tracing::debug;

use crate::common::{
    ApiError, BaseValidator, HandleLookup, ResourceKind, ValidationLimits, ValidationResult,
    Validator,
};
use crate::domains::models::DomainCommand;
use crate::domains::validators::DomainValidator;
use crate::entities::models::EntityCommand;
use crate::entities::validators::EntityValidator;
use crate::nameservers::models::NameserverCommand;
use crate::nameservers::validators::NameserverValidator;
use crate::search::models::{DomainSearch, EntitySearch, NameserverSearch};
use crate::search::validators::SearchValidator;

/// Every request the pipeline accepts, already parsed from the transport.
#[derive(Debug, Clone)]
pub enum Operation {
    CreateDomain(DomainCommand),
    UpdateDomain(DomainCommand),
    CreateEntity(EntityCommand),
    UpdateEntity(EntityCommand),
    CreateNameserver(NameserverCommand),
    UpdateNameserver(NameserverCommand),
    SearchDomain(DomainSearch),
    SearchEntity(EntitySearch),
    SearchNameserver(NameserverSearch),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    CreateDomain,
    UpdateDomain,
    CreateEntity,
    UpdateEntity,
    CreateNameserver,
    UpdateNameserver,
    SearchDomainByName,
    SearchEntityByHandle,
    SearchEntityByName,
    SearchNameserverByName,
    SearchNameserverByIp,
}

#[cfg(test)]
impl OperationKind {
    pub const ALL: [OperationKind; 11] = [
        OperationKind::CreateDomain,
        OperationKind::UpdateDomain,
        OperationKind::CreateEntity,
        OperationKind::UpdateEntity,
        OperationKind::CreateNameserver,
        OperationKind::UpdateNameserver,
        OperationKind::SearchDomainByName,
        OperationKind::SearchEntityByHandle,
        OperationKind::SearchEntityByName,
        OperationKind::SearchNameserverByName,
        OperationKind::SearchNameserverByIp,
    ];
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::CreateDomain(_) => OperationKind::CreateDomain,
            Operation::UpdateDomain(_) => OperationKind::UpdateDomain,
            Operation::CreateEntity(_) => OperationKind::CreateEntity,
            Operation::UpdateEntity(_) => OperationKind::UpdateEntity,
            Operation::CreateNameserver(_) => OperationKind::CreateNameserver,
            Operation::UpdateNameserver(_) => OperationKind::UpdateNameserver,
            Operation::SearchDomain(_) => OperationKind::SearchDomainByName,
            Operation::SearchEntity(EntitySearch::Handle(_)) => {
                OperationKind::SearchEntityByHandle
            }
            Operation::SearchEntity(EntitySearch::Name(_)) => OperationKind::SearchEntityByName,
            Operation::SearchNameserver(NameserverSearch::Name(_)) => {
                OperationKind::SearchNameserverByName
            }
            Operation::SearchNameserver(NameserverSearch::Ip(_)) => {
                OperationKind::SearchNameserverByIp
            }
        }
    }

    pub fn resource(&self) -> ResourceKind {
        match self {
            Operation::CreateDomain(_)
            | Operation::UpdateDomain(_)
            | Operation::SearchDomain(_) => ResourceKind::Domain,
            Operation::CreateEntity(_)
            | Operation::UpdateEntity(_)
            | Operation::SearchEntity(_) => ResourceKind::Entity,
            Operation::CreateNameserver(_)
            | Operation::UpdateNameserver(_)
            | Operation::SearchNameserver(_) => ResourceKind::Nameserver,
        }
    }
}

/// Owns one validator per resource family. Holds no per-request state.
pub struct ValidatorRegistry {
    domains: DomainValidator,
    entities: EntityValidator,
    nameservers: NameserverValidator,
    search: SearchValidator,
}

impl ValidatorRegistry {
    pub fn new(limits: Arc<ValidationLimits>, handles: Arc<dyn HandleLookup>) -> Self {
        let base = BaseValidator::new(Arc::clone(&limits), handles);
        Self {
            domains: DomainValidator::new(base.clone()),
            entities: EntityValidator::new(base.clone()),
            nameservers: NameserverValidator::new(base),
            search: SearchValidator::new(limits),
        }
    }

    pub fn validator_for(&self, kind: OperationKind) -> &dyn Validator {
        match kind {
            OperationKind::CreateDomain | OperationKind::UpdateDomain => &self.domains,
            OperationKind::CreateEntity | OperationKind::UpdateEntity => &self.entities,
            OperationKind::CreateNameserver | OperationKind::UpdateNameserver => {
                &self.nameservers
            }
            OperationKind::SearchDomainByName
            | OperationKind::SearchEntityByHandle
            | OperationKind::SearchEntityByName
            | OperationKind::SearchNameserverByName
            | OperationKind::SearchNameserverByIp => &self.search,
        }
    }

    /// Runs the routed validator and returns every violation it found.
    pub async fn validate(&self, operation: &Operation) -> Result<ValidationResult, ApiError> {
        let kind = operation.kind();
        let validator = self.validator_for(kind);
        if !validator.supports(kind) {
            return Err(ApiError::ContractViolation(format!(
                "validator routed for {kind:?} does not support it"
            )));
        }

        let mut result = ValidationResult::new();
        validator.validate(operation, &mut result).await?;

        if result.has_error() {
            debug!(
                kind = ?kind,
                errors = result.errors().len(),
                "Validation failed"
            );
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::lookup::fake::FakeHandles;
    use crate::common::ErrorCode;

    fn registry() -> ValidatorRegistry {
        ValidatorRegistry::new(
            Arc::new(ValidationLimits::default()),
            Arc::new(FakeHandles::new()),
        )
    }

    #[test]
    fn test_every_kind_routes_to_a_supporting_validator() {
        let registry = registry();
        for kind in OperationKind::ALL {
            assert!(
                registry.validator_for(kind).supports(kind),
                "{kind:?} is routed to a validator that does not support it"
            );
        }
    }

    #[test]
    fn test_search_kinds_share_one_validator() {
        let registry = registry();
        let by_handle = registry.validator_for(OperationKind::SearchEntityByHandle);
        assert!(by_handle.supports(OperationKind::SearchEntityByName));
        assert!(!by_handle.supports(OperationKind::CreateEntity));
    }

    #[test]
    fn test_kind_and_resource_of_operations() {
        let op = Operation::SearchEntity(EntitySearch::Name("Jo*".to_string()));
        assert_eq!(op.kind(), OperationKind::SearchEntityByName);
        assert_eq!(op.resource(), ResourceKind::Entity);

        let op = Operation::SearchNameserver(NameserverSearch::Ip("192.0.2.1".to_string()));
        assert_eq!(op.kind(), OperationKind::SearchNameserverByIp);
        assert_eq!(op.resource(), ResourceKind::Nameserver);
    }

    #[tokio::test]
    async fn test_validator_rejects_foreign_operation() {
        let registry = registry();
        let domains = registry.validator_for(OperationKind::CreateDomain);
        let mut result = ValidationResult::new();
        let outcome = domains
            .validate(
                &Operation::CreateEntity(EntityCommand::default()),
                &mut result,
            )
            .await;
        assert!(matches!(outcome, Err(ApiError::ContractViolation(_))));
        assert!(!result.has_error());
    }

    #[tokio::test]
    async fn test_registry_collects_errors() {
        let registry = registry();
        let result = registry
            .validate(&Operation::CreateDomain(DomainCommand::default()))
            .await
            .unwrap();
        assert!(result.has_error());
        assert_eq!(result.count(ErrorCode::RequiredFieldMissing, "handle"), 1);
        assert_eq!(result.count(ErrorCode::RequiredFieldMissing, "ldhName"), 1);
        assert_eq!(result.count(ErrorCode::RequiredFieldMissing, "type"), 1);
    }
}
