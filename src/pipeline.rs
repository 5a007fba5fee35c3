// src/pipeline.rs
//! Request lifecycle: admit, validate, execute, release.
//!
//! Admission comes first so a throttled request costs no validation work
//! and never reaches the handle store. The permit lives for the whole
//! call, so the slot is returned on every exit path: success, validation
//! failure, execution failure, panic, or the caller dropping the future.

use std::future::Future;
use std::sync::Arc;
use tracing::warn;

use crate::common::ApiError;
use crate::dispatch::{Operation, ValidatorRegistry};
use crate::services::AdmissionController;

pub async fn process<T, F, Fut>(
    admission: &Arc<AdmissionController>,
    registry: &ValidatorRegistry,
    operation: Operation,
    execute: F,
) -> Result<T, ApiError>
where
    F: FnOnce(Operation) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let Some(_permit) = admission.admit() else {
        warn!(
            kind = ?operation.kind(),
            in_flight = admission.in_flight(),
            max_concurrent = admission.max_concurrent(),
            "Request rejected by admission controller"
        );
        return Err(ApiError::TooManyConcurrentRequests);
    };

    let result = registry.validate(&operation).await?;
    if result.has_error() {
        return Err(result.into_api_error(operation.resource()));
    }

    execute(operation).await
}
