// Handle-existence port consumed by the create/update validators

use async_trait::async_trait;

use super::error::ApiError;
use super::resource::ResourceKind;

/// Answers whether a handle is already registered for a resource kind.
///
/// Implemented by `services::store::ResourceStore` in production and by an
/// in-memory fake in tests.
#[async_trait]
pub trait HandleLookup: Send + Sync {
    async fn exists(&self, resource: ResourceKind, handle: &str) -> Result<bool, ApiError>;
}
