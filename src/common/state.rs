// Application state shared across all modules

use std::sync::Arc;

use super::config::ValidationLimits;
use crate::dispatch::ValidatorRegistry;
use crate::services::{AdmissionController, ResourceStore};

/// Built once in `main` and handed to handlers through `Extension`.
#[derive(Clone)]
pub struct AppState {
    pub limits: Arc<ValidationLimits>,
    pub store: Arc<ResourceStore>,
    pub admission: Arc<AdmissionController>,
    pub registry: Arc<ValidatorRegistry>,
}
