// Common module - shared types and utilities across all modules

pub mod base;
pub mod config;
pub mod enums;
pub mod error;
pub mod events;
pub mod extractors;
pub mod lookup;
pub mod migrations;
pub mod resource;
pub mod rules;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use base::{BaseValidator, CommonFields, HandleMode};
pub use config::{AppConfig, ValidationLimits};
pub use error::ApiError;
pub use events::Event;
pub use lookup::HandleLookup;
pub use resource::ResourceKind;
pub use state::AppState;
pub use validation::{ErrorCode, ValidationResult, Validator};
