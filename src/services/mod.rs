// src/services/mod.rs
//
// Shared services: the admission controller and the resource store

pub mod admission;
pub mod store;

// Re-export commonly used types for convenience
pub use admission::AdmissionController;
pub use store::{ResourceRecord, ResourceStore, SearchColumn};
