//! # Entities Module
//!
//! Contacts and organisations: provisioning and search by handle or
//! formatted name.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use routes::entities_routes;
