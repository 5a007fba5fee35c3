//! # Domains Module
//!
//! Domain provisioning (create, replace) and name search. Validation covers
//! variants, secure-DNS records and their delegation-signer data.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::domains_routes;
