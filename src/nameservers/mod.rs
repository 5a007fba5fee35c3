//! # Nameservers Module

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use routes::nameservers_routes;
