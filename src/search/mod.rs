//! # Search Module
//!
//! Query models and the validator shared by every search endpoint. The
//! endpoints themselves live with their resource modules.

pub mod models;
pub mod validators;
