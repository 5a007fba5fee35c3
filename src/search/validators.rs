// src/search/validators.rs

use async_trait::async_trait;
use regex::Regex;
use std::net::IpAddr;
use std::sync::{Arc, OnceLock};

use super::models::*;
use crate::common::rules::{check_max_length, check_pattern};
use crate::common::{ApiError, ErrorCode, ValidationLimits, ValidationResult, Validator};
use crate::dispatch::{Operation, OperationKind};

// ============================================================================
// Term patterns
// ============================================================================

fn name_term_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\p{L}\p{N}\-.*]+$").expect("valid name pattern"))
}

fn handle_term_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.\-*]+$").expect("valid handle pattern"))
}

fn free_text_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\p{Cc}]+$").expect("valid free text pattern"))
}

// ============================================================================
// Search Validator
// ============================================================================

/// Validates every search kind. A term is first checked for syntax
/// (`MalformedQuery`), then for whether its wildcard use is permitted
/// (`UnprocessableSearchPattern`).
pub struct SearchValidator {
    limits: Arc<ValidationLimits>,
}

impl SearchValidator {
    pub const KINDS: &'static [OperationKind] = &[
        OperationKind::SearchDomainByName,
        OperationKind::SearchEntityByHandle,
        OperationKind::SearchEntityByName,
        OperationKind::SearchNameserverByName,
        OperationKind::SearchNameserverByIp,
    ];

    pub fn new(limits: Arc<ValidationLimits>) -> Self {
        Self { limits }
    }

    /// Shared syntax gate. Returns false once the term is known malformed.
    fn check_term(
        &self,
        term: &str,
        pattern: &Regex,
        field: &str,
        result: &mut ValidationResult,
    ) -> bool {
        // a missing term is a malformed query, not a missing field
        if term.is_empty() {
            result.add_error(ErrorCode::MalformedQuery, field);
            return false;
        }
        check_max_length(Some(term), self.limits.search_term_max_length, field, result)
            && check_pattern(Some(term), pattern, ErrorCode::MalformedQuery, field, result)
    }

    /// Domain-style names: dot-separated labels, wildcard only at the end
    /// of a non-top-level label.
    fn validate_name(&self, term: &str, field: &str, result: &mut ValidationResult) {
        let term = term.trim();
        if !self.check_term(term, name_term_pattern(), field, result) {
            return;
        }

        let term = term.strip_suffix('.').unwrap_or(term);
        let labels: Vec<&str> = term.split('.').collect();
        if labels.iter().any(|label| label.is_empty()) {
            result.add_error(ErrorCode::MalformedQuery, field);
            return;
        }

        if term.matches('*').count() > 1 {
            result.add_error(ErrorCode::UnprocessableSearchPattern, field);
            return;
        }
        let Some(position) = labels.iter().position(|label| label.contains('*')) else {
            return;
        };
        let label = labels[position];
        let is_top_level = labels.len() > 1 && position == labels.len() - 1;
        if is_top_level || !self.is_trailing_wildcard(label) {
            result.add_error(ErrorCode::UnprocessableSearchPattern, field);
        }
    }

    /// Handles and formatted names: a single trailing wildcard at most.
    fn validate_flat(
        &self,
        term: &str,
        pattern: &Regex,
        field: &str,
        result: &mut ValidationResult,
    ) {
        let term = term.trim();
        if !self.check_term(term, pattern, field, result) {
            return;
        }
        if term.contains('*') && !self.is_trailing_wildcard(term) {
            result.add_error(ErrorCode::UnprocessableSearchPattern, field);
        }
    }

    fn validate_ip(&self, term: &str, result: &mut ValidationResult) {
        let term = term.trim();
        if term.is_empty() {
            result.add_error(ErrorCode::MalformedQuery, "ip");
            return;
        }
        if term.contains('*') {
            result.add_error(ErrorCode::UnprocessableSearchPattern, "ip");
            return;
        }
        if term.parse::<IpAddr>().is_err() {
            result.add_error(ErrorCode::MalformedQuery, "ip");
        }
    }

    /// Exactly one `*`, at the end, after at least the configured prefix.
    fn is_trailing_wildcard(&self, text: &str) -> bool {
        match text.strip_suffix('*') {
            Some(prefix) => {
                !prefix.contains('*') && prefix.chars().count() >= self.limits.min_search_prefix
            }
            None => false,
        }
    }
}

#[async_trait]
impl Validator for SearchValidator {
    fn supported_kinds(&self) -> &'static [OperationKind] {
        Self::KINDS
    }

    async fn validate(
        &self,
        operation: &Operation,
        result: &mut ValidationResult,
    ) -> Result<(), ApiError> {
        match operation {
            Operation::SearchDomain(DomainSearch { name }) => {
                self.validate_name(name, "name", result)
            }
            Operation::SearchNameserver(NameserverSearch::Name(name)) => {
                self.validate_name(name, "name", result)
            }
            Operation::SearchNameserver(NameserverSearch::Ip(ip)) => self.validate_ip(ip, result),
            Operation::SearchEntity(EntitySearch::Handle(handle)) => {
                self.validate_flat(handle, handle_term_pattern(), "handle", result)
            }
            Operation::SearchEntity(EntitySearch::Name(name)) => {
                self.validate_flat(name, free_text_pattern(), "fn", result)
            }
            other => {
                return Err(ApiError::ContractViolation(format!(
                    "search validator cannot handle {:?}",
                    other.kind()
                )))
            }
        }
        Ok(())
    }
}
