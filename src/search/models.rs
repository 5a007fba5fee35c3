// Search queries, one per resource, keyed by what the client searched on.

use crate::common::ApiError;
use crate::entities::models::EntitySearchParams;
use crate::nameservers::models::NameserverSearchParams;

#[derive(Debug, Clone)]
pub struct DomainSearch {
    pub name: String,
}

#[derive(Debug, Clone)]
pub enum EntitySearch {
    Handle(String),
    /// Search on the formatted name (`fn`).
    Name(String),
}

impl EntitySearch {
    /// Exactly one key may be given. With none, the empty handle term is
    /// left for the search validator to report as malformed.
    pub fn from_params(params: EntitySearchParams) -> Result<Self, ApiError> {
        match (params.handle, params.full_name) {
            (Some(_), Some(_)) => Err(ApiError::BadRequest(
                "Specify exactly one of handle or fn".to_string(),
            )),
            (Some(handle), None) => Ok(EntitySearch::Handle(handle)),
            (None, Some(name)) => Ok(EntitySearch::Name(name)),
            (None, None) => Ok(EntitySearch::Handle(String::new())),
        }
    }
}

#[derive(Debug, Clone)]
pub enum NameserverSearch {
    Name(String),
    Ip(String),
}

impl NameserverSearch {
    pub fn from_params(params: NameserverSearchParams) -> Result<Self, ApiError> {
        match (params.name, params.ip) {
            (Some(_), Some(_)) => Err(ApiError::BadRequest(
                "Specify exactly one of name or ip".to_string(),
            )),
            (Some(name), None) => Ok(NameserverSearch::Name(name)),
            (None, Some(ip)) => Ok(NameserverSearch::Ip(ip)),
            (None, None) => Ok(NameserverSearch::Name(String::new())),
        }
    }
}
