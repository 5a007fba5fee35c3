use serde::{Deserialize, Serialize};

use crate::common::{CommonFields, Event, ResourceKind};
use crate::services::ResourceRecord;

/// Create/update payload for a domain. Update takes the handle from the
/// path and replaces the stored object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainCommand {
    pub handle: Option<String>,
    pub ldh_name: Option<String>,
    pub unicode_name: Option<String>,
    #[serde(rename = "type")]
    pub domain_type: Option<String>,
    pub lang: Option<String>,
    pub port43: Option<String>,
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub secure_dns: Vec<SecureDns>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Alternate name form of the domain, e.g. an IDN variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub ldh_name: Option<String>,
    pub unicode_name: Option<String>,
    pub idn_table: Option<String>,
}

/// DNSSEC signing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureDns {
    pub zone_signed: Option<bool>,
    pub delegation_signed: Option<bool>,
    pub max_sig_life: Option<i64>,
    #[serde(default)]
    pub ds_data: Vec<DsData>,
}

/// Delegation-signer datum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DsData {
    pub key_tag: Option<i64>,
    pub algorithm: Option<i64>,
    pub digest: Option<String>,
    pub digest_type: Option<i64>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl CommonFields for DomainCommand {
    const RESOURCE: ResourceKind = ResourceKind::Domain;

    fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }

    fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    fn port43(&self) -> Option<&str> {
        self.port43.as_deref()
    }

    fn status(&self) -> &[String] {
        &self.status
    }

    fn events(&self) -> &[Event] {
        &self.events
    }

    fn search_name(&self) -> Option<&str> {
        self.ldh_name.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct DomainSearchParams {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSearchResponse {
    pub domain_search_results: Vec<ResourceRecord>,
}
