use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::common::{CommonFields, Event, ResourceKind};
use crate::services::ResourceRecord;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameserverCommand {
    pub handle: Option<String>,
    pub ldh_name: Option<String>,
    pub unicode_name: Option<String>,
    pub ip_addresses: Option<IpAddresses>,
    pub lang: Option<String>,
    pub port43: Option<String>,
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IpAddresses {
    #[serde(default)]
    pub v4: Vec<String>,
    #[serde(default)]
    pub v6: Vec<String>,
}

impl CommonFields for NameserverCommand {
    const RESOURCE: ResourceKind = ResourceKind::Nameserver;

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

    /// Canonical text form, so `2001:DB8::1` and `2001:db8::1` match.
    fn ip_addresses(&self) -> Vec<String> {
        self.ip_addresses
            .iter()
            .flat_map(|ips| ips.v4.iter().chain(ips.v6.iter()))
            .map(|raw| {
                raw.trim()
                    .parse::<IpAddr>()
                    .map(|ip| ip.to_string())
                    .unwrap_or_else(|_| raw.trim().to_string())
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct NameserverSearchParams {
    pub name: Option<String>,
    pub ip: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameserverSearchResponse {
    pub nameserver_search_results: Vec<ResourceRecord>,
}
