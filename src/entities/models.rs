use serde::{Deserialize, Serialize};

use crate::common::{CommonFields, Event, ResourceKind};
use crate::services::ResourceRecord;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCommand {
    pub handle: Option<String>,
    /// Formatted name of the contact.
    #[serde(rename = "fn")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub lang: Option<String>,
    pub port43: Option<String>,
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl CommonFields for EntityCommand {
    const RESOURCE: ResourceKind = ResourceKind::Entity;

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
        self.full_name.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct EntitySearchParams {
    pub handle: Option<String>,
    #[serde(rename = "fn")]
    pub full_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySearchResponse {
    pub entity_search_results: Vec<ResourceRecord>,
}
