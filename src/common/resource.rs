// Resource kinds served by the registry

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Domain,
    Entity,
    Nameserver,
}

impl ResourceKind {
    /// Prefix for resource-specific error codes, e.g. `DOMAIN_HANDLE_EXISTS`.
    pub fn code_prefix(&self) -> &'static str {
        match self {
            ResourceKind::Domain => "DOMAIN",
            ResourceKind::Entity => "ENTITY",
            ResourceKind::Nameserver => "NAMESERVER",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            ResourceKind::Domain => "domains",
            ResourceKind::Entity => "entities",
            ResourceKind::Nameserver => "nameservers",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Domain => write!(f, "domain"),
            ResourceKind::Entity => write!(f, "entity"),
            ResourceKind::Nameserver => write!(f, "nameserver"),
        }
    }
}
