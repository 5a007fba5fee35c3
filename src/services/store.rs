// src/services/store.rs
use async_trait::async_trait;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use tracing::{error, info};

use crate::common::{
    ApiError, CommonFields, ErrorCode, HandleLookup, ResourceKind, ValidationResult,
};

#[derive(Debug, FromRow)]
struct ResourceRow {
    handle: String,
    name: Option<String>,
    body: String,
    created_at: String,
    updated_at: String,
}

/// A stored resource as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    pub handle: String,
    pub name: Option<String>,
    pub object: serde_json::Value,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ResourceRow> for ResourceRecord {
    fn from(row: ResourceRow) -> Self {
        Self {
            handle: row.handle,
            name: row.name,
            object: serde_json::from_str(&row.body).unwrap_or(serde_json::Value::Null),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Column a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchColumn {
    Handle,
    Name,
}

impl SearchColumn {
    fn column(&self) -> &'static str {
        match self {
            SearchColumn::Handle => "handle",
            SearchColumn::Name => "name",
        }
    }
}

/// Persistence for domains, entities and nameservers. Runs only after a
/// request was admitted and validated.
#[derive(Debug, Clone)]
pub struct ResourceStore {
    db: SqlitePool,
}

impl ResourceStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn create<C>(&self, command: &C) -> Result<ResourceRecord, ApiError>
    where
        C: CommonFields + Serialize + Sync,
    {
        let resource = C::RESOURCE;
        let handle = required_handle(command)?;
        let body = serde_json::to_string(command)
            .map_err(|e| ApiError::InternalServer(format!("Failed to encode {resource}: {e}")))?;
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(&format!(
            "INSERT INTO {} (handle, name, ip_addresses, body, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            resource.table()
        ))
        .bind(handle)
        .bind(command.search_name())
        .bind(command.ip_addresses().join(","))
        .bind(&body)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                // lost a race with a concurrent create of the same handle
                let mut result = ValidationResult::new();
                result.add_error(ErrorCode::HandleAlreadyExists, "handle");
                return result.into_api_error(resource);
            }
            error!(resource = %resource, handle = %handle, error = %e, "Failed to insert resource");
            ApiError::DatabaseError(e)
        })?;

        info!(resource = %resource, handle = %handle, "Resource created");
        self.get(resource, handle).await
    }

    pub async fn update<C>(&self, command: &C) -> Result<ResourceRecord, ApiError>
    where
        C: CommonFields + Serialize + Sync,
    {
        let resource = C::RESOURCE;
        let handle = required_handle(command)?;
        let body = serde_json::to_string(command)
            .map_err(|e| ApiError::InternalServer(format!("Failed to encode {resource}: {e}")))?;
        let now = chrono::Utc::now().to_rfc3339();

        let updated = sqlx::query(&format!(
            "UPDATE {} SET name = ?, ip_addresses = ?, body = ?, updated_at = ? WHERE handle = ?",
            resource.table()
        ))
        .bind(command.search_name())
        .bind(command.ip_addresses().join(","))
        .bind(&body)
        .bind(&now)
        .bind(handle)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        if updated.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("{resource} {handle} not found")));
        }

        info!(resource = %resource, handle = %handle, "Resource updated");
        self.get(resource, handle).await
    }

    pub async fn get(
        &self,
        resource: ResourceKind,
        handle: &str,
    ) -> Result<ResourceRecord, ApiError> {
        sqlx::query_as::<_, ResourceRow>(&format!(
            "SELECT handle, name, body, created_at, updated_at FROM {} WHERE handle = ?",
            resource.table()
        ))
        .bind(handle)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .map(ResourceRecord::from)
        .ok_or_else(|| ApiError::NotFound(format!("{resource} {handle} not found")))
    }

    /// Matches a validated search term; a trailing `*` in any label becomes
    /// a wildcard.
    pub async fn search(
        &self,
        resource: ResourceKind,
        column: SearchColumn,
        term: &str,
        limit: u32,
    ) -> Result<Vec<ResourceRecord>, ApiError> {
        let rows = sqlx::query_as::<_, ResourceRow>(&format!(
            "SELECT handle, name, body, created_at, updated_at FROM {}
             WHERE {} LIKE ? ESCAPE '\\'
             ORDER BY handle ASC
             LIMIT ?",
            resource.table(),
            column.column()
        ))
        .bind(like_pattern(term))
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(rows.into_iter().map(ResourceRecord::from).collect())
    }

    pub async fn search_nameservers_by_ip(
        &self,
        ip: &str,
        limit: u32,
    ) -> Result<Vec<ResourceRecord>, ApiError> {
        let rows = sqlx::query_as::<_, ResourceRow>(
            r#"
            SELECT handle, name, body, created_at, updated_at FROM nameservers
            WHERE ',' || ip_addresses || ',' LIKE ?
            ORDER BY handle ASC
            LIMIT ?
            "#,
        )
        .bind(format!("%,{ip},%"))
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(rows.into_iter().map(ResourceRecord::from).collect())
    }
}

#[async_trait]
impl HandleLookup for ResourceStore {
    async fn exists(&self, resource: ResourceKind, handle: &str) -> Result<bool, ApiError> {
        let found: Option<i64> = sqlx::query_scalar(&format!(
            "SELECT 1 FROM {} WHERE handle = ?",
            resource.table()
        ))
        .bind(handle)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(found.is_some())
    }
}

fn required_handle<C: CommonFields>(command: &C) -> Result<&str, ApiError> {
    command
        .handle()
        .filter(|h| !h.trim().is_empty())
        .ok_or_else(|| {
            ApiError::ContractViolation(format!(
                "{} reached the store without a handle",
                C::RESOURCE
            ))
        })
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    for ch in term.chars() {
        match ch {
            '\\' | '%' | '_' => {
                pattern.push('\\');
                pattern.push(ch);
            }
            '*' => pattern.push('%'),
            _ => pattern.push(ch),
        }
    }
    pattern
}
