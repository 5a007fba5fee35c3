// src/common/migrations.rs
//! Database schema management

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

use super::resource::ResourceKind;

const RESOURCES: [ResourceKind; 3] = [
    ResourceKind::Domain,
    ResourceKind::Entity,
    ResourceKind::Nameserver,
];

/// Create the resource tables, dropping them first when `RESET_DB=true`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let should_reset_db = env::var("RESET_DB").unwrap_or_else(|_| "false".to_string()) == "true";

    if should_reset_db {
        warn!("RESET_DB=true - dropping resource tables");
        drop_resource_tables(pool).await?;
    }

    create_resource_tables(pool).await?;
    create_indexes(pool).await?;

    info!("Database migration completed");
    Ok(())
}

async fn drop_resource_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for resource in RESOURCES {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", resource.table()))
            .execute(pool)
            .await?;
    }
    Ok(())
}

/// Every resource shares one layout: the handle, a searchable name, the
/// nameserver address list (empty elsewhere) and the full JSON object.
async fn create_resource_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for resource in RESOURCES {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                handle TEXT PRIMARY KEY,
                name TEXT,
                ip_addresses TEXT NOT NULL DEFAULT '',
                body TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
            resource.table()
        ))
        .execute(pool)
        .await?;
    }
    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for resource in RESOURCES {
        let table = resource.table();
        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_name ON {table}(name)"
        ))
        .execute(pool)
        .await?;
    }
    Ok(())
}
