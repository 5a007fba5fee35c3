use super::models::{DomainCommand, DomainSearchParams, DomainSearchResponse};
use crate::common::extractors::JsonBody;
use crate::common::{ApiError, AppState, ResourceKind};
use crate::dispatch::Operation;
use crate::pipeline;
use crate::search::models::DomainSearch;
use crate::services::SearchColumn;
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

// ============================================================================
// Domain Handlers
// ============================================================================

/// POST /rdap/domains - Create a domain
pub async fn create_domain(
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(command): JsonBody<DomainCommand>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.clone();
    let operation = Operation::CreateDomain(command.clone());

    let record = pipeline::process(&state.admission, &state.registry, operation, |_| async move {
        store.create(&command).await
    })
    .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /rdap/domains/:handle - Replace a domain
pub async fn update_domain(
    Extension(state): Extension<Arc<AppState>>,
    Path(handle): Path<String>,
    JsonBody(mut command): JsonBody<DomainCommand>,
) -> Result<impl IntoResponse, ApiError> {
    command.handle = Some(handle);
    let store = state.store.clone();
    let operation = Operation::UpdateDomain(command.clone());

    let record = pipeline::process(&state.admission, &state.registry, operation, |_| async move {
        store.update(&command).await
    })
    .await?;

    Ok(Json(record))
}

/// GET /rdap/domains?name= - Search domains by name
pub async fn search_domains(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<DomainSearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let name = params.name.unwrap_or_default();
    let store = state.store.clone();
    let limit = state.limits.search_result_limit;
    let operation = Operation::SearchDomain(DomainSearch { name: name.clone() });

    let results = pipeline::process(&state.admission, &state.registry, operation, |_| async move {
        let term = name.trim().trim_end_matches('.');
        store
            .search(ResourceKind::Domain, SearchColumn::Name, term, limit)
            .await
    })
    .await?;

    Ok(Json(DomainSearchResponse {
        domain_search_results: results,
    }))
}
