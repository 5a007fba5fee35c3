use super::models::{EntityCommand, EntitySearchParams, EntitySearchResponse};
use crate::common::extractors::JsonBody;
use crate::common::{ApiError, AppState, ResourceKind};
use crate::dispatch::Operation;
use crate::pipeline;
use crate::search::models::EntitySearch;
use crate::services::SearchColumn;
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// POST /rdap/entities - Create an entity
pub async fn create_entity(
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(command): JsonBody<EntityCommand>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.clone();
    let operation = Operation::CreateEntity(command.clone());

    let record = pipeline::process(&state.admission, &state.registry, operation, |_| async move {
        store.create(&command).await
    })
    .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /rdap/entities/:handle - Replace an entity
pub async fn update_entity(
    Extension(state): Extension<Arc<AppState>>,
    Path(handle): Path<String>,
    JsonBody(mut command): JsonBody<EntityCommand>,
) -> Result<impl IntoResponse, ApiError> {
    command.handle = Some(handle);
    let store = state.store.clone();
    let operation = Operation::UpdateEntity(command.clone());

    let record = pipeline::process(&state.admission, &state.registry, operation, |_| async move {
        store.update(&command).await
    })
    .await?;

    Ok(Json(record))
}

/// GET /rdap/entities?handle= | ?fn= - Search entities
pub async fn search_entities(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<EntitySearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let search = EntitySearch::from_params(params)?;

    let (column, term) = match &search {
        EntitySearch::Handle(term) => (SearchColumn::Handle, term.trim().to_string()),
        EntitySearch::Name(term) => (SearchColumn::Name, term.trim().to_string()),
    };
    let store = state.store.clone();
    let limit = state.limits.search_result_limit;

    let results = pipeline::process(
        &state.admission,
        &state.registry,
        Operation::SearchEntity(search),
        |_| async move {
            store
                .search(ResourceKind::Entity, column, &term, limit)
                .await
        },
    )
    .await?;

    Ok(Json(EntitySearchResponse {
        entity_search_results: results,
    }))
}
