use super::models::{NameserverCommand, NameserverSearchParams, NameserverSearchResponse};
use crate::common::extractors::JsonBody;
use crate::common::{ApiError, AppState, ResourceKind};
use crate::dispatch::Operation;
use crate::pipeline;
use crate::search::models::NameserverSearch;
use crate::services::SearchColumn;
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::net::IpAddr;
use std::sync::Arc;

/// POST /rdap/nameservers - Create a nameserver
pub async fn create_nameserver(
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(command): JsonBody<NameserverCommand>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.clone();
    let operation = Operation::CreateNameserver(command.clone());

    let record = pipeline::process(&state.admission, &state.registry, operation, |_| async move {
        store.create(&command).await
    })
    .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /rdap/nameservers/:handle - Replace a nameserver
pub async fn update_nameserver(
    Extension(state): Extension<Arc<AppState>>,
    Path(handle): Path<String>,
    JsonBody(mut command): JsonBody<NameserverCommand>,
) -> Result<impl IntoResponse, ApiError> {
    command.handle = Some(handle);
    let store = state.store.clone();
    let operation = Operation::UpdateNameserver(command.clone());

    let record = pipeline::process(&state.admission, &state.registry, operation, |_| async move {
        store.update(&command).await
    })
    .await?;

    Ok(Json(record))
}

/// GET /rdap/nameservers?name= | ?ip= - Search nameservers
pub async fn search_nameservers(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<NameserverSearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let search = NameserverSearch::from_params(params)?;

    let store = state.store.clone();
    let limit = state.limits.search_result_limit;
    let operation = Operation::SearchNameserver(search.clone());

    let results = pipeline::process(&state.admission, &state.registry, operation, |_| async move {
        match search {
            NameserverSearch::Name(name) => {
                let term = name.trim().trim_end_matches('.');
                store
                    .search(ResourceKind::Nameserver, SearchColumn::Name, term, limit)
                    .await
            }
            NameserverSearch::Ip(ip) => {
                let ip = ip.trim();
                let canonical = ip
                    .parse::<IpAddr>()
                    .map(|addr| addr.to_string())
                    .unwrap_or_else(|_| ip.to_string());
                store.search_nameservers_by_ip(&canonical, limit).await
            }
        }
    })
    .await?;

    Ok(Json(NameserverSearchResponse {
        nameserver_search_results: results,
    }))
}
