use axum::{
	Json, Router,
	extract::{Path, Query, State, rejection::QueryRejection},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::{Deserialize, Serialize};

use atlas_domain::{Record, RecordKind, TaskKind};
use atlas_service::{Error as ServiceError, HybridResults, SearchHit};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/search", get(search))
		.route("/v1/search/hybrid", get(search_hybrid))
		.route("/v1/tasks", get(tasks))
		.route("/v1/data-artifacts", get(data_artifacts))
		.route("/v1/constraints", get(constraints))
		.route("/v1/touchpoints", get(touchpoints))
		.route("/v1/records/{kind}/{id}", get(record))
		.with_state(state)
}

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
	#[serde(default)]
	q: String,
	limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct TaskParams {
	#[serde(default)]
	q: String,
	kind: Option<String>,
}

#[derive(Debug, Serialize)]
struct ItemsResponse {
	items: Vec<SearchHit>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } => {
				json_error(StatusCode::BAD_REQUEST, "invalid_request", message)
			},
			ServiceError::NotFound { message } => {
				json_error(StatusCode::NOT_FOUND, "not_found", message)
			},
			ServiceError::Catalog { message } => {
				tracing::error!(error = %message, "Catalog error.");

				json_error(StatusCode::INTERNAL_SERVER_ERROR, "catalog_error", message)
			},
			ServiceError::Provider { message } => {
				tracing::error!(error = %message, "Provider error.");

				json_error(StatusCode::BAD_GATEWAY, "provider_error", message)
			},
		}
	}
}

impl From<QueryRejection> for ApiError {
	fn from(err: QueryRejection) -> Self {
		json_error(StatusCode::BAD_REQUEST, "invalid_request", err.body_text())
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}

pub fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
	ApiError::new(status, code, message)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search(
	State(state): State<AppState>,
	params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<ItemsResponse>, ApiError> {
	let Query(params) = params?;
	let items = state.service.search_all(&params.q, params.limit);

	Ok(Json(ItemsResponse { items }))
}

async fn search_hybrid(
	State(state): State<AppState>,
	params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<HybridResults>, ApiError> {
	let Query(params) = params?;
	let results = state.service.search_hybrid(&params.q, params.limit).await;

	Ok(Json(results))
}

async fn tasks(
	State(state): State<AppState>,
	params: Result<Query<TaskParams>, QueryRejection>,
) -> Result<Json<ItemsResponse>, ApiError> {
	let Query(params) = params?;
	let kind = params
		.kind
		.as_deref()
		.filter(|raw| !raw.trim().is_empty())
		.map(str::parse::<TaskKind>)
		.transpose()
		.map_err(ServiceError::from)?;
	let items = state.service.search_tasks(&params.q, kind);

	Ok(Json(ItemsResponse { items }))
}

async fn data_artifacts(
	State(state): State<AppState>,
	params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<ItemsResponse>, ApiError> {
	search_kind(&state, RecordKind::DataArtifact, params)
}

async fn constraints(
	State(state): State<AppState>,
	params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<ItemsResponse>, ApiError> {
	search_kind(&state, RecordKind::Constraint, params)
}

async fn touchpoints(
	State(state): State<AppState>,
	params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<ItemsResponse>, ApiError> {
	search_kind(&state, RecordKind::Touchpoint, params)
}

async fn record(
	State(state): State<AppState>,
	Path((kind, id)): Path<(String, String)>,
) -> Result<Json<Record>, ApiError> {
	let kind = kind.parse::<RecordKind>().map_err(ServiceError::from)?;
	let record = state.service.record(kind, &id)?;

	Ok(Json(record.clone()))
}

fn search_kind(
	state: &AppState,
	kind: RecordKind,
	params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<ItemsResponse>, ApiError> {
	let Query(params) = params?;
	let items = state.service.search_kind(kind, &params.q);

	Ok(Json(ItemsResponse { items }))
}
