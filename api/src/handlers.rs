use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use qa_system::{ErrorResponse, QueryParams, QueryResponse};

use crate::api_error::{internal_error, unprocessable, ApiError};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

pub async fn index(State(state): State<AppState>) -> Response {
    let path = state.index_path();
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            log::error!("Failed to read {}: {}", path.display(), e);
            internal_error()
        }
    }
}

pub async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                log::warn!("Upload request without a '{}' field", FILE_FIELD);
                return unprocessable(format!("Missing multipart field '{}'", FILE_FIELD));
            }
            Err(e) => {
                log::warn!("Failed to read multipart: {}", e);
                return (
                    e.status(),
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e.body_text()),
                    }),
                )
                    .into_response();
            }
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                log::warn!("Failed to read upload body: {}", e);
                return (
                    e.status(),
                    Json(ErrorResponse {
                        error: format!("Failed to read file: {}", e.body_text()),
                    }),
                )
                    .into_response();
            }
        };

        log::info!("Received upload {} ({} bytes)", filename, data.len());

        return match state
            .document_processor
            .analyze_upload(filename, data.to_vec())
            .await
        {
            Ok(result) => Json(result).into_response(),
            Err(e) => ApiError(e).into_response(),
        };
    }
}

pub async fn query(
    State(state): State<AppState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            log::warn!("Invalid query parameters: {}", rejection.body_text());
            return unprocessable(rejection.body_text());
        }
    };

    match state.query_service.query(&params.query, &params.content).await {
        Ok(answer) => (StatusCode::OK, Json(QueryResponse::from(answer))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}
