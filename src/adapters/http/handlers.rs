use super::error::ApiError;
use super::AppState;
use crate::application::accounts::{LoginResponse, RegisteredUser};
use crate::domain::jobs::{AnalyseResponse, DownloadJob, DownloadRequest};
use crate::domain::users::{LoginRequest, RegisterRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::debug;

pub async fn home() -> Json<Value> {
    Json(json!({ "Welcome": "Filta Downloader" }))
}

pub async fn analyse(
    State(state): State<AppState>,
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> Result<Json<AnalyseResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) if !request.url.trim().is_empty() => request,
        Ok(_) => return Err(invalid_analyse_body()),
        Err(rejection) => {
            debug!(error = %rejection, "rejected analyse body");
            return Err(invalid_analyse_body());
        }
    };

    let response = state.resolver.resolve_and_record(&request).await?;
    Ok(Json(response))
}

fn invalid_analyse_body() -> ApiError {
    ApiError::BadRequest("Invalid request body. Expecting JSON with 'url'".to_string())
}

pub async fn status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<DownloadJob>, ApiError> {
    state
        .resolver
        .job_status(&job_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))
}

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisteredUser>), ApiError> {
    let Json(request) = payload.map_err(|_| {
        ApiError::BadRequest(
            "Invalid request body. Expecting JSON with 'password', 'confirm_password', 'email', 'first_name', and 'last_name'"
                .to_string(),
        )
    })?;
    let user = state.accounts.register(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|_| ApiError::BadRequest("Invalid login request".to_string()))?;
    Ok(Json(state.accounts.login(request).await?))
}
