use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;
use comercio_core::company::{Company, CompanyFields};

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/getCompanies", get(get_companies))
        .route("/postCompanies", post(post_company))
        .route("/putCompanies/{id}", put(put_company))
        .route("/deleteCompanies/{id}", delete(delete_company))
}

async fn get_companies(State(state): State<AppState>) -> Result<Json<Vec<Company>>, AppError> {
    let companies = state
        .companies
        .list_companies()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(companies))
}

async fn post_company(
    State(state): State<AppState>,
    Json(fields): Json<CompanyFields>,
) -> Result<Json<Company>, AppError> {
    let company = state
        .companies
        .create_company(&fields)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    info!(id = company.id, "Created company");
    Ok(Json(company))
}

/// Full-field replacement. Responds with JSON `null` when the id does
/// not exist; callers are expected to check for it.
async fn put_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(fields): Json<CompanyFields>,
) -> Result<Json<Option<Company>>, AppError> {
    let company = state
        .companies
        .update_company(id, &fields)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(company))
}

async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state
        .companies
        .delete_company(id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    if deleted {
        info!(id, "Deleted company and its products");
    }

    Ok(Json(DeleteResponse { deleted }))
}
