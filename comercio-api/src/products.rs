use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::info;

use crate::companies::DeleteResponse;
use crate::error::AppError;
use crate::state::AppState;
use comercio_core::product::{Product, ProductFields, ProductView};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/getProducts", get(get_products))
        .route("/postProducts", post(post_product))
        .route("/putProducts/{id}", put(put_product))
        .route("/deleteProducts/{id}", delete(delete_product))
}

/// Listing returns the denormalized view, with the owning company's name
/// on each row.
async fn get_products(State(state): State<AppState>) -> Result<Json<Vec<ProductView>>, AppError> {
    let products = state
        .products
        .list_products()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(products))
}

async fn post_product(
    State(state): State<AppState>,
    Json(fields): Json<ProductFields>,
) -> Result<Json<Product>, AppError> {
    let product = state
        .products
        .create_product(&fields)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    info!(id = product.id, "Created product");
    Ok(Json(product))
}

/// Full-field replacement, price triple included. Responds with JSON
/// `null` when the id does not exist.
async fn put_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(fields): Json<ProductFields>,
) -> Result<Json<Option<Product>>, AppError> {
    let product = state
        .products
        .update_product(id, &fields)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(product))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state
        .products
        .delete_product(id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(DeleteResponse { deleted }))
}
