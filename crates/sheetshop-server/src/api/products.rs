use axum::{
    extract::{Query, State},
    Extension, Json,
};
use sheetshop_catalog::{apply_filters, retain_known_category};
use sheetshop_core::{ProductQuery, ProductRow};

use crate::middleware::RequestId;

use super::{catalog_unavailable, ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ApiResponse<Vec<ProductRow>>>, ApiError> {
    let catalog = state
        .store
        .snapshot()
        .await
        .ok_or_else(|| catalog_unavailable(req_id.0.clone()))?;

    Ok(Json(ApiResponse {
        data: apply_filters(
            &catalog.products,
            &retain_known_category(&query, &catalog.categories),
        ),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    let catalog = state
        .store
        .snapshot()
        .await
        .ok_or_else(|| catalog_unavailable(req_id.0.clone()))?;

    Ok(Json(ApiResponse {
        data: catalog.categories.clone(),
        meta: ResponseMeta::new(req_id.0),
    }))
}
