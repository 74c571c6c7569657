use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sheetshop_catalog::{
    render_error_page, render_filtered, render_page, retain_known_category, HtmlGridRenderer,
    PageContext,
};
use sheetshop_core::ProductQuery;

use super::AppState;

/// `GET /` - the storefront page, filtered by the `q`, `category` and `sort`
/// query parameters.
pub(super) async fn storefront(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Response {
    let title = state.config.store_title.as_str();

    let Some(catalog) = state.store.snapshot().await else {
        return (StatusCode::SERVICE_UNAVAILABLE, Html(render_error_page(title))).into_response();
    };

    let query = retain_known_category(&query, &catalog.categories);
    let mut renderer = HtmlGridRenderer::new(state.config.image_base.as_str());
    let result_count = render_filtered(&mut renderer, &catalog.products, &query);

    tracing::debug!(
        q = query.q.as_deref().unwrap_or(""),
        category = query.category.as_deref().unwrap_or(""),
        sort = %query.sort,
        result_count,
        "rendered storefront"
    );

    Html(render_page(&PageContext {
        title,
        query: &query,
        categories: &catalog.categories,
        grid_html: renderer.html(),
        result_count,
    }))
    .into_response()
}
