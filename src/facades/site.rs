use minijinja::context;
use poem::web::{Data, Html, Query};
use poem::{IntoResponse, handler, http::StatusCode};
use tracing::error;

use crate::catalog::{CatalogStore, select_by_category, select_popular};
use crate::models::common::CategoryQuery;
use crate::render::ViewRenderer;
use crate::utils::common;

const DEFAULT_CATEGORY: &str = "Main";

#[handler]
pub async fn home(
    store: Data<&CatalogStore>,
    views: Data<&ViewRenderer>,
) -> poem::Result<impl IntoResponse> {
    let items = store.load().await.map_err(|e| {
        error!("Failed to load catalog: {}", e);
        common::error_message(StatusCode::INTERNAL_SERVER_ERROR, "Menu is unavailable")
    })?;

    let popular = select_popular(items);
    let page = views
        .render("home", context! { popular => popular })
        .map_err(|e| {
            error!("Failed to render home: {}", e);
            common::error_message(StatusCode::INTERNAL_SERVER_ERROR, "Menu is unavailable")
        })?;

    Ok(Html(page))
}

#[handler]
pub async fn menu(
    store: Data<&CatalogStore>,
    views: Data<&ViewRenderer>,
    Query(query): Query<CategoryQuery>,
) -> poem::Result<impl IntoResponse> {
    // Default substitution happens here, never inside the filter.
    let cat = query
        .category
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let items = store.load().await.map_err(|e| {
        error!("Failed to load catalog: {}", e);
        common::error_message(StatusCode::INTERNAL_SERVER_ERROR, "Menu is unavailable")
    })?;

    let dishes = select_by_category(items, &cat);
    let page = views
        .render("menu", context! { dishes => dishes, cat => cat })
        .map_err(|e| {
            error!("Failed to render menu: {}", e);
            common::error_message(StatusCode::INTERNAL_SERVER_ERROR, "Menu is unavailable")
        })?;

    Ok(Html(page))
}

// Same filtering as `menu` for now; the cart view carries no cart state of
// its own.
#[handler]
pub async fn cart(
    store: Data<&CatalogStore>,
    views: Data<&ViewRenderer>,
    Query(query): Query<CategoryQuery>,
) -> poem::Result<impl IntoResponse> {
    let cat = query
        .category
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let items = store.load().await.map_err(|e| {
        error!("Failed to load catalog: {}", e);
        common::error_message(StatusCode::INTERNAL_SERVER_ERROR, "Menu is unavailable")
    })?;

    let dishes = select_by_category(items, &cat);
    let page = views
        .render("cart", context! { dishes => dishes, cat => cat })
        .map_err(|e| {
            error!("Failed to render cart: {}", e);
            common::error_message(StatusCode::INTERNAL_SERVER_ERROR, "Menu is unavailable")
        })?;

    Ok(Html(page))
}
