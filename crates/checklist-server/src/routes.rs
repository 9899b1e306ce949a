use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use checklist_core::{AppError, ItemStore};

use crate::dto::{
    GreetingResponse, HealthResponse, ItemPayload, ItemResponse, ListItemsQuery, MessageResponse,
};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router over any [`ItemStore`].
pub fn router<S: ItemStore>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health::<S>))
        .route("/items", get(list_items::<S>).post(create_item::<S>))
        .route(
            "/items/{id}",
            get(get_item::<S>)
                .put(update_item::<S>)
                .delete(delete_item::<S>),
        )
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Root & health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Static greeting", body = GreetingResponse),
    ),
    tag = "system"
)]
pub async fn root() -> Json<GreetingResponse> {
    Json(GreetingResponse { hello: "World" })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health<S: ItemStore>(State(state): State<Arc<AppState<S>>>) -> impl IntoResponse {
    let healthy = match state.store.health_check().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Health check failed: {e}");
            false
        }
    };

    let (status, response) = if healthy {
        (
            StatusCode::OK,
            HealthResponse {
                status: "healthy",
                database: "ok",
            },
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            HealthResponse {
                status: "unhealthy",
                database: "error",
            },
        )
    };

    (status, Json(response))
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/items",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item created", body = ItemResponse),
        (status = 422, description = "Malformed payload", body = crate::dto::ErrorResponse),
    ),
    tag = "items"
)]
pub async fn create_item<S: ItemStore>(
    State(state): State<Arc<AppState<S>>>,
    ApiJson(body): ApiJson<ItemPayload>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.store.create(&body.into_new_item()).await?;
    tracing::info!(id = item.id, "item created");

    Ok(Json(item.into()))
}

#[utoipa::path(
    get,
    path = "/items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "Up to `limit` items", body = [ItemResponse]),
        (status = 422, description = "Invalid limit", body = crate::dto::ErrorResponse),
    ),
    tag = "items"
)]
pub async fn list_items<S: ItemStore>(
    State(state): State<Arc<AppState<S>>>,
    ApiQuery(query): ApiQuery<ListItemsQuery>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.store.list(query.limit()).await?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item details", body = ItemResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "items"
)]
pub async fn get_item<S: ItemStore>(
    State(state): State<Arc<AppState<S>>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.store.get(id).await?.ok_or_else(|| not_found(id))?;

    Ok(Json(item.into()))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Updated item", body = ItemResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
        (status = 422, description = "Malformed payload", body = crate::dto::ErrorResponse),
    ),
    tag = "items"
)]
pub async fn update_item<S: ItemStore>(
    State(state): State<Arc<AppState<S>>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<ItemPayload>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state
        .store
        .update(id, &body.into_changes())
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, is_done = item.is_done, "item updated");

    Ok(Json(item.into()))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "items"
)]
pub async fn delete_item<S: ItemStore>(
    State(state): State<Arc<AppState<S>>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "item deleted");

    Ok(Json(MessageResponse {
        message: format!("Item: {id} delete successfully."),
    }))
}

fn not_found(id: i32) -> ApiError {
    tracing::debug!(id, "item not found");
    ApiError(AppError::NotFound(id))
}
