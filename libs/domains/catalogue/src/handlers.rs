//! HTTP handlers for the provider catalogue API.
//!
//! The resource layer: parses route and body parameters, runs the
//! accumulating validation, delegates to the [`CatalogueItemStore`] and maps
//! outcomes onto HTTP responses. Holds no state of its own.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, put},
};
use axum_helpers::FieldErrors;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{CatalogueError, CatalogueResult};
use crate::models::{CatalogueItem, CatalogueItemUpdate, NewCatalogueItem};
use crate::store::CatalogueItemStore;

/// OpenAPI documentation for the catalogue API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_catalogue_items,
        get_catalogue_item,
        create_catalogue_item,
        update_catalogue_item,
        delete_catalogue_item,
    ),
    components(schemas(CatalogueItem, NewCatalogueItem, CatalogueItemUpdate)),
    tags(
        (name = "CatalogueItems", description = "Provider catalogue endpoints")
    )
)]
pub struct ApiDoc;

const NAME_EMPTY: &str = "the catalogue item name must not be empty";
const NAME_TAKEN: &str = "a catalogue item with the same name already exists for this provider";
const IDENTIFIER_MISMATCH: &str = "request body identifier does not match the route identifier";

/// Create the catalogue router with all HTTP endpoints
pub fn router<S: CatalogueItemStore + 'static>(store: S) -> Router {
    let shared_store = Arc::new(store);

    Router::new()
        .route(
            "/providers/{provider_id}/menu",
            get(list_catalogue_items).post(create_catalogue_item),
        )
        .route(
            "/providers/{provider_id}/menu/{item_id}",
            get(get_catalogue_item),
        )
        .route(
            "/items/{id}",
            put(update_catalogue_item).delete(delete_catalogue_item),
        )
        .with_state(shared_store)
}

/// List all catalogue items of a provider
#[utoipa::path(
    get,
    path = "/providers/{provider_id}/menu",
    tag = "CatalogueItems",
    params(
        ("provider_id" = i64, Path, description = "Provider ID")
    ),
    responses(
        (status = 200, description = "Items of the provider, possibly empty", body = Vec<CatalogueItem>),
        (status = 500, description = "Unexpected failure")
    )
)]
async fn list_catalogue_items<S: CatalogueItemStore>(
    State(store): State<Arc<S>>,
    Path(provider_id): Path<i64>,
) -> CatalogueResult<Json<Vec<CatalogueItem>>> {
    let items = store.list_by_provider(provider_id).await?;
    Ok(Json(items))
}

/// Get a single catalogue item of a provider
#[utoipa::path(
    get,
    path = "/providers/{provider_id}/menu/{item_id}",
    tag = "CatalogueItems",
    params(
        ("provider_id" = i64, Path, description = "Provider ID"),
        ("item_id" = i64, Path, description = "Catalogue item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = CatalogueItem),
        (status = 404, description = "No such item under this provider"),
        (status = 500, description = "Unexpected failure")
    )
)]
async fn get_catalogue_item<S: CatalogueItemStore>(
    State(store): State<Arc<S>>,
    Path((provider_id, item_id)): Path<(i64, i64)>,
) -> CatalogueResult<Json<CatalogueItem>> {
    let item = store
        .list_by_provider(provider_id)
        .await?
        .into_iter()
        .find(|item| item.id == item_id)
        .ok_or(CatalogueError::NotFound)?;

    Ok(Json(item))
}

/// Create a new catalogue item
///
/// Every validation violation is collected before responding, so a single
/// 400 carries all of them. The effective provider comes from the payload,
/// resolved through the store; the route segment is not consulted.
#[utoipa::path(
    post,
    path = "/providers/{provider_id}/menu",
    tag = "CatalogueItems",
    params(
        ("provider_id" = i64, Path, description = "Provider ID")
    ),
    request_body = NewCatalogueItem,
    responses(
        (status = 201, description = "Item created; Location references the item", body = CatalogueItem),
        (status = 400, description = "Validation failed, field-to-messages object"),
        (status = 500, description = "Unexpected failure")
    )
)]
async fn create_catalogue_item<S: CatalogueItemStore>(
    State(store): State<Arc<S>>,
    Path(_provider_id): Path<i64>,
    Json(input): Json<NewCatalogueItem>,
) -> CatalogueResult<impl IntoResponse> {
    let mut errors = FieldErrors::new();

    if input.name.is_empty() {
        errors.add("name", NAME_EMPTY);
    }

    let provider_id = store.resolve_provider_id(&input).await?;
    if store
        .exists_by_name_and_provider(&input.name, provider_id)
        .await?
    {
        errors.add("name", NAME_TAKEN);
    }

    if !errors.is_empty() {
        return Err(CatalogueError::Validation(errors));
    }

    let item_id = store.create(input).await?;
    if item_id == 0 {
        return Err(CatalogueError::Internal(
            "store reported a no-op create".to_string(),
        ));
    }

    let item = store.get_by_id(item_id).await?.ok_or_else(|| {
        CatalogueError::Internal(format!("created item {} could not be fetched", item_id))
    })?;

    let location = format!("/providers/{}/menu/{}", provider_id, item_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item),
    ))
}

/// Replace an existing catalogue item
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "CatalogueItems",
    params(
        ("id" = i64, Path, description = "Catalogue item ID")
    ),
    request_body = CatalogueItemUpdate,
    responses(
        (status = 204, description = "Item replaced"),
        (status = 400, description = "Body identifier does not match the route"),
        (status = 404, description = "No such item"),
        (status = 500, description = "Unexpected failure")
    )
)]
async fn update_catalogue_item<S: CatalogueItemStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<i64>,
    Json(update): Json<CatalogueItemUpdate>,
) -> CatalogueResult<impl IntoResponse> {
    let mut errors = FieldErrors::new();

    if update.id != id {
        errors.add("identifier", IDENTIFIER_MISMATCH);
    }

    // The identifier check wins over existence: a mismatched body is 400
    // even when the route id is unknown.
    if !errors.is_empty() {
        return Err(CatalogueError::Validation(errors));
    }

    if store.get_by_id(id).await?.is_none() {
        return Err(CatalogueError::NotFound);
    }

    store.update(update).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a catalogue item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "CatalogueItems",
    params(
        ("id" = i64, Path, description = "Catalogue item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "No such item"),
        (status = 500, description = "Unexpected failure")
    )
)]
async fn delete_catalogue_item<S: CatalogueItemStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<i64>,
) -> CatalogueResult<impl IntoResponse> {
    if store.get_by_id(id).await?.is_none() {
        return Err(CatalogueError::NotFound);
    }

    store.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MockCatalogueItemStore;
    use axum::body::Body;
    use axum::http::Request;
    use axum_helpers::errors::messages::GENERIC_FAILURE;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn body_string(body: Body) -> String {
        let bytes = body.collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_item(provider_id: i64, name: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/providers/{}/menu", provider_id))
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({"provider_id": provider_id, "name": name}).to_string(),
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn create_maps_zero_sentinel_to_500_with_generic_body() {
        let mut store = MockCatalogueItemStore::new();
        store.expect_resolve_provider_id().returning(|_| Ok(1));
        store
            .expect_exists_by_name_and_provider()
            .returning(|_, _| Ok(false));
        store.expect_create().returning(|_| Ok(0));
        // The re-fetch must never happen for a no-op create.
        store.expect_get_by_id().times(0);

        let app = router(store);
        let response = app.oneshot(post_item(1, "soup")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response.into_body()).await, GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn create_maps_missing_refetch_to_500() {
        let mut store = MockCatalogueItemStore::new();
        store.expect_resolve_provider_id().returning(|_| Ok(1));
        store
            .expect_exists_by_name_and_provider()
            .returning(|_, _| Ok(false));
        store.expect_create().returning(|_| Ok(5));
        store.expect_get_by_id().returning(|_| Ok(None));

        let app = router(store);
        let response = app.oneshot(post_item(1, "soup")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response.into_body()).await, GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn create_resolves_provider_even_when_name_is_empty() {
        // The duplicate check still runs against the resolved provider, so
        // a store fault during resolution is a 500 even for invalid input.
        let mut store = MockCatalogueItemStore::new();
        store
            .expect_resolve_provider_id()
            .returning(|_| Err(StoreError::Backend("connection reset".to_string())));

        let app = router(store);
        let response = app.oneshot(post_item(1, "")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response.into_body()).await, GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn update_of_unknown_item_never_reaches_the_store_update() {
        let mut store = MockCatalogueItemStore::new();
        store.expect_get_by_id().returning(|_| Ok(None));
        store.expect_update().times(0);

        let app = router(store);
        let request = Request::builder()
            .method("PUT")
            .uri("/items/9")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({"id": 9, "name": "soup"}).to_string(),
            ))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_of_unknown_item_never_reaches_the_store_delete() {
        let mut store = MockCatalogueItemStore::new();
        store.expect_get_by_id().returning(|_| Ok(None));
        store.expect_delete().times(0);

        let app = router(store);
        let request = Request::builder()
            .method("DELETE")
            .uri("/items/9")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
