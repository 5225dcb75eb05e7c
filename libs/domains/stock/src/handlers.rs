use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use crate::error::StockResult;
use crate::models::{CreateStockItem, StockItem, UpdateStockItem};
use crate::pagination::PageQuery;
use crate::priority::PriorityRecord;
use crate::repository::StockRepository;
use crate::service::StockService;

const STOCK_TAG: &str = "stock";
const RESTOCK_TAG: &str = "restock";

/// Response body for a successful item creation
#[derive(Debug, Serialize, ToSchema)]
pub struct StockItemCreated {
    pub id: Uuid,
}

/// OpenAPI documentation for the stock API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_stock_item,
        list_stock_items,
        get_stock_item,
        update_stock_item,
        delete_stock_item,
        list_stock_by_category,
    ),
    components(
        schemas(StockItem, CreateStockItem, UpdateStockItem, StockItemCreated),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = STOCK_TAG, description = "Stock item management endpoints")
    )
)]
pub struct StockApiDoc;

/// OpenAPI documentation for the restock API
#[derive(OpenApi)]
#[openapi(
    paths(restock_priorities),
    components(
        schemas(PriorityRecord),
        responses(InternalServerErrorResponse)
    ),
    tags(
        (name = RESTOCK_TAG, description = "Restock priority endpoints")
    )
)]
pub struct RestockApiDoc;

/// Create the stock router with all HTTP endpoints
pub fn stock_router<R: StockRepository + 'static>(service: StockService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_stock_items).post(create_stock_item))
        .route(
            "/{id}",
            get(get_stock_item)
                .put(update_stock_item)
                .delete(delete_stock_item),
        )
        .route("/category/{category}", get(list_stock_by_category))
        .with_state(shared_service)
}

/// Create the restock router
pub fn restock_router<R: StockRepository + 'static>(service: StockService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/priorities", get(restock_priorities))
        .with_state(shared_service)
}

/// Create a new stock item
#[utoipa::path(
    post,
    path = "",
    tag = STOCK_TAG,
    request_body = CreateStockItem,
    responses(
        (status = 201, description = "Stock item created successfully", body = StockItemCreated),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_stock_item<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateStockItem>,
) -> StockResult<impl IntoResponse> {
    let id = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(StockItemCreated { id })))
}

/// List stock items
#[utoipa::path(
    get,
    path = "",
    tag = STOCK_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "List of stock items", body = Vec<StockItem>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_stock_items<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
    Query(query): Query<PageQuery>,
) -> StockResult<Json<Vec<StockItem>>> {
    let items = service.list_items(query.into()).await?;
    Ok(Json(items))
}

/// Get a stock item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = STOCK_TAG,
    params(
        ("id" = Uuid, Path, description = "Stock item ID")
    ),
    responses(
        (status = 200, description = "Stock item found", body = StockItem),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_stock_item<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
    UuidPath(id): UuidPath,
) -> StockResult<Json<StockItem>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Update a stock item's operational figures
#[utoipa::path(
    put,
    path = "/{id}",
    tag = STOCK_TAG,
    params(
        ("id" = Uuid, Path, description = "Stock item ID")
    ),
    request_body = UpdateStockItem,
    responses(
        (status = 204, description = "Stock item updated successfully"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_stock_item<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateStockItem>,
) -> StockResult<impl IntoResponse> {
    service.update_item(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a stock item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = STOCK_TAG,
    params(
        ("id" = Uuid, Path, description = "Stock item ID")
    ),
    responses(
        (status = 204, description = "Stock item deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_stock_item<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
    UuidPath(id): UuidPath,
) -> StockResult<impl IntoResponse> {
    service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List stock items of one category
#[utoipa::path(
    get,
    path = "/category/{category}",
    tag = STOCK_TAG,
    params(
        ("category" = String, Path, description = "Product category (engine, oil)"),
        PageQuery
    ),
    responses(
        (status = 200, description = "List of stock items", body = Vec<StockItem>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_stock_by_category<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
    axum::extract::Path(category): axum::extract::Path<String>,
    Query(query): Query<PageQuery>,
) -> StockResult<Json<Vec<StockItem>>> {
    let items = service.list_by_category(&category, query.into()).await?;
    Ok(Json(items))
}

/// Rank the stock population by restock urgency
#[utoipa::path(
    get,
    path = "/priorities",
    tag = RESTOCK_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Ranked restock priorities", body = Vec<PriorityRecord>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn restock_priorities<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
    Query(query): Query<PageQuery>,
) -> StockResult<Json<Vec<PriorityRecord>>> {
    let records = service.restock_priorities(query.into()).await?;
    Ok(Json(records))
}
