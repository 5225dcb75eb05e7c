//! Handler tests for the stock domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! They run against the in-memory repository, so they exercise routing,
//! extraction and the service layer without a live database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_stock::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn service() -> StockService<InMemoryStockRepository> {
    let config = PaginationConfig::new(20, 100).unwrap();
    StockService::new(InMemoryStockRepository::new(), config)
}

fn create_body(name: &str, category: &str) -> Body {
    Body::from(
        serde_json::to_string(&json!({
            "name": name,
            "category": category,
            "current_stock": 100,
            "minimum_stock": 50,
            "average_daily_sales": 5,
            "lead_time_days": 7,
            "unit_cost": 25.0,
            "criticality_level": 3
        }))
        .unwrap(),
    )
}

fn create_input(name: &str, category: &str) -> CreateStockItem {
    CreateStockItem {
        name: name.to_string(),
        category: category.to_string(),
        current_stock: 100,
        minimum_stock: 50,
        average_daily_sales: 5,
        lead_time_days: 7,
        unit_cost: 25.0,
        criticality_level: 3,
    }
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_create_stock_item_returns_201() {
    let app = handlers::stock_router(service());

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(create_body("Brake Pad", "engine"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Value = json_body(response.into_body()).await;
    assert!(created["id"].is_string());
}

#[tokio::test]
async fn test_create_stock_item_rejects_zero_unit_cost() {
    let app = handlers::stock_router(service());

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Brake Pad",
                "category": "engine",
                "current_stock": 10,
                "unit_cost": 0.0,
                "criticality_level": 3
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("unit cost must be greater than zero"));
}

#[tokio::test]
async fn test_create_stock_item_rejects_unknown_category() {
    let app = handlers::stock_router(service());

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(create_body("Brake Pad", "tires"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("invalid product category"));
}

#[tokio::test]
async fn test_get_stock_item_returns_200() {
    let service = service();
    let id = service
        .create_item(create_input("Oil Filter", "oil"))
        .await
        .unwrap();

    let app = handlers::stock_router(service);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let item: Value = json_body(response.into_body()).await;
    assert_eq!(item["name"], "Oil Filter");
    assert_eq!(item["category"], "oil");
    assert_eq!(item["current_stock"], 100);
}

#[tokio::test]
async fn test_get_stock_item_returns_404_for_missing() {
    let app = handlers::stock_router(service());

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", uuid::Uuid::now_v7()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_stock_item_rejects_malformed_uuid() {
    let app = handlers::stock_router(service());

    let request = Request::builder()
        .method("GET")
        .uri("/not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("Invalid UUID"));
}

#[tokio::test]
async fn test_update_stock_item_returns_204() {
    let service = service();
    let id = service
        .create_item(create_input("Spark Plug", "engine"))
        .await
        .unwrap();

    let app = handlers::stock_router(service.clone());

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "current_stock": 5 })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let item = service.get_item(id).await.unwrap();
    assert_eq!(item.current_stock(), 5);
    assert_eq!(item.name(), "Spark Plug");
}

#[tokio::test]
async fn test_update_stock_item_rejects_negative_figures() {
    let service = service();
    let id = service
        .create_item(create_input("Spark Plug", "engine"))
        .await
        .unwrap();

    let app = handlers::stock_router(service);

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "minimum_stock": -1 })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("numeric fields must be non-negative"));
}

#[tokio::test]
async fn test_delete_stock_item_returns_204_then_404() {
    let service = service();
    let id = service
        .create_item(create_input("Gasket", "engine"))
        .await
        .unwrap();

    let app = handlers::stock_router(service);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", id))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_stock_items_is_sorted_and_paged() {
    let service = service();
    for name in ["zeta", "Alpha", "mid", "Beta"] {
        service
            .create_item(create_input(name, "engine"))
            .await
            .unwrap();
    }

    let app = handlers::stock_router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/?page=1&limit=3")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let items: Vec<Value> = json_body(response.into_body()).await;
    let names: Vec<&str> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Alpha", "Beta", "mid"]);
}

#[tokio::test]
async fn test_list_stock_by_category_filters() {
    let service = service();
    service
        .create_item(create_input("Piston", "engine"))
        .await
        .unwrap();
    service
        .create_item(create_input("Oil Filter", "oil"))
        .await
        .unwrap();

    let app = handlers::stock_router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/category/oil")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let items: Vec<Value> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Oil Filter");
}

#[tokio::test]
async fn test_list_stock_by_unknown_category_returns_400() {
    let app = handlers::stock_router(service());

    let request = Request::builder()
        .method("GET")
        .uri("/category/tires")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_restock_priorities_ranks_shortages() {
    let service = service();

    // Comfortable: projected 100 - 35 = 65, above minimum 50
    service
        .create_item(create_input("Comfortable", "engine"))
        .await
        .unwrap();

    // Shortage: projected 10 - 35 = -25, urgency (20 + 25) * 5 = 225
    let mut shortage = create_input("Shortage", "engine");
    shortage.current_stock = 10;
    shortage.minimum_stock = 20;
    shortage.criticality_level = 5;
    service.create_item(shortage).await.unwrap();

    // Milder shortage at low criticality
    let mut mild = create_input("Mild", "oil");
    mild.current_stock = 40;
    mild.minimum_stock = 30;
    mild.average_daily_sales = 4;
    mild.lead_time_days = 5;
    mild.criticality_level = 2;
    service.create_item(mild).await.unwrap();

    let app = handlers::restock_router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/priorities")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let records: Vec<Value> = json_body(response.into_body()).await;
    let names: Vec<&str> = records
        .iter()
        .map(|r| r["item"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Shortage", "Mild"]);
    assert_eq!(records[0]["urgency_score"], 225);
    assert_eq!(records[0]["is_reposition_needed"], true);
    assert_eq!(records[0]["projected_stock"], -25);
}

#[tokio::test]
async fn test_restock_priorities_pagination() {
    let service = service();

    for (name, minimum) in [("one", 50), ("two", 40), ("three", 30)] {
        let mut input = create_input(name, "engine");
        input.current_stock = 0;
        input.minimum_stock = minimum;
        input.average_daily_sales = 1;
        input.lead_time_days = 1;
        input.criticality_level = 5;
        service.create_item(input).await.unwrap();
    }

    let app = handlers::restock_router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/priorities?page=2&limit=2")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let records: Vec<Value> = json_body(response.into_body()).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["item"]["name"], "three");
}
