//! End-to-end flows through `axum-test`'s `TestServer`.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use budgetd_api::{create_router, ApiConfig, AppState};
use budgetd_db::Database;
use serde_json::{json, Value};

async fn server() -> TestServer {
    let db = Database::connect_in_memory().await.unwrap();
    let state = Arc::new(AppState::new(Arc::new(db)));
    TestServer::new(create_router(state, ApiConfig::default())).unwrap()
}

#[tokio::test]
async fn test_month_lifecycle() {
    let server = server().await;

    let food: Value = server
        .post("/api/categories")
        .json(&json!({"name": "Food", "emoji": "🍔"}))
        .await
        .json();
    let rent: Value = server
        .post("/api/categories")
        .json(&json!({"name": "Rent"}))
        .await
        .json();

    let budget = server
        .post("/api/budgets")
        .json(&json!({
            "month": "2024-05",
            "income": 3000,
            "allocations": [
                {"category_id": food["id"], "target": 400},
                {"category_id": rent["id"], "target": 1200}
            ]
        }))
        .await;
    budget.assert_status_ok();

    for (category, amount) in [(&food, 120.0), (&food, 80.0), (&rent, 1200.0)] {
        server
            .post("/api/expenses")
            .json(&json!({"month": "2024-05", "category_id": category["id"], "amount": amount}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let expenses: Value = server.get("/api/expenses/2024-05").await.json();
    assert_eq!(expenses.as_array().unwrap().len(), 3);

    let summary: Value = server.get("/api/summary/2024-05").await.json();
    assert_eq!(summary["total_target"], 1600.0);
    assert_eq!(summary["total_spent"], 1400.0);
    assert_eq!(summary["remaining"], 1600.0);

    let rows = summary["categories"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], food["id"]);
    assert_eq!(rows[0]["spent"], 200.0);
    assert_eq!(rows[0]["progress"], 50.0);
    assert_eq!(rows[1]["id"], rent["id"]);
    assert_eq!(rows[1]["progress"], 100.0);
}

#[tokio::test]
async fn test_replacing_budget_changes_summary() {
    let server = server().await;

    let food: Value = server
        .post("/api/categories")
        .json(&json!({"name": "Food"}))
        .await
        .json();

    server
        .post("/api/budgets")
        .json(&json!({"month": "2024-06", "income": 500, "allocations": [{"category_id": food["id"], "target": 100}]}))
        .await
        .assert_status_ok();
    server
        .post("/api/budgets")
        .json(&json!({"month": "2024-06", "income": 800, "allocations": []}))
        .await
        .assert_status_ok();

    let summary: Value = server.get("/api/summary/2024-06").await.json();
    assert_eq!(summary["income"], 800.0);
    assert_eq!(summary["total_target"], 0.0);
    assert_eq!(summary["categories"][0]["target"], 0.0);
    assert!(summary["categories"][0]["progress"].is_null());
}

#[tokio::test]
async fn test_orphan_allocation_listed() {
    let server = server().await;

    server
        .post("/api/budgets")
        .json(&json!({"month": "2024-08", "income": 100, "allocations": [{"category_id": "gone", "target": 40}]}))
        .await
        .assert_status_ok();

    let summary: Value = server.get("/api/summary/2024-08").await.json();
    assert_eq!(summary["total_target"], 40.0);
    assert!(summary["categories"].as_array().unwrap().is_empty());
    assert_eq!(summary["orphans"], json!([{"category_id": "gone", "target": 40.0, "spent": 0.0}]));
}

#[tokio::test]
async fn test_missing_budget_error_body() {
    let server = server().await;

    let response = server.get("/api/budgets/2024-09").await;
    response.assert_status_not_found();
    response.assert_json(&json!({"code": -2001, "msg": "Budget not found for month"}));
}
