use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde_json::json;
use tower::ServiceExt;

use api_types::balance::BalancesResponse;
use api_types::category::CategoriesResponse;
use api_types::projection::ProjectionResponse;
use api_types::settlement::SettlementResponse;
use api_types::split::SplitResponse;
use api_types::summary::SummaryResponse;

use crate::server::router;

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// One dinner paid in full by A, split equally three ways.
fn dinner_request() -> serde_json::Value {
    json!({
        "members": [
            { "id": "A", "name": "Ana" },
            { "id": "B", "name": "Bruno" },
            { "id": "C", "name": "Carla" }
        ],
        "expenses": [{
            "title": "Cena",
            "amount": 300.0,
            "payer_id": "A",
            "splits": [
                { "member_id": "A", "amount_owed": 100.0 },
                { "member_id": "B", "amount_owed": 100.0 },
                { "member_id": "C", "amount_owed": 100.0 }
            ],
            "occurred_at": "2026-08-05T12:00:00+00:00"
        }]
    })
}

#[tokio::test]
async fn balances_reports_net_positions() {
    let res = router()
        .oneshot(post_json("/balances", &dinner_request()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let out: BalancesResponse = read_json(res).await;
    assert_eq!(out.balances["A"], 200.0);
    assert_eq!(out.balances["B"], -100.0);
    assert_eq!(out.balances["C"], -100.0);
}

#[tokio::test]
async fn settlement_returns_plan_and_balances() {
    let res = router()
        .oneshot(post_json("/settlement", &dinner_request()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let out: SettlementResponse = read_json(res).await;
    assert_eq!(out.balances["A"], 200.0);
    assert_eq!(out.transfers.len(), 2);
    assert_eq!(out.transfers[0].from, "B");
    assert_eq!(out.transfers[0].to, "A");
    assert_eq!(out.transfers[0].amount, 100.0);
    assert_eq!(out.transfers[1].from, "C");
    assert_eq!(out.transfers[1].to, "A");
    assert_eq!(out.transfers[1].amount, 100.0);
}

#[tokio::test]
async fn split_divides_to_the_cent() {
    let res = router()
        .oneshot(post_json(
            "/split",
            &json!({ "amount": 100.0, "member_count": 3 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let out: SplitResponse = read_json(res).await;
    assert_eq!(out.base, 33.33);
    assert_eq!(out.remainder, 0.01);
}

#[tokio::test]
async fn split_rejects_zero_members() {
    let res = router()
        .oneshot(post_json(
            "/split",
            &json!({ "amount": 100.0, "member_count": 0 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn negative_amount_is_unprocessable() {
    let mut body = dinner_request();
    body["expenses"][0]["amount"] = json!(-5.0);

    let res = router().oneshot(post_json("/balances", &body)).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let req = Request::builder()
        .method("POST")
        .uri("/balances")
        .header("content-type", "application/json")
        .body(Body::from("{"))
        .unwrap();

    let res = router().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn summary_reports_member_position() {
    let mut body = dinner_request();
    body["member_id"] = json!("A");

    let res = router().oneshot(post_json("/summary", &body)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let out: SummaryResponse = read_json(res).await;
    assert_eq!(out.total_spent, 300.0);
    assert_eq!(out.paid, 300.0);
    assert_eq!(out.share, 100.0);
    assert_eq!(out.net, 200.0);
}

#[tokio::test]
async fn summary_requires_member_id() {
    let mut body = dinner_request();
    body["member_id"] = json!("");

    let res = router().oneshot(post_json("/summary", &body)).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn projection_extrapolates_month_end() {
    let body = json!({
        "expenses": [{
            "title": "Super",
            "amount": 150.0,
            "payer_id": "A",
            "splits": [],
            "occurred_at": "2026-08-05T12:00:00+00:00"
        }],
        "date": "2026-08-15"
    });

    let res = router()
        .oneshot(post_json("/projection", &body))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let out: ProjectionResponse = read_json(res).await;
    assert_eq!(out.spent, 150.0);
    assert_eq!(out.daily_average, 10.0);
    assert_eq!(out.projected, 310.0);
    assert_eq!(out.days_elapsed, 15);
    assert_eq!(out.days_in_month, 31);
}

#[tokio::test]
async fn categories_fold_accent_variants() {
    let body = json!({
        "expenses": [
            {
                "title": "Verduleria",
                "amount": 60.0,
                "payer_id": "A",
                "splits": [],
                "category": "Cómida",
                "occurred_at": "2026-08-05T12:00:00+00:00"
            },
            {
                "title": "Panaderia",
                "amount": 20.0,
                "payer_id": "A",
                "splits": [],
                "category": "comida",
                "occurred_at": "2026-08-06T12:00:00+00:00"
            },
            {
                "title": "Varios",
                "amount": 20.0,
                "payer_id": "A",
                "splits": [],
                "occurred_at": "2026-08-07T12:00:00+00:00"
            }
        ]
    });

    let res = router()
        .oneshot(post_json("/categories", &body))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let out: CategoriesResponse = read_json(res).await;
    assert_eq!(out.categories.len(), 2);
    assert_eq!(out.categories[0].key, "comida");
    assert_eq!(out.categories[0].spent, 80.0);
    assert_eq!(out.categories[0].count, 2);
    assert_eq!(out.categories[0].percentage, 80);
    assert_eq!(out.categories[1].key, "uncategorized");
    assert_eq!(out.categories[1].percentage, 20);
}
