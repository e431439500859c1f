// src/tests/router_tests/api_tests.rs

use crate::domain::{ApiStatus, Property};
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_db, post_json};
use serde_json::Value;

const NEW_HOUSE: &str = r#"{
    "zpid": "123",
    "address": "1 Main St",
    "price": "500000",
    "bedrooms": "3",
    "bathrooms": "2.5",
    "sqft": "1800"
}"#;

fn list(db: &crate::db::Database) -> Vec<Property> {
    let mut resp = handle(get("/api/properties"), db).unwrap();
    assert_eq!(resp.status(), 200);
    serde_json::from_str(&body_string(&mut resp)).unwrap()
}

#[test]
fn properties_start_empty() {
    let db = make_db();

    let mut resp = handle(get("/api/properties"), &db).unwrap();

    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );
    assert_eq!(body_string(&mut resp), "[]");
}

#[test]
fn add_property_reports_success_and_lists_summary() {
    let db = make_db();

    let mut resp = handle(post_json("/api/add_property", NEW_HOUSE), &db).unwrap();
    assert_eq!(resp.status(), 200);
    let status: ApiStatus = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert!(status.is_success());

    let properties = list(&db);
    assert_eq!(properties.len(), 1);

    let p = &properties[0];
    assert_eq!(p.zpid, "123");
    assert_eq!(p.address, "1 Main St");
    assert_eq!(p.current_price, Some(500_000.0));
    assert_eq!(p.initial_price, Some(500_000.0));
    assert_eq!(p.price_change, Some(0.0));
    assert_eq!(p.percent_change, Some(0.0));
    assert_eq!(p.bedrooms, 3.0);
    assert_eq!(p.bathrooms, 2.5);
    assert_eq!(p.sqft, 1800.0);
    assert_eq!(p.price_history.len(), 1);
    assert!(p.date_added.is_some());
}

#[test]
fn update_price_appends_history_and_moves_change() {
    let db = make_db();
    handle(post_json("/api/add_property", NEW_HOUSE), &db).unwrap();

    let mut resp = handle(
        post_json("/api/update_price", r#"{"zpid": "123", "price": "495000"}"#),
        &db,
    )
    .unwrap();
    let status: ApiStatus = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert!(status.is_success());

    let p = &list(&db)[0];
    assert_eq!(p.current_price, Some(495_000.0));
    assert_eq!(p.price_change, Some(-5_000.0));
    assert_eq!(p.percent_change, Some(-1.0));
    let prices: Vec<f64> = p.price_history.iter().map(|h| h.price).collect();
    assert_eq!(prices, vec![500_000.0, 495_000.0]);
}

#[test]
fn adding_a_known_zpid_records_a_price_only() {
    let db = make_db();
    handle(post_json("/api/add_property", NEW_HOUSE), &db).unwrap();

    let again = NEW_HOUSE
        .replace("1 Main St", "Somewhere Else")
        .replace("500000", "520000");
    handle(post_json("/api/add_property", &again), &db).unwrap();

    let properties = list(&db);
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].address, "1 Main St");
    assert_eq!(properties[0].current_price, Some(520_000.0));
    assert_eq!(properties[0].price_history.len(), 2);
}

#[test]
fn properties_keep_insertion_order() {
    let db = make_db();
    for zpid in ["30", "10", "20"] {
        let body = NEW_HOUSE.replace("\"123\"", &format!("\"{zpid}\""));
        handle(post_json("/api/add_property", &body), &db).unwrap();
    }

    let zpids: Vec<String> = list(&db).into_iter().map(|p| p.zpid).collect();
    assert_eq!(zpids, vec!["30", "10", "20"]);
}

#[test]
fn update_for_unknown_zpid_is_a_json_404() {
    let db = make_db();

    let mut resp = handle(
        post_json("/api/update_price", r#"{"zpid": "nope", "price": "1"}"#),
        &db,
    )
    .unwrap();

    assert_eq!(resp.status(), 404);
    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["status"], "error");
}

#[test]
fn malformed_input_is_a_json_400() {
    let db = make_db();

    let mut bad_json = handle(post_json("/api/add_property", "{not json"), &db).unwrap();
    assert_eq!(bad_json.status(), 400);
    let status: ApiStatus = serde_json::from_str(&body_string(&mut bad_json)).unwrap();
    assert!(!status.is_success());

    let bad_number = NEW_HOUSE.replace("\"3\"", "\"three\"");
    let mut resp = handle(post_json("/api/add_property", &bad_number), &db).unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert!(body["message"].as_str().unwrap().contains("bedrooms"));

    assert!(list(&db).is_empty());
}

#[test]
fn non_finite_amounts_are_a_json_400() {
    let db = make_db();
    handle(post_json("/api/add_property", NEW_HOUSE), &db).unwrap();

    for price in ["inf", "NaN", "1e400", "-infinity"] {
        let body = format!(r#"{{"zpid": "123", "price": "{price}"}}"#);
        let mut resp = handle(post_json("/api/update_price", &body), &db).unwrap();
        assert_eq!(resp.status(), 400, "price {price}");
        let status: ApiStatus = serde_json::from_str(&body_string(&mut resp)).unwrap();
        assert!(!status.is_success());
    }

    let bad_baths = NEW_HOUSE
        .replace("\"123\"", "\"456\"")
        .replace("\"2.5\"", "\"inf\"");
    let resp = handle(post_json("/api/add_property", &bad_baths), &db).unwrap();
    assert_eq!(resp.status(), 400);

    let properties = list(&db);
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].price_history.len(), 1);
    assert_eq!(properties[0].current_price, Some(500_000.0));
}

#[test]
fn export_is_an_xlsx_attachment() {
    let db = make_db();
    handle(post_json("/api/add_property", NEW_HOUSE), &db).unwrap();

    let resp = handle(get("/api/export"), &db).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"property_export.xlsx\""
    );
    assert!(resp
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("spreadsheetml"));
}

#[test]
fn unknown_api_route_is_a_json_404() {
    let db = make_db();
    let resp = handle(get("/api/nothing"), &db).unwrap();
    assert_eq!(resp.status(), 404);
}
