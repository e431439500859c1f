// src/tests/router_tests/page_tests.rs

use crate::dashboard::view::EMPTY_MESSAGE;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_db, post_form, post_json};

#[test]
fn empty_dashboard_shows_placeholder() {
    let db = make_db();

    let mut resp = handle(get("/"), &db).unwrap();

    assert_eq!(resp.status(), 200);
    let html = body_string(&mut resp);
    assert!(html.contains("No properties tracked yet."));
    assert!(!html.contains("property-card\""));
    assert!(EMPTY_MESSAGE.starts_with("No properties tracked yet."));
}

#[test]
fn form_post_adds_property_and_redirects_home() {
    let db = make_db();

    let resp = handle(
        post_form(
            "/add_property",
            "zpid=77&address=77+Oak+Ave&price=250000&bedrooms=2&bathrooms=1&sqft=900",
        ),
        &db,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");

    let mut page = handle(get("/"), &db).unwrap();
    let html = body_string(&mut page);
    assert!(html.contains("77 Oak Ave"));
    assert!(html.contains("ZPID: 77"));
    assert!(html.contains("$250,000"));
    assert!(html.contains("price-change neutral"));
}

#[test]
fn dashboard_card_shows_signed_change() {
    let db = make_db();
    handle(
        post_form(
            "/add_property",
            "zpid=123&address=1+Main+St&price=500000&bedrooms=3&bathrooms=2&sqft=1800",
        ),
        &db,
    )
    .unwrap();
    handle(post_form("/update_price", "zpid=123&price=495000"), &db).unwrap();

    let mut page = handle(get("/"), &db).unwrap();
    let html = body_string(&mut page);

    assert!(html.contains("-$5,000 (-1.00%)"));
    assert!(html.contains("price-change negative"));
}

#[test]
fn history_page_lists_prices() {
    let db = make_db();
    handle(
        post_json(
            "/api/add_property",
            r#"{"zpid":"5","address":"5 Elm St","price":"100000","bedrooms":"1","bathrooms":"1","sqft":"600"}"#,
        ),
        &db,
    )
    .unwrap();

    let mut resp = handle(get("/history?zpid=5"), &db).unwrap();
    let html = body_string(&mut resp);

    assert!(html.contains("Price History for 5 Elm St"));
    assert!(html.contains("$100,000"));
}

#[test]
fn history_for_unknown_zpid_is_not_found() {
    let db = make_db();
    let result = handle(get("/history?zpid=404"), &db);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn bad_form_post_is_a_bad_request() {
    let db = make_db();
    let result = handle(post_form("/update_price", "zpid=1&price=cheap"), &db);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn unknown_page_is_not_found() {
    let db = make_db();
    assert!(matches!(
        handle(get("/nowhere"), &db),
        Err(ServerError::NotFound)
    ));
}
