use crate::db::{init_db, Database};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Returns a fresh test database using the production schema
pub fn make_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "property_tracker_test_{}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        DB_COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

pub fn request(method: Method, uri: &str, body: impl Into<Body>) -> Request {
    let mut req = Request::new(body.into());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn get(uri: &str) -> Request {
    request(Method::GET, uri, Body::empty())
}

pub fn post_json(uri: &str, json: &str) -> Request {
    let mut req = request(Method::POST, uri, json.to_string());
    req.headers_mut()
        .insert("Content-Type", "application/json".parse().unwrap());
    req
}

pub fn post_form(uri: &str, form: &str) -> Request {
    let mut req = request(Method::POST, uri, form.to_string());
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
