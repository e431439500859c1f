use crate::dashboard::view::{self, price_history_lines};
use crate::db::properties::{self, PropertyInput};
use crate::db::Database;
use crate::domain::{ApiStatus, NewProperty, PriceUpdate, Property};
use crate::errors::ServerError;
use crate::responses::{
    html_response, json_error_response, json_response, redirect_response, ResultResp,
};
use crate::spreadsheets::export_properties_xlsx;
use crate::templates;
use astra::Request;
use chrono::Utc;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::io::Read;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    if path.starts_with("/api/") {
        let resp = handle_api(&method, &path, req, db).unwrap_or_else(|err| {
            log::warn!("{method} {path} failed: {err}");
            json_error_response(&err)
        });
        return Ok(resp);
    }

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => dashboard(db),
        ("GET", "/history") => history(&req, db),
        ("POST", "/add_property") => {
            let fields = new_property_from_form(&read_form(req)?);
            add_property(db, &fields)?;
            redirect_response("/")
        }
        ("POST", "/update_price") => {
            let form = read_form(req)?;
            let update = PriceUpdate {
                zpid: form_value(&form, "zpid"),
                price: form_value(&form, "price"),
            };
            update_price(db, &update)?;
            redirect_response("/")
        }
        _ => Err(ServerError::NotFound),
    }
}

fn handle_api(method: &str, path: &str, req: Request, db: &Database) -> ResultResp {
    match (method, path) {
        ("GET", "/api/properties") => json_response(&list_properties(db)?),
        ("POST", "/api/add_property") => {
            let fields: NewProperty = read_json(req)?;
            add_property(db, &fields)?;
            json_response(&ApiStatus::success("Property added successfully"))
        }
        ("POST", "/api/update_price") => {
            let update: PriceUpdate = read_json(req)?;
            update_price(db, &update)?;
            json_response(&ApiStatus::success("Price updated successfully"))
        }
        ("GET", "/api/export") => export_properties_xlsx(&properties::list_properties(db)?),
        _ => Err(ServerError::NotFound),
    }
}

fn list_properties(db: &Database) -> Result<Vec<Property>, ServerError> {
    Ok(properties::list_properties(db)?
        .iter()
        .map(|p| p.to_property())
        .collect())
}

fn dashboard(db: &Database) -> ResultResp {
    let list = list_properties(db)?;
    html_response(templates::pages::dashboard_page(&view::render(&list)))
}

fn history(req: &Request, db: &Database) -> ResultResp {
    let query = parse_query(req);
    let zpid = query
        .get("zpid")
        .ok_or_else(|| ServerError::BadRequest("Missing zpid".into()))?;

    let list = list_properties(db)?;
    let property = list
        .iter()
        .find(|p| &p.zpid == zpid)
        .ok_or(ServerError::NotFound)?;
    let lines = price_history_lines(property).unwrap_or_default();

    html_response(templates::pages::history_page(&property.address, &lines))
}

fn add_property(db: &Database, fields: &NewProperty) -> Result<(), ServerError> {
    let input = parse_new_property(fields)?;
    let outcome = properties::add_property(db, &input, Utc::now().naive_utc())?;
    log::info!(
        "Property {} ({}) {:?} at {}",
        input.zpid,
        input.address,
        outcome,
        input.price
    );
    Ok(())
}

fn update_price(db: &Database, update: &PriceUpdate) -> Result<(), ServerError> {
    let zpid = required("zpid", &update.zpid)?;
    let price = parse_amount("price", &update.price)?;
    properties::update_price(db, zpid, price, Utc::now().naive_utc())?;
    log::info!("Price updated for {zpid}: {price}");
    Ok(())
}

/// Validates the strings of an add request. Counts must be whole numbers except
/// bathrooms.
pub fn parse_new_property(fields: &NewProperty) -> Result<PropertyInput, ServerError> {
    Ok(PropertyInput {
        zpid: required("zpid", &fields.zpid)?.to_string(),
        address: required("address", &fields.address)?.to_string(),
        price: parse_amount("price", &fields.price)?,
        bedrooms: parse_number("bedrooms", &fields.bedrooms)?,
        bathrooms: parse_amount("bathrooms", &fields.bathrooms)?,
        sqft: parse_number("sqft", &fields.sqft)?,
    })
}

fn required<'a>(name: &str, value: &'a str) -> Result<&'a str, ServerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServerError::BadRequest(format!("Missing {name}")));
    }
    Ok(trimmed)
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ServerError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ServerError::BadRequest(format!("Invalid {name}: {value:?}")))
}

/// Like `parse_number`, but `inf`, `NaN` and overflowing values are rejected too.
fn parse_amount(name: &str, value: &str) -> Result<f64, ServerError> {
    let amount: f64 = parse_number(name, value)?;
    if !amount.is_finite() {
        return Err(ServerError::BadRequest(format!("Invalid {name}: {value:?}")));
    }
    Ok(amount)
}

fn read_body(mut req: Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read body: {e}")))?;
    Ok(buf)
}

fn read_json<T: DeserializeOwned>(req: Request) -> Result<T, ServerError> {
    let body = read_body(req)?;
    serde_json::from_slice(&body).map_err(|e| ServerError::BadRequest(format!("Invalid JSON: {e}")))
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let body = read_body(req)?;
    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}

fn form_value(form: &HashMap<String, String>, key: &str) -> String {
    form.get(key).cloned().unwrap_or_default()
}

fn new_property_from_form(form: &HashMap<String, String>) -> NewProperty {
    NewProperty {
        zpid: form_value(form, "zpid"),
        address: form_value(form, "address"),
        price: form_value(form, "price"),
        bedrooms: form_value(form, "bedrooms"),
        bathrooms: form_value(form, "bathrooms"),
        sqft: form_value(form, "sqft"),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
