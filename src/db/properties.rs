use crate::db::connection::Database;
use crate::domain::{PricePoint, TrackedProperty};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;

/// Validated input for a new (or re-priced) property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInput {
    pub zpid: String,
    pub address: String,
    pub price: f64,
    pub bedrooms: i64,
    pub bathrooms: f64,
    pub sqft: i64,
}

/// What `add_property` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    PriceRecorded,
}

/// All tracked properties in insertion order, each with its history in observation order.
pub fn list_properties(db: &Database) -> Result<Vec<TrackedProperty>, ServerError> {
    db.with_conn(|conn| {
        let mut histories = load_histories(conn)?;

        let mut stmt = conn.prepare(
            r#"
            SELECT zpid, address, bedrooms, bathrooms, sqft, date_added
            FROM properties
            ORDER BY rowid
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(TrackedProperty {
                zpid: row.get(0)?,
                address: row.get(1)?,
                bedrooms: row.get(2)?,
                bathrooms: row.get(3)?,
                sqft: row.get(4)?,
                date_added: row.get(5)?,
                price_history: Vec::new(),
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            let mut property = row?;
            property.price_history = histories.remove(&property.zpid).unwrap_or_default();
            out.push(property);
        }
        Ok(out)
    })
}

fn load_histories(conn: &Connection) -> Result<HashMap<String, Vec<PricePoint>>, ServerError> {
    let mut stmt = conn.prepare(
        r#"
        SELECT zpid, price, observed_at
        FROM price_history
        ORDER BY id
        "#,
    )?;

    let rows = stmt.query_map([], |row| {
        let zpid: String = row.get(0)?;
        Ok((
            zpid,
            PricePoint {
                price: row.get(1)?,
                date: row.get(2)?,
            },
        ))
    })?;

    let mut map: HashMap<String, Vec<PricePoint>> = HashMap::new();
    for row in rows {
        let (zpid, point) = row?;
        map.entry(zpid).or_default().push(point);
    }
    Ok(map)
}

/// Starts tracking a property, or records a new price for one already tracked.
///
/// An existing property keeps its address and counts; only the price is appended.
pub fn add_property(
    db: &Database,
    input: &PropertyInput,
    now: NaiveDateTime,
) -> Result<AddOutcome, ServerError> {
    db.with_conn(|conn| {
        let tx = conn.transaction()?;

        let exists = zpid_exists(&tx, &input.zpid)?;
        if !exists {
            tx.execute(
                r#"
                INSERT INTO properties (zpid, address, bedrooms, bathrooms, sqft, date_added)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![
                    &input.zpid,
                    &input.address,
                    input.bedrooms,
                    input.bathrooms,
                    input.sqft,
                    now,
                ],
            )?;
        }
        insert_price(&tx, &input.zpid, input.price, now)?;

        tx.commit()?;
        Ok(if exists {
            AddOutcome::PriceRecorded
        } else {
            AddOutcome::Created
        })
    })
}

/// Appends a price observation. Unknown ZPIDs are `NotFound`.
pub fn update_price(
    db: &Database,
    zpid: &str,
    price: f64,
    now: NaiveDateTime,
) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let tx = conn.transaction()?;

        if !zpid_exists(&tx, zpid)? {
            return Err(ServerError::NotFound);
        }
        insert_price(&tx, zpid, price, now)?;

        tx.commit()?;
        Ok(())
    })
}

fn zpid_exists(conn: &Connection, zpid: &str) -> Result<bool, ServerError> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM properties WHERE zpid = ?1",
            params![zpid],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

fn insert_price(
    conn: &Connection,
    zpid: &str,
    price: f64,
    now: NaiveDateTime,
) -> Result<(), ServerError> {
    conn.execute(
        "INSERT INTO price_history (zpid, price, observed_at) VALUES (?1, ?2, ?3)",
        params![zpid, price, now],
    )?;
    Ok(())
}
