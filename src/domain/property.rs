// src/domain/property.rs

use crate::domain::timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single price observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    pub price: f64,
}

/// A property as served by `GET /api/properties`.
///
/// The summary fields (`current_price` through `percent_change`) are derived from the
/// history by the backend and are left out entirely for properties that have no history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub zpid: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_change: Option<f64>,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub sqft: f64,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_added: Option<NaiveDateTime>,
    #[serde(default)]
    pub price_history: Vec<PricePoint>,
}

impl Property {
    /// Missing change counts as no change.
    pub fn change(&self) -> f64 {
        self.price_change.unwrap_or(0.0)
    }
}

/// Body of `POST /api/add_property`. Every field is sent exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub zpid: String,
    pub address: String,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub sqft: String,
}

/// Body of `POST /api/update_price`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdate {
    pub zpid: String,
    pub price: String,
}

/// Reply of the two write endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiStatus {
    pub const SUCCESS: &'static str = "success";

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Self::SUCCESS.to_string(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS
    }
}

/// A property as stored by the backend, before the summary is derived.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedProperty {
    pub zpid: String,
    pub address: String,
    pub bedrooms: i64,
    pub bathrooms: f64,
    pub sqft: i64,
    pub date_added: NaiveDateTime,
    pub price_history: Vec<PricePoint>,
}

impl TrackedProperty {
    pub fn current_price(&self) -> Option<f64> {
        self.price_history.last().map(|p| p.price)
    }

    pub fn initial_price(&self) -> Option<f64> {
        self.price_history.first().map(|p| p.price)
    }

    /// Builds the API view: current is the latest price, initial the first one, and the
    /// percentage is 0 when the initial price is not positive.
    pub fn to_property(&self) -> Property {
        let mut property = Property {
            zpid: self.zpid.clone(),
            address: self.address.clone(),
            current_price: None,
            initial_price: None,
            price_change: None,
            percent_change: None,
            bedrooms: self.bedrooms as f64,
            bathrooms: self.bathrooms,
            sqft: self.sqft as f64,
            date_added: Some(self.date_added),
            price_history: self.price_history.clone(),
        };

        if let (Some(current), Some(initial)) = (self.current_price(), self.initial_price()) {
            let change = current - initial;
            property.current_price = Some(current);
            property.initial_price = Some(initial);
            property.price_change = Some(change);
            property.percent_change = Some(if initial > 0.0 {
                change / initial * 100.0
            } else {
                0.0
            });
        }

        property
    }
}
