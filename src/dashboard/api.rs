// src/dashboard/api.rs

use crate::dashboard::ClientError;
use crate::domain::{ApiStatus, NewProperty, PriceUpdate, Property};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use url::Url;

pub const PROPERTIES_PATH: &str = "/api/properties";
pub const ADD_PROPERTY_PATH: &str = "/api/add_property";
pub const UPDATE_PRICE_PATH: &str = "/api/update_price";
pub const EXPORT_PATH: &str = "/api/export";

/// The tracker backend as seen by the dashboard.
///
/// Replies are decoded whatever the HTTP status is: the write endpoints report failure
/// in the body, and an undecodable body is a `ClientError::JsonParse`.
pub trait PropertyApi {
    fn fetch_properties(&self) -> Result<Vec<Property>, ClientError>;
    fn add_property(&self, property: &NewProperty) -> Result<ApiStatus, ClientError>;
    fn update_price(&self, update: &PriceUpdate) -> Result<ApiStatus, ClientError>;
    fn export_url(&self) -> String;
}

pub struct HttpPropertyApi {
    base: Url,
    client: Client,
}

impl HttpPropertyApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        let client = Client::builder()
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self { base, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }

    fn read_json<T: DeserializeOwned>(resp: reqwest::blocking::Response) -> Result<T, ClientError> {
        let text = resp
            .text()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| ClientError::JsonParse(e.to_string()))
    }

    /// Follows a navigation to `url` and returns the body, e.g. the export file.
    pub fn download(&self, url: &str) -> Result<Vec<u8>, ClientError> {
        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let bytes = resp
            .bytes()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl PropertyApi for HttpPropertyApi {
    fn fetch_properties(&self) -> Result<Vec<Property>, ClientError> {
        let resp = self
            .client
            .get(self.endpoint(PROPERTIES_PATH)?)
            .send()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::read_json(resp)
    }

    fn add_property(&self, property: &NewProperty) -> Result<ApiStatus, ClientError> {
        let resp = self
            .client
            .post(self.endpoint(ADD_PROPERTY_PATH)?)
            .json(property)
            .send()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::read_json(resp)
    }

    fn update_price(&self, update: &PriceUpdate) -> Result<ApiStatus, ClientError> {
        let resp = self
            .client
            .post(self.endpoint(UPDATE_PRICE_PATH)?)
            .json(update)
            .send()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::read_json(resp)
    }

    fn export_url(&self) -> String {
        self.endpoint(EXPORT_PATH)
            .map(String::from)
            .unwrap_or_else(|_| EXPORT_PATH.to_string())
    }
}
