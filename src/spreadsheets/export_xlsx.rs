use crate::domain::TrackedProperty;
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};
use rust_xlsxwriter::{Workbook, XlsxError};

pub const EXPORT_FILENAME: &str = "property_export.xlsx";

const HEADERS: [&str; 9] = [
    "ZPID",
    "Address",
    "Current Price",
    "Initial Price",
    "Price Change",
    "Bedrooms",
    "Bathrooms",
    "Sqft",
    "Date Added",
];

fn cell_err(what: &'static str) -> impl Fn(XlsxError) -> ServerError {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// One row per property. Properties without history export zero prices.
pub fn properties_workbook(properties: &[TrackedProperty]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, property) in properties.iter().enumerate() {
        let r = (i + 1) as u32;
        let current = property.current_price().unwrap_or(0.0);
        let initial = property.initial_price().unwrap_or(0.0);

        worksheet
            .write_string(r, 0, &property.zpid)
            .map_err(cell_err("zpid"))?;
        worksheet
            .write_string(r, 1, &property.address)
            .map_err(cell_err("address"))?;
        worksheet
            .write_number(r, 2, current)
            .map_err(cell_err("current price"))?;
        worksheet
            .write_number(r, 3, initial)
            .map_err(cell_err("initial price"))?;
        worksheet
            .write_number(r, 4, current - initial)
            .map_err(cell_err("price change"))?;
        worksheet
            .write_number(r, 5, property.bedrooms as f64)
            .map_err(cell_err("bedrooms"))?;
        worksheet
            .write_number(r, 6, property.bathrooms)
            .map_err(cell_err("bathrooms"))?;
        worksheet
            .write_number(r, 7, property.sqft as f64)
            .map_err(cell_err("sqft"))?;
        worksheet
            .write_string(
                r,
                8,
                property.date_added.format("%Y-%m-%dT%H:%M:%S").to_string(),
            )
            .map_err(cell_err("date added"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_properties_xlsx(properties: &[TrackedProperty]) -> ResultResp {
    let buffer = properties_workbook(properties)?;
    xlsx_response(buffer, EXPORT_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;
    use chrono::NaiveDate;

    #[test]
    fn workbook_is_a_zip_container() {
        let added = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let properties = vec![
            TrackedProperty {
                zpid: "1".to_string(),
                address: "1 Main St".to_string(),
                bedrooms: 3,
                bathrooms: 2.0,
                sqft: 1500,
                date_added: added,
                price_history: vec![PricePoint {
                    date: added,
                    price: 250_000.0,
                }],
            },
            TrackedProperty {
                zpid: "2".to_string(),
                address: "2 Main St".to_string(),
                bedrooms: 2,
                bathrooms: 1.0,
                sqft: 900,
                date_added: added,
                price_history: Vec::new(),
            },
        ];

        let bytes = properties_workbook(&properties).unwrap();

        // xlsx files are zip archives.
        assert_eq!(&bytes[..2], b"PK");
    }
}
