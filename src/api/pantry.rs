//! Pantry Endpoints
//!
//! CRUD over the user's pantry collection plus receipt scanning.

use serde::Serialize;

use super::{encode, request, request_empty, ApiError};
use crate::models::{PantryItem, ReceiptScanResponse};
use crate::session::Session;

#[derive(Serialize)]
pub struct CreatePantryItemArgs<'a> {
    pub item_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_name: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    pub perishable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_before_expiry: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<&'a str>,
}

#[derive(Serialize, Default)]
pub struct UpdatePantryItemArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_name: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perishable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_before_expiry: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<&'a str>,
}

#[derive(Serialize)]
struct ScanReceiptArgs<'a> {
    image_base64: &'a str,
}

pub async fn list_pantry_items(session: Session) -> Result<Vec<PantryItem>, ApiError> {
    request(session, "GET", "/pantry", None).await
}

pub async fn create_pantry_item(
    session: Session,
    args: &CreatePantryItemArgs<'_>,
) -> Result<PantryItem, ApiError> {
    let body = encode(args)?;
    request(session, "POST", "/pantry", Some(body)).await
}

pub async fn update_pantry_item(
    session: Session,
    id: i64,
    args: &UpdatePantryItemArgs<'_>,
) -> Result<PantryItem, ApiError> {
    let body = encode(args)?;
    request(session, "PUT", &format!("/pantry/{id}"), Some(body)).await
}

pub async fn delete_pantry_item(session: Session, id: i64) -> Result<(), ApiError> {
    request_empty(session, "DELETE", &format!("/pantry/{id}"), None).await
}

/// Submit a receipt image as a base64 data URL; the server performs OCR
/// and item extraction
pub async fn scan_receipt(
    session: Session,
    image_base64: &str,
) -> Result<ReceiptScanResponse, ApiError> {
    let body = encode(&ScanReceiptArgs { image_base64 })?;
    request(session, "POST", "/receipt/scan", Some(body)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_args_rename_type_and_skip_missing() {
        let args = CreatePantryItemArgs {
            item_name: "Oat Milk",
            receipt_name: None,
            item_type: Some("dairy"),
            volume: Some(1.5),
            units: Some("liter"),
            calories: None,
            perishable: true,
            days_before_expiry: None,
            upc: None,
        };
        let json = serde_json::to_string(&args).unwrap();
        assert!(json.contains(r#""type":"dairy""#));
        assert!(json.contains(r#""perishable":true"#));
        assert!(!json.contains("receipt_name"));
        assert!(!json.contains("upc"));
    }

    #[test]
    fn update_args_serialize_only_set_fields() {
        let args = UpdatePantryItemArgs {
            volume: Some(0.5),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&args).unwrap(), r#"{"volume":0.5}"#);
    }
}
