//! Frontend Models
//!
//! Wire types matching the backend API responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Authenticated user (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Login response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Pantry item as held server-side (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: i64,
    pub item_name: String,
    #[serde(default)]
    pub receipt_name: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default = "default_true")]
    pub perishable: bool,
    #[serde(default)]
    pub days_before_expiry: Option<i32>,
    #[serde(default)]
    pub date_estimated_expiry: Option<NaiveDateTime>,
    pub date_added: NaiveDateTime,
    #[serde(default)]
    pub upc: Option<String>,
}

fn default_true() -> bool {
    true
}

/// One ingredient line within a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealIngredient {
    pub item_name: String,
    pub quantity: String,
    pub unit: String,
}

/// One meal within a plan. Ingredients and directions keep server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub date: String,
    pub meal_type: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<MealIngredient>,
    #[serde(default)]
    pub directions: Vec<String>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub cook_time: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub calories: Option<f64>,
}

/// Meal plan, immutable once fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meals: Vec<Meal>,
    pub created_at: NaiveDateTime,
}

/// Receipt scan result
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReceiptScanResponse {
    pub message: String,
    #[serde(default)]
    pub items: Vec<PantryItem>,
}

/// Assistant reply; `meal_plan` is set when the server created one
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub meal_plan: Option<MealPlan>,
}

/// Transcript entry, in-memory only
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pantry_item_decodes_naive_datetimes() {
        let json = r#"{
            "id": 7,
            "item_name": "Whole Milk",
            "receipt_name": "MILK WHL GAL",
            "type": "dairy",
            "volume": 1.0,
            "units": "gallon",
            "calories": 2400.0,
            "perishable": true,
            "days_before_expiry": 10,
            "date_estimated_expiry": "2026-09-03T00:00:00",
            "date_added": "2026-08-24T15:30:00",
            "upc": "070038613763"
        }"#;
        let item: PantryItem = serde_json::from_str(json).expect("decode failed");
        assert_eq!(item.id, 7);
        assert_eq!(item.item_type.as_deref(), Some("dairy"));
        assert!(item.perishable);
        assert_eq!(item.date_estimated_expiry.unwrap().date().to_string(), "2026-09-03");
    }

    #[test]
    fn pantry_item_tolerates_missing_optionals() {
        let json = r#"{"id": 1, "item_name": "Salt", "date_added": "2026-08-24T00:00:00"}"#;
        let item: PantryItem = serde_json::from_str(json).expect("decode failed");
        assert_eq!(item.receipt_name, None);
        assert_eq!(item.volume, None);
        assert!(item.perishable);
    }

    #[test]
    fn chat_response_without_meal_plan() {
        let json = r#"{"response": "You could make a stir fry tonight."}"#;
        let reply: ChatResponse = serde_json::from_str(json).expect("decode failed");
        assert!(reply.meal_plan.is_none());
    }

    #[test]
    fn chat_response_with_meal_plan() {
        let json = r#"{
            "response": "Created a week-long plan!",
            "meal_plan": {
                "id": 3,
                "name": "Chicken Week",
                "description": "Seven chicken dinners",
                "created_at": "2026-08-24T12:00:00",
                "meals": [{
                    "date": "2026-08-25",
                    "meal_type": "dinner",
                    "name": "Roast Chicken",
                    "ingredients": [{"item_name": "chicken", "quantity": "1", "unit": "whole"}],
                    "directions": ["Preheat oven to 425F.", "Roast for 75 minutes."],
                    "servings": 4
                }]
            }
        }"#;
        let reply: ChatResponse = serde_json::from_str(json).expect("decode failed");
        let plan = reply.meal_plan.expect("meal plan expected");
        assert_eq!(plan.meals.len(), 1);
        assert_eq!(plan.meals[0].directions.len(), 2);
        assert_eq!(plan.meals[0].ingredients[0].unit, "whole");
    }
}
