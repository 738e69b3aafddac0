//! Meal Plan Endpoints

use serde::Serialize;

use super::{encode, request, request_empty, ApiError};
use crate::models::{Meal, MealPlan};
use crate::session::Session;

#[derive(Serialize)]
pub struct CreateMealPlanArgs<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub meals: &'a [Meal],
}

pub async fn list_meal_plans(session: Session) -> Result<Vec<MealPlan>, ApiError> {
    request(session, "GET", "/meal-plans", None).await
}

pub async fn create_meal_plan(
    session: Session,
    args: &CreateMealPlanArgs<'_>,
) -> Result<MealPlan, ApiError> {
    let body = encode(args)?;
    request(session, "POST", "/meal-plans", Some(body)).await
}

pub async fn delete_meal_plan(session: Session, id: i64) -> Result<(), ApiError> {
    request_empty(session, "DELETE", &format!("/meal-plans/{id}"), None).await
}
