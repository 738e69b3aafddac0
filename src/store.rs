//! Client-side Data Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Both lists are
//! caches of the server collections, refreshed wholesale; the only local
//! mutation is removal after a confirmed delete.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{MealPlan, PantryItem};

/// Local copies of the server-held collections
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Pantry items as last fetched
    pub pantry_items: Vec<PantryItem>,
    /// Meal plans as last fetched
    pub meal_plans: Vec<MealPlan>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Remove a pantry item from the local cache after a confirmed delete
pub fn store_remove_pantry_item(store: &AppStore, item_id: i64) {
    remove_pantry_item(&mut store.pantry_items().write(), item_id);
}

/// Remove a meal plan from the local cache after a confirmed delete
pub fn store_remove_meal_plan(store: &AppStore, plan_id: i64) {
    remove_meal_plan(&mut store.meal_plans().write(), plan_id);
}

fn remove_pantry_item(items: &mut Vec<PantryItem>, item_id: i64) {
    items.retain(|item| item.id != item_id);
}

fn remove_meal_plan(plans: &mut Vec<MealPlan>, plan_id: i64) {
    plans.retain(|plan| plan.id != plan_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(id: i64, name: &str) -> PantryItem {
        PantryItem {
            id,
            item_name: name.to_string(),
            receipt_name: None,
            item_type: None,
            volume: None,
            units: None,
            calories: None,
            perishable: true,
            days_before_expiry: None,
            date_estimated_expiry: None,
            date_added: NaiveDate::from_ymd_opt(2026, 8, 24)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            upc: None,
        }
    }

    #[test]
    fn remove_deletes_exactly_the_matching_item() {
        let mut items = vec![item(1, "Milk"), item(2, "Eggs"), item(3, "Rice")];
        remove_pantry_item(&mut items, 2);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.id != 2));
        assert_eq!(items[0].item_name, "Milk");
        assert_eq!(items[1].item_name, "Rice");
    }

    #[test]
    fn remove_with_unknown_id_leaves_list_unchanged() {
        let mut items = vec![item(1, "Milk"), item(2, "Eggs")];
        remove_pantry_item(&mut items, 99);
        assert_eq!(items.len(), 2);
    }
}
