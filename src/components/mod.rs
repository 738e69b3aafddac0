//! UI Components
//!
//! One Leptos component per screen/view.

mod chat_box;
mod delete_confirm_button;
mod login;
mod main_app;
mod meal_plans_table;
mod pantry_table;
mod receipt_scanner;
mod register;

pub use chat_box::ChatBox;
pub use delete_confirm_button::DeleteConfirmButton;
pub use login::Login;
pub use main_app::MainApp;
pub use meal_plans_table::MealPlansTable;
pub use pantry_table::PantryTable;
pub use receipt_scanner::ReceiptScanner;
pub use register::Register;

/// Blocking browser alert; no-op outside a window context
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
