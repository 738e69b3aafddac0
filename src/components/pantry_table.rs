//! Pantry Table Component
//!
//! Server-provided pantry list with a read-only detail modal per row.

use chrono::{Local, NaiveDateTime};
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::expiry::ExpiryStatus;
use crate::models::PantryItem;
use crate::store::{use_app_store, AppStateStoreFields};

fn format_date(date: &NaiveDateTime) -> String {
    date.format("%m/%d/%Y").to_string()
}

fn dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| "N/A".to_string())
}

fn round_calories(calories: Option<f64>) -> Option<String> {
    calories.map(|c| format!("{}", c.round() as i64))
}

#[component]
pub fn PantryTable(#[prop(into)] on_delete: Callback<i64>) -> impl IntoView {
    let store = use_app_store();
    let (selected_item, set_selected_item) = signal::<Option<PantryItem>>(None);

    view! {
        <div class="table-wrapper">
            <Show when=move || store.pantry_items().read().is_empty()>
                <div class="empty-state">
                    <p>"Your pantry is empty!"</p>
                    <p>"Scan a receipt or add items to get started."</p>
                </div>
            </Show>

            <Show when=move || !store.pantry_items().read().is_empty()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Item Name"</th>
                            <th>"Receipt Name"</th>
                            <th>"Type"</th>
                            <th>"Volume"</th>
                            <th>"Units"</th>
                            <th>"Calories"</th>
                            <th>"Perishable"</th>
                            <th>"Days Until Expiry"</th>
                            <th>"Date Added"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.pantry_items().get()
                            key=|item| item.id
                            children=move |item| {
                                let id = item.id;
                                let expiry = ExpiryStatus::from_dates(
                                    item.date_estimated_expiry,
                                    Local::now().date_naive(),
                                );
                                let row_item = item.clone();
                                view! {
                                    <tr on:click=move |_| set_selected_item.set(Some(row_item.clone()))>
                                        <td class="item-name">{item.item_name.clone()}</td>
                                        <td>{dash(item.receipt_name.clone())}</td>
                                        <td>{dash(item.item_type.clone())}</td>
                                        <td>{dash(item.volume.map(|v| v.to_string()))}</td>
                                        <td>{dash(item.units.clone())}</td>
                                        <td>{dash(round_calories(item.calories))}</td>
                                        <td>{if item.perishable { "✓" } else { "✗" }}</td>
                                        <td class=expiry.css_class()>{expiry.label()}</td>
                                        <td>{format_date(&item.date_added)}</td>
                                        <td>
                                            <DeleteConfirmButton
                                                button_class="delete-btn"
                                                on_confirm=Callback::new(move |_: ()| on_delete.run(id))
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            {move || selected_item.get().map(|item| view! {
                <div class="item-modal" on:click=move |_| set_selected_item.set(None)>
                    <div
                        class="modal-content"
                        on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                    >
                        <h3>{item.item_name.clone()}</h3>
                        <div class="item-details">
                            <p><strong>"Receipt Name: "</strong>{or_na(item.receipt_name.clone())}</p>
                            <p><strong>"Type: "</strong>{or_na(item.item_type.clone())}</p>
                            <p>
                                <strong>"Volume: "</strong>
                                {format!(
                                    "{} {}",
                                    dash(item.volume.map(|v| v.to_string())),
                                    item.units.clone().unwrap_or_default(),
                                )}
                            </p>
                            <p><strong>"Calories: "</strong>{or_na(round_calories(item.calories))}</p>
                            <p><strong>"Perishable: "</strong>{if item.perishable { "Yes" } else { "No" }}</p>
                            <p>
                                <strong>"Days Before Expiry: "</strong>
                                {or_na(item.days_before_expiry.map(|d| d.to_string()))}
                            </p>
                            <p>
                                <strong>"Estimated Expiry: "</strong>
                                {or_na(item.date_estimated_expiry.as_ref().map(format_date))}
                            </p>
                            <p><strong>"Date Added: "</strong>{format_date(&item.date_added)}</p>
                            {item.upc.clone().map(|upc| view! {
                                <p><strong>"UPC: "</strong>{upc}</p>
                            })}
                        </div>
                        <button on:click=move |_| set_selected_item.set(None)>"Close"</button>
                    </div>
                </div>
            })}
        </div>
    }
}
