//! Main App Shell
//!
//! Authenticated layout: header, pantry/meal-plan view switch, receipt
//! scanner toggle, and the chat column. Owns the local copies of the server
//! collections and the delete handlers over them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use super::alert;
use crate::api;
use crate::components::{ChatBox, MealPlansTable, PantryTable, ReceiptScanner};
use crate::context::AppContext;
use crate::models::User;
use crate::session::Session;
use crate::store::{store_remove_meal_plan, store_remove_pantry_item, AppState, AppStateStoreFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Pantry,
    MealPlans,
}

#[component]
pub fn MainApp(user: User, #[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let session = expect_context::<Session>();

    let store = Store::new(AppState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));
    provide_context(ctx);

    let (view_mode, set_view_mode) = signal(ViewMode::Pantry);
    let (show_scanner, set_show_scanner) = signal(false);
    // Number of list fetches still in flight; the table area is ready at 0
    let (pending_loads, set_pending_loads) = signal(0u32);

    // Fetch both lists concurrently on mount and on every reload trigger.
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        set_pending_loads.set(2);
        spawn_local(async move {
            match api::list_pantry_items(session).await {
                Ok(items) => store.pantry_items().set(items),
                Err(e) => {
                    web_sys::console::error_1(&format!("[main] pantry load failed: {e}").into())
                }
            }
            set_pending_loads.update(|n| *n = n.saturating_sub(1));
        });
        spawn_local(async move {
            match api::list_meal_plans(session).await {
                Ok(plans) => store.meal_plans().set(plans),
                Err(e) => {
                    web_sys::console::error_1(&format!("[main] meal plan load failed: {e}").into())
                }
            }
            set_pending_loads.update(|n| *n = n.saturating_sub(1));
        });
    });

    // Rows leave the local list only after the server confirms the delete.
    let delete_pantry_item = Callback::new(move |id: i64| {
        spawn_local(async move {
            match api::delete_pantry_item(session, id).await {
                Ok(()) => store_remove_pantry_item(&store, id),
                Err(e) => {
                    web_sys::console::error_1(&format!("[main] delete item failed: {e}").into());
                    alert("Failed to delete item");
                }
            }
        });
    });

    let delete_meal_plan = Callback::new(move |id: i64| {
        spawn_local(async move {
            match api::delete_meal_plan(session, id).await {
                Ok(()) => store_remove_meal_plan(&store, id),
                Err(e) => {
                    web_sys::console::error_1(&format!("[main] delete plan failed: {e}").into());
                    alert("Failed to delete meal plan");
                }
            }
        });
    });

    let loading = move || pending_loads.get() > 0;

    view! {
        <div class="main-app">
            <header class="app-header">
                <h1>"🍽️ Pantry Manager"</h1>
                <div class="header-actions">
                    <span class="username">{format!("Welcome, {}!", user.username)}</span>
                    <button class="logout-btn" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </div>
            </header>

            <div class="app-content">
                <div class="main-section">
                    <div class="view-controls">
                        <button
                            class=move || if view_mode.get() == ViewMode::Pantry { "active" } else { "" }
                            on:click=move |_| set_view_mode.set(ViewMode::Pantry)
                        >
                            {move || format!("📦 My Pantry ({})", store.pantry_items().read().len())}
                        </button>
                        <button
                            class=move || if view_mode.get() == ViewMode::MealPlans { "active" } else { "" }
                            on:click=move |_| set_view_mode.set(ViewMode::MealPlans)
                        >
                            {move || format!("🍲 Meal Plans ({})", store.meal_plans().read().len())}
                        </button>
                        <Show when=move || view_mode.get() == ViewMode::Pantry>
                            <button
                                class="scan-btn"
                                on:click=move |_| set_show_scanner.update(|s| *s = !*s)
                            >
                                "📷 Scan Receipt"
                            </button>
                        </Show>
                    </div>

                    <Show when=move || show_scanner.get()>
                        <ReceiptScanner on_close=Callback::new(move |_: ()| set_show_scanner.set(false)) />
                    </Show>

                    <div class="table-container">
                        {move || {
                            if loading() {
                                view! { <div class="loading">"Loading..."</div> }.into_any()
                            } else {
                                match view_mode.get() {
                                    ViewMode::Pantry => view! {
                                        <PantryTable on_delete=delete_pantry_item />
                                    }
                                    .into_any(),
                                    ViewMode::MealPlans => view! {
                                        <MealPlansTable on_delete=delete_meal_plan />
                                    }
                                    .into_any(),
                                }
                            }
                        }}
                    </div>
                </div>

                <div class="chat-section">
                    <ChatBox />
                </div>
            </div>
        </div>
    }
}
