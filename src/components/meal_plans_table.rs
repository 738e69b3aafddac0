//! Meal Plans Table Component
//!
//! Fetched plan list with a plan detail modal; each meal card opens a
//! further modal with ingredients and ordered directions.

use chrono::NaiveDateTime;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::{Meal, MealPlan};
use crate::store::{use_app_store, AppStateStoreFields};

fn format_date(date: &NaiveDateTime) -> String {
    date.format("%m/%d/%Y").to_string()
}

#[component]
pub fn MealPlansTable(#[prop(into)] on_delete: Callback<i64>) -> impl IntoView {
    let store = use_app_store();
    let (selected_plan, set_selected_plan) = signal::<Option<MealPlan>>(None);
    let (selected_meal, set_selected_meal) = signal::<Option<Meal>>(None);

    view! {
        <div class="table-wrapper">
            <Show when=move || store.meal_plans().read().is_empty()>
                <div class="empty-state">
                    <p>"No meal plans yet!"</p>
                    <p>"Chat with the AI assistant to create one."</p>
                </div>
            </Show>

            <Show when=move || !store.meal_plans().read().is_empty()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Plan Name"</th>
                            <th>"Description"</th>
                            <th>"Number of Meals"</th>
                            <th>"Created"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.meal_plans().get()
                            key=|plan| plan.id
                            children=move |plan| {
                                let id = plan.id;
                                let row_plan = plan.clone();
                                view! {
                                    <tr on:click=move |_| set_selected_plan.set(Some(row_plan.clone()))>
                                        <td class="item-name">{plan.name.clone()}</td>
                                        <td>
                                            {plan.description.clone()
                                                .unwrap_or_else(|| "No description".to_string())}
                                        </td>
                                        <td>{plan.meals.len()}</td>
                                        <td>{format_date(&plan.created_at)}</td>
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

            {move || selected_plan.get().map(|plan| view! {
                <div class="item-modal" on:click=move |_| set_selected_plan.set(None)>
                    <div
                        class="modal-content large"
                        on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                    >
                        <h3>{plan.name.clone()}</h3>
                        <p class="description">{plan.description.clone().unwrap_or_default()}</p>

                        <div class="meals-grid">
                            {plan.meals.iter().cloned().map(|meal| {
                                let card_meal = meal.clone();
                                view! {
                                    <div
                                        class="meal-card"
                                        on:click=move |ev: web_sys::MouseEvent| {
                                            ev.stop_propagation();
                                            set_selected_meal.set(Some(card_meal.clone()));
                                        }
                                    >
                                        <h4>{meal.name.clone()}</h4>
                                        <p class="meal-type">{meal.meal_type.clone()}</p>
                                        <p class="meal-date">{meal.date.clone()}</p>
                                        {meal.prep_time.clone().map(|prep| view! {
                                            <p>{format!("⏱️ Prep: {prep}")}</p>
                                        })}
                                        {meal.servings.map(|servings| view! {
                                            <p>{format!("🍽️ Servings: {servings}")}</p>
                                        })}
                                    </div>
                                }
                            }).collect_view()}
                        </div>

                        <button on:click=move |_| set_selected_plan.set(None)>"Close"</button>
                    </div>
                </div>
            })}

            {move || selected_meal.get().map(|meal| view! {
                <div class="item-modal" on:click=move |_| set_selected_meal.set(None)>
                    <div
                        class="modal-content large"
                        on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                    >
                        <h3>{meal.name.clone()}</h3>
                        <p class="meal-type-badge">{meal.meal_type.clone()}</p>
                        {meal.description.clone().map(|desc| view! {
                            <p class="description">{desc}</p>
                        })}

                        <div class="meal-details">
                            <div class="meal-info">
                                {meal.prep_time.clone().map(|prep| view! {
                                    <p>{format!("⏱️ Prep Time: {prep}")}</p>
                                })}
                                {meal.cook_time.clone().map(|cook| view! {
                                    <p>{format!("🔥 Cook Time: {cook}")}</p>
                                })}
                                {meal.servings.map(|servings| view! {
                                    <p>{format!("🍽️ Servings: {servings}")}</p>
                                })}
                                {meal.calories.map(|calories| view! {
                                    <p>{format!("📊 Calories: {}", calories.round() as i64)}</p>
                                })}
                            </div>

                            <h4>"Ingredients"</h4>
                            <ul class="ingredients-list">
                                {meal.ingredients.iter().map(|ing| view! {
                                    <li>{format!("{} {} {}", ing.quantity, ing.unit, ing.item_name)}</li>
                                }).collect_view()}
                            </ul>

                            <h4>"Directions"</h4>
                            <ol class="directions-list">
                                {meal.directions.iter().map(|step| view! {
                                    <li>{step.clone()}</li>
                                }).collect_view()}
                            </ol>
                        </div>

                        <button on:click=move |_| set_selected_meal.set(None)>"Close"</button>
                    </div>
                </div>
            })}
        </div>
    }
}
