//! Chat Box Component
//!
//! Append-only in-memory transcript with the pantry assistant. When a reply
//! carries a meal plan, the shared reload trigger refetches the lists.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ChatContext};
use crate::context::AppContext;
use crate::models::{ChatMessage, ChatRole};
use crate::session::Session;
use crate::store::{use_app_store, AppStateStoreFields};

const GREETING: &str = "Hello! I'm your pantry assistant. I can help you create meal plans \
based on what you have. Try asking me something like \"Create a week-long meal plan using \
chicken\" or \"What can I make for dinner tonight?\"";

const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

#[component]
pub fn ChatBox() -> impl IntoView {
    let session = expect_context::<Session>();
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let (messages, set_messages) = signal(vec![ChatMessage {
        role: ChatRole::Assistant,
        content: GREETING.to_string(),
    }]);
    let (input, set_input) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let bottom_ref: NodeRef<leptos::html::Div> = NodeRef::new();

    // Keep the newest message in view.
    Effect::new(move |_| {
        let _ = messages.get();
        let _ = loading.get();
        if let Some(el) = bottom_ref.get() {
            el.scroll_into_view();
        }
    });

    let send = move || {
        let text = input.get().trim().to_string();
        if text.is_empty() || loading.get() {
            return;
        }
        set_input.set(String::new());
        set_messages.update(|msgs| {
            msgs.push(ChatMessage {
                role: ChatRole::User,
                content: text.clone(),
            })
        });
        set_loading.set(true);
        let pantry_item_count = store.pantry_items().read_untracked().len();

        spawn_local(async move {
            match api::send_message(session, &text, ChatContext { pantry_item_count }).await {
                Ok(reply) => {
                    set_messages.update(|msgs| {
                        msgs.push(ChatMessage {
                            role: ChatRole::Assistant,
                            content: reply.response,
                        })
                    });
                    if reply.meal_plan.is_some() {
                        ctx.reload();
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[chat] send failed: {e}").into());
                    set_messages.update(|msgs| {
                        msgs.push(ChatMessage {
                            role: ChatRole::Assistant,
                            content: FALLBACK_REPLY.to_string(),
                        })
                    });
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="chat-box">
            <div class="chat-header">
                <h3>"💬 AI Assistant"</h3>
            </div>

            <div class="chat-messages">
                <For
                    each={move || messages.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(index, _)| *index
                    children=move |(_, msg)| {
                        let class = match msg.role {
                            ChatRole::User => "message user",
                            ChatRole::Assistant => "message assistant",
                        };
                        view! {
                            <div class=class>
                                <div class="message-content">{msg.content.clone()}</div>
                            </div>
                        }
                    }
                />
                <Show when=move || loading.get()>
                    <div class="message assistant">
                        <div class="message-content typing">
                            <span></span><span></span><span></span>
                        </div>
                    </div>
                </Show>
                <div node_ref=bottom_ref></div>
            </div>

            <div class="chat-input">
                <textarea
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send();
                        }
                    }
                    placeholder="Ask me anything about meal planning..."
                    rows=2
                    disabled=move || loading.get()
                ></textarea>
                <button
                    on:click=move |_| send()
                    disabled=move || loading.get() || input.get().trim().is_empty()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
