//! Receipt Scanner Component
//!
//! One image in via the device camera or file picker, converted to a base64
//! data URL and submitted whole. OCR and item extraction happen server-side.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::alert;
use crate::api;
use crate::context::AppContext;
use crate::session::Session;

#[component]
pub fn ReceiptScanner(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<Session>();
    let ctx = expect_context::<AppContext>();

    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());
    let (preview, set_preview) = signal::<Option<String>>(None);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    // Read the chosen file into a data URL for preview and upload.
    let on_file_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Ok(reader) = web_sys::FileReader::new() else {
            return;
        };
        let reader_handle = reader.clone();
        let onloadend = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(
            move |_: web_sys::ProgressEvent| {
                if let Ok(result) = reader_handle.result() {
                    if let Some(data_url) = result.as_string() {
                        set_preview.set(Some(data_url));
                    }
                }
            },
        );
        reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
        onloadend.forget();
        let _ = reader.read_as_data_url(&file);
    };

    let scan = move |_| {
        let Some(image) = preview.get() else {
            set_error.set("Please select an image first".to_string());
            return;
        };
        set_loading.set(true);
        set_error.set(String::new());

        spawn_local(async move {
            match api::scan_receipt(session, &image).await {
                Ok(result) => {
                    web_sys::console::log_1(
                        &format!("[scanner] added {} items", result.items.len()).into(),
                    );
                    alert(&result.message);
                    ctx.reload();
                    on_close.run(());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[scanner] scan failed: {e}").into());
                    set_error.set(e.display_message("Failed to scan receipt"));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="scanner-container">
            <div class="scanner-box">
                <h3>"📷 Scan Receipt"</h3>
                <p class="scanner-info">
                    "Upload a photo of your grocery receipt and we'll automatically add items to your pantry!"
                </p>

                <div class="scanner-actions">
                    <input
                        node_ref=file_input
                        type="file"
                        accept="image/*"
                        capture="environment"
                        style="display: none"
                        on:change=on_file_change
                    />
                    <button
                        class="select-btn"
                        on:click=move |_| {
                            if let Some(input) = file_input.get() {
                                input.click();
                            }
                        }
                    >
                        "📸 Take Photo / Select Image"
                    </button>
                </div>

                {move || preview.get().map(|src| view! {
                    <div class="preview-container">
                        <img src=src alt="Receipt preview" />
                    </div>
                })}

                <Show when=move || !error.get().is_empty()>
                    <div class="error">{move || error.get()}</div>
                </Show>

                <div class="scanner-footer">
                    <button
                        class="scan-btn-primary"
                        disabled=move || preview.get().is_none() || loading.get()
                        on:click=scan
                    >
                        {move || if loading.get() { "Scanning..." } else { "Scan & Add Items" }}
                    </button>
                    <button class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
