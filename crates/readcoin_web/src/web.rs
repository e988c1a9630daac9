use leptos::prelude::*;

use crate::ui_model::{self, format_result, BridgeError, SubmitForm};

mod bridge;

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let form = StoredValue::new(SubmitForm::new());

    let (draft, set_draft) = signal(String::new());
    let (entries, set_entries) = signal(Vec::<String>::new());
    let (status, set_status) = signal(String::new());

    let on_input = move |ev: leptos::ev::Event| {
        let v = event_target_value(&ev);
        form.update_value(|f| f.set_draft(&v));
        set_draft.set(v);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut submission: Result<i32, BridgeError> =
            Err(BridgeError::InputParse("empty input".to_string()));
        form.update_value(|f| {
            submission = f.take_submission();
        });
        // The field clears and the button re-disables on every submission,
        // parseable or not.
        set_draft.set(String::new());

        match submission {
            Ok(height) => {
                set_status.set(format!("computing nonce for block {height}"));

                // Each submission is its own task. Overlapping submissions
                // are not serialized; entries land in resolution order.
                wasm_bindgen_futures::spawn_local(async move {
                    match bridge::load_and_invoke(height).await {
                        Ok(value) => {
                            set_entries.update(|es| es.push(format_result(value)));
                            set_status.set(String::new());
                        }
                        Err(e) => set_status.set(format!("compute failed: {e}")),
                    }
                });
            }
            Err(e) => set_status.set(e.to_string()),
        }
    };

    view! {
        <main style="font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; padding: 18px; max-width: 560px; margin: 0 auto;">
            <h1 style="margin: 0 0 8px 0;">"readcoin"</h1>
            <p style="margin: 0 0 16px 0; color: #555;">
                "Type a block height; the nonce is mined by a wasm module fetched at submit time."
            </p>

            <form on:submit=on_submit style="display: flex; gap: 10px; margin-bottom: 14px;">
                <input
                    type="text"
                    placeholder="block height"
                    prop:value=move || draft.get()
                    on:input=on_input
                />
                <button type="submit" disabled=move || !ui_model::submit_enabled(&draft.get())>
                    "Submit"
                </button>
            </form>

            <ul id="nonces" style="margin: 0 0 12px 0;">
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|text| view! { <li style="font-variant-numeric: tabular-nums;">{text}</li> })
                        .collect::<Vec<_>>()
                }}
            </ul>

            <p style="color: #777; font-size: 0.95em;">{move || status.get()}</p>
        </main>
    }
}
