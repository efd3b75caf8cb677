//! Amount Picker Component
//!
//! Slider and free-text entry for staging the next pour, plus the add button.
//! The add button is gated once the goal has been reached.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::TrackerContext;
use crate::store::{store_add_pending, use_tracker_store, TrackerStateStoreFields};

#[component]
pub fn AmountPicker() -> impl IntoView {
    let ctx = use_context::<TrackerContext>().expect("TrackerContext should be provided");
    let store = use_tracker_store();

    let on_slider = move |ev: web_sys::Event| ctx.set_from_slider(&event_target_value(&ev));

    let on_text = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
        match input {
            Some(input) => ctx.set_from_text(&input.value()),
            None => web_sys::console::warn_1(&"[PICKER] amount input missing from event".into()),
        }
    };

    let on_add = move |_| match store_add_pending(&store, ctx.staged_amount()) {
        Some(total) => {
            web_sys::console::log_1(&format!("[PICKER] poured up to {}", total).into());
            ctx.refresh_preview();
        }
        None => {
            web_sys::console::log_1(&"[PICKER] goal already reached, ignoring add".into());
        }
    };

    view! {
        <div class="amount-picker">
            <div class="slider-row">
                <input
                    type="range"
                    min="0"
                    max="1000"
                    step="50"
                    prop:value=move || ctx.pending.get().to_string()
                    on:input=on_slider
                />
                <span class="amount-value" id="waterValue">
                    {move || format!("{} {}", ctx.preview.get(), store.unit().get())}
                </span>
            </div>

            <input
                type="text"
                class="amount-entry"
                inputmode="numeric"
                placeholder="Custom amount"
                prop:value=move || ctx.typed.get()
                on:input=on_text
            />

            <button class="add-btn" on:click=on_add>
                {move || format!("Add {}{}", ctx.preview.get(), store.unit().get())}
            </button>
        </div>
    }
}
