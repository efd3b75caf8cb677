//! Quick Add Bar Component
//!
//! One-click preset additions. Presets stay active after the goal is
//! reached, unlike the add button; the total still clamps at the goal.

use leptos::prelude::*;

use crate::context::TrackerContext;
use crate::store::{store_add_quick, use_tracker_store};

#[component]
pub fn QuickAddBar(amounts: Vec<u32>) -> impl IntoView {
    let ctx = use_context::<TrackerContext>().expect("TrackerContext should be provided");
    let store = use_tracker_store();

    view! {
        <div class="quick-add-bar">
            {amounts.into_iter().map(|amount| view! {
                <button
                    class="quick-btn"
                    on:click=move |_| {
                        let total = store_add_quick(&store, amount);
                        web_sys::console::log_1(&format!("[QUICK] +{} for a total of {}", amount, total).into());
                        ctx.refresh_preview();
                    }
                >
                    {format!("+{}", amount)}
                </button>
            }).collect_view()}
        </div>
    }
}
