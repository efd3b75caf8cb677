//! Water Gauge Component
//!
//! Animated fill bar with progress text. Completion is detected when the
//! fill's height transition finishes, not when the amount changes, so the
//! celebration can never appear before the bar has stopped moving.

use leptos::prelude::*;

use crate::celebration::fire_goal_celebration;
use crate::store::{
    fill_percent, progress_label, store_complete_if_due, use_tracker_store,
    TrackerStateStoreFields,
};

#[component]
pub fn WaterGauge() -> impl IntoView {
    let store = use_tracker_store();

    let fill_height = move || format!("{}%", fill_percent(store.current().get(), store.goal().get()));

    let on_transition_end = move |_| {
        if let Some(total) = store_complete_if_due(&store) {
            web_sys::console::log_1(&format!("[GAUGE] goal reached at {}", total).into());
            fire_goal_celebration(total, &store.unit().get());
        }
    };

    view! {
        <div class="water-gauge">
            <div class="water-tank">
                <div
                    class="water-fill"
                    style:height=fill_height
                    style:transition="height 1s ease-in-out"
                    on:transitionend=on_transition_end
                ></div>
            </div>

            <p class="progress-text" id="progress-text">
                {move || progress_label(store.current().get(), store.goal().get(), &store.unit().get())}
            </p>
        </div>
    }
}
