//! HydroTrack Frontend App
//!
//! Root component: loads the page config, owns the shared state, and wires
//! the gauge, amount picker, and quick-add presets together.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config;
use crate::context::TrackerContext;
use crate::models::TrackerConfig;
use crate::store::TrackerState;
use crate::components::{AmountPicker, QuickAddBar, WaterGauge};

/// Slider position on first paint
const DEFAULT_PENDING: u32 = 250;

#[component]
pub fn App() -> impl IntoView {
    let config = config::load().unwrap_or_else(|err| {
        web_sys::console::warn_1(
            &format!("[APP] config unavailable ({}), using defaults", err).into(),
        );
        TrackerConfig::default()
    });

    // Staged-amount signals shared by the picker components
    let pending = signal(DEFAULT_PENDING);
    let typed = signal(DEFAULT_PENDING.to_string());
    let preview = signal(DEFAULT_PENDING);

    // Provide store and context to all children
    provide_context(Store::new(TrackerState::new(&config)));
    provide_context(TrackerContext::new(config.goal, pending, typed, preview));

    view! {
        <div class="tracker-layout">
            <h1>"HydroTrack"</h1>

            <WaterGauge />

            <AmountPicker />

            <QuickAddBar amounts=config.quick_amounts />
        </div>
    }
}
