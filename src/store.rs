//! Global Tracker State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All counter
//! arithmetic lives here, free of any DOM type.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TrackerConfig;

/// Tracker session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TrackerState {
    /// Daily goal, immutable for the session
    pub goal: u32,
    /// Display unit, e.g. "ml"
    pub unit: String,
    /// Accumulated intake, always within [0, goal]
    pub current: u32,
    /// Latches true once the fill animation lands on a completed goal
    pub goal_reached: bool,
}

impl TrackerState {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            goal: config.goal,
            unit: config.unit.clone(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TrackerStore = Store<TrackerState>;

/// Get the tracker store from context
pub fn use_tracker_store() -> TrackerStore {
    expect_context::<TrackerStore>()
}

// ========================
// Pure Helpers
// ========================

/// Parse a raw numeric field value; anything unparsable counts as 0
pub fn parse_amount(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Clamp a typed amount into [1, goal]
pub fn clamp_pending(amount: u32, goal: u32) -> u32 {
    amount.clamp(1, goal.max(1))
}

/// Fill height as a percentage, clamped to [0, 100]
pub fn fill_percent(current: u32, goal: u32) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    (100.0 * current as f64 / goal as f64).clamp(0.0, 100.0)
}

/// Progress text, e.g. "250 / 2000 ml"
pub fn progress_label(current: u32, goal: u32, unit: &str) -> String {
    format!("{} / {} {}", current, goal, unit)
}

// ========================
// Store Helper Functions
// ========================

/// Add the staged amount to the total, clamped to the goal.
///
/// Returns the new total, or `None` once the goal has been reached: the add
/// button is gated by completion. Quick-add presets are not (see
/// `store_add_quick`).
pub fn store_add_pending(store: &TrackerStore, amount: u32) -> Option<u32> {
    if store.goal_reached().get() {
        return None;
    }
    Some(add_clamped(store, amount))
}

/// Add a preset amount to the total, clamped to the goal. Not gated by
/// completion.
pub fn store_add_quick(store: &TrackerStore, amount: u32) -> u32 {
    add_clamped(store, amount)
}

fn add_clamped(store: &TrackerStore, amount: u32) -> u32 {
    let goal = store.goal().get();
    let total = store.current().get().saturating_add(amount).min(goal);
    store.current().set(total);
    total
}

/// Latch the goal-reached flag once the fill animation has landed on a
/// completed goal. Returns the final total the first time it latches, `None`
/// on every other call. Only the fill's transition-finished handler calls
/// this, so the flag can never flip before the bar has finished animating.
pub fn store_complete_if_due(store: &TrackerStore) -> Option<u32> {
    let current = store.current().get();
    if current >= store.goal().get() && !store.goal_reached().get() {
        store.goal_reached().set(true);
        Some(current)
    } else {
        None
    }
}
