//! UI Components
//!
//! Reusable Leptos components.

mod water_gauge;
mod amount_picker;
mod quick_add_bar;

pub use water_gauge::WaterGauge;
pub use amount_picker::AmountPicker;
pub use quick_add_bar::QuickAddBar;
