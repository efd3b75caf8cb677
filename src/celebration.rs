//! Goal Celebration
//!
//! One-shot acknowledgment plus a confetti burst once the goal is reached.

use leptos_confetti::ConfettiOptions;

const PARTICLE_COUNT: u32 = 200;
const SPREAD: u32 = 70;
const ORIGIN_Y: f64 = 0.6;

/// Acknowledge the completed goal, then fire confetti.
///
/// The alert always comes first: confetti is decorative and may fail to load,
/// and `spawn_burst` logs and swallows any failure.
pub fn fire_goal_celebration(total: u32, unit: &str) {
    match web_sys::window() {
        Some(window) => {
            let message = format!(
                "🎉 Great job! You reached your hydration goal of {} {}!",
                total, unit
            );
            let _ = window.alert_with_message(&message);
        }
        None => {
            web_sys::console::warn_1(&"[CELEBRATE] window unavailable, skipping acknowledgment".into());
        }
    }

    leptos_confetti::spawn_burst(ConfettiOptions {
        particle_count: PARTICLE_COUNT,
        spread: SPREAD,
        origin_y: ORIGIN_Y,
    });
}
