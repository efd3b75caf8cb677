//! Application Context
//!
//! Pending-amount signals shared via Leptos Context API.

use leptos::prelude::*;

use crate::store::{clamp_pending, parse_amount};

/// Staged "next pour" signals provided via context.
///
/// Three signals back the picker: the staged amount (mirrored by the slider),
/// the raw typed text (so the widget never fights the user mid-edit), and the
/// preview amount shown in the selected-amount label and on the add button.
#[derive(Clone, Copy)]
pub struct TrackerContext {
    /// Staged amount, mirrored by the slider - read
    pub pending: ReadSignal<u32>,
    set_pending: WriteSignal<u32>,
    /// Raw text-field content - read
    pub typed: ReadSignal<String>,
    set_typed: WriteSignal<String>,
    /// Amount shown in the selected-amount label and add-button label - read
    pub preview: ReadSignal<u32>,
    set_preview: WriteSignal<u32>,
    goal: u32,
}

impl TrackerContext {
    pub fn new(
        goal: u32,
        pending: (ReadSignal<u32>, WriteSignal<u32>),
        typed: (ReadSignal<String>, WriteSignal<String>),
        preview: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            pending: pending.0,
            set_pending: pending.1,
            typed: typed.0,
            set_typed: typed.1,
            preview: preview.0,
            set_preview: preview.1,
            goal,
        }
    }

    /// Slider moved: mirror its value into the text field and the preview
    pub fn set_from_slider(&self, raw: &str) {
        let amount = parse_amount(raw);
        self.set_pending.set(amount);
        self.set_typed.set(amount.to_string());
        self.set_preview.set(amount);
    }

    /// Text edited: empty previews 0 without touching the slider; anything
    /// else is parsed, clamped to [1, goal], and pushed into the slider
    pub fn set_from_text(&self, raw: &str) {
        self.set_typed.set(raw.to_string());
        if raw.is_empty() {
            self.set_preview.set(0);
            return;
        }
        let amount = clamp_pending(parse_amount(raw), self.goal);
        self.set_pending.set(amount);
        self.set_preview.set(amount);
    }

    /// Amount the add button will commit (the slider's value)
    pub fn staged_amount(&self) -> u32 {
        self.pending.get()
    }

    /// Re-sync the preview with the staged amount after an add
    pub fn refresh_preview(&self) {
        self.set_preview.set(self.pending.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_context(goal: u32) -> TrackerContext {
        TrackerContext::new(goal, signal(250), signal(String::from("250")), signal(250))
    }

    #[test]
    fn test_slider_mirrors_into_text_and_preview() {
        let ctx = setup_context(2000);

        ctx.set_from_slider("400");

        assert_eq!(ctx.pending.get(), 400);
        assert_eq!(ctx.typed.get(), "400");
        assert_eq!(ctx.preview.get(), 400);
    }

    #[test]
    fn test_unparsable_slider_value_defaults_to_zero() {
        let ctx = setup_context(2000);

        ctx.set_from_slider("garbage");

        assert_eq!(ctx.pending.get(), 0);
        assert_eq!(ctx.preview.get(), 0);
    }

    #[test]
    fn test_empty_text_previews_zero_without_moving_slider() {
        let ctx = setup_context(2000);

        ctx.set_from_text("");

        assert_eq!(ctx.preview.get(), 0);
        assert_eq!(ctx.pending.get(), 250);
        assert_eq!(ctx.typed.get(), "");
    }

    #[test]
    fn test_text_is_clamped_to_goal_and_pushed_to_slider() {
        let ctx = setup_context(2000);

        ctx.set_from_text("50000");

        assert_eq!(ctx.pending.get(), 2000);
        assert_eq!(ctx.preview.get(), 2000);
        // The raw text is preserved as typed
        assert_eq!(ctx.typed.get(), "50000");
    }

    #[test]
    fn test_unparsable_text_clamps_up_to_one() {
        let ctx = setup_context(2000);

        ctx.set_from_text("abc");

        assert_eq!(ctx.pending.get(), 1);
        assert_eq!(ctx.preview.get(), 1);
    }

    #[test]
    fn test_refresh_preview_resyncs_with_staged_amount() {
        let ctx = setup_context(2000);

        ctx.set_from_text("");
        assert_eq!(ctx.preview.get(), 0);

        ctx.refresh_preview();
        assert_eq!(ctx.preview.get(), ctx.staged_amount());
    }
}
