//! Leptos Confetti Utilities
//!
//! Lazy loader for the canvas-confetti browser library. The bundle is
//! injected as a script tag on first use; once its window global resolves,
//! bursts can be fired from any handler.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;

/// CDN location of the confetti bundle
const CONFETTI_SRC: &str =
    "https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js";

/// Name of the global the bundle registers on `window`
const CONFETTI_GLOBAL: &str = "confetti";

/// Options forwarded to a confetti burst
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiOptions {
    pub particle_count: u32,
    /// Cone width in degrees
    pub spread: u32,
    /// Vertical launch origin, 0.0 (top) to 1.0 (bottom)
    pub origin_y: f64,
}

impl Default for ConfettiOptions {
    fn default() -> Self {
        // The bundle's own defaults
        Self {
            particle_count: 50,
            spread: 45,
            origin_y: 0.5,
        }
    }
}

impl ConfettiOptions {
    fn to_js(&self) -> Result<Object, JsValue> {
        let origin = Object::new();
        Reflect::set(&origin, &"y".into(), &JsValue::from_f64(self.origin_y))?;

        let options = Object::new();
        Reflect::set(
            &options,
            &"particleCount".into(),
            &JsValue::from_f64(self.particle_count as f64),
        )?;
        Reflect::set(&options, &"spread".into(), &JsValue::from_f64(self.spread as f64))?;
        Reflect::set(&options, &"origin".into(), &origin)?;
        Ok(options)
    }
}

/// Look up the confetti global, if the bundle has already loaded
fn confetti_global() -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &CONFETTI_GLOBAL.into())
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Load the confetti bundle, injecting the script tag on first call.
///
/// Resolves immediately when the global is already present, so repeated
/// bursts share one script tag.
pub async fn load() -> Result<(), JsValue> {
    if confetti_global().is_some() {
        return Ok(());
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_src(CONFETTI_SRC);

    let loaded = Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });
    body.append_child(&script)?;
    JsFuture::from(loaded).await?;
    Ok(())
}

/// Fire a single burst; the bundle must already be loaded
pub fn fire(options: &ConfettiOptions) -> Result<(), JsValue> {
    let confetti = confetti_global()
        .ok_or_else(|| JsValue::from_str("confetti global missing after load"))?;
    confetti.call1(&JsValue::NULL, &options.to_js()?.into())?;
    Ok(())
}

/// Load on demand, then fire
pub async fn burst(options: &ConfettiOptions) -> Result<(), JsValue> {
    load().await?;
    fire(options)
}

/// Fire-and-forget burst for synchronous event handlers.
///
/// Load or invoke failures are logged and swallowed; a missing burst is
/// cosmetic, never an error the caller has to handle.
pub fn spawn_burst(options: ConfettiOptions) {
    leptos::task::spawn_local(async move {
        if let Err(err) = burst(&options).await {
            web_sys::console::warn_1(&format!("[CONFETTI] burst failed: {:?}", err).into());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_bundle_defaults() {
        let options = ConfettiOptions::default();
        assert_eq!(options.particle_count, 50);
        assert_eq!(options.spread, 45);
        assert!((options.origin_y - 0.5).abs() < f64::EPSILON);
    }
}
