//! Browser facade
//!
//! JavaScript owns the canvas, the DOM and `requestAnimationFrame`; it feeds
//! input in and draws the JSON snapshot each frame.

use wasm_bindgen::prelude::*;

use super::{HostInput, is_activation};
use crate::persistence::LocalStorageStore;
use crate::session::Session;
use crate::sim::Skin;
use crate::tuning::Tuning;

#[wasm_bindgen]
pub struct WebGame {
    session: Session,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game; `tuning_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64, tuning_json: &str) -> Result<WebGame, JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let session = Session::new(seed, tuning, Box::new(LocalStorageStore))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Flappy Bonk (web) ready");
        Ok(WebGame { session })
    }

    /// Forward a keydown by its `code`
    pub fn key_down(&mut self, code: &str) {
        self.forward(HostInput::KeyDown(code.to_string()));
    }

    pub fn pointer_down(&mut self) {
        self.forward(HostInput::PointerDown);
    }

    pub fn touch_start(&mut self) {
        self.forward(HostInput::TouchStart);
    }

    /// Select a skin by name; unknown names are ignored
    pub fn set_skin(&mut self, name: &str) {
        match Skin::from_str(name) {
            Some(skin) => self.session.set_skin(skin),
            None => log::warn!("Unknown skin {:?}", name),
        }
    }

    /// Advance one frame and return the snapshot as JSON
    pub fn tick(&mut self) -> String {
        let snapshot = self.session.tick(false);
        serde_json::to_string(&snapshot).unwrap_or_default()
    }

    pub fn best_score(&self) -> u32 {
        self.session.best_score()
    }

    fn forward(&mut self, input: HostInput) {
        if is_activation(&input) {
            self.session.activate();
        }
    }
}
