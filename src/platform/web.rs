//! Browser bindings
//!
//! The page owns the Three.js scene and the MediaPipe hand tracker. It calls
//! `on_hand_results` from the tracker callback, `tick` from
//! `requestAnimationFrame`, and reads positions back to place meshes.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::hud::{Hud, dispatch_events, report_tracking_error, reset_hud};
use super::input::HandInput;
use crate::error::RunnerError;
use crate::settings::Settings;
use crate::sim::{World, tick};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Gesture Runner (web) starting...");
}

fn to_js(error: RunnerError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// HUD backed by DOM elements `#score`, `#game-over`, `#final-score`, `#loading`
pub struct DomHud {
    document: Option<Document>,
}

impl DomHud {
    pub fn new() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        if document.is_none() {
            log::warn!("No document available - HUD disabled");
        }
        Self { document }
    }

    fn element(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .as_ref()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn set_display(&self, id: &str, display: &str) {
        if let Some(el) = self.element(id) {
            let _ = el.style().set_property("display", display);
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.element(id) {
            el.set_text_content(Some(text));
        }
    }
}

impl Default for DomHud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud for DomHud {
    fn show_score(&mut self, score: u64) {
        self.set_text("score", &format!("Score: {score}"));
    }

    fn show_game_over(&mut self, final_score: u64) {
        self.set_display("game-over", "block");
        self.set_text("final-score", &final_score.to_string());
    }

    fn hide_game_over(&mut self) {
        self.set_display("game-over", "none");
    }

    fn show_status(&mut self, message: &str) {
        self.set_text("loading", message);
        self.set_display("loading", "block");
    }

    fn hide_status(&mut self) {
        self.set_display("loading", "none");
    }
}

/// Game handle owned by the page
#[wasm_bindgen]
pub struct GestureRunner {
    world: World,
    hand: HandInput,
    hud: DomHud,
    settings: Settings,
}

#[wasm_bindgen]
impl GestureRunner {
    /// Create a runner; `tuning_json` overrides balance values
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>) -> Result<GestureRunner, JsValue> {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).map_err(to_js)?,
            None => Tuning::default(),
        };
        let seed = js_sys::Date::now() as u64;
        let world = World::new(seed, tuning).map_err(to_js)?;
        let settings = Settings::load();

        Ok(Self {
            hand: HandInput::new(&settings),
            world,
            hud: DomHud::new(),
            settings,
        })
    }

    /// Tracker callback: the first hand's landmarks as packed `x, y, z`
    /// triples in camera coordinates, or an empty array when no hand is seen
    pub fn on_hand_results(&mut self, landmarks_xyz: &[f32]) {
        self.hand.on_flat_landmarks(landmarks_xyz);
    }

    /// Switch the `1 - x` mirroring and remember the choice
    pub fn set_mirror_input(&mut self, mirror: bool) -> Result<(), JsValue> {
        self.settings.set_mirror_input(mirror).map_err(to_js)?;
        self.hand.apply_settings(&self.settings);
        Ok(())
    }

    /// Camera or tracker failed to start
    pub fn on_tracking_error(&mut self, message: String) {
        report_tracking_error(&RunnerError::TrackingInit(message), &mut self.hud);
    }

    /// Run one simulation tick and update the HUD
    pub fn tick(&mut self) {
        let input = self.hand.sample();
        let events = tick(&mut self.world, &input);
        dispatch_events(events, &mut self.hud);
    }

    /// Start a new session with a fresh seed
    pub fn restart(&mut self) {
        let seed = js_sys::Date::now() as u64;
        self.world.restart(seed);
        reset_hud(&mut self.hud);
    }

    pub fn player_x(&self) -> f32 {
        self.world.player.current_x
    }

    pub fn obstacle_count(&self) -> usize {
        self.world.pool.len()
    }

    pub fn obstacle_x(&self, slot: usize) -> f32 {
        self.world.obstacle_position(slot).map_or(0.0, |p| p.x)
    }

    pub fn obstacle_z(&self, slot: usize) -> f32 {
        self.world.obstacle_position(slot).map_or(0.0, |p| p.z)
    }

    pub fn score(&self) -> f64 {
        self.world.state.score as f64
    }

    pub fn is_playing(&self) -> bool {
        self.world.state.is_playing()
    }

    pub fn is_game_over(&self) -> bool {
        self.world.state.is_game_over()
    }

    /// Full game state as JSON (debug overlay)
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.world.state).unwrap_or_default()
    }

    /// Tracker and camera options as JSON for configuring MediaPipe
    pub fn settings_json(&self) -> String {
        serde_json::to_string(&self.settings).unwrap_or_default()
    }
}
