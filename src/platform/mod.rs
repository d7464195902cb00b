//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Hand tracker input (cached between frames)
//! - HUD output (DOM on web, log natively)
//! - JS bindings for the scene and tracker glue (web only)

pub mod hud;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use hud::{Hud, LogHud, dispatch_events, report_tracking_error, reset_hud};
pub use input::{HandInput, Landmark};
