//! Score display and status messages
//!
//! The simulation only emits [`GameEvent`]s; whatever shows them to the player
//! implements [`Hud`].

use crate::error::RunnerError;
use crate::sim::GameEvent;

/// Shown when the camera or tracker cannot start
pub const CAMERA_ERROR_MESSAGE: &str = "Camera Error! Allow access.";

/// Display surface for score, game over and status text
pub trait Hud {
    fn show_score(&mut self, score: u64);
    fn show_game_over(&mut self, final_score: u64);
    fn hide_game_over(&mut self);
    /// Loading / error line
    fn show_status(&mut self, message: &str);
    fn hide_status(&mut self);
}

/// Forward one tick's events to the HUD
pub fn dispatch_events<H: Hud + ?Sized>(events: &[GameEvent], hud: &mut H) {
    for event in events {
        match *event {
            GameEvent::Started => hud.hide_status(),
            GameEvent::ScoreChanged { score } => hud.show_score(score),
            GameEvent::GameOver { final_score } => hud.show_game_over(final_score),
        }
    }
}

/// Surface a tracker start-up failure. The game stays waiting for input.
pub fn report_tracking_error<H: Hud + ?Sized>(error: &RunnerError, hud: &mut H) {
    log::error!("{error}");
    hud.show_status(CAMERA_ERROR_MESSAGE);
}

/// Reset the HUD for a new session
pub fn reset_hud<H: Hud + ?Sized>(hud: &mut H) {
    hud.show_score(0);
    hud.hide_game_over();
}

/// HUD that writes to the log (native builds)
#[derive(Debug, Default)]
pub struct LogHud {
    pub last_score: u64,
    pub final_score: Option<u64>,
}

impl Hud for LogHud {
    fn show_score(&mut self, score: u64) {
        self.last_score = score;
        log::info!("Score: {score}");
    }

    fn show_game_over(&mut self, final_score: u64) {
        self.final_score = Some(final_score);
        log::info!("Game over! Final score: {final_score}");
    }

    fn hide_game_over(&mut self) {
        self.final_score = None;
    }

    fn show_status(&mut self, message: &str) {
        log::warn!("{message}");
    }

    fn hide_status(&mut self) {}
}
