//! Hand tracker input
//!
//! The tracker runs at camera rate, independent of the render tick. Each of
//! its result frames overwrites the cached hand position; the tick reads
//! whatever is cached. Frames with no hand leave the cache untouched.

use serde::{Deserialize, Serialize};

use crate::error::RunnerError;
use crate::settings::Settings;
use crate::sim::TickInput;

/// One normalized hand landmark as reported by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Landmarks per hand in the tracker's model
pub const HAND_LANDMARKS: usize = 21;

/// Last known hand position, written by tracker callbacks
#[derive(Debug, Clone)]
pub struct HandInput {
    x: f32,
    detected: bool,
    mirror: bool,
    palm_landmark: usize,
    /// Reused when landmarks arrive as a flat array
    scratch: Vec<Landmark>,
}

impl HandInput {
    pub fn new(settings: &Settings) -> Self {
        Self {
            x: 0.5,
            detected: false,
            mirror: settings.mirror_input,
            palm_landmark: settings.palm_landmark,
            scratch: Vec::with_capacity(HAND_LANDMARKS),
        }
    }

    /// Pick up changed mirroring or palm landmark settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.mirror = settings.mirror_input;
        self.palm_landmark = settings.palm_landmark;
    }

    /// Handle one tracker frame given the first hand's landmarks as packed
    /// `x, y, z` triples. An empty slice means no hand this frame.
    ///
    /// Frames missing the palm landmark are logged and dropped.
    pub fn on_flat_landmarks(&mut self, xyz: &[f32]) -> bool {
        let mut hand = std::mem::take(&mut self.scratch);
        hand.clear();
        hand.extend(xyz.chunks_exact(3).map(|c| Landmark {
            x: c[0],
            y: c[1],
            z: c[2],
        }));

        let result = if hand.is_empty() {
            Ok(false)
        } else {
            self.on_results(&[hand.as_slice()])
        };
        self.scratch = hand;

        result.unwrap_or_else(|e| {
            log::warn!("Rejected landmark frame: {e}");
            false
        })
    }

    /// Handle one tracker frame of landmark sets (one set per hand).
    ///
    /// Only the first hand is read. Returns whether a position was taken.
    pub fn on_results<H: AsRef<[Landmark]>>(&mut self, hands: &[H]) -> Result<bool, RunnerError> {
        let Some(hand) = hands.first() else {
            return Ok(false);
        };
        let hand = hand.as_ref();
        let palm = hand
            .get(self.palm_landmark)
            .ok_or(RunnerError::LandmarkOutOfRange {
                index: self.palm_landmark,
                len: hand.len(),
            })?;
        Ok(self.on_palm_positions(&[palm.x]))
    }

    /// Handle one tracker frame given the raw palm x of each detected hand
    pub fn on_palm_positions(&mut self, palm_xs: &[f32]) -> bool {
        let Some(&raw) = palm_xs.first() else {
            return false;
        };
        if !raw.is_finite() {
            log::warn!("Dropping non-finite hand position");
            return false;
        }

        if !self.detected {
            log::info!("First hand detected");
        }
        self.detected = true;
        let raw = raw.clamp(0.0, 1.0);
        self.x = if self.mirror { 1.0 - raw } else { raw };
        true
    }

    /// Normalized hand position the game should use
    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// True once any hand has been seen; never reverts
    #[inline]
    pub fn has_detected(&self) -> bool {
        self.detected
    }

    /// Snapshot for the next tick
    pub fn sample(&self) -> TickInput {
        TickInput {
            hand_x: self.x,
            hand_detected: self.detected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_with_palm_x(x: f32) -> Vec<Landmark> {
        let mut hand = vec![Landmark::default(); 21];
        hand[9].x = x;
        hand
    }

    #[test]
    fn test_starts_centered_and_undetected() {
        let input = HandInput::new(&Settings::default());
        assert_eq!(input.sample(), TickInput::default());
    }

    #[test]
    fn test_mirrors_palm_x() {
        let mut input = HandInput::new(&Settings::default());
        assert!(input.on_results(&[hand_with_palm_x(0.25)]).unwrap());
        assert_eq!(input.x(), 0.75);
        assert!(input.has_detected());
    }

    #[test]
    fn test_unmirrored() {
        let settings = Settings {
            mirror_input: false,
            ..Settings::default()
        };
        let mut input = HandInput::new(&settings);
        input.on_results(&[hand_with_palm_x(0.25)]).unwrap();
        assert_eq!(input.x(), 0.25);
    }

    #[test]
    fn test_empty_frame_keeps_last_value() {
        let mut input = HandInput::new(&Settings::default());
        input.on_results(&[hand_with_palm_x(0.25)]).unwrap();
        let none: [Vec<Landmark>; 0] = [];
        assert!(!input.on_results(&none).unwrap());
        assert!(!input.on_palm_positions(&[]));
        assert_eq!(input.x(), 0.75);
        assert!(input.has_detected());
    }

    #[test]
    fn test_short_landmark_set_is_rejected() {
        let mut input = HandInput::new(&Settings::default());
        let err = input.on_results(&[vec![Landmark::default(); 4]]).unwrap_err();
        assert!(matches!(
            err,
            RunnerError::LandmarkOutOfRange { index: 9, len: 4 }
        ));
        assert!(!input.has_detected());
    }

    #[test]
    fn test_flat_landmarks_read_palm() {
        let mut input = HandInput::new(&Settings::default());
        let mut xyz = vec![0.0f32; HAND_LANDMARKS * 3];
        xyz[9 * 3] = 0.25;
        assert!(input.on_flat_landmarks(&xyz));
        assert_eq!(input.x(), 0.75);
        assert!(input.has_detected());

        assert!(!input.on_flat_landmarks(&[]));
        assert_eq!(input.x(), 0.75);
    }

    #[test]
    fn test_flat_landmarks_too_short_is_dropped() {
        let mut input = HandInput::new(&Settings::default());
        assert!(!input.on_flat_landmarks(&[0.5; 4 * 3]));
        assert!(!input.has_detected());
        assert_eq!(input.x(), 0.5);
    }

    #[test]
    fn test_apply_settings_changes_mirroring() {
        let mut settings = Settings::default();
        let mut input = HandInput::new(&settings);
        settings.mirror_input = false;
        settings.palm_landmark = 0;
        input.apply_settings(&settings);

        let mut xyz = vec![0.0f32; HAND_LANDMARKS * 3];
        xyz[0] = 0.25;
        assert!(input.on_flat_landmarks(&xyz));
        assert_eq!(input.x(), 0.25);
    }

    #[test]
    fn test_only_first_hand_is_read() {
        let mut input = HandInput::new(&Settings::default());
        input.on_palm_positions(&[0.0, 1.0]);
        assert_eq!(input.x(), 1.0);
    }

    #[test]
    fn test_out_of_range_and_nan() {
        let mut input = HandInput::new(&Settings::default());
        input.on_palm_positions(&[1.3]);
        assert_eq!(input.x(), 0.0);
        assert!(!input.on_palm_positions(&[f32::NAN]));
        assert_eq!(input.x(), 0.0);
    }
}
