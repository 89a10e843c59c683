//! Playback history for a recorded trace
//!
//! The [`Sequencer`] owns one immutable `Vec<Step>` and a cursor into it.
//! Navigation never fails: stepping saturates at both ends and seeking
//! clamps to the last index. Playback is a two-state machine (paused,
//! playing) advanced by [`Sequencer::tick`]; reaching the last step while
//! playing pauses automatically.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::state::Step;
use crate::config::PlaybackConfig;

/// Error types for playback history operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Cannot play an empty trace")]
    EmptyTrace,

    #[error("Invalid step index: {index} (trace has {len} steps)")]
    InvalidIndex { index: usize, len: usize },
}

/// Discrete playback speed, level 1 (slowest) to 5 (fastest)
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Speed(u8);

impl Speed {
    pub const LEVELS: usize = 5;
    pub const SLOWEST: Speed = Speed(1);
    pub const FASTEST: Speed = Speed(5);

    /// Speed for `level`, clamped into `1..=5`
    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::SLOWEST.0, Self::FASTEST.0))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Zero-based position in an interval table
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn faster(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    pub fn slower(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(3)
    }
}

impl TryFrom<u8> for Speed {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (Self::SLOWEST.0..=Self::FASTEST.0).contains(&level) {
            Ok(Speed(level))
        } else {
            Err(format!("speed level must be between 1 and 5, got {}", level))
        }
    }
}

impl From<Speed> for u8 {
    fn from(speed: Speed) -> Self {
        speed.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::LEVELS)
    }
}

/// Cursor plus play/pause state over one trace
#[derive(Debug, Clone)]
pub struct Sequencer {
    steps: Vec<Step>,
    index: usize,
    playing: bool,
    speed: Speed,
}

impl Sequencer {
    /// Paused at step 0
    pub fn new(steps: Vec<Step>, speed: Speed) -> Result<Self, HistoryError> {
        if steps.is_empty() {
            return Err(HistoryError::EmptyTrace);
        }
        Ok(Self {
            steps,
            index: 0,
            playing: false,
            speed,
        })
    }

    /// Paused at step 0, at the configured default speed
    pub fn with_config(steps: Vec<Step>, config: &PlaybackConfig) -> Result<Self, HistoryError> {
        Self::new(steps, config.default_speed)
    }

    /// Replace the trace (new algorithm or locale) and rewind
    pub fn load(&mut self, steps: Vec<Step>) -> Result<(), HistoryError> {
        if steps.is_empty() {
            return Err(HistoryError::EmptyTrace);
        }
        trace!("loading trace of {} steps", steps.len());
        self.steps = steps;
        self.reset();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &Step {
        &self.steps[self.index]
    }

    /// Strict indexed access
    pub fn step(&self, index: usize) -> Result<&Step, HistoryError> {
        self.steps.get(index).ok_or(HistoryError::InvalidIndex {
            index,
            len: self.steps.len(),
        })
    }

    fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn is_at_end(&self) -> bool {
        self.index == self.last_index()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        trace!("speed {} -> {}", self.speed, speed);
        self.speed = speed;
    }

    /// Position in `[0, 1]`; a single-step trace is complete
    pub fn progress(&self) -> f64 {
        if self.steps.len() <= 1 {
            return 1.0;
        }
        self.index as f64 / self.last_index() as f64
    }

    /// Advance one step; `false` at the last step
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Go back one step; `false` at step 0
    pub fn step_backward(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jump anywhere; out-of-range indices clamp to the last step
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.last_index());
        trace!("seek to {}", self.index);
    }

    /// Start playing; from the last step this restarts at step 0
    pub fn play(&mut self) {
        if self.is_at_end() {
            self.index = 0;
        }
        self.playing = !self.is_at_end();
        trace!("play from {} (playing: {})", self.index, self.playing);
    }

    pub fn pause(&mut self) {
        self.playing = false;
        trace!("pause at {}", self.index);
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Timer callback: advance while playing, pausing on the last step.
    ///
    /// Returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let moved = self.step_forward();
        if self.is_at_end() {
            self.playing = false;
            trace!("reached step {}, auto-pause", self.index);
        }
        moved
    }

    /// Rewind to step 0, paused
    pub fn reset(&mut self) {
        self.index = 0;
        self.playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::state::{ArrayState, Payload, Variables};

    fn demo_trace(len: usize) -> Vec<Step> {
        (0..len)
            .map(|i| Step {
                description: format!("step {}", i),
                code_line: Some(1),
                variables: Variables::new(),
                console_output: Vec::new(),
                payload: Payload::Array(ArrayState::new(vec![i as i64])),
            })
            .collect()
    }

    fn sequencer(len: usize) -> Sequencer {
        Sequencer::new(demo_trace(len), Speed::default()).unwrap()
    }

    #[test]
    fn test_with_config_starts_at_default_speed() {
        let config = PlaybackConfig {
            default_speed: Speed::FASTEST,
            ..PlaybackConfig::default()
        };
        let seq = Sequencer::with_config(demo_trace(3), &config).unwrap();
        assert_eq!(seq.speed(), Speed::FASTEST);
        assert_eq!(seq.current_index(), 0);
        assert!(!seq.is_playing());
        assert_eq!(
            Sequencer::with_config(Vec::new(), &config).unwrap_err(),
            HistoryError::EmptyTrace
        );
    }

    #[test]
    fn test_empty_trace_rejected() {
        assert_eq!(Sequencer::new(Vec::new(), Speed::default()).unwrap_err(), HistoryError::EmptyTrace);
        let mut seq = sequencer(2);
        assert_eq!(seq.load(Vec::new()), Err(HistoryError::EmptyTrace));
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_stepping_saturates() {
        let mut seq = sequencer(3);
        assert!(!seq.step_backward());
        assert_eq!(seq.current_index(), 0);
        assert!(seq.step_forward());
        assert!(seq.step_forward());
        assert!(!seq.step_forward());
        assert_eq!(seq.current_index(), 2);
        assert!(seq.is_at_end());
    }

    #[test]
    fn test_seek_clamps() {
        let mut seq = sequencer(4);
        seq.seek(2);
        assert_eq!(seq.current_index(), 2);
        seq.seek(99);
        assert_eq!(seq.current_index(), 3);
        assert_eq!(seq.step(7).unwrap_err(), HistoryError::InvalidIndex { index: 7, len: 4 });
    }

    #[test]
    fn test_play_at_end_restarts() {
        let mut seq = sequencer(3);
        seq.seek(2);
        seq.play();
        assert_eq!(seq.current_index(), 0);
        assert!(seq.is_playing());
    }

    #[test]
    fn test_tick_auto_pauses_at_end() {
        let mut seq = sequencer(3);
        assert!(!seq.tick(), "paused sequencer must not advance");
        seq.play();
        assert!(seq.tick());
        assert!(seq.is_playing());
        assert!(seq.tick());
        assert!(!seq.is_playing());
        assert!(seq.is_at_end());
        assert!(!seq.tick());
        assert_eq!(seq.current_index(), 2);
    }

    #[test]
    fn test_single_step_trace() {
        let mut seq = sequencer(1);
        assert_eq!(seq.progress(), 1.0);
        seq.play();
        assert!(!seq.is_playing());
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    fn test_progress_reset_and_load() {
        let mut seq = sequencer(5);
        seq.seek(2);
        assert_eq!(seq.progress(), 0.5);
        seq.play();
        seq.load(demo_trace(2)).unwrap();
        assert_eq!((seq.current_index(), seq.is_playing(), seq.len()), (0, false, 2));
        seq.seek(1);
        seq.reset();
        assert_eq!(seq.current_index(), 0);
        assert_eq!(seq.current().description, "step 0");
    }

    #[test]
    fn test_speed_levels() {
        assert_eq!(Speed::default().level(), 3);
        assert_eq!(Speed::FASTEST.faster(), Speed::FASTEST);
        assert_eq!(Speed::SLOWEST.slower(), Speed::SLOWEST);
        assert_eq!(Speed::new(0), Speed::SLOWEST);
        assert_eq!(Speed::new(2).index(), 1);
        assert!(Speed::try_from(6).is_err());
        assert_eq!(serde_json::to_string(&Speed::new(4)).unwrap(), "4");
    }
}
