//! Trace recording and playback

pub mod history;
pub mod recorder;
pub mod ticker;

pub use self::history::{Sequencer, Speed};
pub use self::recorder::StepRecorder;
pub use self::ticker::PlaybackTicker;
