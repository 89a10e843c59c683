//! Fixed-interval playback driver
//!
//! [`PlaybackTicker`] owns at most one tokio task that calls
//! [`Sequencer::tick`] on every interval. Starting the ticker aborts any task
//! that is still scheduled, so two timers never advance the same sequencer.
//! The task ends by itself once the sequencer auto-pauses.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::trace;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::PlaybackConfig;
use crate::execution::history::Sequencer;

/// Sequencer shared between the host and the ticker task
pub type SharedSequencer = Arc<Mutex<Sequencer>>;

fn lock(sequencer: &Mutex<Sequencer>) -> MutexGuard<'_, Sequencer> {
    sequencer.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug)]
pub struct PlaybackTicker {
    sequencer: SharedSequencer,
    config: PlaybackConfig,
    task: Option<JoinHandle<()>>,
}

impl PlaybackTicker {
    pub fn new(sequencer: SharedSequencer, config: PlaybackConfig) -> Self {
        Self {
            sequencer,
            config,
            task: None,
        }
    }

    pub fn sequencer(&self) -> SharedSequencer {
        Arc::clone(&self.sequencer)
    }

    /// Whether a tick task is still scheduled
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Put the sequencer in play mode and (re)schedule the tick task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.cancel();

        let speed = {
            let mut sequencer = lock(&self.sequencer);
            sequencer.play();
            if !sequencer.is_playing() {
                return;
            }
            sequencer.speed()
        };

        let sequencer = Arc::clone(&self.sequencer);
        let config = self.config.clone();
        self.task = Some(tokio::spawn(async move {
            let mut speed = speed;
            let mut period = config.interval(speed);
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                let mut sequencer = lock(&sequencer);
                let moved = sequencer.tick();
                trace!("tick: index {} (moved: {})", sequencer.current_index(), moved);
                if !sequencer.is_playing() {
                    break;
                }
                if sequencer.speed() != speed {
                    speed = sequencer.speed();
                    period = config.interval(speed);
                    interval = time::interval_at(Instant::now() + period, period);
                    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                }
            }
        }));
    }

    /// Pause the sequencer and cancel the tick task
    pub fn stop(&mut self) {
        self.cancel();
        lock(&self.sequencer).pause();
    }

    /// Play/pause toggle as seen by the user
    pub fn toggle(&mut self) {
        if lock(&self.sequencer).is_playing() {
            self.stop();
        } else {
            self.start();
        }
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for PlaybackTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::algorithm::state::{ArrayState, Payload, Step, Variables};
    use crate::execution::history::Speed;

    const INTERVAL_MS: u64 = 400;

    fn shared(len: usize) -> SharedSequencer {
        let steps = (0..len)
            .map(|i| Step {
                description: format!("step {}", i),
                code_line: None,
                variables: Variables::new(),
                console_output: Vec::new(),
                payload: Payload::Array(ArrayState::new(vec![i as i64])),
            })
            .collect();
        Arc::new(Mutex::new(Sequencer::new(steps, Speed::default()).unwrap()))
    }

    fn index(sequencer: &SharedSequencer) -> usize {
        sequencer.lock().unwrap().current_index()
    }

    async fn wait_ms(ms: u64) {
        time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_advances_once_per_interval() {
        let sequencer = shared(10);
        let mut ticker = PlaybackTicker::new(Arc::clone(&sequencer), PlaybackConfig::default());
        ticker.start();

        wait_ms(INTERVAL_MS * 3 + INTERVAL_MS / 2).await;
        assert_eq!(index(&sequencer), 3);
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_never_runs_two_timers() {
        let sequencer = shared(10);
        let mut ticker = PlaybackTicker::new(Arc::clone(&sequencer), PlaybackConfig::default());
        ticker.start();
        wait_ms(INTERVAL_MS / 2).await;
        ticker.start();

        // the first timer would have fired at 400ms; only the second fires, at 600ms
        wait_ms(INTERVAL_MS + INTERVAL_MS / 4).await;
        assert_eq!(index(&sequencer), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_ends_on_auto_pause() {
        let sequencer = shared(3);
        let mut ticker = PlaybackTicker::new(Arc::clone(&sequencer), PlaybackConfig::default());
        ticker.start();

        wait_ms(INTERVAL_MS * 5).await;
        assert_eq!(index(&sequencer), 2);
        assert!(!sequencer.lock().unwrap().is_playing());
        assert!(!ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_ticks() {
        let sequencer = shared(10);
        let mut ticker = PlaybackTicker::new(Arc::clone(&sequencer), PlaybackConfig::default());
        ticker.toggle();
        wait_ms(INTERVAL_MS + INTERVAL_MS / 2).await;
        ticker.toggle();
        assert_eq!(index(&sequencer), 1);

        wait_ms(INTERVAL_MS * 4).await;
        assert_eq!(index(&sequencer), 1);
        assert!(!ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_speed_change_takes_effect() {
        let sequencer = shared(20);
        let mut ticker = PlaybackTicker::new(Arc::clone(&sequencer), PlaybackConfig::default());
        ticker.start();
        wait_ms(INTERVAL_MS + INTERVAL_MS / 2).await;
        sequencer.lock().unwrap().set_speed(Speed::FASTEST);

        // the 800ms tick picks up the new speed, then 50ms ticks follow
        wait_ms(INTERVAL_MS / 2 + 50 * 4 + 25).await;
        assert_eq!(index(&sequencer), 6);
    }
}
