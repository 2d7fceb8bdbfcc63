use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use instant::Instant;
use serde::{Deserialize, Serialize};

use crate::{Error, Outcome, Result, Scene, Step, Steps};

pub const DEFAULT_POLL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
    Cancelled,
}

/// Pause and cancel flags shared with whoever controls a playback.
///
/// Cloning the handle shares the flags, so a blocking [`Player::run`] on one
/// thread can be steered from another.
#[derive(Debug, Clone, Default)]
pub struct PlaybackHandle {
    paused: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
}

impl PlaybackHandle {
    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    pub fn toggle_pause(&self) {
        self.paused.fetch_xor(true, Ordering::SeqCst);
    }

    /// Requests cancellation. Honoured before the next step, an in-flight
    /// delay is not cut short.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn clear(&self) {
        self.paused.store(false, Ordering::SeqCst);
        self.cancelled.store(false, Ordering::SeqCst);
    }
}

/// Reported when a playback runs out of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub applied: usize,
    pub outcome: Outcome,
}

/// Waits between steps of a blocking run.
pub trait Sleeper {
    fn sleep(&mut self, d: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, d: Duration) {
        std::thread::sleep(d);
    }
}

impl<F: FnMut(Duration)> Sleeper for F {
    fn sleep(&mut self, d: Duration) {
        self(d);
    }
}

/// Applies a [`Steps`] sequence to a [`Scene`] one step at a time.
///
/// At most one playback is active per player. Drive it either from a frame
/// loop with [`Player::update`] or on the current thread with
/// [`Player::run`].
#[derive(Debug, Clone)]
pub struct Player {
    steps: Steps,
    cursor: usize,
    delay: Duration,
    poll: Duration,
    status: Status,
    handle: PlaybackHandle,
    next_at: Option<Instant>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            steps: Steps::default(),
            cursor: 0,
            delay: Duration::ZERO,
            poll: DEFAULT_POLL,
            status: Status::Idle,
            handle: PlaybackHandle::default(),
            next_at: None,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interval a paused blocking run waits before checking the flags again.
    pub fn with_poll(mut self, poll: Duration) -> Self {
        self.poll = poll;
        self
    }

    pub fn handle(&self) -> PlaybackHandle {
        self.handle.clone()
    }

    pub fn status(&self) -> Status {
        match self.status {
            Status::Running if self.handle.is_paused() => Status::Paused,
            s => s,
        }
    }

    /// Running or paused.
    pub fn is_active(&self) -> bool {
        self.status == Status::Running
    }

    pub fn applied(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.steps.len()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Installs a new sequence.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyRunning`] while another playback is running or paused,
    /// leaving that playback untouched.
    pub fn start(&mut self, steps: Steps, delay: Duration) -> Result<()> {
        if self.is_active() {
            log::warn!("rejected start, playback already active");
            return Err(Error::AlreadyRunning);
        }

        log::info!(
            "starting playback of {} steps, {} ms apart",
            steps.len(),
            delay.as_millis()
        );
        self.steps = steps;
        self.cursor = 0;
        self.delay = delay;
        self.next_at = None;
        self.handle.clear();
        self.status = Status::Running;
        Ok(())
    }

    pub fn pause(&self) {
        self.handle.pause();
    }

    pub fn resume(&self) {
        self.handle.resume();
    }

    pub fn toggle_pause(&self) {
        self.handle.toggle_pause();
    }

    pub fn cancel(&self) {
        self.handle.cancel();
    }

    /// Drops the current playback without touching any scene.
    pub fn reset(&mut self) {
        self.steps = Steps::default();
        self.cursor = 0;
        self.next_at = None;
        self.handle.clear();
        self.status = Status::Idle;
    }

    /// Frame-driven step: applies at most one step once the previous step's
    /// delay has elapsed. Returns the summary on the call that completes the
    /// playback.
    pub fn update<S: Scene + ?Sized>(&mut self, now: Instant, scene: &mut S) -> Option<Summary> {
        if self.status != Status::Running {
            return None;
        }
        if self.handle.is_cancelled() {
            self.finish_cancelled(scene);
            return None;
        }
        if self.handle.is_paused() {
            return None;
        }
        if self.next_at.is_some_and(|at| now < at) {
            return None;
        }

        match self.next_step() {
            Some(step) => {
                self.apply(&step, scene);
                self.next_at = Some(now + self.delay);
                None
            }
            None => Some(self.finish_completed(scene)),
        }
    }

    /// How long a UI may sleep before the next [`Player::update`] can change
    /// anything.
    pub fn repaint_after(&self, now: Instant) -> Option<Duration> {
        match self.status() {
            Status::Running => Some(
                self.next_at
                    .filter(|at| *at > now)
                    .map_or(Duration::ZERO, |at| at - now),
            ),
            Status::Paused => Some(self.poll),
            _ => None,
        }
    }

    /// Blocking playback on the current thread. Returns `None` when the run
    /// was cancelled through the [`PlaybackHandle`].
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyRunning`] when another playback is active.
    pub fn run<S: Scene + ?Sized, Z: Sleeper>(
        &mut self,
        steps: Steps,
        delay: Duration,
        scene: &mut S,
        sleeper: &mut Z,
    ) -> Result<Option<Summary>> {
        self.start(steps, delay)?;

        loop {
            if self.handle.is_cancelled() {
                self.finish_cancelled(scene);
                return Ok(None);
            }
            if self.handle.is_paused() {
                sleeper.sleep(self.poll);
                continue;
            }

            match self.next_step() {
                Some(step) => {
                    self.apply(&step, scene);
                    sleeper.sleep(self.delay);
                }
                None => return Ok(Some(self.finish_completed(scene))),
            }
        }
    }

    /// Applies every remaining step without waiting, ignoring pause.
    pub fn play_to_end<S: Scene + ?Sized>(&mut self, scene: &mut S) -> Option<Summary> {
        if !self.is_active() {
            return None;
        }
        while let Some(step) = self.next_step() {
            self.apply(&step, scene);
        }
        Some(self.finish_completed(scene))
    }

    fn next_step(&self) -> Option<Step> {
        self.steps.get(self.cursor).copied()
    }

    fn apply<S: Scene + ?Sized>(&mut self, step: &Step, scene: &mut S) {
        log::debug!("step {}/{}: {step:?}", self.cursor + 1, self.steps.len());
        scene.apply(step);
        self.cursor += 1;
    }

    fn finish_completed<S: Scene + ?Sized>(&mut self, scene: &mut S) -> Summary {
        scene.clear_transient();
        self.status = Status::Completed;
        self.next_at = None;
        let summary = Summary {
            applied: self.cursor,
            outcome: scene.outcome(),
        };
        log::info!("playback complete: {}", summary.outcome);
        summary
    }

    fn finish_cancelled<S: Scene + ?Sized>(&mut self, scene: &mut S) {
        scene.clear_transient();
        self.status = Status::Cancelled;
        self.next_at = None;
        self.handle.clear();
        log::info!("playback cancelled after {} steps", self.cursor);
    }
}
