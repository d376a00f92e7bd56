// SPDX-License-Identifier: MPL-2.0
//! Interruptible timed transition.
//!
//! A [`Transition`] is a progress value in `[0.0, 1.0]` that travels linearly
//! toward 1.0 ([`Transition::forward`]) or toward 0.0 ([`Transition::reverse`])
//! over a fixed duration. It is driven by explicit timestamps, so the caller
//! decides where time comes from (frame ticks in the app, synthetic instants
//! in tests).
//!
//! Changing direction while running re-targets the transition from its
//! current progress: the remaining time is proportional to the remaining
//! distance, and no second transition is queued.
//!
//! # Example
//!
//! ```
//! use product_zoom::ui::state::{Settled, Transition};
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut fade = Transition::new(Duration::from_millis(200));
//!
//! fade.forward(start);
//! assert_eq!(fade.tick(start + Duration::from_millis(100)), None);
//! assert!((fade.progress() - 0.5).abs() < 1e-6);
//!
//! // Reversing half-way takes half the duration to get back to zero
//! fade.reverse(start + Duration::from_millis(100));
//! let settled = fade.tick(start + Duration::from_millis(200));
//! assert_eq!(settled, Some(Settled::Dismissed));
//! ```

use std::time::{Duration, Instant};

/// Direction a transition is heading in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward 1.0.
    Forward,
    /// Toward 0.0.
    Reverse,
}

/// Observable status of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Stopped at 0.0.
    Dismissed,
    /// Running toward 1.0.
    Forward,
    /// Running toward 0.0.
    Reverse,
    /// Stopped at 1.0.
    Completed,
}

/// Completion signal, reported once when a run reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Reached 1.0.
    Completed,
    /// Reached 0.0.
    Dismissed,
}

/// Start of the current run: when it began and from which progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Run {
    started_at: Instant,
    from: f32,
}

/// Linear, re-targetable progress animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    duration: Duration,
    progress: f32,
    direction: Direction,
    run: Option<Run>,
}

impl Transition {
    /// Creates a dismissed transition (progress 0.0).
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            progress: 0.0,
            direction: Direction::Reverse,
            run: None,
        }
    }

    /// Current progress in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Full-run duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Direction of the current or last run.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match (self.run.is_some(), self.direction) {
            (true, Direction::Forward) => Status::Forward,
            (true, Direction::Reverse) => Status::Reverse,
            (false, _) if self.progress >= 1.0 => Status::Completed,
            (false, _) => Status::Dismissed,
        }
    }

    /// Returns true while a run is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Starts or redirects the transition toward 1.0.
    ///
    /// Returns `Some(Settled::Completed)` when the target is reached
    /// immediately (already at 1.0, or zero duration).
    pub fn forward(&mut self, now: Instant) -> Option<Settled> {
        self.animate_to(Direction::Forward, now)
    }

    /// Starts or redirects the transition toward 0.0.
    ///
    /// Returns `Some(Settled::Dismissed)` when the target is reached
    /// immediately (already at 0.0, or zero duration).
    pub fn reverse(&mut self, now: Instant) -> Option<Settled> {
        self.animate_to(Direction::Reverse, now)
    }

    /// Jumps back to 0.0 and runs forward again.
    pub fn restart(&mut self, now: Instant) -> Option<Settled> {
        self.progress = 0.0;
        self.run = None;
        self.forward(now)
    }

    /// Advances progress to `now`.
    ///
    /// Returns the completion signal on the tick that reaches the target, and
    /// `None` on every other tick, including ticks while idle.
    pub fn tick(&mut self, now: Instant) -> Option<Settled> {
        let run = self.run?;
        self.progress = self.sample(run, now);
        self.settle_if_done()
    }

    fn animate_to(&mut self, direction: Direction, now: Instant) -> Option<Settled> {
        if let Some(run) = self.run {
            self.progress = self.sample(run, now);
        }
        self.direction = direction;
        self.run = Some(Run {
            started_at: now,
            from: self.progress,
        });

        if self.duration.is_zero() {
            self.progress = self.target();
        }
        self.settle_if_done()
    }

    fn target(&self) -> f32 {
        match self.direction {
            Direction::Forward => 1.0,
            Direction::Reverse => 0.0,
        }
    }

    fn sample(&self, run: Run, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.target();
        }
        let elapsed = now.saturating_duration_since(run.started_at);
        let delta = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let value = match self.direction {
            Direction::Forward => run.from + delta,
            Direction::Reverse => run.from - delta,
        };
        value.clamp(0.0, 1.0)
    }

    fn settle_if_done(&mut self) -> Option<Settled> {
        let settled = match self.direction {
            Direction::Forward if self.progress >= 1.0 => Settled::Completed,
            Direction::Reverse if self.progress <= 0.0 => Settled::Dismissed,
            _ => return None,
        };
        tracing::trace!(?settled, "transition settled");
        self.run = None;
        Some(settled)
    }
}
