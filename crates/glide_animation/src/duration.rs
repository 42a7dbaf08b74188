//! Eased durations
//!
//! A [`Duration`] turns elapsed clock time into an eased progress value. Its
//! length comes from a live configuration option and is re-read on every
//! query, so reconfiguring an animation takes effect mid-flight.
//!
//! One duration is usually shared by several [`TimedTransition`]s that animate
//! different properties of the same element in lock-step.
//!
//! [`TimedTransition`]: crate::transition::TimedTransition

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use glide_core::clock::{Clock, MonotonicClock};
use glide_core::option::OptionValue;

use crate::description::AnimationDescription;
use crate::easing::Easing;

/// Where a duration reads its length (and easing) from
#[derive(Clone)]
pub enum LengthSource {
    /// No length configured; every query treats the length as 1ms
    Unset,
    /// Plain millisecond option paired with a fixed easing
    Millis {
        length: Arc<dyn OptionValue<i32>>,
        smoothing: Easing,
    },
    /// Description option carrying both length and easing
    Description(Arc<dyn OptionValue<AnimationDescription>>),
}

impl LengthSource {
    pub fn millis(length: Arc<dyn OptionValue<i32>>, smoothing: Easing) -> Self {
        LengthSource::Millis { length, smoothing }
    }

    pub fn description(description: Arc<dyn OptionValue<AnimationDescription>>) -> Self {
        LengthSource::Description(description)
    }

    /// Current length in ms (at least 1) and easing
    fn resolve(&self) -> (u64, Easing) {
        let (length_ms, easing) = match self {
            LengthSource::Millis { length, smoothing } => (length.get_value(), *smoothing),
            LengthSource::Description(description) => {
                let description = description.get_value();
                (description.length_ms, description.easing)
            }
            LengthSource::Unset => {
                tracing::debug!("duration queried without a configured length");
                (1, Easing::default())
            }
        };
        (length_ms.max(1) as u64, easing)
    }
}

impl fmt::Debug for LengthSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthSource::Unset => f.write_str("Unset"),
            LengthSource::Millis { length, smoothing } => f
                .debug_struct("Millis")
                .field("length", &length.get_value())
                .field("smoothing", smoothing)
                .finish(),
            LengthSource::Description(description) => f
                .debug_tuple("Description")
                .field(&description.get_value().to_string())
                .finish(),
        }
    }
}

/// Playback direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

/// Observable phase of a duration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Never started
    Idle,
    /// Elapsed time is below the length
    Running,
    /// Elapsed time has reached the length
    Completed,
}

/// Outcome of polling a duration once per frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Still in progress
    Running,
    /// Completed since the previous poll; reported exactly once per start
    Finished,
    /// Not running
    Idle,
}

struct DurationState {
    source: LengthSource,
    clock: Rc<dyn Clock>,
    start_point: Cell<Option<Instant>>,
    /// Milliseconds already credited to the run at `start_point`
    head_start_ms: Cell<u64>,
    running: Cell<bool>,
    reverse: Cell<bool>,
}

/// Shared, clock-driven animation timer
pub struct Duration {
    state: Rc<DurationState>,
}

impl Duration {
    /// Duration whose length is a millisecond option, shaped by `smoothing`
    pub fn new(length: Arc<dyn OptionValue<i32>>, smoothing: Easing) -> Self {
        Self::with_clock(
            LengthSource::millis(length, smoothing),
            Rc::new(MonotonicClock),
        )
    }

    /// Duration whose length and easing come from a description option
    pub fn from_description(description: Arc<dyn OptionValue<AnimationDescription>>) -> Self {
        Self::with_clock(
            LengthSource::description(description),
            Rc::new(MonotonicClock),
        )
    }

    /// Duration driven by an explicit clock
    pub fn with_clock(source: LengthSource, clock: Rc<dyn Clock>) -> Self {
        Self {
            state: Rc::new(DurationState {
                source,
                clock,
                start_point: Cell::new(None),
                head_start_ms: Cell::new(0),
                running: Cell::new(false),
                reverse: Cell::new(false),
            }),
        }
    }

    /// Another handle to the same timer
    pub fn share(&self) -> Duration {
        Duration {
            state: Rc::clone(&self.state),
        }
    }

    /// An independent timer with a copy of the current state
    pub fn duplicate(&self) -> Duration {
        let state = &self.state;
        Duration {
            state: Rc::new(DurationState {
                source: state.source.clone(),
                clock: Rc::clone(&state.clock),
                start_point: Cell::new(state.start_point.get()),
                head_start_ms: Cell::new(state.head_start_ms.get()),
                running: Cell::new(state.running.get()),
                reverse: Cell::new(state.reverse.get()),
            }),
        }
    }

    /// Whether both handles drive the same timer
    pub fn is_shared_with(&self, other: &Duration) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Restart the clock from now
    pub fn start(&self) {
        self.state.running.set(true);
        self.state.head_start_ms.set(0);
        self.state.start_point.set(Some(self.state.clock.now()));
    }

    /// Current length in milliseconds, never below 1
    pub fn length_ms(&self) -> u64 {
        self.state.source.resolve().0
    }

    /// Whole milliseconds since the last start, `None` if never started
    pub fn elapsed_ms(&self) -> Option<u64> {
        let start = self.state.start_point.get()?;
        let elapsed = self.state.clock.now().saturating_duration_since(start);
        Some(elapsed.as_millis() as u64 + self.state.head_start_ms.get())
    }

    pub fn phase(&self) -> Phase {
        match self.elapsed_ms() {
            None => Phase::Idle,
            Some(elapsed) if elapsed < self.length_ms() => Phase::Running,
            Some(_) => Phase::Completed,
        }
    }

    fn is_ready(&self) -> bool {
        self.elapsed_ms()
            .map_or(true, |elapsed| elapsed >= self.length_ms())
    }

    /// Eased progress; 0 → 1 going forward, 1 → 0 in reverse
    pub fn progress(&self) -> f64 {
        let (length, easing) = self.state.source.resolve();
        let reverse = self.state.reverse.get();

        match self.elapsed_ms() {
            Some(elapsed) if elapsed < length => {
                let mut pct = (elapsed as f64 / length as f64).clamp(0.0, 1.0);
                if reverse {
                    pct = 1.0 - pct;
                }
                easing.apply(pct)
            }
            _ => easing.apply(if reverse { 0.0 } else { 1.0 }),
        }
    }

    /// Poll the timer.
    ///
    /// Returns [`Tick::Finished`] on the first poll after the length has been
    /// reached, then [`Tick::Idle`] until the next [`start`](Self::start).
    pub fn tick(&self) -> Tick {
        if !self.is_ready() {
            return Tick::Running;
        }

        if self.state.running.replace(false) {
            Tick::Finished
        } else {
            Tick::Idle
        }
    }

    /// `true` while running, and once more on the poll where it completes
    pub fn running(&self) -> bool {
        self.tick() != Tick::Idle
    }

    /// `true` while running, or when completed but not yet reported by
    /// [`tick`](Self::tick). Does not poll.
    pub fn is_active(&self) -> bool {
        self.phase() == Phase::Running || (self.state.running.get() && self.is_ready())
    }

    /// Flip direction, continuing from the current position.
    ///
    /// The run restarts from now with the time already spent credited as the
    /// time remaining in the new direction.
    pub fn reverse(&self) {
        let length = self.length_ms();
        let elapsed = self.elapsed_ms().map_or(length, |elapsed| elapsed.min(length));

        self.state.head_start_ms.set(length - elapsed);
        self.state.start_point.set(Some(self.state.clock.now()));
        self.state.reverse.set(!self.state.reverse.get());
    }

    pub fn direction(&self) -> Direction {
        if self.state.reverse.get() {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::with_clock(LengthSource::Unset, Rc::new(MonotonicClock))
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duration")
            .field("source", &self.state.source)
            .field("start_point", &self.state.start_point.get())
            .field("head_start_ms", &self.state.head_start_ms.get())
            .field("running", &self.state.running.get())
            .field("direction", &self.direction())
            .finish()
    }
}
