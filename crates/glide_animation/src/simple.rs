//! Single-value animations
//!
//! [`SimpleAnimation`] owns a [`Duration`] and one [`TimedTransition`] bound
//! to it, for the common case of animating a single property.

use std::rc::Rc;
use std::sync::Arc;

use glide_core::clock::Clock;
use glide_core::option::OptionValue;

use crate::description::AnimationDescription;
use crate::duration::{Direction, Duration, LengthSource, Tick};
use crate::easing::Easing;
use crate::transition::TimedTransition;

/// A duration together with the one transition it drives
#[derive(Debug)]
pub struct SimpleAnimation {
    duration: Duration,
    transition: TimedTransition,
}

impl SimpleAnimation {
    pub fn new(length: Arc<dyn OptionValue<i32>>, smoothing: Easing) -> Self {
        Self::from_duration(Duration::new(length, smoothing))
    }

    pub fn from_description(description: Arc<dyn OptionValue<AnimationDescription>>) -> Self {
        Self::from_duration(Duration::from_description(description))
    }

    pub fn with_clock(source: LengthSource, clock: Rc<dyn Clock>) -> Self {
        Self::from_duration(Duration::with_clock(source, clock))
    }

    fn from_duration(duration: Duration) -> Self {
        let transition = TimedTransition::new(&duration, 0.0, 0.0);
        Self {
            duration,
            transition,
        }
    }

    /// Animate from `start` to `end`, restarting the clock
    pub fn animate_from_to(&mut self, start: f64, end: f64) {
        self.transition.set(start, end);
        self.duration.start();
    }

    /// Animate from the current value to `end`
    pub fn animate_to(&mut self, end: f64) {
        self.transition.restart_with_end(end);
        self.duration.start();
    }

    /// Restart towards the current end from the current value
    pub fn animate(&mut self) {
        self.transition.restart_same_end();
        self.duration.start();
    }

    pub fn value(&self) -> f64 {
        self.transition.value()
    }

    pub fn progress(&self) -> f64 {
        self.duration.progress()
    }

    /// See [`Duration::running`]
    pub fn running(&self) -> bool {
        self.duration.running()
    }

    pub fn tick(&self) -> Tick {
        self.duration.tick()
    }

    pub fn reverse(&self) {
        self.duration.reverse();
    }

    pub fn direction(&self) -> Direction {
        self.duration.direction()
    }

    pub fn flip(&mut self) {
        self.transition.flip();
    }

    pub fn start_value(&self) -> f64 {
        self.transition.start()
    }

    pub fn end_value(&self) -> f64 {
        self.transition.end()
    }

    pub fn duration(&self) -> &Duration {
        &self.duration
    }

    pub fn transition(&self) -> &TimedTransition {
        &self.transition
    }

    pub fn transition_mut(&mut self) -> &mut TimedTransition {
        &mut self.transition
    }

    /// An independent copy with its own timer
    pub fn duplicate(&self) -> Self {
        let duration = self.duration.duplicate();
        let transition =
            TimedTransition::new(&duration, self.transition.start(), self.transition.end());
        Self {
            duration,
            transition,
        }
    }
}
