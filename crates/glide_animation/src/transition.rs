//! Timed transitions between two values

use crate::duration::Duration;

/// A start/end pair interpolated by a shared [`Duration`]
#[derive(Debug)]
pub struct TimedTransition {
    start: f64,
    end: f64,
    duration: Duration,
}

impl TimedTransition {
    /// Bind a transition to `duration`; the timer itself is shared, not copied
    pub fn new(duration: &Duration, start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            duration: duration.share(),
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// The timer driving this transition
    pub fn duration(&self) -> &Duration {
        &self.duration
    }

    pub fn set(&mut self, start: f64, end: f64) {
        self.start = start;
        self.end = end;
    }

    /// Continue from the current value towards a new end
    pub fn restart_with_end(&mut self, end: f64) {
        self.start = self.value();
        self.end = end;
    }

    /// Continue from the current value towards the same end
    pub fn restart_same_end(&mut self) {
        self.start = self.value();
    }

    /// Swap start and end
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }

    /// Current value, weighted by the eased progress of the duration
    pub fn value(&self) -> f64 {
        let progress = self.duration.progress();
        self.start + progress * (self.end - self.start)
    }
}

impl From<&TimedTransition> for f64 {
    fn from(transition: &TimedTransition) -> f64 {
        transition.value()
    }
}
