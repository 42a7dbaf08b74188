//! Animation scheduler
//!
//! Holds the simple animations of a surface and polls each of them once per
//! frame, reporting which ones completed on that frame.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::duration::Tick;
use crate::simple::SimpleAnimation;

new_key_type! {
    pub struct AnimationId;
}

/// Animations that completed on one tick
pub type Finished = SmallVec<[AnimationId; 4]>;

/// The animation scheduler that ticks all registered animations
#[derive(Debug, Default)]
pub struct AnimationScheduler {
    animations: SlotMap<AnimationId, SimpleAnimation>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
        }
    }

    pub fn add(&mut self, animation: SimpleAnimation) -> AnimationId {
        self.animations.insert(animation)
    }

    pub fn get(&self, id: AnimationId) -> Option<&SimpleAnimation> {
        self.animations.get(id)
    }

    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut SimpleAnimation> {
        self.animations.get_mut(id)
    }

    pub fn remove(&mut self, id: AnimationId) -> Option<SimpleAnimation> {
        self.animations.remove(id)
    }

    /// Poll every animation once.
    ///
    /// Each animation shows up in the result on exactly one tick per start.
    pub fn tick(&mut self) -> Finished {
        let finished: Finished = self
            .animations
            .iter()
            .filter(|(_, animation)| animation.tick() == Tick::Finished)
            .map(|(id, _)| id)
            .collect();

        if !finished.is_empty() {
            tracing::trace!(count = finished.len(), "animations finished");
        }
        finished
    }

    /// Check if any animation is still running or has a completion that
    /// [`tick`](Self::tick) has not reported yet
    pub fn has_active_animations(&self) -> bool {
        self.animations
            .iter()
            .any(|(_, animation)| animation.duration().is_active())
    }

    /// Iterate over all animations (immutable)
    pub fn iter(&self) -> impl Iterator<Item = (AnimationId, &SimpleAnimation)> {
        self.animations.iter()
    }

    /// Iterate over all animations (mutable)
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AnimationId, &mut SimpleAnimation)> {
        self.animations.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}
