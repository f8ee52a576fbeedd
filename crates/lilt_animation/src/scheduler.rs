//! Animation scheduler
//!
//! Owns every running spring and advances each of them exactly once per
//! [`AnimationScheduler::tick`]. The host calls `tick` once per rendered
//! frame on its UI thread; nothing here blocks or spawns.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::spring::SpringAnimation;

new_key_type! {
    /// Handle to a scheduled animation, used to cancel it
    pub struct AnimationHandle;
}

/// Per-frame value callback
type FrameCallback = Box<dyn FnMut(f64)>;

struct ScheduledAnimation {
    spring: SpringAnimation,
    callback: FrameCallback,
}

/// Frame loop for spring animations
pub struct AnimationScheduler {
    animations: SlotMap<AnimationHandle, ScheduledAnimation>,
    frame: u64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
            frame: 0,
        }
    }

    /// Schedule `spring` to run from the next tick, reporting values to `callback`
    ///
    /// The spring is started regardless of its current state, so a settled
    /// spring produces at least one more frame.
    pub fn animate<F>(&mut self, mut spring: SpringAnimation, callback: F) -> AnimationHandle
    where
        F: FnMut(f64) + 'static,
    {
        spring.start();
        let to = spring.target();
        let handle = self.animations.insert(ScheduledAnimation {
            spring,
            callback: Box::new(callback),
        });
        debug!(?handle, to, "spring animation scheduled");
        handle
    }

    /// Stop scheduling frames for `handle`
    ///
    /// Returns the spring in its settled state, or `None` if the animation
    /// already settled or was cancelled. The callback is dropped.
    pub fn cancel(&mut self, handle: AnimationHandle) -> Option<SpringAnimation> {
        let ScheduledAnimation { mut spring, .. } = self.animations.remove(handle)?;
        spring.stop();
        debug!(?handle, value = spring.value(), "spring animation cancelled");
        Some(spring)
    }

    /// Advance every scheduled animation by one frame
    ///
    /// Returns the number of callbacks invoked. Settled animations are
    /// dropped before this returns.
    pub fn tick(&mut self) -> usize {
        let mut settled: SmallVec<[AnimationHandle; 4]> = SmallVec::new();
        let mut frames = 0;

        for (handle, entry) in self.animations.iter_mut() {
            let callback = &mut entry.callback;
            if !entry.spring.frame(|value| callback(value)) {
                settled.push(handle);
            }
            frames += 1;
        }

        for handle in settled {
            if let Some(entry) = self.animations.remove(handle) {
                trace!(
                    ?handle,
                    frame = self.frame,
                    value = entry.spring.value(),
                    "spring animation settled"
                );
            }
        }

        self.frame += 1;
        frames
    }

    /// Tick until nothing is scheduled or `max_ticks` is reached
    ///
    /// Returns the number of ticks run.
    pub fn run_until_idle(&mut self, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while ticks < max_ticks && self.has_active_animations() {
            self.tick();
            ticks += 1;
        }
        ticks
    }

    pub fn get(&self, handle: AnimationHandle) -> Option<&SpringAnimation> {
        self.animations.get(handle).map(|entry| &entry.spring)
    }

    pub fn is_running(&self, handle: AnimationHandle) -> bool {
        self.animations.contains_key(handle)
    }

    /// Check if any animations are still scheduled
    pub fn has_active_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Number of ticks run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
