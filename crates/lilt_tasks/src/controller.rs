//! Task list controller
//!
//! Creates a task through the API and springs the new item into the list:
//! the item starts transparent and 20px low, then fades in and slides up as
//! a bouncy spring carries its progress from 0 to 1.

use lilt_animation::{AnimationHandle, AnimationScheduler, SpringAnimation, SpringPreset};
use tracing::{debug, warn};

use crate::api::TaskApi;
use crate::error::Result;
use crate::model::{CreateTaskEvent, Task};
use crate::view::{ItemElement, TaskList};

/// Vertical offset, in pixels, new items slide up from
pub const ENTRY_OFFSET: f64 = 20.0;

/// Spring used for the entry animation
pub const ENTRY_PRESET: SpringPreset = SpringPreset::Bouncy;

/// Connects task creation to the list it animates into
pub struct TaskController<A, L> {
    api: A,
    list: L,
}

impl<A: TaskApi, L: TaskList> TaskController<A, L> {
    pub fn new(api: A, list: L) -> Self {
        Self { api, list }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    /// Handle a create event: submit it and animate the resulting item in
    ///
    /// On failure the list is left untouched and the error is returned.
    pub async fn create_task(
        &mut self,
        event: &CreateTaskEvent,
        scheduler: &mut AnimationScheduler,
    ) -> Result<AnimationHandle> {
        let task = match self.api.create_task(&event.detail).await {
            Ok(task) => task,
            Err(err) => {
                warn!(%err, "task not created, list unchanged");
                return Err(err);
            }
        };

        debug!(id = ?task.id, "task created");
        Ok(self.animate_new_task(&task, scheduler))
    }

    /// Insert an item for `task` and schedule its entry animation
    pub fn animate_new_task(
        &mut self,
        task: &Task,
        scheduler: &mut AnimationScheduler,
    ) -> AnimationHandle {
        let mut item = self.list.instantiate(task);
        item.set_opacity(0.0);
        item.set_translate_y(ENTRY_OFFSET);
        self.list.append(&item);

        SpringAnimation::from_preset(ENTRY_PRESET)
            .with_target(1.0)
            .animate(scheduler, move |progress| {
                item.set_opacity(progress);
                item.set_translate_y(ENTRY_OFFSET * (1.0 - progress));
            })
    }
}
