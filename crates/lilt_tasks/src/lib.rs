//! Lilt Tasks
//!
//! Controller glue for a task list: a create event goes out as an HTTP
//! request, and on success the new item is inserted off-screen and sprung
//! into place with [`lilt_animation`].
//!
//! - **API**: [`TaskApi`] seam with a reqwest-backed [`HttpTaskApi`]
//! - **View**: [`TaskList`] / [`ItemElement`] traits implemented by the host
//! - **Controller**: [`TaskController`] wiring the two together

pub mod api;
pub mod controller;
pub mod error;
pub mod model;
pub mod view;

pub use api::{HttpTaskApi, TaskApi, TASKS_PATH};
pub use controller::{TaskController, ENTRY_OFFSET, ENTRY_PRESET};
pub use error::{Result, TaskError};
pub use model::{CreateTaskEvent, Task};
pub use view::{ItemElement, TaskList};
