//! Task payloads

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request to create a task, as dispatched by the form that owns the list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskEvent {
    /// Payload sent verbatim as the request body
    pub detail: Value,
}

impl CreateTaskEvent {
    pub fn new(detail: Value) -> Self {
        Self { detail }
    }
}

/// A task as returned by the server
///
/// Only `id` and `title` are interpreted; every other field is kept in
/// `fields` so templates can still read it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
