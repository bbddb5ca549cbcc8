use serde::{Deserialize, Serialize};

use crate::store::{Record, RecordId};

/// A todo entry; `done` travels as `completed`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Todo {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "completed")]
    pub done: bool,
}

impl Record for Todo {
    const COLLECTION: &'static str = "todos";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
