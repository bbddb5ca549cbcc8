use serde::{Deserialize, Serialize};

use crate::store::{Record, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: RecordId,
    pub body: String,
}

impl Record for Comment {
    const COLLECTION: &'static str = "comments";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
