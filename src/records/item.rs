use serde::{Deserialize, Serialize};

use crate::store::{Record, RecordId};

/// A catalogue item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: RecordId,
    pub name: String,
    pub price: i64,
    /// Internal stock code, never sent or accepted on the wire
    #[serde(skip)]
    pub sku: String,
}

impl Item {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
            ..Default::default()
        }
    }
}

impl Record for Item {
    const COLLECTION: &'static str = "items";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
