//! The record abstraction shared by stores, codec and handlers.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Identifier assigned by a store on creation
pub type RecordId = i64;

/// A typed record that can live in a collection.
///
/// Wire names and omitted fields are declared with serde attributes on the
/// implementing struct (`rename`, `skip`). Deriving `Default` together with a
/// container level `#[serde(default)]` gives missing fields their zero value
/// when a body is decoded.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name used as the path segment, e.g. `"items"`
    const COLLECTION: &'static str;

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);
}
