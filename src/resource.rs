//! Resource typing and the record factory
//!
//! A [`Resource`] binds a deserializable type to the collection endpoint it
//! lives behind: the path, the `_embedded` key its list responses use, and
//! the id prefix its single-item lookups require. Everything the pagination
//! core knows about a concrete API object comes from these constants, so
//! adding a resource means one struct and one trait impl.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// A typed API object served from a cursor-paginated collection.
pub trait Resource: DeserializeOwned + Send + 'static {
    /// Key under `_embedded` that carries this resource's records
    const COLLECTION_KEY: &'static str;

    /// Endpoint path relative to the API base URL, without a leading slash
    const PATH: &'static str;

    /// Required id prefix for single-item lookups, when the API enforces one
    const ID_PREFIX: Option<&'static str>;

    /// Name used in error messages, e.g. `"balance"`
    const NAME: &'static str;
}

/// Convert one raw record into a typed resource.
///
/// Pure conversion, no I/O. Fails with [`Error::JsonParse`] when the record
/// does not match the target type.
///
/// [`Error::JsonParse`]: crate::error::Error::JsonParse
pub fn from_record<T: Resource>(record: Value) -> Result<T> {
    Ok(serde_json::from_value(record)?)
}
