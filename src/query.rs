//! Query construction for list and read calls
//!
//! [`ListQuery`] owns the cursor window of a list call (`from` and `limit`)
//! as typed fields; everything else travels in [`Filters`], an ordered
//! string map. The cursor keys are reserved: a filter entry can never
//! shadow them, so the rendered query string is unambiguous no matter in
//! which order the pieces were supplied.

use tracing::warn;
use url::form_urlencoded;

/// Query keys owned by [`ListQuery`] itself.
const RESERVED_KEYS: [&str; 2] = ["from", "limit"];

/// Ordered set of extra query parameters.
///
/// Entries keep insertion order. Inserting one of the reserved cursor keys
/// is refused with a warning rather than silently overriding the typed
/// fields of [`ListQuery`].
#[derive(Debug, Clone, Default)]
pub struct Filters {
    entries: Vec<(String, String)>,
}

impl Filters {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter
    ///
    /// Reserved cursor keys (`from`, `limit`) are dropped.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            warn!("Filter key '{key}' is reserved for cursor control, dropping it");
            return;
        }
        self.entries.push((key, value.into()));
    }

    /// Number of parameters in the set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no parameters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Render as an encoded query string without the leading `?`
    pub(crate) fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Cursor window and filter set for one list call.
///
/// `from` names the first resource id the page should include and `limit`
/// caps the page size; both are optional and the server applies its
/// defaults when they are absent.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    from: Option<String>,
    limit: Option<u32>,
    filters: Filters,
}

impl ListQuery {
    /// Create a query with no cursor window and no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// First resource id the page should include
    #[must_use]
    pub fn from_id(mut self, id: impl Into<String>) -> Self {
        self.from = Some(id.into());
        self
    }

    /// Maximum number of items per page
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Add a single filter parameter
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key, value);
        self
    }

    /// Replace the whole filter set
    #[must_use]
    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Render as an encoded query string without the leading `?`
    ///
    /// Field order is fixed: `from`, `limit`, then filters in insertion
    /// order. Absent fields are omitted entirely, so an empty query renders
    /// as an empty string.
    pub(crate) fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(from) = &self.from {
            serializer.append_pair("from", from);
        }
        if let Some(limit) = self.limit {
            serializer.append_pair("limit", &limit.to_string());
        }
        for (key, value) in self.filters.entries() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Append an encoded query string to a path.
///
/// An empty query leaves the path untouched, never a dangling `?`.
pub(crate) fn append_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}
