//! Page collections
//!
//! One fetched batch of typed items together with its cursor links. A page
//! is built from the HAL list envelope `{count, _embedded, _links}` and is
//! immutable after construction; it keeps hold of the transport so it can
//! resolve its own neighbours on demand.

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::cursor::{CursorStream, Direction};
use crate::error::{Error, Result};
use crate::resource::{self, Resource};
use crate::transport::Transport;

/// A single fetchable reference inside `_links`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    /// Target URL, absolute as written by the server
    pub href: String,
    /// Advertised media type, when the server sends one
    #[serde(rename = "type", default)]
    pub media_type: Option<String>,
}

/// Cursor links of one page.
///
/// Absent links and explicit `null` links both deserialize to `None`, so a
/// boundary page looks the same no matter how the server spells it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageLinks {
    /// The page itself
    #[serde(rename = "self", default)]
    pub self_link: Option<Link>,
    /// Strictly later page, when one exists
    #[serde(default)]
    pub next: Option<Link>,
    /// Strictly earlier page, when one exists
    #[serde(default)]
    pub previous: Option<Link>,
    /// First page of the collection
    #[serde(default)]
    pub first: Option<Link>,
    /// Endpoint documentation
    #[serde(default)]
    pub documentation: Option<Link>,
}

/// Raw list envelope as served by the API
#[derive(Deserialize)]
struct Envelope {
    count: u64,
    #[serde(rename = "_embedded", default)]
    embedded: serde_json::Map<String, Value>,
    #[serde(rename = "_links", default)]
    links: PageLinks,
}

/// One materialized page of `T` with its cursor links.
pub struct Page<T: Resource> {
    count: u64,
    items: Vec<T>,
    links: PageLinks,
    transport: Arc<dyn Transport>,
}

impl<T: Resource> Page<T> {
    /// Build a page from a raw list-response body.
    ///
    /// Records are converted one by one; an unconvertible record fails the
    /// whole page rather than being skipped silently.
    pub(crate) fn from_body(transport: Arc<dyn Transport>, body: Value) -> Result<Self> {
        let envelope: Envelope = serde_json::from_value(body)?;
        let mut embedded = envelope.embedded;

        let records = match embedded.remove(T::COLLECTION_KEY) {
            Some(Value::Array(records)) => records,
            Some(_) | None => return Err(Error::data_shape(T::COLLECTION_KEY)),
        };

        let mut items = Vec::with_capacity(records.len());
        for record in records {
            items.push(resource::from_record::<T>(record)?);
        }

        Ok(Self {
            count: envelope.count,
            items,
            links: envelope.links,
            transport,
        })
    }

    /// Fetch and build the page a cursor link points at.
    pub(crate) async fn fetch(transport: Arc<dyn Transport>, link: &Link) -> Result<Self> {
        debug!("Following cursor link: {}", link.href);
        let body = transport.execute(Method::GET, &link.href).await?;
        Self::from_body(transport, body)
    }

    /// Items of this page in server order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, keeping only its items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Iterate over the items of this page
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of items actually present
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page holds no items
    ///
    /// An empty page is a valid page; it still carries links.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item count declared by the server
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Cursor links of this page
    pub fn links(&self) -> &PageLinks {
        &self.links
    }

    /// Whether a strictly later page exists
    pub fn has_next(&self) -> bool {
        self.links.next.is_some()
    }

    /// Whether a strictly earlier page exists
    pub fn has_previous(&self) -> bool {
        self.links.previous.is_some()
    }

    /// Fetch the next page, or `None` when this is the last one
    pub async fn next_page(&self) -> Result<Option<Page<T>>> {
        match &self.links.next {
            Some(link) => Ok(Some(Self::fetch(Arc::clone(&self.transport), link).await?)),
            None => Ok(None),
        }
    }

    /// Fetch the previous page, or `None` when this is the first one
    pub async fn previous_page(&self) -> Result<Option<Page<T>>> {
        match &self.links.previous {
            Some(link) => Ok(Some(Self::fetch(Arc::clone(&self.transport), link).await?)),
            None => Ok(None),
        }
    }

    /// Turn this page into a lazy item stream walking `direction`
    pub fn into_cursor(self, direction: Direction) -> CursorStream<T> {
        CursorStream::new(self, direction)
    }

    pub(crate) fn into_parts(self) -> (Arc<dyn Transport>, Vec<T>, PageLinks) {
        (self.transport, self.items, self.links)
    }
}

impl<'a, T: Resource> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Resource> std::fmt::Debug for Page<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("count", &self.count)
            .field("len", &self.items.len())
            .field("links", &self.links)
            .finish_non_exhaustive()
    }
}
