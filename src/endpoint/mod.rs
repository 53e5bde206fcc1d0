//! Collection endpoints
//!
//! [`CollectionEndpoint`] is the typed operation surface of one
//! cursor-paginated collection: fetch a page, start a traversal, read a
//! single item. It is generic over the [`Resource`]; per-resource modules
//! only add convenience on top (see [`crate::resources`]).

use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::Method;

use crate::cursor::{CursorStream, Direction};
use crate::error::{Error, Result};
use crate::page::Page;
use crate::query::{append_query, Filters, ListQuery};
use crate::resource::{self, Resource};
use crate::transport::Transport;

/// Typed operations over one collection endpoint.
pub struct CollectionEndpoint<T: Resource> {
    transport: Arc<dyn Transport>,
    _resource: PhantomData<fn() -> T>,
}

impl<T: Resource> CollectionEndpoint<T> {
    /// Create an endpoint over a transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            _resource: PhantomData,
        }
    }

    /// Fetch exactly one page of the collection.
    ///
    /// One request, no link following. The returned [`Page`] can resolve
    /// its own neighbours.
    pub async fn page(&self, query: &ListQuery) -> Result<Page<T>> {
        let target = append_query(T::PATH, &query.to_query_string());
        let body = self.transport.execute(Method::GET, &target).await?;
        Page::from_body(Arc::clone(&self.transport), body)
    }

    /// Lazily traverse the collection forward from the `query` anchor.
    ///
    /// The anchor page is fetched here; later pages are fetched by the
    /// returned stream as items are pulled.
    pub async fn iterate(&self, query: &ListQuery) -> Result<CursorStream<T>> {
        Ok(self.page(query).await?.into_cursor(Direction::Forward))
    }

    /// Lazily traverse the collection backward from the `query` anchor.
    pub async fn iterate_backwards(&self, query: &ListQuery) -> Result<CursorStream<T>> {
        Ok(self.page(query).await?.into_cursor(Direction::Backward))
    }

    /// Fetch a single item by id.
    ///
    /// When the resource declares an id prefix, the id is validated before
    /// any network traffic; a bad id costs zero requests.
    pub async fn get(&self, id: &str) -> Result<T> {
        self.get_with(id, &Filters::new()).await
    }

    /// Fetch a single item by id with extra query parameters.
    pub async fn get_with(&self, id: &str, params: &Filters) -> Result<T> {
        validate_id::<T>(id)?;
        self.read_raw(id, params).await
    }

    /// Read `id` without prefix validation.
    ///
    /// Single entry point for sentinel ids that are fixed literals rather
    /// than caller input.
    pub(crate) async fn read_raw(&self, id: &str, params: &Filters) -> Result<T> {
        let path = format!("{}/{id}", T::PATH);
        let target = append_query(&path, &params.to_query_string());
        let body = self.transport.execute(Method::GET, &target).await?;
        resource::from_record(body)
    }
}

impl<T: Resource> Clone for CollectionEndpoint<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            _resource: PhantomData,
        }
    }
}

impl<T: Resource> std::fmt::Debug for CollectionEndpoint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionEndpoint")
            .field("path", &T::PATH)
            .finish_non_exhaustive()
    }
}

/// Check an externally supplied id against the resource's required prefix
fn validate_id<T: Resource>(id: &str) -> Result<()> {
    if let Some(prefix) = T::ID_PREFIX {
        if id.is_empty() || !id.starts_with(prefix) {
            return Err(Error::validation(T::NAME, id, prefix));
        }
    }
    Ok(())
}
