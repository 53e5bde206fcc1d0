//! Lazy cursor traversal
//!
//! A pull-based stream of items spanning page boundaries in one fixed
//! direction. Items of the current page are served from a buffer; the only
//! suspension points are the page-boundary fetches, so dropping the stream
//! between items never leaves a request in flight.

use std::collections::VecDeque;
use std::sync::Arc;

use futures::stream::{self, Stream};
use tracing::debug;

use crate::error::{Error, Result};
use crate::page::{Page, PageLinks};
use crate::resource::Resource;
use crate::transport::Transport;

/// Traversal direction across cursor links, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Follow `next` links
    #[default]
    Forward,
    /// Follow `previous` links
    Backward,
}

/// Lazy single-pass item stream across page boundaries.
///
/// Built from an anchor [`Page`]: yields that page's items first, then
/// fetches the adjacent page on demand until the direction's link is
/// absent. Exhaustion is permanent; walking the collection again means
/// building a new stream.
pub struct CursorStream<T: Resource> {
    transport: Arc<dyn Transport>,
    buffer: VecDeque<T>,
    links: PageLinks,
    direction: Direction,
    done: bool,
    last_href: Option<String>,
}

impl<T: Resource> CursorStream<T> {
    /// Create a stream that drains `page` and then walks `direction`.
    pub(crate) fn new(page: Page<T>, direction: Direction) -> Self {
        let (transport, items, links) = page.into_parts();
        let last_href = links.self_link.as_ref().map(|link| link.href.clone());

        Self {
            transport,
            buffer: VecDeque::from(items),
            links,
            direction,
            done: false,
            last_href,
        }
    }

    /// Direction this stream walks
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the stream is permanently exhausted
    pub fn is_done(&self) -> bool {
        self.done && self.buffer.is_empty()
    }

    /// Yield the next item, fetching the adjacent page when the current one
    /// is drained.
    ///
    /// Returns `Ok(None)` once the traversal is exhausted. A failure while
    /// advancing surfaces here exactly once and terminates the stream;
    /// items already yielded are unaffected.
    pub async fn try_next(&mut self) -> Result<Option<T>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }

            if self.done {
                return Ok(None);
            }

            let link = match self.direction {
                Direction::Forward => self.links.next.clone(),
                Direction::Backward => self.links.previous.clone(),
            };

            let link = match link {
                Some(link) => link,
                None => {
                    self.done = true;
                    return Ok(None);
                }
            };

            // A link pointing back at the page we just came from would loop
            // forever; surface it as a defect instead.
            if self.last_href.as_deref() == Some(link.href.as_str()) {
                self.done = true;
                return Err(Error::cursor_loop(link.href));
            }

            debug!("Advancing cursor {:?} to {}", self.direction, link.href);
            let page = match Page::<T>::fetch(Arc::clone(&self.transport), &link).await {
                Ok(page) => page,
                Err(err) => {
                    self.done = true;
                    return Err(err);
                }
            };

            let (_, items, links) = page.into_parts();
            self.buffer = VecDeque::from(items);
            self.links = links;
            self.last_href = Some(link.href);
        }
    }

    /// Drain the remainder of the traversal into a `Vec`.
    ///
    /// Fetches every remaining page; prefer [`CursorStream::try_next`] or
    /// [`CursorStream::into_stream`] when the collection may be large.
    pub async fn collect(mut self) -> Result<Vec<T>> {
        let mut all = Vec::new();
        while let Some(item) = self.try_next().await? {
            all.push(item);
        }
        Ok(all)
    }

    /// Adapt this cursor into a [`futures::Stream`] of `Result<T>`.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        stream::try_unfold(self, |mut cursor| async move {
            Ok(cursor.try_next().await?.map(|item| (item, cursor)))
        })
    }
}

impl<T: Resource> std::fmt::Debug for CursorStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorStream")
            .field("direction", &self.direction)
            .field("buffered", &self.buffer.len())
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
