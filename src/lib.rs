// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

//! # halcursor
//!
//! Typed cursor pagination for HAL-style REST APIs.
//!
//! APIs in this family serve collections as `{count, _embedded, _links}`
//! envelopes, where `_links.next` and `_links.previous` carry opaque cursor
//! URLs. This crate turns those envelopes into typed [`Page`]s and lazy
//! [`CursorStream`]s, so callers pull items and never touch a link by hand.
//!
//! ## Features
//!
//! - **Typed pages**: one generic component per collection, parameterized
//!   by the [`Resource`] type
//! - **Lazy traversal**: forward or backward, one page in memory at a time,
//!   fetches happen only at page boundaries
//! - **Validated lookups**: id prefixes are checked before any network
//!   traffic, so a typo costs zero requests
//! - **Pluggable transport**: reqwest out of the box, anything that
//!   implements [`Transport`] for tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use halcursor::{ApiClient, ListQuery, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ApiClient::from_url("https://api.example.com/v2");
//!
//!     // One page, on demand
//!     let page = client.balances().page(&ListQuery::new().limit(25)).await?;
//!     for balance in &page {
//!         println!("{}: {}", balance.id, balance.available_amount);
//!     }
//!
//!     // Or walk the whole collection lazily
//!     let mut cursor = client.balances().iterate(&ListQuery::new()).await?;
//!     while let Some(balance) = cursor.try_next().await? {
//!         println!("{}", balance.id);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                        ApiClient                        │
//! │        balances()   payments()   endpoint::<T>()        │
//! └────────────────────────────┬────────────────────────────┘
//!                              │
//! ┌────────────────────────────┴────────────────────────────┐
//! │                  CollectionEndpoint<T>                  │
//! │  page(query) → Page<T>    iterate(query) → CursorStream │
//! │  get(id) / get_with(id)   id prefix checked up front    │
//! └────────────────────────────┬────────────────────────────┘
//!                              │ follows _links.next / .previous
//! ┌────────────────────────────┴────────────────────────────┐
//! │                   Transport (reqwest)                   │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for halcursor
pub mod error;

/// Query construction for list and read calls
pub mod query;

/// Resource typing and the record factory
pub mod resource;

/// Transport layer
pub mod transport;

/// Page collections
pub mod page;

/// Lazy cursor traversal
pub mod cursor;

/// Collection endpoints
pub mod endpoint;

/// Built-in resource bindings
pub mod resources;

/// Top-level API client
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::ApiClient;
pub use cursor::{CursorStream, Direction};
pub use endpoint::CollectionEndpoint;
pub use error::{Error, Result};
pub use page::{Link, Page, PageLinks};
pub use query::{Filters, ListQuery};
pub use resource::Resource;
pub use transport::{HttpTransport, HttpTransportConfig, Transport};

// Re-export the built-in resources
pub use resources::{Balance, Payment};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
