//! Offline resource cache.
//!
//! A versioned cache of fetched resources with cache-then-network lookup:
//! - `install` precaches a fixed list of URLs
//! - `activate` drops every cache left over from other versions
//! - `handle` serves GET requests from the cache, falling back to the
//!   network and storing successful same-origin responses
//!
//! The interactive timer fetches nothing, so the binary never builds a
//! cache; callers embedding the library choose the version name and the
//! precache list.

mod cache;
mod error;

pub use cache::{
    CacheStorage, FetchOutcome, Fetcher, OfflineCache, Request, Resource, ResponseKind,
};
pub use error::CacheError;
