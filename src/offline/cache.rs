//! Versioned cache-then-network resource cache.

use std::collections::BTreeMap;

use tracing::{debug, error, info};

use super::error::CacheError;

/// Origin classification of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Same-origin response
    Basic,
    /// Cross-origin response with CORS headers
    Cors,
    /// Cross-origin response without readable contents
    Opaque,
}

/// A request for a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub url: String,
}

impl Request {
    /// Creates a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.into(),
        }
    }

    /// Creates a request with any method.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
        }
    }

    fn is_get(&self) -> bool {
        self.method.eq_ignore_ascii_case("GET")
    }
}

/// A fetched resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub url: String,
    pub status: u16,
    pub kind: ResponseKind,
    pub body: Vec<u8>,
}

impl Resource {
    /// A same-origin 200 response.
    pub fn ok(url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            status: 200,
            kind: ResponseKind::Basic,
            body: body.into(),
        }
    }

    /// Returns true if the response may be stored.
    pub fn is_cacheable(&self) -> bool {
        self.status == 200 && self.kind == ResponseKind::Basic
    }
}

/// Network access used to fill the cache.
pub trait Fetcher {
    /// Fetches a resource.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Network` if the request fails.
    fn fetch(&self, request: &Request) -> Result<Resource, CacheError>;
}

/// How a request was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Not handled by the cache (non-GET)
    Passthrough,
    /// Served from the cache
    Cached(Resource),
    /// Served from the network
    Network(Resource),
}

/// Named caches, each mapping URL to resource.
pub type CacheStorage = BTreeMap<String, BTreeMap<String, Resource>>;

/// Resource cache keyed by a version string.
#[derive(Debug, Clone)]
pub struct OfflineCache {
    version: String,
    precache: Vec<String>,
    storage: CacheStorage,
}

impl OfflineCache {
    /// Creates a cache for `version` that will precache `precache` on install.
    pub fn new<I, S>(version: impl Into<String>, precache: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_storage(version, precache, CacheStorage::new())
    }

    /// Creates a cache on top of existing named caches.
    pub fn with_storage<I, S>(
        version: impl Into<String>,
        precache: I,
        storage: CacheStorage,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            version: version.into(),
            precache: precache.into_iter().map(Into::into).collect(),
            storage,
        }
    }

    /// Name of the current cache.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Names of every cache present.
    pub fn cache_names(&self) -> Vec<String> {
        self.storage.keys().cloned().collect()
    }

    /// Returns a stored resource from the current cache.
    pub fn lookup(&self, url: &str) -> Option<&Resource> {
        self.storage.get(&self.version).and_then(|cache| cache.get(url))
    }

    /// Fetches and stores every precache URL.
    ///
    /// All-or-nothing: if any resource fails, nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or status error.
    pub fn install(&mut self, fetcher: &dyn Fetcher) -> Result<usize, CacheError> {
        info!("Installing offline cache {}", self.version);
        let mut fetched = Vec::with_capacity(self.precache.len());

        for url in &self.precache {
            let resource = fetcher.fetch(&Request::get(url.clone())).map_err(|e| {
                error!("Offline cache install failed: {}", e);
                e
            })?;
            if !(200..300).contains(&resource.status) {
                let err = CacheError::BadStatus(url.clone(), resource.status);
                error!("Offline cache install failed: {}", err);
                return Err(err);
            }
            fetched.push((url.clone(), resource));
        }

        let count = fetched.len();
        let cache = self.storage.entry(self.version.clone()).or_default();
        cache.extend(fetched);
        info!("Offline cache {} installed ({} resources)", self.version, count);
        Ok(count)
    }

    /// Deletes every cache whose name is not the current version.
    ///
    /// Returns the deleted names.
    pub fn activate(&mut self) -> Vec<String> {
        let stale: Vec<String> = self
            .storage
            .keys()
            .filter(|name| **name != self.version)
            .cloned()
            .collect();
        for name in &stale {
            info!("Deleting old cache {}", name);
            self.storage.remove(name);
        }
        stale
    }

    /// Answers a request from the cache, falling back to the network.
    ///
    /// Successful same-origin network responses are stored for next time.
    ///
    /// # Errors
    ///
    /// Returns the fetch error when the resource is not cached and the
    /// network request fails.
    pub fn handle(
        &mut self,
        request: &Request,
        fetcher: &dyn Fetcher,
    ) -> Result<FetchOutcome, CacheError> {
        if !request.is_get() {
            return Ok(FetchOutcome::Passthrough);
        }

        if let Some(resource) = self.lookup(&request.url) {
            debug!("Serving from cache: {}", request.url);
            return Ok(FetchOutcome::Cached(resource.clone()));
        }

        debug!("Fetching from network: {}", request.url);
        let resource = fetcher.fetch(request).map_err(|e| {
            error!("Fetch failed: {}", e);
            e
        })?;

        if resource.is_cacheable() {
            self.storage
                .entry(self.version.clone())
                .or_default()
                .insert(request.url.clone(), resource.clone());
        }
        Ok(FetchOutcome::Network(resource))
    }
}
