//! Result Artifacts
//!
//! The labeled CSV returned by the classifier lives in an [`ArtifactRegistry`]
//! under an opaque [`ArtifactHandle`]. Consumers only ever see the derived
//! reference URL (`artifact://<uuid>`).
//!
//! ## Lifecycle
//!
//! 1. `create` registers the bytes and returns a [`Handoff`]
//! 2. `Handoff::into_route` hands the reference off exactly once
//! 3. `fetch` reads the bytes any number of times
//! 4. `release` drops them; later fetches fail with `ArtifactReleased`
//!
//! Nothing is released automatically. The results view releases on teardown.
//! Only the most recent releases are remembered; older handles report
//! `ArtifactNotFound` instead of `ArtifactReleased`.

mod route;

pub use route::Route;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use crate::constants::results::{ARTIFACT_SCHEME, RELEASED_HISTORY};
use crate::types::{Result, ScanError};

/// Opaque artifact identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtifactHandle(Uuid);

impl ArtifactHandle {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reference URL derived from this handle
    pub fn url(&self) -> String {
        format!("{}://{}", ARTIFACT_SCHEME, self.0)
    }

    /// Recover the handle from a reference URL
    pub fn from_url(reference: &str) -> Result<Self> {
        let url = Url::parse(reference)
            .map_err(|e| ScanError::ArtifactNotFound(format!("{}: {}", reference, e)))?;

        if url.scheme() != ARTIFACT_SCHEME {
            return Err(ScanError::ArtifactNotFound(format!(
                "{}: not an artifact reference",
                reference
            )));
        }

        url.host_str()
            .and_then(|host| Uuid::parse_str(host).ok())
            .map(Self)
            .ok_or_else(|| ScanError::ArtifactNotFound(reference.to_string()))
    }
}

impl fmt::Display for ArtifactHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url())
    }
}

/// Labeled CSV payload returned by the classifier
#[derive(Debug)]
pub struct ResultArtifact {
    handle: ArtifactHandle,
    bytes: Arc<[u8]>,
    download_name: String,
    created_at: DateTime<Utc>,
}

impl ResultArtifact {
    pub fn handle(&self) -> ArtifactHandle {
        self.handle
    }

    pub fn url(&self) -> String {
        self.handle.url()
    }

    pub fn bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// File name offered to the user on download
    pub fn download_name(&self) -> &str {
        &self.download_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// One-shot transfer of an artifact reference to the results view
#[derive(Debug)]
#[must_use = "a handoff that is never turned into a route leaks its artifact"]
pub struct Handoff {
    handle: ArtifactHandle,
}

impl Handoff {
    pub fn handle(&self) -> ArtifactHandle {
        self.handle
    }

    pub fn url(&self) -> String {
        self.handle.url()
    }

    /// Consume the handoff into the results route
    pub fn into_route(self) -> Route {
        Route::results(self.handle.url())
    }
}

/// Session-scoped arena of live artifacts keyed by handle
#[derive(Debug, Default)]
pub struct ArtifactRegistry {
    live: DashMap<ArtifactHandle, Arc<ResultArtifact>>,
    /// Recently released handles, oldest first, capped at `RELEASED_HISTORY`
    released: Mutex<VecDeque<ArtifactHandle>>,
}

pub type SharedRegistry = Arc<ArtifactRegistry>;

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedRegistry {
        Arc::new(Self::new())
    }

    /// Register a payload and return its handoff
    pub fn create(&self, bytes: impl Into<Arc<[u8]>>, download_name: impl Into<String>) -> Handoff {
        let handle = ArtifactHandle::new();
        let artifact = ResultArtifact {
            handle,
            bytes: bytes.into(),
            download_name: download_name.into(),
            created_at: Utc::now(),
        };
        debug!("Registered artifact {} ({} bytes)", handle, artifact.len());
        self.live.insert(handle, Arc::new(artifact));
        Handoff { handle }
    }

    /// Resolve a reference URL to its artifact
    pub fn get(&self, reference: &str) -> Result<Arc<ResultArtifact>> {
        let handle = ArtifactHandle::from_url(reference)?;
        if let Some(artifact) = self.live.get(&handle) {
            return Ok(Arc::clone(artifact.value()));
        }
        if self.was_released(handle) {
            Err(ScanError::ArtifactReleased(reference.to_string()))
        } else {
            Err(ScanError::ArtifactNotFound(reference.to_string()))
        }
    }

    /// Read the bytes behind a reference URL.
    ///
    /// Same-process read; yields once so callers observe it as a suspension
    /// point like any other fetch.
    pub async fn fetch(&self, reference: &str) -> Result<Arc<[u8]>> {
        tokio::task::yield_now().await;
        self.get(reference).map(|artifact| artifact.bytes())
    }

    /// Release an artifact. Returns false if it was not live.
    pub fn release(&self, handle: ArtifactHandle) -> bool {
        match self.live.remove(&handle) {
            Some(_) => {
                self.remember_released(handle);
                debug!("Released artifact {}", handle);
                true
            }
            None => {
                warn!("Release of non-live artifact {}", handle);
                false
            }
        }
    }

    /// Release by reference URL
    pub fn release_url(&self, reference: &str) -> Result<bool> {
        Ok(self.release(ArtifactHandle::from_url(reference)?))
    }

    /// Number of artifacts still holding bytes
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Number of released handles still remembered
    pub fn released_count(&self) -> usize {
        self.released.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn was_released(&self, handle: ArtifactHandle) -> bool {
        self.released
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&handle)
    }

    fn remember_released(&self, handle: ArtifactHandle) {
        let mut released = self.released.lock().unwrap_or_else(|e| e.into_inner());
        if released.len() == RELEASED_HISTORY {
            released.pop_front();
        }
        released.push_back(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_url_round_trip() {
        let handle = ArtifactHandle::new();
        let url = handle.url();
        assert!(url.starts_with("artifact://"));
        assert_eq!(ArtifactHandle::from_url(&url).unwrap(), handle);
    }

    #[test]
    fn test_rejects_foreign_urls() {
        assert!(ArtifactHandle::from_url("http://localhost/x").is_err());
        assert!(ArtifactHandle::from_url("artifact://not-a-uuid").is_err());
        assert!(ArtifactHandle::from_url("garbage").is_err());
    }

    #[tokio::test]
    async fn test_create_fetch_release() {
        let registry = ArtifactRegistry::new();
        let handoff = registry.create(b"text,label\nhi,1\n".to_vec(), "analyzed_results.csv");
        let url = handoff.url();
        assert_eq!(registry.live_count(), 1);

        // repeated reads
        for _ in 0..3 {
            let bytes = registry.fetch(&url).await.unwrap();
            assert_eq!(&bytes[..], b"text,label\nhi,1\n");
        }

        let artifact = registry.get(&url).unwrap();
        assert_eq!(artifact.download_name(), "analyzed_results.csv");
        assert_eq!(artifact.url(), url);

        assert!(registry.release(handoff.handle()));
        assert!(!registry.release(handoff.handle()));
        assert_eq!(registry.live_count(), 0);

        assert!(matches!(
            registry.fetch(&url).await,
            Err(ScanError::ArtifactReleased(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_reference() {
        let registry = ArtifactRegistry::new();
        let url = ArtifactHandle::new().url();
        assert!(matches!(
            registry.fetch(&url).await,
            Err(ScanError::ArtifactNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_released_history_is_bounded() {
        let registry = ArtifactRegistry::new();
        let mut urls = Vec::new();
        for _ in 0..RELEASED_HISTORY + 10 {
            let handoff = registry.create(b"text,label\n".to_vec(), "analyzed_results.csv");
            urls.push(handoff.url());
            assert!(registry.release(handoff.handle()));
        }

        assert_eq!(registry.live_count(), 0);
        assert_eq!(registry.released_count(), RELEASED_HISTORY);

        // oldest handles fall out of the history
        assert!(matches!(
            registry.fetch(&urls[0]).await,
            Err(ScanError::ArtifactNotFound(_))
        ));
        assert!(matches!(
            registry.fetch(urls.last().unwrap()).await,
            Err(ScanError::ArtifactReleased(_))
        ));
    }

    #[test]
    fn test_handoff_into_route() {
        let registry = ArtifactRegistry::new();
        let handoff = registry.create(Vec::<u8>::new(), "analyzed_results.csv");
        let url = handoff.url();
        let route = handoff.into_route();
        assert_eq!(route.file_url(), Some(url.as_str()));
    }
}
