//! Device media library access
//!
//! The platform side (permission prompt, asset creation, picker) sits behind
//! [`MediaProvider`]; [`Gallery`] applies the results to the shared
//! [`MediaLibrary`].

use app_state::MediaLibrary;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Media library permission state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// User granted access
    Granted,
    /// User refused access
    Denied,
    /// User has not answered yet
    Undetermined,
}

impl PermissionStatus {
    /// Check if access was granted
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Gallery error types
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Media library access refused
    #[error("Permission to access media library is required!")]
    PermissionDenied,

    /// Platform media call failed
    #[error("Media provider error: {0}")]
    Provider(String),
}

/// Result type for gallery operations
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Platform media library
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Ask for media library access
    async fn request_permission(&self) -> PermissionStatus;

    /// Copy a local file into the device library, returning the asset URI
    async fn create_asset(&self, uri: &str) -> Result<String>;

    /// Open the picker; `None` when the user cancels
    async fn pick(&self) -> Result<Option<Vec<String>>>;
}

/// Gallery flows bound to a media library
pub struct Gallery {
    provider: Arc<dyn MediaProvider>,
    library: Arc<MediaLibrary>,
}

impl Gallery {
    /// Create a gallery over `provider`, recording into `library`
    pub fn new(provider: Arc<dyn MediaProvider>, library: Arc<MediaLibrary>) -> Self {
        Self { provider, library }
    }

    /// The library this gallery records into
    pub fn library(&self) -> &Arc<MediaLibrary> {
        &self.library
    }

    /// Save `uri` to the device library and record the resulting asset
    ///
    /// Returns `Ok(None)` when the provider fails to create the asset; the
    /// failure is logged and the library is left unchanged.
    pub async fn save_to_gallery(&self, uri: &str) -> Result<Option<String>> {
        self.ensure_permission().await?;

        match self.provider.create_asset(uri).await {
            Ok(asset) => {
                tracing::debug!(asset = %asset, "saved to gallery");
                self.library.add_media(asset.clone());
                Ok(Some(asset))
            }
            Err(e) => {
                tracing::error!("Error saving to gallery: {}", e);
                Ok(None)
            }
        }
    }

    /// Let the user pick media, replacing the library contents
    ///
    /// Returns `false` when the picker was cancelled. Picking only reads
    /// the library, so no permission is requested.
    pub async fn pick_from_gallery(&self) -> Result<bool> {
        match self.provider.pick().await? {
            Some(uris) => {
                tracing::debug!(count = uris.len(), "picked from gallery");
                self.library.set_media(uris);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ensure_permission(&self) -> Result<()> {
        let status = self.provider.request_permission().await;
        if status.is_granted() {
            Ok(())
        } else {
            tracing::warn!(?status, "media library permission not granted");
            Err(GalleryError::PermissionDenied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Provider {}

        #[async_trait]
        impl MediaProvider for Provider {
            async fn request_permission(&self) -> PermissionStatus;
            async fn create_asset(&self, uri: &str) -> Result<String>;
            async fn pick(&self) -> Result<Option<Vec<String>>>;
        }
    }

    fn gallery(provider: MockProvider) -> Gallery {
        Gallery::new(Arc::new(provider), Arc::new(MediaLibrary::new()))
    }

    #[tokio::test]
    async fn test_save_records_asset() {
        let mut provider = MockProvider::new();
        provider.expect_request_permission().returning(|| PermissionStatus::Granted);
        provider.expect_create_asset().times(1).returning(|uri| {
            assert_eq!(uri, "file:///tmp/shot.jpg");
            Ok("ph://asset-1".to_string())
        });

        let gallery = gallery(provider);
        let saved = gallery.save_to_gallery("file:///tmp/shot.jpg").await.unwrap();

        assert_eq!(saved.as_deref(), Some("ph://asset-1"));
        assert_eq!(gallery.library().media(), vec!["ph://asset-1"]);
    }

    #[tokio::test]
    async fn test_save_without_permission() {
        let mut provider = MockProvider::new();
        provider.expect_request_permission().returning(|| PermissionStatus::Denied);
        provider.expect_create_asset().never();

        let gallery = gallery(provider);
        let err = gallery.save_to_gallery("file:///tmp/shot.jpg").await.unwrap_err();

        assert!(matches!(err, GalleryError::PermissionDenied));
        assert_eq!(err.to_string(), "Permission to access media library is required!");
        assert!(gallery.library().is_empty());
    }

    #[tokio::test]
    async fn test_save_provider_failure_is_absorbed() {
        let mut provider = MockProvider::new();
        provider.expect_request_permission().returning(|| PermissionStatus::Granted);
        provider
            .expect_create_asset()
            .returning(|_| Err(GalleryError::Provider("disk full".to_string())));

        let gallery = gallery(provider);
        assert_eq!(gallery.save_to_gallery("file:///tmp/shot.jpg").await.unwrap(), None);
        assert!(gallery.library().is_empty());
    }

    #[tokio::test]
    async fn test_pick_replaces_library() {
        let mut provider = MockProvider::new();
        provider.expect_request_permission().never();
        provider
            .expect_pick()
            .returning(|| Ok(Some(vec!["ph://a".to_string(), "ph://b".to_string()])));

        let gallery = gallery(provider);
        gallery.library().add_media("ph://old");

        assert!(gallery.pick_from_gallery().await.unwrap());
        assert_eq!(gallery.library().media(), vec!["ph://a", "ph://b"]);
    }

    #[tokio::test]
    async fn test_pick_cancelled_keeps_library() {
        let mut provider = MockProvider::new();
        provider.expect_request_permission().never();
        provider.expect_pick().returning(|| Ok(None));

        let gallery = gallery(provider);
        gallery.library().add_media("ph://old");

        assert!(!gallery.pick_from_gallery().await.unwrap());
        assert_eq!(gallery.library().media(), vec!["ph://old"]);
    }

    #[tokio::test]
    async fn test_pick_works_without_write_permission() {
        let mut provider = MockProvider::new();
        provider.expect_request_permission().returning(|| PermissionStatus::Denied);
        provider
            .expect_pick()
            .times(1)
            .returning(|| Ok(Some(vec!["file:///p.jpg".to_string()])));

        let gallery = gallery(provider);
        assert!(gallery.pick_from_gallery().await.unwrap());
        assert_eq!(gallery.library().media(), vec!["file:///p.jpg"]);
    }
}
