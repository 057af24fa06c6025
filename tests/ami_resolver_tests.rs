use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Map, Value};

use cfn_resolvers::clients::{ImageCatalog, ImageRecord};
use cfn_resolvers::core::config::AppConfig;
use cfn_resolvers::errors::ResolverError;
use cfn_resolvers::handlers::{AmiResolver, ResourceResolver};

struct FakeImageCatalog {
    images: Vec<ImageRecord>,
    calls: AtomicUsize,
}

impl FakeImageCatalog {
    fn new(images: Vec<ImageRecord>) -> Arc<Self> {
        Arc::new(Self {
            images,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ImageCatalog for Arc<FakeImageCatalog> {
    async fn find_images(
        &self,
        _owner: &str,
        _name_filter: &str,
    ) -> Result<Vec<ImageRecord>, ResolverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.images.clone())
    }
}

struct BrokenImageCatalog;

#[async_trait]
impl ImageCatalog for BrokenImageCatalog {
    async fn find_images(
        &self,
        _owner: &str,
        _name_filter: &str,
    ) -> Result<Vec<ImageRecord>, ResolverError> {
        Err(ResolverError::AwsError("connection reset".to_string()))
    }
}

fn image(id: &str, created: &str) -> ImageRecord {
    ImageRecord {
        image_id: id.to_string(),
        creation_date: created.to_string(),
    }
}

fn props(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

#[tokio::test]
async fn test_newest_image_wins() {
    // Three matches with T1 < T2 < T3; the T3 image must be returned
    let catalog = FakeImageCatalog::new(vec![
        image("ami-aaa", "2023-01-15T08:00:00.000Z"),
        image("ami-ccc", "2024-06-01T12:30:00.000Z"),
        image("ami-bbb", "2023-11-20T09:45:00.000Z"),
    ]);
    let resolver = AmiResolver::new(Arc::clone(&catalog), &AppConfig::default());

    let data = resolver
        .resolve(&props(serde_json::json!({ "AmiNameFilter": "amzn2-ami-hvm-*" })))
        .await
        .unwrap();

    assert_eq!(data.get("Id").map(String::as_str), Some("ami-ccc"));
}

#[tokio::test]
async fn test_creation_date_tie_breaks_on_image_id() {
    // Identical newest timestamps resolve deterministically
    let catalog = FakeImageCatalog::new(vec![
        image("ami-111", "2024-06-01T12:30:00.000Z"),
        image("ami-222", "2024-06-01T12:30:00.000Z"),
    ]);
    let resolver = AmiResolver::new(Arc::clone(&catalog), &AppConfig::default());

    let data = resolver
        .resolve(&props(serde_json::json!({ "AmiNameFilter": "*" })))
        .await
        .unwrap();

    assert_eq!(
        data.get("Id").map(String::as_str),
        Some("ami-222"),
        "Ties on creation date should prefer the greater image id"
    );
}

#[tokio::test]
async fn test_zero_matches_fails_with_filter_in_reason() {
    let catalog = FakeImageCatalog::new(vec![]);
    let resolver = AmiResolver::new(Arc::clone(&catalog), &AppConfig::default());

    let err = resolver
        .resolve(&props(serde_json::json!({ "AmiNameFilter": "no-such-ami-*" })))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ResolverError::NoMatchingImage(_)),
        "Empty result set should be a no-matching-image error"
    );
    assert!(
        err.to_string().contains("no-such-ami-*"),
        "Failure reason should name the filter"
    );
}

#[tokio::test]
async fn test_missing_filter_fails_before_catalog_call() {
    let catalog = FakeImageCatalog::new(vec![image("ami-aaa", "2024-01-01T00:00:00.000Z")]);
    let resolver = AmiResolver::new(Arc::clone(&catalog), &AppConfig::default());

    let err = resolver.resolve(&props(serde_json::json!({}))).await.unwrap_err();
    assert!(matches!(err, ResolverError::MissingProperty("AmiNameFilter")));

    let err = resolver
        .resolve(&props(serde_json::json!({ "AmiNameFilter": "  " })))
        .await
        .unwrap_err();
    assert!(matches!(err, ResolverError::InvalidProperty { .. }));

    assert_eq!(
        catalog.calls.load(Ordering::SeqCst),
        0,
        "Validation failures must not reach the image catalog"
    );
}

#[tokio::test]
async fn test_catalog_failure_surfaces_as_error() {
    let resolver = AmiResolver::new(BrokenImageCatalog, &AppConfig::default());

    let err = resolver
        .resolve(&props(serde_json::json!({ "AmiNameFilter": "amzn2-*" })))
        .await
        .unwrap_err();

    assert!(matches!(err, ResolverError::AwsError(_)));
}
