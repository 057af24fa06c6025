//! Client traits for the external AWS catalogs
//!
//! Handlers take these as injected dependencies so tests can substitute
//! in-memory fakes for the EC2 API.

use async_trait::async_trait;

use crate::errors::ResolverError;

pub mod ec2_catalog;

pub use ec2_catalog::Ec2Catalog;

/// One machine image as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub image_id: String,
    /// ISO-8601 creation timestamp, e.g. `2024-03-01T08:15:00.000Z`.
    pub creation_date: String,
}

/// One VPC endpoint service as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub service_name: String,
    pub availability_zones: Vec<String>,
}

#[async_trait]
pub trait ImageCatalog: Send + Sync {
    /// Returns all images from `owner` whose name matches `name_filter`
    /// (shell-style glob, resolved by the catalog).
    async fn find_images(
        &self,
        owner: &str,
        name_filter: &str,
    ) -> Result<Vec<ImageRecord>, ResolverError>;
}

#[async_trait]
pub trait EndpointCatalog: Send + Sync {
    /// Returns every endpoint service matching `service_name` exactly.
    /// Callers decide what a match count other than one means.
    async fn describe_service(
        &self,
        service_name: &str,
    ) -> Result<Vec<ServiceRecord>, ResolverError>;
}
