//! EC2-backed implementation of the catalog traits.

use async_trait::async_trait;
use aws_sdk_ec2::Client;
use aws_sdk_ec2::types::Filter;

use super::{EndpointCatalog, ImageCatalog, ImageRecord, ServiceRecord};
use crate::errors::ResolverError;

/// Wraps an [`aws_sdk_ec2::Client`] built from ambient Lambda credentials.
pub struct Ec2Catalog {
    client: Client,
}

impl Ec2Catalog {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl ImageCatalog for Ec2Catalog {
    async fn find_images(
        &self,
        owner: &str,
        name_filter: &str,
    ) -> Result<Vec<ImageRecord>, ResolverError> {
        let output = self
            .client
            .describe_images()
            .owners(owner)
            .filters(Filter::builder().name("name").values(name_filter).build())
            .send()
            .await?;

        let records = output
            .images
            .unwrap_or_default()
            .into_iter()
            .filter_map(|image| match (image.image_id, image.creation_date) {
                (Some(image_id), Some(creation_date)) => Some(ImageRecord {
                    image_id,
                    creation_date,
                }),
                // Images without an id or creation date cannot be ranked.
                _ => None,
            })
            .collect();

        Ok(records)
    }
}

#[async_trait]
impl EndpointCatalog for Ec2Catalog {
    async fn describe_service(
        &self,
        service_name: &str,
    ) -> Result<Vec<ServiceRecord>, ResolverError> {
        let output = self
            .client
            .describe_vpc_endpoint_services()
            .service_names(service_name)
            .send()
            .await?;

        let records = output
            .service_details
            .unwrap_or_default()
            .into_iter()
            .map(|detail| ServiceRecord {
                service_name: detail.service_name.unwrap_or_default(),
                availability_zones: detail.availability_zones.unwrap_or_default(),
            })
            .collect();

        Ok(records)
    }
}
