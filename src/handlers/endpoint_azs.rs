//! Endpoint-AZ resolver: which availability zones support an interface
//! endpoint service, with a minimum-coverage check.
//!
//! Properties: `ServiceName` (required, exact service name) and
//! `DesiredNumAzs` (required, integer >= 0). Output attributes: `NumAzs`
//! (stringified zone count) and `Azs` (comma-joined zone names, catalog
//! order).

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::info;

use super::{ResourceResolver, require_integer, require_string};
use crate::clients::EndpointCatalog;
use crate::errors::ResolverError;

pub struct EndpointAzResolver<C> {
    catalog: C,
}

impl<C: EndpointCatalog> EndpointAzResolver<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl<C: EndpointCatalog> ResourceResolver for EndpointAzResolver<C> {
    fn id_prefix(&self) -> &'static str {
        "endpoint-azs"
    }

    async fn resolve(
        &self,
        properties: &Map<String, Value>,
    ) -> Result<BTreeMap<String, String>, ResolverError> {
        // Validate everything before touching the catalog.
        let service_name = require_string(properties, "ServiceName")?;
        let desired = require_integer(properties, "DesiredNumAzs")?;
        if desired < 0 {
            return Err(ResolverError::InvalidProperty {
                name: "DesiredNumAzs",
                reason: format!("must be a non-negative integer, got {desired}"),
            });
        }
        let desired = desired as usize;

        let services = self.catalog.describe_service(service_name).await?;
        if services.len() != 1 {
            return Err(ResolverError::AmbiguousService {
                name: service_name.to_string(),
                count: services.len(),
            });
        }

        let zones = &services[0].availability_zones;
        if zones.len() < desired {
            return Err(ResolverError::InsufficientZones {
                available: zones.len(),
                desired,
            });
        }

        info!(
            "Service {} supported in {} availability zones",
            service_name,
            zones.len()
        );

        let mut data = BTreeMap::new();
        data.insert("NumAzs".to_string(), zones.len().to_string());
        data.insert("Azs".to_string(), zones.join(","));
        Ok(data)
    }
}
