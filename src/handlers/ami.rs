//! AMI resolver: newest image from a trusted owner matching a name filter.
//!
//! Properties: `AmiNameFilter` (required, shell-glob against image names).
//! Output attribute: `Id` — the image id of the newest match.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::info;

use super::{ResourceResolver, require_string};
use crate::clients::ImageCatalog;
use crate::core::config::AppConfig;
use crate::errors::ResolverError;

pub struct AmiResolver<C> {
    catalog: C,
    owner: String,
}

impl<C: ImageCatalog> AmiResolver<C> {
    pub fn new(catalog: C, config: &AppConfig) -> Self {
        Self {
            catalog,
            owner: config.ami_owner.clone(),
        }
    }
}

#[async_trait]
impl<C: ImageCatalog> ResourceResolver for AmiResolver<C> {
    fn id_prefix(&self) -> &'static str {
        "ami-resolver"
    }

    async fn resolve(
        &self,
        properties: &Map<String, Value>,
    ) -> Result<BTreeMap<String, String>, ResolverError> {
        let name_filter = require_string(properties, "AmiNameFilter")?;

        let mut images = self.catalog.find_images(&self.owner, name_filter).await?;
        if images.is_empty() {
            return Err(ResolverError::NoMatchingImage(name_filter.to_string()));
        }

        // ISO-8601 timestamps order lexicographically; newest first, with
        // identical dates broken by the greater image id so the pick is
        // deterministic.
        images.sort_by(|a, b| {
            b.creation_date
                .cmp(&a.creation_date)
                .then_with(|| b.image_id.cmp(&a.image_id))
        });

        let newest = &images[0];
        info!(
            "Resolved AMI {} (created {}) for filter {}",
            newest.image_id, newest.creation_date, name_filter
        );

        let mut data = BTreeMap::new();
        data.insert("Id".to_string(), newest.image_id.clone());
        Ok(data)
    }
}
