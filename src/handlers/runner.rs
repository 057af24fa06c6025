//! Shared lifecycle runner for all three custom resources.
//!
//! Every handler has the same outer shape: Delete is a trivial success,
//! Create/Update validate inputs and perform one read, and whatever the
//! outcome exactly one response is delivered to the callback URL. The
//! runner owns that shape; resolvers only produce output attributes or an
//! error.

use std::collections::BTreeMap;

use async_trait::async_trait;
use lambda_runtime::Error;
use serde_json::{Map, Value};
use tracing::{error, info};
use uuid::Uuid;

use crate::callback::ResponseSender;
use crate::core::models::{CustomResourceEvent, CustomResourceResponse, RequestType};
use crate::errors::ResolverError;

/// The Create/Update behavior of one custom resource.
#[async_trait]
pub trait ResourceResolver: Send + Sync {
    /// Prefix for minted physical resource ids, e.g. `ami-resolver`.
    fn id_prefix(&self) -> &'static str;

    /// Computes the resource's output attributes from the caller-supplied
    /// properties. Any `Err` becomes a `FAILED` response whose reason is
    /// the error's display text; this is the single translation point.
    async fn resolve(
        &self,
        properties: &Map<String, Value>,
    ) -> Result<BTreeMap<String, String>, ResolverError>;
}

/// Runs one lifecycle event to completion and delivers the response.
pub async fn run_custom_resource<R: ResourceResolver>(
    resolver: &R,
    sender: &dyn ResponseSender,
    event: CustomResourceEvent,
) -> Result<(), Error> {
    let response = match event.request_type {
        RequestType::Delete => {
            // Nothing was ever provisioned; deleting is an idempotent no-op.
            info!(
                logical_resource_id = %event.logical_resource_id,
                "Delete request, nothing to clean up"
            );
            CustomResourceResponse::success(&event, event.physical_id_or_logical(), BTreeMap::new())
        }
        RequestType::Create | RequestType::Update => {
            match resolver.resolve(&event.resource_properties).await {
                Ok(data) => {
                    info!(
                        logical_resource_id = %event.logical_resource_id,
                        "Resolved custom resource"
                    );
                    CustomResourceResponse::success(&event, mint_physical_id(resolver.id_prefix()), data)
                }
                Err(e) => {
                    error!(
                        logical_resource_id = %event.logical_resource_id,
                        "Custom resource failed: {}", e
                    );
                    CustomResourceResponse::failed(&event, e.to_string())
                }
            }
        }
    };

    sender
        .send(&event.response_url, &response)
        .await
        .map_err(|e| {
            error!("Failed to deliver response: {}", e);
            Error::from(e)
        })?;

    Ok(())
}

/// Each successful Create/Update mints a fresh id; stability across Update
/// is not part of the contract.
fn mint_physical_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
