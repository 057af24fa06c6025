//! Request and response types for the CloudFormation custom-resource
//! protocol.
//!
//! CloudFormation invokes the Lambda with a JSON event describing the
//! lifecycle action and expects a JSON document PUT back to a presigned
//! callback URL. Field names on the wire are PascalCase.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lifecycle action CloudFormation is asking the handler to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

/// Incoming custom-resource event.
///
/// `stack_id`, `request_id` and `logical_resource_id` are correlation
/// identifiers that must be echoed back verbatim so CloudFormation can
/// match the response to the pending resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceEvent {
    pub request_type: RequestType,
    #[serde(rename = "ResponseURL")]
    pub response_url: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    /// Present on Update/Delete of an existing resource.
    #[serde(default)]
    pub physical_resource_id: Option<String>,
    /// Caller-supplied properties; schema depends on the handler.
    #[serde(default)]
    pub resource_properties: serde_json::Map<String, serde_json::Value>,
}

impl CustomResourceEvent {
    /// Physical id to echo when no new one is minted (Delete, or a failure
    /// before a resource ever existed).
    pub fn physical_id_or_logical(&self) -> String {
        self.physical_resource_id
            .clone()
            .unwrap_or_else(|| self.logical_resource_id.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// Outgoing custom-resource response, delivered once per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceResponse {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    /// Named output attributes, referenced from the template via
    /// `Fn::GetAtt`. Empty on failure and on Delete.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
}

impl CustomResourceResponse {
    pub fn success(
        event: &CustomResourceEvent,
        physical_resource_id: String,
        data: BTreeMap<String, String>,
    ) -> Self {
        Self {
            status: ResponseStatus::Success,
            reason: None,
            physical_resource_id,
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            data,
        }
    }

    pub fn failed(event: &CustomResourceEvent, reason: String) -> Self {
        Self {
            status: ResponseStatus::Failed,
            reason: Some(reason),
            physical_resource_id: event.physical_id_or_logical(),
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            data: BTreeMap::new(),
        }
    }
}
