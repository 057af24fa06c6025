//! Custom-resource handlers and the shared lifecycle runner

use serde_json::{Map, Value};

use crate::errors::ResolverError;

pub mod ami;
pub mod endpoint_azs;
pub mod random_string;
pub mod runner;

pub use ami::AmiResolver;
pub use endpoint_azs::EndpointAzResolver;
pub use random_string::RandomStringResolver;
pub use runner::{ResourceResolver, run_custom_resource};

/// Looks up a required non-empty string property.
pub(crate) fn require_string<'a>(
    properties: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a str, ResolverError> {
    match properties.get(name) {
        None => Err(ResolverError::MissingProperty(name)),
        Some(value) => match value.as_str() {
            Some(s) if !s.trim().is_empty() => Ok(s),
            Some(_) => Err(ResolverError::InvalidProperty {
                name,
                reason: "must not be empty".to_string(),
            }),
            None => Err(ResolverError::InvalidProperty {
                name,
                reason: "must be a string".to_string(),
            }),
        },
    }
}

/// Looks up a required integer property.
///
/// CloudFormation passes all resource properties as strings, but a raw
/// JSON number is accepted too.
pub(crate) fn require_integer(
    properties: &Map<String, Value>,
    name: &'static str,
) -> Result<i64, ResolverError> {
    let value = properties
        .get(name)
        .ok_or(ResolverError::MissingProperty(name))?;

    match value {
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| {
            ResolverError::InvalidProperty {
                name,
                reason: format!("'{s}' is not an integer"),
            }
        }),
        Value::Number(n) => n.as_i64().ok_or_else(|| ResolverError::InvalidProperty {
            name,
            reason: format!("{n} is not an integer"),
        }),
        _ => Err(ResolverError::InvalidProperty {
            name,
            reason: "must be a string or number".to_string(),
        }),
    }
}
