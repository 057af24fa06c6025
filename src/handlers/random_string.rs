//! Random-string generator backing the database credential resources.
//!
//! Properties: `Length` (required, positive integer). Output attribute:
//! `RandomString` — `Length` characters drawn uniformly from `[A-Za-z]`.
//!
//! The template requests this twice, once for a username and once for a
//! password; the two invocations are independent draws.

use std::collections::BTreeMap;

use async_trait::async_trait;
use rand::Rng;
use serde_json::{Map, Value};
use tracing::info;

use super::{ResourceResolver, require_integer};
use crate::errors::ResolverError;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// CloudFormation attribute values are bounded; nothing in the template
/// needs anywhere near this much.
const MAX_LENGTH: i64 = 4096;

pub struct RandomStringResolver;

#[async_trait]
impl ResourceResolver for RandomStringResolver {
    fn id_prefix(&self) -> &'static str {
        "random-string"
    }

    async fn resolve(
        &self,
        properties: &Map<String, Value>,
    ) -> Result<BTreeMap<String, String>, ResolverError> {
        let length = require_integer(properties, "Length")?;
        if length <= 0 {
            return Err(ResolverError::InvalidProperty {
                name: "Length",
                reason: format!("must be a positive integer, got {length}"),
            });
        }
        if length > MAX_LENGTH {
            return Err(ResolverError::InvalidProperty {
                name: "Length",
                reason: format!("must be at most {MAX_LENGTH}, got {length}"),
            });
        }

        let mut rng = rand::thread_rng();
        let value: String = (0..length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();

        // The value may be a credential; log only its length.
        info!("Generated random string of length {}", length);

        let mut data = BTreeMap::new();
        data.insert("RandomString".to_string(), value);
        Ok(data)
    }
}
