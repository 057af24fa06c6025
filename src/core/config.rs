use std::env;

/// Owner used when no `AMI_OWNER` override is present. The demo template
/// only ever resolves Amazon-published images.
const DEFAULT_AMI_OWNER: &str = "amazon";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ami_owner: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            ami_owner: env::var("AMI_OWNER").unwrap_or_else(|_| DEFAULT_AMI_OWNER.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ami_owner: DEFAULT_AMI_OWNER.to_string(),
        }
    }
}
