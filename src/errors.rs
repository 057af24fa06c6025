use aws_sdk_ec2::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("Missing required property: {0}")]
    MissingProperty(&'static str),

    #[error("Invalid property {name}: {reason}")]
    InvalidProperty {
        name: &'static str,
        reason: String,
    },

    #[error("No AMI matched name filter '{0}'")]
    NoMatchingImage(String),

    #[error("Expected exactly 1 endpoint service named '{name}', found {count}")]
    AmbiguousService { name: String, count: usize },

    #[error("Only {available} availability zones support the service, {desired} required")]
    InsufficientZones { available: usize, desired: usize },

    #[error("Failed to query the EC2 API: {0}")]
    AwsError(String),

    #[error("Failed to deliver response: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for ResolverError {
    fn from(error: reqwest::Error) -> Self {
        ResolverError::HttpError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<SdkError<E, R>> for ResolverError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        ResolverError::AwsError(DisplayErrorContext(&error).to_string())
    }
}
