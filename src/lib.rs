/// Lambda-backed CloudFormation custom resources for the demo stack.
///
/// This crate implements the three helper functions the template delegates
/// to when it needs a value CloudFormation cannot compute itself:
/// 1. An AMI resolver that picks the newest image matching a name filter
/// 2. A random-string generator used to mint database credentials
/// 3. An endpoint-AZ resolver that checks interface-endpoint coverage
///
/// # Architecture
///
/// Each resource is its own Lambda binary under `src/bin/`, sharing:
/// - The CloudFormation request/response wire types in `core::models`
/// - One lifecycle runner (`handlers::runner`) that turns a resolver's
///   `Result` into exactly one delivered `SUCCESS`/`FAILED` response
/// - Catalog access behind traits in `clients`, backed by the EC2 API
/// - Response delivery over the presigned callback URL in `callback`
// Module declarations
pub mod callback;
pub mod clients;
pub mod core;
pub mod errors;
pub mod handlers;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of
/// each Lambda binary, before the runtime starts.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
