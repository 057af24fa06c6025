use aws_config::BehaviorVersion;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};

use cfn_resolvers::callback::HttpResponseSender;
use cfn_resolvers::clients::Ec2Catalog;
use cfn_resolvers::core::config::AppConfig;
use cfn_resolvers::core::models::CustomResourceEvent;
use cfn_resolvers::handlers::{AmiResolver, run_custom_resource};

#[tokio::main]
async fn main() -> Result<(), Error> {
    cfn_resolvers::setup_logging();

    let config = AppConfig::from_env();
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let resolver = AmiResolver::new(Ec2Catalog::new(&aws_config), &config);
    let sender = HttpResponseSender::new();

    let resolver_ref = &resolver;
    let sender_ref = &sender;
    run(service_fn(move |event: LambdaEvent<CustomResourceEvent>| {
        run_custom_resource(resolver_ref, sender_ref, event.payload)
    }))
    .await
}
