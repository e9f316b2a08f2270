use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use api_event_handler::{
    telemetry::init_tracing, Config, Dispatcher, InvocationMeta, ResponseEnvelope,
};

fn handle_request(
    dispatcher: &Dispatcher,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();

    let invocation = InvocationMeta::new(
        context.request_id.clone(),
        context.env_config.function_name.clone(),
    )
    .with_function_version(context.env_config.version.clone())
    .with_function_arn(context.invoked_function_arn.clone());

    Ok(dispatcher.handle_value(payload, &invocation))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    init_tracing(&config)?;
    info!(
        service = %config.service_name,
        log_level = %config.log_level,
        "Starting API event handler"
    );

    let dispatcher = Arc::new(Dispatcher::new(config));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let dispatcher = Arc::clone(&dispatcher);
        async move { handle_request(&dispatcher, event) }
    }))
    .await
}
