use aws_lambda_events::event::cloudwatch_events::CloudWatchEvent;
use ec2maestro::Maestro;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

async fn function_handler(event: LambdaEvent<CloudWatchEvent<Value>>) -> Result<(), Error> {
    info!("running ec2maestro version {}", env!("CARGO_PKG_VERSION"));

    let maestro = Maestro::from_event(&event.payload).await?;
    let action = maestro.validate()?;
    maestro.dispatch(action).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // CloudWatch adds the ingestion time.
        .without_time()
        .init();

    run(service_fn(function_handler)).await
}
