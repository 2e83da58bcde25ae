use cloudfront_log_mover::{handle_event, Config, ObjectCreatedEvent, S3Client};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    // Fail before serving any event if the destination is not configured
    let config = Config::from_env()?;
    tracing::info!(
        bucket = config.destination_bucket(),
        prefix = config.destination_prefix(),
        "moving access logs"
    );

    // Get AWS Configuration
    let sdk_config = aws_config::load_from_env().await;
    let s3_client = S3Client::new(&sdk_config);

    run(service_fn(|event: LambdaEvent<ObjectCreatedEvent>| {
        handle_event(&s3_client, &config, event)
    }))
    .await
}
