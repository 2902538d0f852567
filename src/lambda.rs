#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use prime_checker::utils::logger;
#[cfg(feature = "lambda")]
use prime_checker::{handle_request, LambdaConfig, LambdaRequest, LambdaResponse};

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<LambdaRequest>) -> Result<LambdaResponse, Error> {
    let (request, _context) = event.into_parts();

    let result = LambdaConfig::from_env().and_then(|config| handle_request(request, config));
    result.map_err(|e| {
        tracing::error!("❌ {} ({})", e, e.recovery_suggestion());
        anyhow::anyhow!(e.user_friendly_message()).into()
    })
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
