use tracing_subscriber::EnvFilter;

use medisense_lambda::build_router;
use medisense_lambda::config::ServiceConfig;
use medisense_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let errors = medisense_lexicon::validate_store();
    if !errors.is_empty() {
        for error in &errors {
            tracing::error!(error = %error, "lexicon validation failed");
        }
        eyre::bail!("lexicon store failed validation with {} error(s)", errors.len());
    }

    let config = ServiceConfig::from_env();
    tracing::info!(
        store = ?config.store,
        enhanced = config.bedrock_model.is_some(),
        development = config.development,
        "starting medisense"
    );

    let state = AppState::from_config(&config).await;

    lambda_http::run(build_router(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
