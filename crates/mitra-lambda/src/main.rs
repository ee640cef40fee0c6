use tracing_subscriber::EnvFilter;

use mitra_lambda::config::Config;
use mitra_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env();
    let table = config.load_table()?;
    tracing::info!(
        version = table.version(),
        effective_date = %table.effective_date(),
        entries = table.entries().len(),
        "guideline table ready"
    );

    let app = mitra_lambda::app(AppState::new(table), &config)?;

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
