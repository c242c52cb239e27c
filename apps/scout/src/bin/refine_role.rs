//! Refines a free-text role brief into related titles, ranked skills and
//! Boolean search strings.
//!
//! Usage: echo 'jr. Data Scientist - Melbourne, Python, NLP' | refine_role
//!
//! Every failure (missing API key, network, parse, schema) is printed as a
//! structured error-status result; the process never crashes on them.

use anyhow::Result;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use scout::config::Config;
use scout::generation::refinement::RoleRefinementGenerator;
use scout::generation::{error_output, GenerationError};
use scout::llm_client::GeminiClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .init();

    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;

    let output = match run(&config, input.trim()).await {
        Ok(value) => value,
        Err(err) => error_output(&err),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run(config: &Config, brief: &str) -> Result<serde_json::Value, GenerationError> {
    let api_key = config.gemini_api_key.clone().ok_or_else(|| {
        GenerationError::Configuration(
            "GEMINI_API_KEY is not set; export it or add it to .env".to_string(),
        )
    })?;

    if brief.is_empty() {
        return Err(GenerationError::Schema(
            "empty input: provide a role brief on stdin".to_string(),
        ));
    }

    let adapter = RoleRefinementGenerator::new(GeminiClient::new(api_key));
    let output = adapter.refine(brief).await?;
    serde_json::to_value(&output).map_err(|e| GenerationError::Schema(e.to_string()))
}
