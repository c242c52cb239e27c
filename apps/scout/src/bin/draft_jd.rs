//! Drafts an inclusive job description from a JSON request on stdin.
//!
//! Usage: echo '{"role": "Data Engineer", "location": "Melbourne"}' | draft_jd
//!
//! Every failure (missing API key, network, parse, schema) is printed as a
//! structured error-status result; the process never crashes on them.

use anyhow::Result;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use scout::config::Config;
use scout::generation::jd::{JdGenerator, JdRequest};
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

    let output = match run(&config, &input).await {
        Ok(value) => value,
        Err(err) => error_output(&err),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run(config: &Config, input: &str) -> Result<serde_json::Value, GenerationError> {
    let api_key = config.gemini_api_key.clone().ok_or_else(|| {
        GenerationError::Configuration(
            "GEMINI_API_KEY is not set; export it or add it to .env".to_string(),
        )
    })?;

    let request: JdRequest = serde_json::from_str(input.trim())
        .map_err(|e| GenerationError::Schema(format!("invalid request JSON: {e}")))?;

    let adapter = JdGenerator::new(GeminiClient::new(api_key));
    let output = adapter.generate(&request).await?;
    serde_json::to_value(&output).map_err(|e| GenerationError::Schema(e.to_string()))
}
