//! Inclusive JD drafting — turns a structured role request into a
//! bias-aware job advertisement via the generation model.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::generation::normalize::{scrub_salary_figures, stabilize};
use crate::generation::prompts::JD_SYSTEM_PROMPT;
use crate::generation::{parse_model_json, GenerationError};
use crate::llm_client::TextGenerator;

/// Structured request for a job-description draft. `role` is the only
/// mandatory field — without it the adapter asks for clarification
/// instead of spending a model call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JdRequest {
    pub role: Option<String>,
    pub location: Option<String>,
    pub seniority: Option<String>,
    pub responsibilities: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub salary_range: Option<String>,
    pub brand_tone: Option<String>,
    pub kb_context: Option<String>,
    pub department: Option<String>,
}

impl JdRequest {
    fn salary_supplied(&self) -> bool {
        self.salary_range
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JdStatus {
    Ok,
    NeedsClarification,
    Error,
}

/// The drafted job description. Every field is required when status is ok.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescription {
    pub full_text: String,
    pub summary: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub benefits: Vec<String>,
    pub inclusion_statement: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdOutput {
    pub status: JdStatus,
    #[serde(default)]
    pub missing_info: Vec<String>,
    /// Serialized as `{}` whenever status is not ok.
    #[serde(
        default,
        deserialize_with = "crate::generation::empty_object_as_none",
        serialize_with = "crate::generation::none_as_empty_object"
    )]
    pub job_description: Option<JobDescription>,
    #[serde(default)]
    pub notes: String,
}

/// The JD adapter. Generic over [`TextGenerator`] so tests substitute a
/// deterministic generator for the network call.
pub struct JdGenerator<G> {
    generator: G,
}

impl<G: TextGenerator> JdGenerator<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Drafts a job description: prompt, model call, JSON extraction,
    /// deterministic normalization, schema validation.
    pub async fn generate(&self, request: &JdRequest) -> Result<JdOutput, GenerationError> {
        let Some(role) = request
            .role
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
        else {
            // Mandatory trigger field absent: terminal clarification,
            // the model is never invoked.
            return Ok(JdOutput {
                status: JdStatus::NeedsClarification,
                missing_info: vec!["role".to_string()],
                job_description: None,
                notes: "A role title is required before a job description can be drafted."
                    .to_string(),
            });
        };
        info!(role, "drafting job description");

        let request_json = serde_json::to_string_pretty(request)
            .map_err(|e| GenerationError::Schema(e.to_string()))?;
        let prompt = format!("{JD_SYSTEM_PROMPT}\n\nROLE REQUEST:\n{request_json}");

        let reply = self.generator.generate(&prompt).await?;
        let mut output: JdOutput = parse_model_json(&reply)?;
        normalize_jd_output(&mut output, request);
        validate_jd_output(&output)?;
        Ok(output)
    }
}

/// Deterministic post-processing: stabilize the nice-to-have list and
/// enforce the no-fabricated-compensation rule.
fn normalize_jd_output(output: &mut JdOutput, request: &JdRequest) {
    if output.status != JdStatus::Ok {
        output.job_description = None;
        return;
    }
    if let Some(jd) = output.job_description.as_mut() {
        jd.nice_to_have = stabilize(std::mem::take(&mut jd.nice_to_have));
        jd.benefits = scrub_salary_figures(
            std::mem::take(&mut jd.benefits),
            request.salary_supplied(),
        );
    }
}

/// Pure structural predicate over a JD output. Independent of how the
/// object was produced — an adapter's own "ok" output validates cleanly.
pub fn validate_jd_output(output: &JdOutput) -> Result<(), GenerationError> {
    match output.status {
        JdStatus::Ok => {
            let jd = output.job_description.as_ref().ok_or_else(|| {
                GenerationError::Schema("status is ok but job_description is empty".to_string())
            })?;
            if jd.full_text.trim().is_empty() {
                return Err(GenerationError::Schema(
                    "job_description.full_text is empty".to_string(),
                ));
            }
            if jd.summary.trim().is_empty() {
                return Err(GenerationError::Schema(
                    "job_description.summary is empty".to_string(),
                ));
            }
            Ok(())
        }
        JdStatus::NeedsClarification => {
            if output.job_description.is_some() {
                return Err(GenerationError::Schema(
                    "needs_clarification must carry an empty job_description".to_string(),
                ));
            }
            if output.missing_info.is_empty() {
                return Err(GenerationError::Schema(
                    "needs_clarification requires a non-empty missing_info list".to_string(),
                ));
            }
            Ok(())
        }
        JdStatus::Error => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::normalize::COMPENSATION_PLACEHOLDER;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Deterministic stand-in for the Gemini call. Counts invocations.
    struct FakeGenerator {
        reply: String,
        calls: AtomicU32,
    }

    impl FakeGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: AtomicU32::new(0),
            }
        }

        fn call_count(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for &FakeGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    const OK_REPLY: &str = r#"{
        "status": "ok",
        "missing_info": [],
        "job_description": {
            "full_text": "Data Engineer\n\nSummary...\nResponsibilities...\nRequirements...\nBenefits...\nInclusion Statement...",
            "summary": "Build and run data pipelines.",
            "responsibilities": ["Design pipelines", "Operate the warehouse"],
            "requirements": ["SQL", "Python"],
            "nice_to_have": ["dbt", "Airflow", "Airflow", "cloud cost control"],
            "benefits": ["Base salary $140k-160k", "Remote-first", "Learning budget"],
            "inclusion_statement": "We welcome applicants of all backgrounds."
        },
        "notes": ""
    }"#;

    fn request_with_role() -> JdRequest {
        JdRequest {
            role: Some("Data Engineer".to_string()),
            location: Some("Melbourne".to_string()),
            ..JdRequest::default()
        }
    }

    #[tokio::test]
    async fn test_missing_role_short_circuits_without_model_call() {
        let fake = FakeGenerator::new(OK_REPLY);
        let adapter = JdGenerator::new(&fake);

        let output = adapter.generate(&JdRequest::default()).await.unwrap();

        assert_eq!(output.status, JdStatus::NeedsClarification);
        assert_eq!(output.missing_info, vec!["role".to_string()]);
        assert!(output.job_description.is_none());
        assert_eq!(fake.call_count(), 0);

        // The empty result serializes as an empty object.
        let rendered = serde_json::to_value(&output).unwrap();
        assert_eq!(rendered["job_description"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_blank_role_counts_as_missing() {
        let fake = FakeGenerator::new(OK_REPLY);
        let adapter = JdGenerator::new(&fake);
        let request = JdRequest {
            role: Some("   ".to_string()),
            ..JdRequest::default()
        };
        let output = adapter.generate(&request).await.unwrap();
        assert_eq!(output.status, JdStatus::NeedsClarification);
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn test_ok_reply_is_normalized_and_validated() {
        let fake = FakeGenerator::new(OK_REPLY);
        let adapter = JdGenerator::new(&fake);

        let output = adapter.generate(&request_with_role()).await.unwrap();
        assert_eq!(output.status, JdStatus::Ok);
        assert_eq!(fake.call_count(), 1);

        let jd = output.job_description.unwrap();
        // nice_to_have deduplicated and sorted case-insensitively.
        assert_eq!(jd.nice_to_have, vec!["Airflow", "cloud cost control", "dbt"]);
        // No salary supplied: the fabricated range is gone, placeholder present.
        assert!(jd.benefits.iter().all(|b| !b.contains("$140k")));
        assert!(jd.benefits.iter().any(|b| b == COMPENSATION_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_supplied_salary_is_not_scrubbed() {
        let fake = FakeGenerator::new(OK_REPLY);
        let adapter = JdGenerator::new(&fake);
        let request = JdRequest {
            salary_range: Some("$140k-160k".to_string()),
            ..request_with_role()
        };
        let output = adapter.generate(&request).await.unwrap();
        let jd = output.job_description.unwrap();
        assert!(jd.benefits.iter().any(|b| b.contains("$140k")));
    }

    #[tokio::test]
    async fn test_fenced_reply_parses_like_plain_json() {
        let fenced = format!("```json\n{OK_REPLY}\n```");
        let fake_fenced = FakeGenerator::new(&fenced);
        let fake_plain = FakeGenerator::new(OK_REPLY);

        let from_fenced = JdGenerator::new(&fake_fenced)
            .generate(&request_with_role())
            .await
            .unwrap();
        let from_plain = JdGenerator::new(&fake_plain)
            .generate(&request_with_role())
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&from_fenced).unwrap(),
            serde_json::to_value(&from_plain).unwrap()
        );
    }

    #[tokio::test]
    async fn test_unparsable_reply_is_parse_error() {
        let fake = FakeGenerator::new("I'm sorry, I cannot help with that.");
        let adapter = JdGenerator::new(&fake);
        let err = adapter.generate(&request_with_role()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[tokio::test]
    async fn test_needs_clarification_reply_without_missing_info_fails_validation() {
        let fake = FakeGenerator::new(
            r#"{"status": "needs_clarification", "missing_info": [], "job_description": {}, "notes": ""}"#,
        );
        let adapter = JdGenerator::new(&fake);
        let err = adapter.generate(&request_with_role()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Schema(_)));
    }

    #[tokio::test]
    async fn test_ok_output_round_trips_through_validation() {
        let fake = FakeGenerator::new(OK_REPLY);
        let adapter = JdGenerator::new(&fake);
        let output = adapter.generate(&request_with_role()).await.unwrap();

        // Feed the adapter's own output back through serialization and the
        // validation predicate.
        let json = serde_json::to_string(&output).unwrap();
        let recovered: JdOutput = serde_json::from_str(&json).unwrap();
        validate_jd_output(&recovered).unwrap();
    }
}
