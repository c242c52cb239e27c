//! Role refinement & Boolean search building.
//!
//! Hybrid strict/generative skill engine: caller-supplied skills pass
//! through verbatim, the rest is synthesized by the model from the staged
//! system prompt. Deterministic post-processing stabilizes the lists.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::generation::normalize::{stabilize, title_case_or_general};
use crate::generation::prompts::ROLE_REFINEMENT_SYSTEM_PROMPT;
use crate::generation::{parse_model_json, GenerationError};
use crate::llm_client::TextGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefinementStatus {
    Ok,
    NeedsClarification,
}

/// The refined role definition. Full schema — earlier variants without
/// `seniority_level` / `industry_focus` are superseded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinedRole {
    pub main_title: String,
    pub related_titles: Vec<String>,
    pub core_skills: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub seniority_level: String,
    pub industry_focus: String,
}

/// AND/OR-connected, quoted search strings for sourcing platforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooleanSearch {
    pub linkedin: String,
    pub job_boards: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinementOutput {
    pub status: RefinementStatus,
    #[serde(default)]
    pub missing_info: Vec<String>,
    /// Serialized as `{}` whenever status is not ok.
    #[serde(
        default,
        deserialize_with = "crate::generation::empty_object_as_none",
        serialize_with = "crate::generation::none_as_empty_object"
    )]
    pub refined_role: Option<RefinedRole>,
    #[serde(
        default,
        deserialize_with = "crate::generation::empty_object_as_none",
        serialize_with = "crate::generation::none_as_empty_object"
    )]
    pub boolean_search: Option<BooleanSearch>,
    #[serde(default)]
    pub notes: String,
}

/// The role-refinement adapter. Generic over [`TextGenerator`] so tests
/// substitute a deterministic generator for the network call.
pub struct RoleRefinementGenerator<G> {
    generator: G,
}

impl<G: TextGenerator> RoleRefinementGenerator<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Refines a free-text role brief: prompt, model call, JSON
    /// extraction, list stabilization, schema validation.
    pub async fn refine(&self, brief: &str) -> Result<RefinementOutput, GenerationError> {
        info!(brief_len = brief.len(), "refining role brief");

        let prompt = format!("{ROLE_REFINEMENT_SYSTEM_PROMPT}\nUser Input: {brief}");
        let reply = self.generator.generate(&prompt).await?;
        let mut output: RefinementOutput = parse_model_json(&reply)?;
        normalize_refinement_output(&mut output);
        validate_refinement_output(&output)?;
        Ok(output)
    }
}

/// Deterministic post-processing: stabilize the list fields, title-case
/// the industry focus (defaulting to "General"), and clear the nested
/// objects when the status is not ok.
fn normalize_refinement_output(output: &mut RefinementOutput) {
    if output.status != RefinementStatus::Ok {
        output.refined_role = None;
        output.boolean_search = None;
        return;
    }
    if let Some(role) = output.refined_role.as_mut() {
        role.related_titles = stabilize(std::mem::take(&mut role.related_titles));
        role.core_skills = stabilize(std::mem::take(&mut role.core_skills));
        role.nice_to_have = stabilize(std::mem::take(&mut role.nice_to_have));
        role.industry_focus = title_case_or_general(&role.industry_focus);
    }
}

/// Pure structural predicate over a refinement output.
pub fn validate_refinement_output(output: &RefinementOutput) -> Result<(), GenerationError> {
    match output.status {
        RefinementStatus::Ok => {
            let role = output.refined_role.as_ref().ok_or_else(|| {
                GenerationError::Schema("status is ok but refined_role is empty".to_string())
            })?;
            if role.main_title.trim().is_empty() {
                return Err(GenerationError::Schema(
                    "refined_role.main_title is empty".to_string(),
                ));
            }
            let search = output.boolean_search.as_ref().ok_or_else(|| {
                GenerationError::Schema("status is ok but boolean_search is empty".to_string())
            })?;
            if search.linkedin.trim().is_empty() {
                return Err(GenerationError::Schema(
                    "boolean_search.linkedin is empty".to_string(),
                ));
            }
            Ok(())
        }
        RefinementStatus::NeedsClarification => {
            if output.refined_role.is_some() || output.boolean_search.is_some() {
                return Err(GenerationError::Schema(
                    "needs_clarification must carry empty refined_role and boolean_search"
                        .to_string(),
                ));
            }
            if output.missing_info.is_empty() {
                return Err(GenerationError::Schema(
                    "needs_clarification requires a non-empty missing_info list".to_string(),
                ));
            }
            Ok(())
        }
    }
}
