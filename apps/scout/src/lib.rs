//! Scout — a recruitment-assistant chat agent.
//!
//! Free-text recruiter requests are classified into one of nine intents,
//! `key=value` parameters are pulled out of the message, and the matching
//! prompt template is filled and returned as the reply. Two structured
//! generation adapters (inclusive JD drafting, role refinement / Boolean
//! search building) call the Gemini API through `llm_client` and turn its
//! free-text reply into validated, deterministic JSON.

pub mod agent;
pub mod config;
pub mod generation;
pub mod llm_client;
