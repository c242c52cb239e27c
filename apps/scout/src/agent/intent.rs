//! Intent detection — an ordered keyword-rule table, first match wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The classified purpose of a user message. Selects which template and
/// handler apply to the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    RoleRefinement,
    InclusiveJd,
    OutreachMessage,
    SourcingPlan,
    InterviewGuide,
    TaskTriage,
    OfferHandover,
    CandidateSummary,
    MarketInsights,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::RoleRefinement => "role_refinement",
            Intent::InclusiveJd => "inclusive_jd",
            Intent::OutreachMessage => "outreach_message",
            Intent::SourcingPlan => "sourcing_plan",
            Intent::InterviewGuide => "interview_guide",
            Intent::TaskTriage => "task_triage",
            Intent::OfferHandover => "offer_handover",
            Intent::CandidateSummary => "candidate_summary",
            Intent::MarketInsights => "market_insights",
            Intent::Unknown => "unknown",
        }
    }
}

/// Keyword rules evaluated in order. Order matters for specificity — a
/// message matching several rules resolves to the earliest one.
static INTENT_RULES: Lazy<Vec<(Regex, Intent)>> = Lazy::new(|| {
    [
        (r"\b(boolean|search|role refinement)\b", Intent::RoleRefinement),
        (
            r"\b(job description|draft jd|write jd|inclusive jd)\b",
            Intent::InclusiveJd,
        ),
        (r"\boutreach|message\b", Intent::OutreachMessage),
        (r"\bsourcing|market map|channels\b", Intent::SourcingPlan),
        (r"\binterview guide|scorecard\b", Intent::InterviewGuide),
        (r"\btask triage|daily digest\b", Intent::TaskTriage),
        (r"\boffer|onboarding\b", Intent::OfferHandover),
        (
            r"\bsummary|summarise candidate|candidate profile\b",
            Intent::CandidateSummary,
        ),
        (
            r"\bsalary benchmark|market insight|labor market\b",
            Intent::MarketInsights,
        ),
    ]
    .into_iter()
    .map(|(pattern, intent)| {
        (
            Regex::new(pattern).expect("intent rule must compile"),
            intent,
        )
    })
    .collect()
});

/// Classifies a user message into an [`Intent`].
///
/// The input is lowercased before matching, so matching is effectively
/// case-insensitive. A pattern may match anywhere in the message; the tag
/// of the first matching rule is returned, or [`Intent::Unknown`] when no
/// rule matches. Deterministic and side-effect free.
pub fn classify(message: &str) -> Intent {
    let lowered = message.to_lowercase();
    for (pattern, intent) in INTENT_RULES.iter() {
        if pattern.is_match(&lowered) {
            return *intent;
        }
    }
    Intent::Unknown
}
