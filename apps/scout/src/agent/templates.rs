//! Template store — nine fixed prompt templates keyed by intent.
//!
//! Each template declares an ordered set of `{field}` insertion points
//! with a per-field default. Filling is pure string substitution: the
//! extracted parameter value when present and non-empty, the default
//! otherwise. Most defaults are descriptive bracketed placeholders; tone
//! and stage fields carry working defaults instead.

use crate::agent::intent::Intent;
use crate::agent::params::ParamMap;

/// One named insertion point and the text used when no value is supplied.
#[derive(Debug, Clone, Copy)]
pub struct TemplateField {
    pub key: &'static str,
    pub default: &'static str,
}

/// An immutable text blueprint with named insertion points.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub intent: Intent,
    pub text: &'static str,
    pub fields: &'static [TemplateField],
}

impl Template {
    /// Substitutes every declared field. No conditional sections, no
    /// loops, no escaping of user-supplied text.
    pub fn fill(&self, params: &ParamMap) -> String {
        let mut filled = self.text.to_string();
        for field in self.fields {
            let value = params.get_non_empty(field.key).unwrap_or(field.default);
            filled = filled.replace(&format!("{{{}}}", field.key), value);
        }
        filled
    }
}

/// Returns the template for `intent`, or `None` for [`Intent::Unknown`].
pub fn template_for(intent: Intent) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.intent == intent)
}

const fn field(key: &'static str, default: &'static str) -> TemplateField {
    TemplateField { key, default }
}

pub static TEMPLATES: &[Template] = &[
    Template {
        intent: Intent::RoleRefinement,
        text: "You are a recruitment assistant. Your job is to refine the role \
definition and produce inclusive Boolean search strings to find candidates.\n\
Role title: {role_title}\n\
Location: {location}\n\
Seniority: {seniority}\n\
Must-have skills: {must_have}\n\
Nice-to-have skills: {nice_to_have}\n\n\
Suggest alternate titles and generate a Boolean search string covering the role and key skills.",
        fields: &[
            field("role_title", "[role title]"),
            field("location", "[location]"),
            field("seniority", "[seniority]"),
            field("must_have", "[must-have skills]"),
            field("nice_to_have", "[nice-to-have skills]"),
        ],
    },
    Template {
        intent: Intent::InclusiveJd,
        text: "You are drafting a bias-free, inclusive job ad. Use clear, neutral \
language and avoid gender coded terms. Reflect the company's brand tone when provided.\n\
Role: {role_title}\n\
Location: {location}\n\
Seniority: {seniority}\n\
Responsibilities: {responsibilities}\n\
Requirements: {requirements}\n\
Benefits: {benefits}\n\
Brand tone: {brand_tone}\n\n\
Produce a job advertisement with sections for Summary, Responsibilities, \
Requirements, Benefits and an Inclusion Statement.",
        fields: &[
            field("role_title", "[role title]"),
            field("location", "[location]"),
            field("seniority", "[seniority]"),
            field("responsibilities", "[responsibilities]"),
            field("requirements", "[requirements]"),
            field("benefits", "[benefits]"),
            field("brand_tone", "neutral"),
        ],
    },
    Template {
        intent: Intent::OutreachMessage,
        text: "You are writing a recruitment outreach message. Keep it short, \
specific and respectful. If a candidate name is provided, use it.\n\
Candidate name: {candidate_name}\n\
Role: {role_title}\n\
Top skills: {top_skills}\n\
Value proposition: {value_proposition}\n\
Job description link: {jd_link}\n\
Tone: {tone}\n\n\
Generate two outreach message variants with subject lines and calls to action. \
Include an opt-out sentence if emailing.",
        fields: &[
            field("candidate_name", "[candidate]"),
            field("role_title", "[role title]"),
            field("top_skills", "[top skills]"),
            field("value_proposition", "[value proposition]"),
            field("jd_link", "[JD link]"),
            field("tone", "professional"),
        ],
    },
    Template {
        intent: Intent::SourcingPlan,
        text: "You are creating a sourcing plan and market map outline.\n\
Role: {role_title}\n\
Location: {location}\n\
Industry/domain: {industry}\n\
Must-have skills: {must_have}\n\n\
Suggest relevant channels (e.g., LinkedIn, communities, meetups), synonyms for \
titles, and key employers. Provide the output as a bullet list or simple table \
ready for a spreadsheet.",
        fields: &[
            field("role_title", "[role title]"),
            field("location", "[location]"),
            field("industry", "[industry/domain]"),
            field("must_have", "[must-have skills]"),
        ],
    },
    Template {
        intent: Intent::InterviewGuide,
        text: "You are generating an interview guide and scorecard.\n\
Role: {role_title}\n\
Seniority: {seniority}\n\
Competencies to assess: {competencies}\n\
Interview stages: {stages}\n\n\
Suggest a balanced mix of technical and behavioural questions mapped to the \
competencies. Provide a rubric for scoring (1-5) with space for evidence. \
Ensure fairness and accessibility.",
        fields: &[
            field("role_title", "[role title]"),
            field("seniority", "[seniority]"),
            field("competencies", "[competencies]"),
            field("stages", "phone, technical, panel"),
        ],
    },
    Template {
        intent: Intent::TaskTriage,
        text: "You are summarising the recruiting tasks and next actions for the day.\n\
Open roles: {open_roles}\n\
Candidate stages: {candidate_stages}\n\
Pending feedback: {pending_feedback}\n\
Upcoming interviews: {upcoming_interviews}\n\n\
Provide a prioritised task list and quick reminders. Ask the user before \
scheduling or sending messages.",
        fields: &[
            field("open_roles", "[open roles]"),
            field("candidate_stages", "[candidate stages]"),
            field("pending_feedback", "[pending feedback]"),
            field("upcoming_interviews", "[upcoming interviews]"),
        ],
    },
    Template {
        intent: Intent::OfferHandover,
        text: "You are preparing an offer and onboarding handover.\n\
Role: {role_title}\n\
Candidate: {candidate_name}\n\
Start date: {start_date}\n\
Location: {location}\n\
Onboarding SOPs: {onboarding_sops}\n\n\
Generate a checklist of tasks: offer approval, letter sending, background \
checks, equipment and account setup, and day-one agenda. Keep automation light \
and ensure human approval where required.",
        fields: &[
            field("role_title", "[role title]"),
            field("candidate_name", "[candidate]"),
            field("start_date", "[start date]"),
            field("location", "[location]"),
            field("onboarding_sops", "[onboarding SOPs]"),
        ],
    },
    Template {
        intent: Intent::CandidateSummary,
        text: "You are summarising candidate profiles into bias-reduced briefs.\n\
Candidate CV: {candidate_cv}\n\
Role requirements: {role_requirements}\n\n\
Extract key achievements, skills and role fit notes. Remove names, age and \
gender. Present the summary in a consistent format.",
        fields: &[
            field("candidate_cv", "[candidate CV text]"),
            field("role_requirements", "[role requirements]"),
        ],
    },
    Template {
        intent: Intent::MarketInsights,
        text: "You are providing labor market insights and salary benchmarks.\n\
Role: {role_title}\n\
Location: {location}\n\
Seniority: {seniority}\n\n\
Retrieve typical salary ranges, demand signals and assumptions. State the data \
source and the recency of the information.",
        fields: &[
            field("role_title", "[role title]"),
            field("location", "[location]"),
            field("seniority", "[seniority]"),
        ],
    },
];
