//! Skill-fit library
//!
//! Extracts skills from resumes, tiers the requirements of a job posting and
//! scores how well the two fit. The free functions run against an engine
//! built once from the built-in tables; construct an [`AnalysisEngine`]
//! directly for custom tables or tuning.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

use std::sync::LazyLock;

pub use config::Config;
pub use error::{Result, SkillFitError};
pub use processing::analyzer::{AnalysisEngine, MatchDetail, MatchResult};
pub use processing::classifier::{JdRequirement, RequirementTier};
pub use processing::lexicon::{MentionMap, Provenance, SkillCategory, SkillMention};
pub use processing::ontology::{MatchCredit, MatchType};
pub use processing::tables::SkillTables;

static DEFAULT_ENGINE: LazyLock<AnalysisEngine> =
    LazyLock::new(|| AnalysisEngine::builtin().expect("built-in skill tables are valid"));

/// Shared engine over the built-in tables with default tuning.
pub fn default_engine() -> &'static AnalysisEngine {
    &DEFAULT_ENGINE
}

pub fn extract_skills_from_text(text: &str) -> MentionMap {
    DEFAULT_ENGINE.extract_skills_from_text(text)
}

pub fn quick_match(resume_text: &str, jd_text: &str) -> MatchResult {
    DEFAULT_ENGINE.quick_match(resume_text, jd_text)
}

pub fn get_match_credit(required: &str, candidate: &str) -> MatchCredit {
    DEFAULT_ENGINE.get_match_credit(required, candidate)
}
