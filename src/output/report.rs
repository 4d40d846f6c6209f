//! Report envelopes handed to the formatters

use crate::processing::analyzer::MatchResult;
use crate::processing::classifier::{JdRequirement, RequirementTier};
use crate::processing::inference::ArchetypeMatch;
use crate::processing::lexicon::{MentionMap, SkillMention};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A scored resume/job pair plus the context needed to explain it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub metadata: ReportMetadata,
    pub summary: MatchSummary,
    pub result: MatchResult,
    /// Tiering evidence for every requirement, in skill-id order
    pub requirements: Vec<JdRequirement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub engine_version: String,
    pub resume_source: String,
    pub job_source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub score_label: String,
    pub verdict: String,
    pub required_count: usize,
    pub preferred_count: usize,
    pub unlabeled_count: usize,
}

/// Skills found in a single document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub source: String,
    pub skills: Vec<SkillMention>,
    pub archetypes: Vec<ArchetypeMatch>,
}

impl ReportMetadata {
    pub fn new(resume_source: impl Into<String>, job_source: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_source: resume_source.into(),
            job_source: job_source.into(),
        }
    }
}

impl MatchReport {
    pub fn new(
        result: MatchResult,
        requirements: BTreeMap<String, JdRequirement>,
        resume_source: impl Into<String>,
        job_source: impl Into<String>,
    ) -> Self {
        let requirements: Vec<JdRequirement> = requirements.into_values().collect();
        let count = |tier: RequirementTier| requirements.iter().filter(|r| r.tier == tier).count();

        let summary = MatchSummary {
            score_label: score_label(result.score).to_string(),
            verdict: verdict(&result),
            required_count: count(RequirementTier::Required),
            preferred_count: count(RequirementTier::Preferred),
            unlabeled_count: count(RequirementTier::Unlabeled),
        };

        Self {
            metadata: ReportMetadata::new(resume_source, job_source),
            summary,
            result,
            requirements,
        }
    }

    pub fn requirement(&self, skill_id: &str) -> Option<&JdRequirement> {
        self.requirements.iter().find(|r| r.skill_id == skill_id)
    }
}

impl ExtractionReport {
    /// Skills ordered by weight, heaviest first.
    pub fn new(
        source: impl Into<String>,
        mentions: MentionMap,
        archetypes: Vec<ArchetypeMatch>,
    ) -> Self {
        let mut skills: Vec<SkillMention> = mentions.into_values().collect();
        skills.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.skill_id.cmp(&b.skill_id)));
        Self {
            source: source.into(),
            skills,
            archetypes,
        }
    }
}

pub fn score_label(score: u8) -> &'static str {
    match score {
        90..=100 => "EXCELLENT",
        75..=89 => "STRONG",
        60..=74 => "GOOD",
        45..=59 => "FAIR",
        25..=44 => "WEAK",
        _ => "POOR",
    }
}

fn verdict(result: &MatchResult) -> String {
    if result.match_details.is_empty() {
        return "No recognisable skills found in the job posting".to_string();
    }

    let required_pct = (result.required_coverage * 100.0).round() as u32;
    match result.score {
        75..=100 => format!("Strong fit: {}% of required skill weight covered", required_pct),
        50..=74 => format!(
            "Partial fit: {}% of required skill weight covered, {} gaps",
            required_pct,
            result.missing_skills.len()
        ),
        _ => format!(
            "Weak fit: {} of {} requirements missing",
            result.missing_skills.len(),
            result.match_details.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::AnalysisEngine;

    #[test]
    fn test_report_counts_tiers() {
        let engine = AnalysisEngine::builtin().unwrap();
        let jd = "Requirements:\n- Python\n- SQL\n\nNice to have:\n- Docker";
        let result = engine.quick_match("Python and SQL", jd);
        let requirements = engine.classify_requirements(jd);
        let report = MatchReport::new(result, requirements, "cv.txt", "job.txt");

        assert_eq!(report.summary.required_count, 2);
        assert_eq!(report.summary.preferred_count, 1);
        assert_eq!(report.summary.unlabeled_count, 0);
        assert_eq!(report.requirement("Docker").map(|r| r.tier), Some(RequirementTier::Preferred));
        assert_eq!(report.metadata.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_score_labels() {
        assert_eq!(score_label(100), "EXCELLENT");
        assert_eq!(score_label(60), "GOOD");
        assert_eq!(score_label(0), "POOR");
    }

    #[test]
    fn test_extraction_report_orders_by_weight() {
        let engine = AnalysisEngine::builtin().unwrap();
        let text = "Git, Python";
        let report = ExtractionReport::new("-", engine.extract_skills_from_text(text), Vec::new());
        assert_eq!(report.skills[0].skill_id, "Python");
    }
}
