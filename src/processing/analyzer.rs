//! Match engine: ties extraction, classification and credit resolution into a
//! single resume-vs-posting fit score.

use crate::config::{EngineConfig, ScoringConfig};
use crate::error::Result;
use crate::processing::classifier::{JdRequirement, RequirementTier};
use crate::processing::inference::ArchetypeMatch;
use crate::processing::lexicon::MentionMap;
use crate::processing::ontology::{MatchCredit, MatchType};
use crate::processing::tables::SkillTables;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Main analysis engine. Cheap to clone; tables are shared.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    tables: Arc<SkillTables>,
    config: EngineConfig,
}

/// How one job requirement was (or was not) satisfied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub skill: String,
    pub tier: RequirementTier,
    pub credit: f32,
    /// Resume skill that supplied the credit; `None` when nothing did.
    pub matched_by: Option<String>,
    pub match_type: MatchType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Overall fit, 0 - 100
    pub score: u8,
    pub required_coverage: f32,
    pub preferred_coverage: f32,
    /// Weighted coverage across every requirement regardless of tier
    pub keyword_score: f32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Most important missing skills, required first
    pub top_gaps: Vec<String>,
    pub match_details: Vec<MatchDetail>,
}

impl MatchResult {
    fn empty() -> Self {
        Self {
            score: 0,
            required_coverage: 0.0,
            preferred_coverage: 0.0,
            keyword_score: 0.0,
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
            top_gaps: Vec::new(),
            match_details: Vec::new(),
        }
    }
}

impl AnalysisEngine {
    pub fn new(tables: Arc<SkillTables>, config: EngineConfig) -> Self {
        Self { tables, config }
    }

    /// Engine over the built-in tables with default tuning.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(SkillTables::builtin()?), EngineConfig::default()))
    }

    pub fn tables(&self) -> &SkillTables {
        &self.tables
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Every skill the text evidences, literal or implied.
    pub fn extract_skills_from_text(&self, text: &str) -> MentionMap {
        let mentions = self.tables.extract_skills(text);
        log::debug!("Extracted {} skills from {} bytes of text", mentions.len(), text.len());
        mentions
    }

    /// Role archetypes recognised from title-like lines.
    pub fn detect_archetypes(&self, text: &str) -> Vec<ArchetypeMatch> {
        self.tables.inference.detect_archetypes(text, &self.tables.normalizer)
    }

    /// Tiered requirements for a job posting. Only literally named skills count.
    pub fn classify_requirements(&self, jd_text: &str) -> BTreeMap<String, JdRequirement> {
        let mentions = self.tables.extract_literal(jd_text);
        let requirements = self
            .tables
            .classify(jd_text, &mentions, self.config.classifier.context_window);
        log::debug!(
            "Classified {} requirements ({} required, {} preferred)",
            requirements.len(),
            count_tier(requirements.values(), RequirementTier::Required),
            count_tier(requirements.values(), RequirementTier::Preferred),
        );
        requirements
    }

    pub fn get_match_credit(&self, required: &str, candidate: &str) -> MatchCredit {
        self.tables.ontology.get_match_credit(required, candidate)
    }

    /// Score a resume against a job posting.
    pub fn quick_match(&self, resume_text: &str, jd_text: &str) -> MatchResult {
        let resume = self.extract_skills_from_text(resume_text);
        let requirements = self.classify_requirements(jd_text);
        self.score_requirements(&resume, &requirements)
    }

    /// Score already-extracted resume mentions against already-classified requirements.
    pub fn score_requirements(
        &self,
        resume: &MentionMap,
        requirements: &BTreeMap<String, JdRequirement>,
    ) -> MatchResult {
        if requirements.is_empty() {
            log::debug!("No requirements found in job text; score is 0");
            return MatchResult::empty();
        }

        let scoring = &self.config.scoring;
        let scored: Vec<(&JdRequirement, MatchDetail)> = requirements
            .values()
            .map(|requirement| (requirement, self.best_match(requirement, resume)))
            .collect();

        let required_coverage = coverage(&scored, Some(RequirementTier::Required));
        let preferred_coverage = coverage(&scored, Some(RequirementTier::Preferred));
        let keyword_score = coverage(&scored, None);

        let has_required = scored.iter().any(|(r, _)| r.tier == RequirementTier::Required);
        let has_preferred = scored.iter().any(|(r, _)| r.tier == RequirementTier::Preferred);
        let score = blend(
            scoring,
            has_required.then_some(required_coverage),
            has_preferred.then_some(preferred_coverage),
            keyword_score,
        );

        let (matched, missing): (Vec<_>, Vec<_>) = scored
            .iter()
            .partition(|(_, detail)| detail.credit >= scoring.match_threshold);

        let mut gaps: Vec<&JdRequirement> = missing.iter().map(|(r, _)| *r).collect();
        gaps.sort_by(|a, b| {
            a.tier
                .priority()
                .cmp(&b.tier.priority())
                .then_with(|| b.base_weight.cmp(&a.base_weight))
                .then_with(|| a.skill_id.cmp(&b.skill_id))
        });
        gaps.truncate(scoring.max_top_gaps);

        log::debug!(
            "Match score {} (required {:.2}, preferred {:.2}, keywords {:.2}); {} of {} met",
            score,
            required_coverage,
            preferred_coverage,
            keyword_score,
            matched.len(),
            scored.len()
        );

        MatchResult {
            score,
            required_coverage,
            preferred_coverage,
            keyword_score,
            matched_skills: matched.iter().map(|(r, _)| r.skill_id.clone()).collect(),
            missing_skills: missing.iter().map(|(r, _)| r.skill_id.clone()).collect(),
            top_gaps: gaps.iter().map(|r| r.skill_id.clone()).collect(),
            match_details: scored.into_iter().map(|(_, detail)| detail).collect(),
        }
    }

    /// Best confidence-weighted credit any resume skill gives this requirement.
    fn best_match(&self, requirement: &JdRequirement, resume: &MentionMap) -> MatchDetail {
        let mut best: Option<(f32, MatchType, &str)> = None;

        for mention in resume.values() {
            let credit = self.get_match_credit(&requirement.skill_id, &mention.skill_id);
            let weighted = credit.credit * mention.confidence;
            if weighted <= 0.0 {
                continue;
            }
            let better = match best {
                None => true,
                Some((top, match_type, _)) => {
                    weighted > top
                        || (weighted == top && credit.match_type.rank() > match_type.rank())
                }
            };
            if better {
                best = Some((weighted, credit.match_type, mention.skill_id.as_str()));
            }
        }

        match best {
            Some((credit, match_type, skill)) => MatchDetail {
                skill: requirement.skill_id.clone(),
                tier: requirement.tier,
                credit,
                matched_by: Some(skill.to_string()),
                match_type,
            },
            None => MatchDetail {
                skill: requirement.skill_id.clone(),
                tier: requirement.tier,
                credit: 0.0,
                matched_by: None,
                match_type: MatchType::None,
            },
        }
    }
}

/// Weighted share of requirement weight satisfied, over one tier or all of them.
fn coverage(scored: &[(&JdRequirement, MatchDetail)], tier: Option<RequirementTier>) -> f32 {
    let (earned, total) = scored
        .iter()
        .filter(|(r, _)| tier.map_or(true, |t| r.tier == t))
        .fold((0.0_f32, 0.0_f32), |(earned, total), (r, detail)| {
            let weight = r.base_weight as f32;
            (earned + detail.credit * weight, total + weight)
        });

    if total > 0.0 {
        (earned / total).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Blend the coverages over the tiers that exist, then gate by required coverage.
fn blend(
    scoring: &ScoringConfig,
    required: Option<f32>,
    preferred: Option<f32>,
    keyword: f32,
) -> u8 {
    let components = [
        required.map(|c| (scoring.required_weight, c)),
        preferred.map(|c| (scoring.preferred_weight, c)),
        Some((scoring.keyword_weight, keyword)),
    ];

    let (weighted, weights) = components
        .iter()
        .flatten()
        .fold((0.0_f32, 0.0_f32), |(sum, weights), (weight, value)| {
            (sum + weight * value, weights + weight)
        });
    let base = if weights > 0.0 { weighted / weights } else { 0.0 };

    let floor = scoring.required_gate_floor;
    let gate = required.map_or(1.0, |coverage| floor + (1.0 - floor) * coverage);

    (100.0 * base * gate).round().clamp(0.0, 100.0) as u8
}

fn count_tier<'a>(
    requirements: impl Iterator<Item = &'a JdRequirement>,
    tier: RequirementTier,
) -> usize {
    requirements.filter(|r| r.tier == tier).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::classifier::RequirementEvidence;
    use std::sync::OnceLock;

    fn engine() -> &'static AnalysisEngine {
        static ENGINE: OnceLock<AnalysisEngine> = OnceLock::new();
        ENGINE.get_or_init(|| AnalysisEngine::builtin().unwrap())
    }

    fn detail<'a>(result: &'a MatchResult, skill: &str) -> &'a MatchDetail {
        result
            .match_details
            .iter()
            .find(|d| d.skill == skill)
            .unwrap_or_else(|| panic!("no detail for {}", skill))
    }

    fn requirement(
        skill: &str,
        tier: RequirementTier,
        base_weight: u32,
    ) -> (String, JdRequirement) {
        (
            skill.to_string(),
            JdRequirement {
                skill_id: skill.to_string(),
                tier,
                base_weight,
                evidence: RequirementEvidence::default(),
            },
        )
    }

    const TIERED_JD: &str = "Requirements:\n- Python\n\nNice to have:\n- Docker\n";

    #[test]
    fn test_sourced_satisfies_sourcing() {
        let result = engine().quick_match(
            "Sourced candidates for senior engineering roles",
            "Requirements:\n- Sourcing",
        );
        let sourcing = detail(&result, "Sourcing");
        assert!(matches!(sourcing.match_type, MatchType::Exact | MatchType::Alias));
        assert_eq!(sourcing.credit, 1.0);
        assert!(result.matched_skills.contains(&"Sourcing".to_string()));
    }

    #[test]
    fn test_child_credit_for_broader_requirement() {
        let credit = engine().get_match_credit("Recruiting", "Executive Recruiting");
        assert_eq!(credit.credit, 0.6);
        assert_eq!(credit.match_type, MatchType::Child);
    }

    #[test]
    fn test_child_credit_through_quick_match() {
        let result =
            engine().quick_match("Deployed services on AWS", "Requirements:\n- Cloud computing");
        let cloud = detail(&result, "Cloud Computing");
        assert_eq!(cloud.match_type, MatchType::Child);
        assert_eq!(cloud.matched_by.as_deref(), Some("AWS"));
        assert!((cloud.credit - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_required_gap_precedes_preferred_gap() {
        let requirements: BTreeMap<_, _> = [
            requirement("Docker", RequirementTier::Preferred, 10),
            requirement("Kubernetes", RequirementTier::Required, 10),
        ]
        .into_iter()
        .collect();

        let result = engine().score_requirements(&MentionMap::new(), &requirements);
        assert_eq!(result.top_gaps, vec!["Kubernetes".to_string(), "Docker".to_string()]);
    }

    #[test]
    fn test_top_gaps_order_from_posting() {
        let jd = "Requirements:\n- Python\n\nNice to have:\n- Java\n- Ruby";
        let result = engine().quick_match("", jd);
        // Java outranks Ruby on weight; Python is required.
        assert_eq!(result.top_gaps, vec!["Python", "Java", "Ruby"]);
    }

    #[test]
    fn test_top_gaps_are_capped() {
        let ids = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];
        let requirements: BTreeMap<_, _> = ids
            .into_iter()
            .map(|s| requirement(s, RequirementTier::Unlabeled, 5))
            .collect();
        let result = engine().score_requirements(&MentionMap::new(), &requirements);
        assert_eq!(result.missing_skills.len(), 12);
        assert_eq!(result.top_gaps.len(), 10);
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let result = engine().quick_match("", TIERED_JD);
        assert_eq!(result.required_coverage, 0.0);
        assert_eq!(result.preferred_coverage, 0.0);
        assert_eq!(result.score, 0);
        assert_eq!(result.missing_skills, vec!["Docker", "Python"]);
        assert!(result.match_details.iter().all(|d| d.matched_by.is_none()));
    }

    #[test]
    fn test_empty_job_text() {
        let result = engine().quick_match("Python, Docker, Kubernetes", "");
        assert!(result.match_details.is_empty());
        assert_eq!(result.score, 0);
        assert_eq!(result.keyword_score, 0.0);
    }

    #[test]
    fn test_full_coverage_scores_100() {
        let result = engine().quick_match("Python and Docker every day", TIERED_JD);
        assert_eq!(result.required_coverage, 1.0);
        assert_eq!(result.preferred_coverage, 1.0);
        assert_eq!(result.score, 100);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_required_coverage_gates_score() {
        let preferred_only = engine().quick_match("Docker", TIERED_JD);
        let required_only = engine().quick_match("Python", TIERED_JD);

        assert_eq!(preferred_only.preferred_coverage, 1.0);
        assert_eq!(preferred_only.required_coverage, 0.0);
        assert!(preferred_only.score < 10, "got {}", preferred_only.score);
        assert!(required_only.score > 60, "got {}", required_only.score);
    }

    #[test]
    fn test_only_unlabeled_requirements_use_keyword_score() {
        let result = engine().quick_match("Python", "We work in Python and Docker.");
        assert!(result.match_details.iter().all(|d| d.tier == RequirementTier::Unlabeled));
        // Python 10 of 18 weight points
        assert_eq!(result.score, 56);
    }

    #[test]
    fn test_inferred_evidence_counts_less_than_literal() {
        let jd = "Requirements:\n- Machine learning";
        let inferred = engine().quick_match("Built models in PyTorch", jd);
        let literal = engine().quick_match("Machine learning research", jd);

        let inferred = detail(&inferred, "Machine Learning");
        let literal = detail(&literal, "Machine Learning");
        assert_eq!(inferred.matched_by.as_deref(), Some("Machine Learning"));
        assert!(inferred.credit < literal.credit);
        assert!((inferred.credit - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let mut config = EngineConfig::default();
        config.scoring.match_threshold = 0.8;
        let strict = AnalysisEngine::new(Arc::new(SkillTables::builtin().unwrap()), config);

        let result =
            strict.quick_match("Deployed services on AWS", "Requirements:\n- Cloud computing");
        assert_eq!(result.missing_skills, vec!["Cloud Computing"]);
        assert!(result.matched_skills.is_empty());
    }

    #[test]
    fn test_details_cover_every_requirement() {
        let result = engine().quick_match("Python", TIERED_JD);
        let skills: Vec<_> = result.match_details.iter().map(|d| d.skill.as_str()).collect();
        assert_eq!(skills, vec!["Docker", "Python"]);
        assert_eq!(detail(&result, "Docker").match_type, MatchType::None);
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnalysisEngine>();

        let shared = engine().clone();
        let handle = std::thread::spawn(move || shared.quick_match("Python", TIERED_JD).score);
        assert_eq!(handle.join().unwrap(), engine().quick_match("Python", TIERED_JD).score);
    }
}
