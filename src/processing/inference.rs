//! Secondary evidence: inference rules that imply skills from tools, employers
//! and phrasing, and role archetypes that imply a bundle of skills when a
//! title line matches a known role.

use crate::error::Result;
use crate::processing::lexicon::{
    merge_mention, MentionMap, Provenance, SkillCategory, SkillMention,
};
use crate::processing::normalizer::TextNormalizer;
use crate::processing::ontology::SkillOntology;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Weight given to an archetype-implied skill before scaling by confidence.
pub const ARCHETYPE_BASE_WEIGHT: u32 = 5;

/// Lines longer than this are body text, not titles or headlines.
pub const TITLE_LINE_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, Copy)]
pub struct InferenceRuleDef {
    pub trigger: &'static str,
    pub skill: &'static str,
    pub weight: u32,
    pub confidence: f32,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy)]
pub struct ArchetypeDef {
    pub name: &'static str,
    pub title_pattern: &'static str,
    pub implied: &'static [(&'static str, f32, SkillCategory)],
}

#[derive(Debug, Clone)]
pub struct InferenceRule {
    pub trigger: Regex,
    pub skill_id: String,
    pub weight: u32,
    pub confidence: f32,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpliedSkill {
    pub skill_id: String,
    pub confidence: f32,
    pub category: SkillCategory,
}

#[derive(Debug, Clone)]
pub struct ArchetypeRule {
    pub name: String,
    pub title_pattern: Regex,
    pub implied: Vec<ImpliedSkill>,
}

/// An archetype that matched, with the mentions it contributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeMatch {
    pub name: String,
    pub title: String,
    pub mentions: Vec<SkillMention>,
}

#[derive(Debug, Clone, Default)]
pub struct SkillInference {
    rules: Vec<InferenceRule>,
    archetypes: Vec<ArchetypeRule>,
}

impl SkillInference {
    pub fn new(rules: Vec<InferenceRule>, archetypes: Vec<ArchetypeRule>) -> Self {
        Self { rules, archetypes }
    }

    pub fn from_defs(
        rules: &[InferenceRuleDef],
        archetypes: &[ArchetypeDef],
        ontology: &SkillOntology,
    ) -> Result<Self> {
        let canonical = |skill: &str| ontology.canonical_id(skill).unwrap_or(skill).to_string();

        let rules = rules
            .iter()
            .map(|def| {
                Ok(InferenceRule {
                    trigger: compile(def.trigger)?,
                    skill_id: canonical(def.skill),
                    weight: def.weight,
                    confidence: def.confidence.clamp(0.0, 1.0),
                    category: def.category,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let archetypes = archetypes
            .iter()
            .map(|def| {
                Ok(ArchetypeRule {
                    name: def.name.to_string(),
                    title_pattern: compile(def.title_pattern)?,
                    implied: def
                        .implied
                        .iter()
                        .map(|&(skill, confidence, category)| ImpliedSkill {
                            skill_id: canonical(skill),
                            confidence: confidence.clamp(0.0, 1.0),
                            category,
                        })
                        .collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(rules, archetypes))
    }

    pub fn rules(&self) -> &[InferenceRule] {
        &self.rules
    }

    pub fn archetypes(&self) -> &[ArchetypeRule] {
        &self.archetypes
    }

    /// Inferred mentions from already-normalized text.
    pub fn infer_skills(&self, normalized: &str) -> MentionMap {
        let mut mentions = MentionMap::new();
        for rule in &self.rules {
            if rule.trigger.is_match(normalized) {
                merge_mention(
                    &mut mentions,
                    SkillMention {
                        skill_id: rule.skill_id.clone(),
                        weight: scaled_weight(rule.weight, rule.confidence),
                        category: rule.category,
                        provenance: Provenance::Inferred,
                        confidence: rule.confidence,
                    },
                );
            }
        }
        mentions
    }

    /// Archetypes whose title pattern matches a title-like line of `text`.
    pub fn detect_archetypes(
        &self,
        text: &str,
        normalizer: &TextNormalizer,
    ) -> Vec<ArchetypeMatch> {
        let titles: Vec<String> = normalizer
            .normalize_lines(text)
            .into_iter()
            .filter(|line| !line.is_empty() && line.chars().count() <= TITLE_LINE_MAX_CHARS)
            .collect();

        self.archetypes
            .iter()
            .filter_map(|archetype| {
                let title = titles
                    .iter()
                    .find(|line| archetype.title_pattern.is_match(line))?;
                Some(ArchetypeMatch {
                    name: archetype.name.clone(),
                    title: title.clone(),
                    mentions: archetype
                        .implied
                        .iter()
                        .map(|implied| SkillMention {
                            skill_id: implied.skill_id.clone(),
                            weight: scaled_weight(ARCHETYPE_BASE_WEIGHT, implied.confidence),
                            category: implied.category,
                            provenance: Provenance::Archetype,
                            confidence: implied.confidence,
                        })
                        .collect(),
                })
            })
            .collect()
    }

    /// Union of every matched archetype's implied skills; overlaps keep the
    /// higher confidence.
    pub fn archetype_mentions(&self, text: &str, normalizer: &TextNormalizer) -> MentionMap {
        let mut mentions = MentionMap::new();
        for archetype in self.detect_archetypes(text, normalizer) {
            for mention in archetype.mentions {
                merge_mention(&mut mentions, mention);
            }
        }
        mentions
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

fn scaled_weight(weight: u32, confidence: f32) -> u32 {
    ((weight as f32 * confidence).round() as u32).max(1)
}
