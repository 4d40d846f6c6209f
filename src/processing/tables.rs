//! The immutable bundle of skill tables every extraction and match runs against.

use crate::data::{inference, lemmas, lexicon, ontology};
use crate::error::Result;
use crate::processing::classifier::{JdRequirement, RequirementClassifier};
use crate::processing::inference::SkillInference;
use crate::processing::lexicon::{merge_mention, MentionMap, SkillLexicon};
use crate::processing::normalizer::TextNormalizer;
use crate::processing::ontology::SkillOntology;
use std::collections::BTreeMap;

/// Built once, then shared read-only (usually behind an `Arc`).
#[derive(Debug, Clone)]
pub struct SkillTables {
    pub normalizer: TextNormalizer,
    pub lexicon: SkillLexicon,
    pub inference: SkillInference,
    pub ontology: SkillOntology,
    pub classifier: RequirementClassifier,
}

impl SkillTables {
    /// Compile the built-in tables.
    pub fn builtin() -> Result<Self> {
        let ontology = SkillOntology::from_defs(ontology::SKILL_ONTOLOGY)?;
        let lexicon = SkillLexicon::from_defs(lexicon::SKILL_PATTERNS, &ontology)?;
        let inference = SkillInference::from_defs(
            inference::INFERENCE_RULES,
            inference::ARCHETYPES,
            &ontology,
        )?;

        Ok(Self {
            normalizer: TextNormalizer::new(lemmas::LEMMAS)?,
            lexicon,
            inference,
            ontology,
            classifier: RequirementClassifier::builtin()?,
        })
    }

    /// Assemble tables from already-built parts, e.g. small test fixtures.
    pub fn from_parts(
        normalizer: TextNormalizer,
        lexicon: SkillLexicon,
        inference: SkillInference,
        ontology: SkillOntology,
        classifier: RequirementClassifier,
    ) -> Self {
        Self {
            normalizer,
            lexicon,
            inference,
            ontology,
            classifier,
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Only what the text literally names.
    pub fn extract_literal(&self, text: &str) -> MentionMap {
        self.lexicon.extract(&self.normalize(text))
    }

    /// Literal, inferred and archetype mentions merged into one map.
    ///
    /// Literal matches are merged first so they win confidence ties.
    pub fn extract_skills(&self, text: &str) -> MentionMap {
        let normalized = self.normalize(text);
        let mut mentions = self.lexicon.extract(&normalized);

        let inferred = self.inference.infer_skills(&normalized);
        let archetypes = self.inference.archetype_mentions(text, &self.normalizer);
        for mention in inferred.into_values().chain(archetypes.into_values()) {
            merge_mention(&mut mentions, mention);
        }
        mentions
    }

    pub fn classify(
        &self,
        jd_text: &str,
        mentions: &MentionMap,
        context_window: usize,
    ) -> BTreeMap<String, JdRequirement> {
        self.classifier
            .classify(jd_text, mentions, &self.lexicon, &self.normalizer, context_window)
    }
}
