//! Skill lexicon: compiled (pattern -> canonical skill) rules and literal extraction

use crate::error::Result;
use crate::processing::ontology::SkillOntology;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillCategory {
    Language,
    Framework,
    Cloud,
    Data,
    Engineering,
    Recruiting,
    PeopleOps,
    Leadership,
    Business,
    Soft,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillCategory::Language => "Language",
            SkillCategory::Framework => "Framework",
            SkillCategory::Cloud => "Cloud & Infrastructure",
            SkillCategory::Data => "Data & ML",
            SkillCategory::Engineering => "Engineering Practice",
            SkillCategory::Recruiting => "Recruiting",
            SkillCategory::PeopleOps => "People Operations",
            SkillCategory::Leadership => "Leadership",
            SkillCategory::Business => "Business",
            SkillCategory::Soft => "Soft Skill",
        };
        write!(f, "{}", label)
    }
}

/// Where a mention came from. Literal evidence is the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Literal,
    Inferred,
    Archetype,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMention {
    pub skill_id: String,
    pub weight: u32,
    pub category: SkillCategory,
    pub provenance: Provenance,
    /// 0.0 - 1.0; multiplies match credit when this mention satisfies a requirement.
    pub confidence: f32,
}

impl SkillMention {
    pub fn literal(skill_id: impl Into<String>, weight: u32, category: SkillCategory) -> Self {
        Self {
            skill_id: skill_id.into(),
            weight,
            category,
            provenance: Provenance::Literal,
            confidence: 1.0,
        }
    }
}

/// Skill mentions keyed by canonical skill id.
pub type MentionMap = BTreeMap<String, SkillMention>;

/// Fold a mention into the map. The highest weight is kept; provenance,
/// confidence and category follow the highest-confidence source, and the
/// earlier source wins a confidence tie.
pub fn merge_mention(mentions: &mut MentionMap, mention: SkillMention) {
    match mentions.get_mut(&mention.skill_id) {
        Some(existing) => {
            existing.weight = existing.weight.max(mention.weight);
            if mention.confidence > existing.confidence {
                existing.provenance = mention.provenance;
                existing.confidence = mention.confidence;
                existing.category = mention.category;
            }
        }
        None => {
            mentions.insert(mention.skill_id.clone(), mention);
        }
    }
}

/// Static pattern row as authored in the data tables.
#[derive(Debug, Clone, Copy)]
pub struct PatternDef {
    pub pattern: &'static str,
    pub skill: &'static str,
    pub weight: u32,
    pub category: SkillCategory,
}

#[derive(Debug, Clone)]
pub struct SkillPattern {
    pub pattern: Regex,
    pub skill_id: String,
    pub weight: u32,
    pub category: SkillCategory,
}

impl SkillPattern {
    pub fn new(
        pattern: &str,
        skill_id: impl Into<String>,
        weight: u32,
        category: SkillCategory,
    ) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            pattern,
            skill_id: skill_id.into(),
            weight,
            category,
        })
    }
}

/// Ordered library of skill patterns, evaluated against normalized text.
#[derive(Debug, Clone)]
pub struct SkillLexicon {
    patterns: Vec<SkillPattern>,
    by_skill: HashMap<String, Vec<usize>>,
}

impl SkillLexicon {
    pub fn new(patterns: Vec<SkillPattern>) -> Self {
        let mut by_skill: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, pattern) in patterns.iter().enumerate() {
            by_skill.entry(pattern.skill_id.clone()).or_default().push(idx);
        }
        Self { patterns, by_skill }
    }

    /// Compile pattern rows, resolving each target through the ontology's
    /// alias table so aliased skills collapse onto one canonical id.
    pub fn from_defs(defs: &[PatternDef], ontology: &SkillOntology) -> Result<Self> {
        let patterns = defs
            .iter()
            .map(|def| {
                let skill_id = ontology.canonical_id(def.skill).unwrap_or(def.skill);
                SkillPattern::new(def.pattern, skill_id, def.weight, def.category)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(patterns))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[SkillPattern] {
        &self.patterns
    }

    /// Canonical skill ids this lexicon can emit.
    pub fn skill_ids(&self) -> BTreeSet<&str> {
        self.by_skill.keys().map(String::as_str).collect()
    }

    pub fn category_of(&self, skill_id: &str) -> Option<SkillCategory> {
        self.by_skill
            .get(skill_id)
            .and_then(|indices| indices.first())
            .map(|&idx| self.patterns[idx].category)
    }

    /// Literal mentions found in already-normalized text.
    pub fn extract(&self, normalized: &str) -> MentionMap {
        let mut mentions = MentionMap::new();
        if normalized.is_empty() {
            return mentions;
        }

        for pattern in &self.patterns {
            if pattern.pattern.is_match(normalized) {
                merge_mention(
                    &mut mentions,
                    SkillMention::literal(&pattern.skill_id, pattern.weight, pattern.category),
                );
            }
        }
        mentions
    }

    /// Earliest span in `normalized` where `skill_id` is mentioned.
    ///
    /// Skills the lexicon has no pattern for fall back to a word-bounded
    /// search for the skill name itself.
    pub fn find_first(&self, skill_id: &str, normalized: &str) -> Option<Range<usize>> {
        match self.by_skill.get(skill_id) {
            Some(indices) => indices
                .iter()
                .filter_map(|&idx| self.patterns[idx].pattern.find(normalized))
                .map(|m| m.range())
                .min_by_key(|range| (range.start, range.end)),
            None => find_word(normalized, &skill_id.to_lowercase()).next(),
        }
    }

    /// Number of distinct positions at which `skill_id` is mentioned.
    pub fn occurrences(&self, skill_id: &str, normalized: &str) -> usize {
        match self.by_skill.get(skill_id) {
            Some(indices) => indices
                .iter()
                .flat_map(|&idx| self.patterns[idx].pattern.find_iter(normalized))
                .map(|m| m.start())
                .collect::<BTreeSet<_>>()
                .len(),
            None => find_word(normalized, &skill_id.to_lowercase()).count(),
        }
    }
}

/// Non-overlapping occurrences of `needle` not embedded in a longer word.
fn find_word<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
    haystack
        .match_indices(needle)
        .filter(move |(start, _)| {
            !needle.is_empty() && is_word_bounded(haystack, *start, start + needle.len())
        })
        .map(move |(start, _)| start..start + needle.len())
}

pub(crate) fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
