//! Job-description requirement classification.
//!
//! Every skill a posting names is tiered as required, preferred or unlabeled,
//! first from the section it sits in and then from inline wording next to its
//! first mention ("Python required", "Docker is a plus").

use crate::data::classifier::{
    NEUTRAL_HEADINGS, PREFERRED_HEADINGS, PREFERRED_MARKERS, REQUIRED_HEADINGS, REQUIRED_MARKERS,
};
use crate::error::{Result, SkillFitError};
use crate::processing::lexicon::{is_word_bounded, MentionMap, SkillLexicon};
use crate::processing::normalizer::TextNormalizer;
use aho_corasick::{AhoCorasick, MatchKind};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

/// Default number of characters searched for inline markers on each side of a mention.
pub const DEFAULT_CONTEXT_WINDOW: usize = 50;

const MAX_HEADING_WORDS: usize = 8;
const MAX_CAPS_HEADING_WORDS: usize = 6;
const MAX_INLINE_HEADING_WORDS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementTier {
    Required,
    Preferred,
    Unlabeled,
}

impl RequirementTier {
    /// Lower sorts first when ranking gaps.
    pub fn priority(self) -> u8 {
        match self {
            RequirementTier::Required => 0,
            RequirementTier::Preferred => 1,
            RequirementTier::Unlabeled => 2,
        }
    }
}

impl fmt::Display for RequirementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequirementTier::Required => "required",
            RequirementTier::Preferred => "preferred",
            RequirementTier::Unlabeled => "unlabeled",
        };
        write!(f, "{}", label)
    }
}

/// Why a requirement received its tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementEvidence {
    /// Heading of the section the tier came from (or that first contained the skill).
    pub section: Option<String>,
    /// Inline marker that overrode the section tier.
    pub marker: Option<String>,
    pub occurrences: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JdRequirement {
    pub skill_id: String,
    pub tier: RequirementTier,
    pub base_weight: u32,
    pub evidence: RequirementEvidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadingKind {
    Required,
    Preferred,
    Neutral,
}

/// A run of normalized lines under one (optional) heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdSection {
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

impl JdSection {
    fn text(&self) -> String {
        self.lines.join(" ")
    }
}

#[derive(Debug, Clone)]
pub struct RequirementClassifier {
    required_headings: Vec<Regex>,
    preferred_headings: Vec<Regex>,
    neutral_headings: Vec<Regex>,
    markers: AhoCorasick,
    /// Indexed by Aho-Corasick pattern id.
    marker_tiers: Vec<(String, RequirementTier)>,
}

impl RequirementClassifier {
    pub fn new(
        required_headings: &[&str],
        preferred_headings: &[&str],
        neutral_headings: &[&str],
        required_markers: &[&str],
        preferred_markers: &[&str],
    ) -> Result<Self> {
        let marker_tiers: Vec<(String, RequirementTier)> = required_markers
            .iter()
            .map(|m| (m.to_lowercase(), RequirementTier::Required))
            .chain(
                preferred_markers
                    .iter()
                    .map(|m| (m.to_lowercase(), RequirementTier::Preferred)),
            )
            .collect();

        let markers = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(marker_tiers.iter().map(|(marker, _)| marker.as_str()))
            .map_err(|e| {
                SkillFitError::InvalidTable(format!("Failed to build marker matcher: {}", e))
            })?;

        Ok(Self {
            required_headings: compile_all(required_headings)?,
            preferred_headings: compile_all(preferred_headings)?,
            neutral_headings: compile_all(neutral_headings)?,
            markers,
            marker_tiers,
        })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(
            REQUIRED_HEADINGS,
            PREFERRED_HEADINGS,
            NEUTRAL_HEADINGS,
            REQUIRED_MARKERS,
            PREFERRED_MARKERS,
        )
    }

    /// Tier every skill in `mentions` against the posting text.
    pub fn classify(
        &self,
        jd_text: &str,
        mentions: &MentionMap,
        lexicon: &SkillLexicon,
        normalizer: &TextNormalizer,
        context_window: usize,
    ) -> BTreeMap<String, JdRequirement> {
        let normalized = normalizer.normalize(jd_text);
        let mut requirements: BTreeMap<String, JdRequirement> = mentions
            .values()
            .map(|mention| {
                let requirement = JdRequirement {
                    skill_id: mention.skill_id.clone(),
                    tier: RequirementTier::Unlabeled,
                    base_weight: mention.weight,
                    evidence: RequirementEvidence {
                        occurrences: lexicon.occurrences(&mention.skill_id, &normalized),
                        ..RequirementEvidence::default()
                    },
                };
                (mention.skill_id.clone(), requirement)
            })
            .collect();

        if requirements.is_empty() {
            return requirements;
        }

        let lines = normalizer.normalize_lines(jd_text);
        let sections = self.split_sections(jd_text, &lines);
        self.apply_section_tiers(&sections, &mut requirements, lexicon);
        self.apply_inline_markers(&lines, &mut requirements, lexicon, context_window);

        requirements
    }

    /// Split the posting into sections. `lines` are the normalized lines of `jd_text`.
    pub fn split_sections(&self, jd_text: &str, lines: &[String]) -> Vec<JdSection> {
        let mut sections = Vec::new();
        let mut current = JdSection {
            heading: None,
            lines: Vec::new(),
        };

        for (raw, line) in jd_text.lines().zip(lines) {
            if line.is_empty() {
                if !current.lines.is_empty() {
                    sections.push(current);
                }
                current = JdSection {
                    heading: None,
                    lines: Vec::new(),
                };
                continue;
            }

            if let Some(heading) = self.heading_of(raw, line) {
                if !current.lines.is_empty() || current.heading.is_some() {
                    sections.push(current);
                }
                current = JdSection {
                    heading: Some(heading),
                    lines: Vec::new(),
                };
            }
            current.lines.push(line.clone());
        }

        if !current.lines.is_empty() {
            sections.push(current);
        }
        sections
    }

    fn apply_section_tiers(
        &self,
        sections: &[JdSection],
        requirements: &mut BTreeMap<String, JdRequirement>,
        lexicon: &SkillLexicon,
    ) {
        let mut current_tier = RequirementTier::Unlabeled;

        for section in sections {
            if let Some(heading) = &section.heading {
                match self.heading_kind(heading) {
                    Some(HeadingKind::Preferred) => current_tier = RequirementTier::Preferred,
                    Some(HeadingKind::Required) => current_tier = RequirementTier::Required,
                    Some(HeadingKind::Neutral) => current_tier = RequirementTier::Unlabeled,
                    None => {}
                }
            }

            let text = section.text();
            for (skill_id, requirement) in requirements.iter_mut() {
                if lexicon.find_first(skill_id, &text).is_none() {
                    continue;
                }
                if requirement.tier == RequirementTier::Unlabeled
                    && current_tier != RequirementTier::Unlabeled
                {
                    requirement.tier = current_tier;
                    requirement.evidence.section = section.heading.clone();
                } else if requirement.evidence.section.is_none() {
                    requirement.evidence.section = section.heading.clone();
                }
            }
        }
    }

    fn apply_inline_markers(
        &self,
        lines: &[String],
        requirements: &mut BTreeMap<String, JdRequirement>,
        lexicon: &SkillLexicon,
        context_window: usize,
    ) {
        for (skill_id, requirement) in requirements.iter_mut() {
            let first = lines
                .iter()
                .find_map(|line| lexicon.find_first(skill_id, line).map(|span| (line, span)));

            if let Some((line, span)) = first {
                if let Some((marker, tier)) = self.nearest_marker(line, span, context_window) {
                    requirement.tier = tier;
                    requirement.evidence.marker = Some(marker);
                }
            }
        }
    }

    /// Closest word-bounded marker inside the window around `span`.
    fn nearest_marker(
        &self,
        line: &str,
        span: Range<usize>,
        context_window: usize,
    ) -> Option<(String, RequirementTier)> {
        let window_start = chars_before(line, span.start, context_window);
        let window_end = chars_after(line, span.end, context_window);

        self.markers
            .find_iter(line)
            .filter(|m| m.start() >= window_start && m.end() <= window_end)
            .filter(|m| is_word_bounded(line, m.start(), m.end()))
            .min_by_key(|m| {
                let distance = if m.end() <= span.start {
                    span.start - m.end()
                } else if m.start() >= span.end {
                    m.start() - span.end
                } else {
                    0
                };
                (distance, m.start())
            })
            .map(|m| self.marker_tiers[m.pattern().as_usize()].clone())
    }

    /// Heading text if this line opens a new section.
    fn heading_of(&self, raw: &str, line: &str) -> Option<String> {
        let raw = raw.trim();
        if starts_with_bullet(raw) {
            return None;
        }

        // "Requirements: 5+ years of Python"
        if let Some((prefix, rest)) = line.split_once(':') {
            let prefix = strip_heading(prefix);
            if !rest.trim().is_empty()
                && !prefix.is_empty()
                && prefix.split_whitespace().count() <= MAX_INLINE_HEADING_WORDS
                && self.heading_kind(&prefix).is_some()
            {
                return Some(prefix);
            }
        }

        let heading = strip_heading(line);
        if heading.is_empty() {
            return None;
        }
        let words = heading.split_whitespace().count();

        let markdown = raw.starts_with('#');
        let colon = raw.ends_with(':') && words <= MAX_HEADING_WORDS;
        let caps = words <= MAX_CAPS_HEADING_WORDS && is_all_caps(raw);
        let library = words <= MAX_HEADING_WORDS && self.heading_kind(&heading).is_some();
        (markdown || colon || caps || library).then_some(heading)
    }

    fn heading_kind(&self, heading: &str) -> Option<HeadingKind> {
        let matches = |patterns: &[Regex]| patterns.iter().any(|p| p.is_match(heading));
        if matches(&self.preferred_headings) {
            Some(HeadingKind::Preferred)
        } else if matches(&self.required_headings) {
            Some(HeadingKind::Required)
        } else if matches(&self.neutral_headings) {
            Some(HeadingKind::Neutral)
        } else {
            None
        }
    }
}

fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Ok(RegexBuilder::new(p).case_insensitive(true).build()?))
        .collect()
}

fn strip_heading(text: &str) -> String {
    text.trim()
        .trim_start_matches(|c: char| c == '#' || c == '*' || c == '_' || c.is_whitespace())
        .trim_end_matches(|c: char| matches!(c, ':' | '*' | '_' | '.') || c.is_whitespace())
        .to_string()
}

fn starts_with_bullet(line: &str) -> bool {
    let mut chars = line.chars();
    match chars.next() {
        Some('-' | '•' | '·' | '▪' | '◦' | '+') => true,
        Some('*') => chars.next().is_some_and(char::is_whitespace),
        Some(c) if c.is_ascii_digit() => {
            let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
            rest.starts_with(". ") || rest.starts_with(") ")
        }
        _ => false,
    }
}

fn is_all_caps(line: &str) -> bool {
    let letters = line.chars().filter(|c| c.is_alphabetic()).count();
    letters >= 2 && !line.chars().any(char::is_lowercase)
}

/// Byte offset `count` characters to the left of `idx`, or the line start.
fn chars_before(line: &str, idx: usize, count: usize) -> usize {
    if count == 0 {
        return idx;
    }
    line[..idx]
        .char_indices()
        .rev()
        .nth(count - 1)
        .map_or(0, |(offset, _)| offset)
}

/// Byte offset `count` characters to the right of `idx`, or the line end.
fn chars_after(line: &str, idx: usize, count: usize) -> usize {
    line[idx..]
        .char_indices()
        .nth(count)
        .map_or(line.len(), |(offset, _)| idx + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::lemmas::LEMMAS;
    use crate::processing::lexicon::{PatternDef, SkillCategory};
    use crate::processing::ontology::{NodeDef, SkillOntology};

    const NODES: &[NodeDef] = &[
        NodeDef {
            id: "Python",
            ..NodeDef::LEAF
        },
        NodeDef {
            id: "Docker",
            ..NodeDef::LEAF
        },
        NodeDef {
            id: "Kubernetes",
            ..NodeDef::LEAF
        },
        NodeDef {
            id: "SQL",
            ..NodeDef::LEAF
        },
    ];

    const PATTERNS: &[PatternDef] = &[
        PatternDef {
            pattern: r"\bpython\b",
            skill: "Python",
            weight: 10,
            category: SkillCategory::Language,
        },
        PatternDef {
            pattern: r"\bdocker\b",
            skill: "Docker",
            weight: 8,
            category: SkillCategory::Cloud,
        },
        PatternDef {
            pattern: r"\bkubernetes\b",
            skill: "Kubernetes",
            weight: 8,
            category: SkillCategory::Cloud,
        },
        PatternDef {
            pattern: r"\bsql\b",
            skill: "SQL",
            weight: 8,
            category: SkillCategory::Language,
        },
    ];

    struct Fixture {
        classifier: RequirementClassifier,
        lexicon: SkillLexicon,
        normalizer: TextNormalizer,
    }

    impl Fixture {
        fn new() -> Self {
            let ontology = SkillOntology::from_defs(NODES).unwrap();
            Self {
                classifier: RequirementClassifier::builtin().unwrap(),
                lexicon: SkillLexicon::from_defs(PATTERNS, &ontology).unwrap(),
                normalizer: TextNormalizer::new(LEMMAS).unwrap(),
            }
        }

        fn classify(&self, jd: &str) -> BTreeMap<String, JdRequirement> {
            let mentions = self.lexicon.extract(&self.normalizer.normalize(jd));
            self.classifier
                .classify(jd, &mentions, &self.lexicon, &self.normalizer, DEFAULT_CONTEXT_WINDOW)
        }
    }

    #[test]
    fn test_minimum_and_nice_to_have_sections() {
        let jd = "Senior Engineer\n\nMinimum Qualifications\n- 3 years of Python\n\n\
                  Nice to Have\n- Docker\n";
        let requirements = Fixture::new().classify(jd);

        assert_eq!(requirements["Python"].tier, RequirementTier::Required);
        assert_eq!(
            requirements["Python"].evidence.section.as_deref(),
            Some("minimum qualifications")
        );
        assert_eq!(requirements["Docker"].tier, RequirementTier::Preferred);
    }

    #[test]
    fn test_preferred_qualifications_is_not_required() {
        let jd = "Preferred Qualifications:\n- Kubernetes";
        let requirements = Fixture::new().classify(jd);
        assert_eq!(requirements["Kubernetes"].tier, RequirementTier::Preferred);
    }

    #[test]
    fn test_markdown_and_caps_headings() {
        let jd = "## Requirements\n* Python\n\nBONUS POINTS\n* Docker";
        let requirements = Fixture::new().classify(jd);
        assert_eq!(requirements["Python"].tier, RequirementTier::Required);
        assert_eq!(requirements["Docker"].tier, RequirementTier::Preferred);
    }

    #[test]
    fn test_inline_heading_starts_section() {
        let jd = "Requirements: Python and SQL\nDocker experience";
        let requirements = Fixture::new().classify(jd);
        assert_eq!(requirements["Python"].tier, RequirementTier::Required);
        assert_eq!(requirements["Docker"].tier, RequirementTier::Required);
        assert_eq!(requirements["SQL"].evidence.section.as_deref(), Some("requirements"));
    }

    #[test]
    fn test_section_tier_is_sticky_first() {
        let jd = "Requirements:\n- Python\n\nPreferred:\n- Python in production, Docker";
        let requirements = Fixture::new().classify(jd);
        assert_eq!(requirements["Python"].tier, RequirementTier::Required);
        assert_eq!(requirements["Python"].evidence.occurrences, 2);
        assert_eq!(requirements["Docker"].tier, RequirementTier::Preferred);
    }

    #[test]
    fn test_untitled_paragraph_keeps_running_tier() {
        let jd = "What you'll need:\n- Python\n\n- SQL";
        let requirements = Fixture::new().classify(jd);
        assert_eq!(requirements["SQL"].tier, RequirementTier::Required);
    }

    #[test]
    fn test_neutral_heading_resets_tier() {
        let jd = "Requirements:\n- Python\n\nAbout us\nWe run everything on Kubernetes.";
        let requirements = Fixture::new().classify(jd);
        assert_eq!(requirements["Python"].tier, RequirementTier::Required);
        assert_eq!(requirements["Kubernetes"].tier, RequirementTier::Unlabeled);
        assert_eq!(requirements["Kubernetes"].evidence.section.as_deref(), Some("about us"));
    }

    #[test]
    fn test_inline_marker_overrides_section() {
        let jd = "Requirements:\n- Python\n- Docker is a plus\n- Kubernetes (not required)";
        let requirements = Fixture::new().classify(jd);
        assert_eq!(requirements["Python"].tier, RequirementTier::Required);
        assert_eq!(requirements["Docker"].tier, RequirementTier::Preferred);
        assert_eq!(requirements["Docker"].evidence.marker.as_deref(), Some("is a plus"));
        assert_eq!(requirements["Kubernetes"].tier, RequirementTier::Preferred);
        assert_eq!(requirements["Kubernetes"].evidence.marker.as_deref(), Some("not required"));
    }

    #[test]
    fn test_nearest_marker_wins() {
        let jd = "Python is required, Docker would be great";
        let requirements = Fixture::new().classify(jd);
        assert_eq!(requirements["Python"].tier, RequirementTier::Required);
        assert_eq!(requirements["Docker"].tier, RequirementTier::Preferred);
    }

    #[test]
    fn test_markers_must_be_whole_words() {
        let jd = "Python for our bonusing engine";
        let requirements = Fixture::new().classify(jd);
        assert_eq!(requirements["Python"].tier, RequirementTier::Unlabeled);
        assert!(requirements["Python"].evidence.marker.is_none());
    }

    #[test]
    fn test_marker_on_neighbouring_line_is_ignored() {
        let jd = "Python\nA bonus is paid yearly";
        let requirements = Fixture::new().classify(jd);
        assert_eq!(requirements["Python"].tier, RequirementTier::Unlabeled);
    }

    #[test]
    fn test_marker_outside_window_is_ignored() {
        let jd = format!("Python {} required", "and lots of other unrelated words ".repeat(3));
        let requirements = Fixture::new().classify(&jd);
        assert_eq!(requirements["Python"].tier, RequirementTier::Unlabeled);
    }

    #[test]
    fn test_window_counts_characters_not_bytes() {
        let jd = format!("Python {} required", "é".repeat(30));
        let requirements = Fixture::new().classify(&jd);
        assert_eq!(requirements["Python"].tier, RequirementTier::Required);
        assert_eq!(requirements["Python"].evidence.marker.as_deref(), Some("required"));

        let jd = format!("Python {} required", "é".repeat(45));
        let requirements = Fixture::new().classify(&jd);
        assert_eq!(requirements["Python"].tier, RequirementTier::Unlabeled);
    }

    #[test]
    fn test_ideal_candidate_boilerplate_keeps_section_tier() {
        let jd = "Requirements:\n- The ideal candidate has 5+ years of Python\n- SQL";
        let requirements = Fixture::new().classify(jd);
        assert_eq!(requirements["Python"].tier, RequirementTier::Required);
        assert_eq!(requirements["Python"].evidence.marker, None);
        assert_eq!(requirements["SQL"].tier, RequirementTier::Required);

        let requirements = Fixture::new().classify("Requirements:\n- Ideally some Docker");
        assert_eq!(requirements["Docker"].tier, RequirementTier::Preferred);
    }

    #[test]
    fn test_unlabeled_by_default_and_empty_input() {
        let fixture = Fixture::new();
        let requirements = fixture.classify("We use Python.");
        assert_eq!(requirements["Python"].tier, RequirementTier::Unlabeled);
        assert_eq!(requirements["Python"].base_weight, 10);
        assert!(fixture.classify("").is_empty());
    }

    #[test]
    fn test_bullets_are_never_headings() {
        let fixture = Fixture::new();
        let jd = "Requirements:\n- SQL\n- Python";
        let lines = fixture.normalizer.normalize_lines(jd);
        let sections = fixture.classifier.split_sections(jd, &lines);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].lines.len(), 3);
    }

    #[test]
    fn test_tier_priority_order() {
        assert!(RequirementTier::Required.priority() < RequirementTier::Preferred.priority());
        assert!(RequirementTier::Preferred.priority() < RequirementTier::Unlabeled.priority());
    }
}
