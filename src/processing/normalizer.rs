//! Text normalization applied before any skill pattern is evaluated

use crate::error::{Result, SkillFitError};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Canonicalizes surface variation: case, dash and quote variants, inflected
/// word forms and whitespace runs.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    lemmas: HashMap<String, String>,
}

impl TextNormalizer {
    /// Build a normalizer from a `(variant, lemma)` table.
    ///
    /// A lemma that is itself a variant would make `normalize` non-idempotent,
    /// so such tables are rejected.
    pub fn new(table: &[(&str, &str)]) -> Result<Self> {
        let mut lemmas = HashMap::with_capacity(table.len());

        for (variant, lemma) in table {
            let variant = variant.to_lowercase();
            let lemma = lemma.to_lowercase();
            if variant.unicode_words().count() != 1 || lemma.unicode_words().count() != 1 {
                return Err(SkillFitError::InvalidTable(format!(
                    "lemma entries must be single words: {} -> {}",
                    variant, lemma
                )));
            }
            if let Some(previous) = lemmas.insert(variant.clone(), lemma.clone()) {
                if previous != lemma {
                    return Err(SkillFitError::InvalidTable(format!(
                        "conflicting lemmas for {}: {} and {}",
                        variant, previous, lemma
                    )));
                }
            }
        }

        if let Some(lemma) = lemmas.values().find(|lemma| lemmas.contains_key(*lemma)) {
            return Err(SkillFitError::InvalidTable(format!(
                "lemma {} is also listed as a variant",
                lemma
            )));
        }

        Ok(Self { lemmas })
    }

    /// Normalizer with no lemma table; only case, punctuation and whitespace.
    pub fn without_lemmas() -> Self {
        Self {
            lemmas: HashMap::new(),
        }
    }

    pub fn lemma_count(&self) -> usize {
        self.lemmas.len()
    }

    /// Normalize the whole text into a single line.
    pub fn normalize(&self, text: &str) -> String {
        let lemmatized = self.lemmatize(&unify_punctuation(&text.to_lowercase()));
        collapse_whitespace(&lemmatized)
    }

    /// Normalize each line independently, keeping line structure.
    ///
    /// Blank lines are kept as empty strings so callers can still see
    /// paragraph boundaries.
    pub fn normalize_lines(&self, text: &str) -> Vec<String> {
        text.lines().map(|line| self.normalize(line)).collect()
    }

    fn lemmatize(&self, text: &str) -> String {
        if self.lemmas.is_empty() {
            return text.to_string();
        }

        let mut output = String::with_capacity(text.len());
        for segment in text.split_word_bounds() {
            match self.lemmas.get(segment) {
                Some(lemma) => output.push_str(lemma),
                None => output.push_str(segment),
            }
        }
        output
    }
}

fn unify_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FE58}' | '\u{FE63}' | '\u{FF0D}' => '-',
            '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{201F}' | '\u{2033}' => '"',
            '\u{00A0}' | '\u{2007}' | '\u{202F}' => ' ',
            other => other,
        })
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::lemmas::LEMMAS;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new(LEMMAS).unwrap()
    }

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        let n = normalizer();
        assert_eq!(n.normalize("  Senior   PYTHON\tEngineer \n"), "senior python engineer");
    }

    #[test]
    fn test_rewrites_variants_to_lemma() {
        let n = normalizer();
        assert_eq!(n.normalize("Sourced candidates"), "sourcing candidates");
        assert_eq!(n.normalize("Managed a team"), "manage a team");
        assert_eq!(n.normalize("Sourcers, recruiters."), "sourcing, recruiting.");
    }

    #[test]
    fn test_only_whole_words_are_rewritten() {
        let n = normalizer();
        // "resourced" contains "sourced" but is a different word
        assert_eq!(n.normalize("resourced"), "resourced");
    }

    #[test]
    fn test_unifies_dash_and_quote_variants() {
        let n = normalizer();
        assert_eq!(n.normalize("full\u{2013}cycle"), "full-cycle");
        assert_eq!(n.normalize("nice\u{2014}to\u{2014}have"), "nice-to-have");
        assert_eq!(n.normalize("it\u{2019}s a plus"), "it's a plus");
    }

    #[test]
    fn test_empty_input() {
        let n = normalizer();
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("   \n\t"), "");
    }

    #[test]
    fn test_idempotent() {
        let n = normalizer();
        let samples = [
            "Sourced and RECRUITED 40+ engineers \u{2014} managed stakeholders",
            "Minimum Qualifications:\n\n  - Python\u{2010}3, AWS",
            "Led the team; mentored   interviewers",
            "",
        ];
        for sample in samples {
            let once = n.normalize(sample);
            assert_eq!(n.normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_normalize_lines_keeps_blank_lines() {
        let n = normalizer();
        let lines = n.normalize_lines("Requirements\n\n  Python  ");
        assert_eq!(lines, vec!["requirements", "", "python"]);
    }

    #[test]
    fn test_rejects_lemma_that_is_a_variant() {
        let result = TextNormalizer::new(&[("sourced", "sourcing"), ("sourcing", "source")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_multi_word_entries() {
        assert!(TextNormalizer::new(&[("managed a", "manage")]).is_err());
    }

    #[test]
    fn test_without_lemmas() {
        let n = TextNormalizer::without_lemmas();
        assert_eq!(n.lemma_count(), 0);
        assert_eq!(n.normalize("Sourced"), "sourced");
    }
}
