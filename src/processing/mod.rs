//! Skill extraction, requirement tiering and fit scoring

pub mod analyzer;
pub mod classifier;
pub mod inference;
pub mod lexicon;
pub mod normalizer;
pub mod ontology;
pub mod tables;
