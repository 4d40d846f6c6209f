//! Built-in skill tables

pub mod classifier;
pub mod inference;
pub mod lemmas;
pub mod lexicon;
pub mod ontology;
