//! Skill ontology: canonical skill nodes with weighted parent/child/related
//! edges, and the resolver that turns two skill ids into a match credit.
//!
//! Resolution is deliberately one hop from each side. Credits are exactly the
//! authored edge values; nothing is chained or propagated transitively.

use crate::error::{Result, SkillFitError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use strsim::jaro_winkler;

/// Credit granted when the candidate's own node lists the requirement as its parent.
pub const REVERSE_CHILD_CREDIT: f32 = 0.6;

/// Credit granted when the candidate's own node lists the requirement as its child.
pub const REVERSE_PARENT_CREDIT: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Alias,
    Parent,
    Child,
    Related,
    None,
}

impl MatchType {
    /// Strength used to break ties between equal credits.
    pub fn rank(self) -> u8 {
        match self {
            MatchType::Exact => 5,
            MatchType::Alias => 4,
            MatchType::Parent => 3,
            MatchType::Child => 2,
            MatchType::Related => 1,
            MatchType::None => 0,
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchType::Exact => "exact",
            MatchType::Alias => "alias",
            MatchType::Parent => "parent",
            MatchType::Child => "child",
            MatchType::Related => "related",
            MatchType::None => "none",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchCredit {
    pub credit: f32,
    pub match_type: MatchType,
}

impl MatchCredit {
    pub const NONE: MatchCredit = MatchCredit {
        credit: 0.0,
        match_type: MatchType::None,
    };

    fn new(credit: f32, match_type: MatchType) -> Self {
        Self { credit, match_type }
    }
}

/// Static node row as authored in the data tables.
#[derive(Debug, Clone, Copy)]
pub struct NodeDef {
    pub id: &'static str,
    pub aliases: &'static [&'static str],
    pub parents: &'static [(&'static str, f32)],
    pub children: &'static [(&'static str, f32)],
    pub related: &'static [(&'static str, f32)],
}

impl NodeDef {
    /// A node with no aliases and no edges, for struct-update syntax.
    pub const LEAF: NodeDef = NodeDef {
        id: "",
        aliases: &[],
        parents: &[],
        children: &[],
        related: &[],
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillEdge {
    pub target: String,
    pub credit: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OntologyNode {
    pub id: String,
    /// Lower-cased; always contains the id itself.
    pub aliases: BTreeSet<String>,
    pub parents: Vec<SkillEdge>,
    pub children: Vec<SkillEdge>,
    pub related: Vec<SkillEdge>,
}

#[derive(Debug, Clone, Default)]
pub struct SkillOntology {
    nodes: Vec<OntologyNode>,
    /// lower-cased alias (ids included) -> index into `nodes`
    alias_index: HashMap<String, usize>,
}

impl SkillOntology {
    pub fn from_defs(defs: &[NodeDef]) -> Result<Self> {
        let mut ontology = Self::default();

        for def in defs {
            let node = OntologyNode {
                id: def.id.to_string(),
                aliases: def
                    .aliases
                    .iter()
                    .chain(std::iter::once(&def.id))
                    .map(|alias| alias.to_lowercase())
                    .collect(),
                parents: edges(def.id, "parent", def.parents)?,
                children: edges(def.id, "child", def.children)?,
                related: edges(def.id, "related", def.related)?,
            };
            ontology.insert(node)?;
        }

        Ok(ontology)
    }

    fn insert(&mut self, node: OntologyNode) -> Result<()> {
        if node.id.trim().is_empty() {
            return Err(SkillFitError::InvalidTable("ontology node with empty id".to_string()));
        }

        let idx = self.nodes.len();
        for alias in &node.aliases {
            if let Some(&other) = self.alias_index.get(alias) {
                return Err(SkillFitError::InvalidTable(format!(
                    "alias '{}' of {} is already claimed by {}",
                    alias, node.id, self.nodes[other].id
                )));
            }
            self.alias_index.insert(alias.clone(), idx);
        }
        self.nodes.push(node);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[OntologyNode] {
        &self.nodes
    }

    /// Resolve any id or alias (case-insensitive) to its node.
    pub fn node(&self, skill: &str) -> Option<&OntologyNode> {
        self.alias_index
            .get(&skill.trim().to_lowercase())
            .map(|&idx| &self.nodes[idx])
    }

    pub fn canonical_id(&self, skill: &str) -> Option<&str> {
        self.node(skill).map(|node| node.id.as_str())
    }

    /// How well `candidate` satisfies `required`.
    ///
    /// Precedence: exact, alias, then the required node's parent/child/related
    /// lists, then the candidate node's lists pointing back at the requirement.
    pub fn get_match_credit(&self, required: &str, candidate: &str) -> MatchCredit {
        let required = required.trim();
        let candidate = candidate.trim();
        if required.is_empty() || candidate.is_empty() {
            return MatchCredit::NONE;
        }

        if required.to_lowercase() == candidate.to_lowercase() {
            return MatchCredit::new(1.0, MatchType::Exact);
        }

        let required_node = self.node(required);
        let candidate_node = self.node(candidate);

        if let (Some(req), Some(cand)) = (required_node, candidate_node) {
            if req.id == cand.id {
                return MatchCredit::new(1.0, MatchType::Alias);
            }
        }

        let required_key = self.edge_key(required);
        let candidate_key = self.edge_key(candidate);

        if let Some(req) = required_node {
            if let Some(credit) = self.edge_credit(&req.parents, &candidate_key) {
                return MatchCredit::new(credit, MatchType::Parent);
            }
            if let Some(credit) = self.edge_credit(&req.children, &candidate_key) {
                return MatchCredit::new(credit, MatchType::Child);
            }
            if let Some(credit) = self.edge_credit(&req.related, &candidate_key) {
                return MatchCredit::new(credit, MatchType::Related);
            }
        }

        // Edge lists are not guaranteed symmetric; look from the candidate's side.
        if let Some(cand) = candidate_node {
            if self.edge_credit(&cand.parents, &required_key).is_some() {
                return MatchCredit::new(REVERSE_CHILD_CREDIT, MatchType::Child);
            }
            if self.edge_credit(&cand.children, &required_key).is_some() {
                return MatchCredit::new(REVERSE_PARENT_CREDIT, MatchType::Parent);
            }
            if let Some(credit) = self.edge_credit(&cand.related, &required_key) {
                return MatchCredit::new(credit, MatchType::Related);
            }
        }

        MatchCredit::NONE
    }

    /// Closest known ids to `query`, best first, for diagnostics.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &str)> = self
            .nodes
            .iter()
            .map(|node| {
                let best = node
                    .aliases
                    .iter()
                    .map(|alias| jaro_winkler(&query, alias))
                    .fold(0.0_f64, f64::max);
                (best, node.id.as_str())
            })
            .filter(|(score, _)| *score >= 0.75)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored.into_iter().take(limit).map(|(_, id)| id).collect()
    }

    /// Comparison key for edge targets: canonical id when known, else the lower-cased text.
    fn edge_key(&self, skill: &str) -> String {
        self.canonical_id(skill)
            .map(str::to_lowercase)
            .unwrap_or_else(|| skill.to_lowercase())
    }

    fn edge_credit(&self, edges: &[SkillEdge], key: &str) -> Option<f32> {
        edges
            .iter()
            .find(|edge| self.edge_key(&edge.target) == key)
            .map(|edge| edge.credit)
    }
}

fn edges(owner: &str, kind: &str, defs: &[(&str, f32)]) -> Result<Vec<SkillEdge>> {
    defs.iter()
        .map(|&(target, credit)| {
            if !(credit > 0.0 && credit <= 1.0) {
                return Err(SkillFitError::InvalidTable(format!(
                    "{} edge {} -> {} has credit {} outside (0, 1]",
                    kind, owner, target, credit
                )));
            }
            if target.eq_ignore_ascii_case(owner) {
                return Err(SkillFitError::InvalidTable(format!(
                    "{} edge on {} points at itself",
                    kind, owner
                )));
            }
            Ok(SkillEdge {
                target: target.to_string(),
                credit,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &[NodeDef] = &[
        NodeDef {
            id: "Recruiting",
            aliases: &["Talent Acquisition", "recruitment"],
            children: &[("Executive Recruiting", 0.6), ("Technical Recruiting", 0.6)],
            related: &[("Sourcing", 0.7)],
            ..NodeDef::LEAF
        },
        NodeDef {
            id: "Executive Recruiting",
            aliases: &["executive search"],
            parents: &[("Recruiting", 1.0)],
            ..NodeDef::LEAF
        },
        NodeDef {
            id: "Technical Recruiting",
            parents: &[("Recruiting", 1.0)],
            ..NodeDef::LEAF
        },
        NodeDef {
            id: "Sourcing",
            ..NodeDef::LEAF
        },
        // Only declares the edge from its own side.
        NodeDef {
            id: "Deep Learning",
            parents: &[("Machine Learning", 0.8)],
            ..NodeDef::LEAF
        },
        NodeDef {
            id: "Machine Learning",
            aliases: &["ml"],
            ..NodeDef::LEAF
        },
        NodeDef {
            id: "Cloud Computing",
            children: &[("AWS", 0.7)],
            ..NodeDef::LEAF
        },
        NodeDef {
            id: "AWS",
            related: &[("GCP", 0.6)],
            ..NodeDef::LEAF
        },
    ];

    fn ontology() -> SkillOntology {
        SkillOntology::from_defs(FIXTURE).unwrap()
    }

    #[test]
    fn test_exact_is_case_insensitive() {
        let o = ontology();
        let credit = o.get_match_credit("python", "Python");
        assert_eq!(credit, MatchCredit::new(1.0, MatchType::Exact));

        // unknown ids still match themselves
        let credit = o.get_match_credit("Underwater Basket Weaving", "underwater basket weaving");
        assert_eq!(credit.match_type, MatchType::Exact);
    }

    #[test]
    fn test_alias_resolves_to_same_node() {
        let o = ontology();
        let credit = o.get_match_credit("Recruiting", "talent acquisition");
        assert_eq!(credit, MatchCredit::new(1.0, MatchType::Alias));
        let credit = o.get_match_credit("recruitment", "Talent Acquisition");
        assert_eq!(credit.match_type, MatchType::Alias);
    }

    #[test]
    fn test_parent_satisfies_narrower_requirement() {
        let o = ontology();
        let credit = o.get_match_credit("Executive Recruiting", "Recruiting");
        assert_eq!(credit, MatchCredit::new(1.0, MatchType::Parent));
        // resolved through an alias of the parent
        let credit = o.get_match_credit("executive search", "talent acquisition");
        assert_eq!(credit, MatchCredit::new(1.0, MatchType::Parent));
    }

    #[test]
    fn test_child_partially_satisfies_broader_requirement() {
        let o = ontology();
        let credit = o.get_match_credit("Recruiting", "Executive Recruiting");
        assert_eq!(credit, MatchCredit::new(0.6, MatchType::Child));
    }

    #[test]
    fn test_related_credit() {
        let o = ontology();
        let credit = o.get_match_credit("Recruiting", "Sourcing");
        assert_eq!(credit, MatchCredit::new(0.7, MatchType::Related));
    }

    #[test]
    fn test_reverse_direction_lookups() {
        let o = ontology();
        // Machine Learning declares no children; Deep Learning lists it as parent.
        let credit = o.get_match_credit("Machine Learning", "Deep Learning");
        assert_eq!(credit, MatchCredit::new(REVERSE_CHILD_CREDIT, MatchType::Child));

        // AWS declares no parents; Cloud Computing lists it as child.
        let credit = o.get_match_credit("AWS", "Cloud Computing");
        assert_eq!(credit, MatchCredit::new(REVERSE_PARENT_CREDIT, MatchType::Parent));

        // GCP is not a node; AWS relates to it.
        let credit = o.get_match_credit("GCP", "aws");
        assert_eq!(credit, MatchCredit::new(0.6, MatchType::Related));
    }

    #[test]
    fn test_no_transitive_credit() {
        let o = ontology();
        // Executive Recruiting -> Recruiting -> Sourcing is two hops.
        let credit = o.get_match_credit("Executive Recruiting", "Sourcing");
        assert_eq!(credit, MatchCredit::NONE);
    }

    #[test]
    fn test_total_over_odd_input() {
        let o = ontology();
        assert_eq!(o.get_match_credit("", "Recruiting"), MatchCredit::NONE);
        assert_eq!(o.get_match_credit("Recruiting", "   "), MatchCredit::NONE);
        assert_eq!(o.get_match_credit("Java", "Python"), MatchCredit::NONE);
    }

    #[test]
    fn test_every_declared_parent_yields_its_credit() {
        let o = ontology();
        for node in o.nodes() {
            for parent in &node.parents {
                let credit = o.get_match_credit(&node.id, &parent.target);
                assert_eq!(credit.credit, parent.credit, "{} -> {}", node.id, parent.target);
                assert_eq!(credit.match_type, MatchType::Parent);
            }
        }
    }

    #[test]
    fn test_nodes_alias_themselves() {
        let o = ontology();
        for node in o.nodes() {
            assert!(node.aliases.contains(&node.id.to_lowercase()));
            assert_eq!(o.canonical_id(&node.id.to_uppercase()), Some(node.id.as_str()));
        }
    }

    #[test]
    fn test_rejects_out_of_range_credit() {
        let defs = [NodeDef {
            id: "A",
            related: &[("B", 1.5)],
            ..NodeDef::LEAF
        }];
        assert!(SkillOntology::from_defs(&defs).is_err());

        let defs = [NodeDef {
            id: "A",
            related: &[("B", 0.0)],
            ..NodeDef::LEAF
        }];
        assert!(SkillOntology::from_defs(&defs).is_err());
    }

    #[test]
    fn test_rejects_duplicate_alias() {
        let defs = [
            NodeDef {
                id: "A",
                aliases: &["shared"],
                ..NodeDef::LEAF
            },
            NodeDef {
                id: "B",
                aliases: &["Shared"],
                ..NodeDef::LEAF
            },
        ];
        assert!(SkillOntology::from_defs(&defs).is_err());
    }

    #[test]
    fn test_suggest_close_ids() {
        let o = ontology();
        let suggestions = o.suggest("recruting", 3);
        assert_eq!(suggestions.first(), Some(&"Recruiting"));
        assert!(o.suggest("zzzz", 3).is_empty());
    }
}
