//! Core algorithm definitions for the AlgoViz step engine
//!
//! This module establishes the vocabulary shared by every runner and by the
//! catalog: identifiers, the eight fixed categories, difficulty tiers, the
//! visualization kind a runner declares, and the immutable [`Algorithm`]
//! entry itself.
//!
//! # Key Design Principles
//! - Runners are plain function pointers: no state, no trait objects
//! - Catalog entries are `'static` data constructed once
//! - Every enum serializes to the slug the browser renderer expects
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::state::Step;
use crate::i18n::Narrator;

/// Stable algorithm identifier (the URL slug, e.g. `"bubble-sort"`)
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlgorithmId(String);

impl AlgorithmId {
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Node identifier ensuring type safety and preventing mixing with other numeric types
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The eight fixed catalog categories, declared in display order
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Concepts,
    DataStructures,
    Sorting,
    Searching,
    Graphs,
    DynamicProgramming,
    Backtracking,
    DivideAndConquer,
}

impl Category {
    /// All categories in catalog order
    pub const ALL: [Category; 8] = [
        Category::Concepts,
        Category::DataStructures,
        Category::Sorting,
        Category::Searching,
        Category::Graphs,
        Category::DynamicProgramming,
        Category::Backtracking,
        Category::DivideAndConquer,
    ];

    /// Slug used in URLs and as the translation key suffix
    pub fn slug(self) -> &'static str {
        match self {
            Category::Concepts => "concepts",
            Category::DataStructures => "data-structures",
            Category::Sorting => "sorting",
            Category::Searching => "searching",
            Category::Graphs => "graphs",
            Category::DynamicProgramming => "dynamic-programming",
            Category::Backtracking => "backtracking",
            Category::DivideAndConquer => "divide-and-conquer",
        }
    }

    /// English display label
    pub fn label(self) -> &'static str {
        match self {
            Category::Concepts => "Concepts",
            Category::DataStructures => "Data Structures",
            Category::Sorting => "Sorting",
            Category::Searching => "Searching",
            Category::Graphs => "Graphs",
            Category::DynamicProgramming => "Dynamic Programming",
            Category::Backtracking => "Backtracking",
            Category::DivideAndConquer => "Divide and Conquer",
        }
    }
}

/// Difficulty tier shown next to each catalog entry
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Which payload family every step of a runner carries
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationKind {
    Array,
    Graph,
    Matrix,
    Concept,
}

/// A runner: replays one hardcoded demo input and narrates it.
///
/// # Invariants
/// - Deterministic for a given locale
/// - Returns a finite, non-empty sequence
/// - Builds all working state locally
pub type Runner = fn(&Narrator<'_>) -> Vec<Step>;

/// Immutable catalog entry
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Algorithm {
    /// Stable slug
    pub id: &'static str,

    /// Display name
    pub name: &'static str,

    /// Catalog category
    pub category: Category,

    /// Difficulty tier
    pub difficulty: Difficulty,

    /// Payload family of every produced step
    pub kind: VisualizationKind,

    /// Source text shown next to the visualization; `codeLine` indexes it (1-based)
    pub source: &'static str,

    /// Step generator
    #[serde(skip)]
    pub runner: Runner,
}

impl Algorithm {
    /// Const constructor used by the per-category static tables
    pub const fn new(
        id: &'static str,
        name: &'static str,
        category: Category,
        difficulty: Difficulty,
        kind: VisualizationKind,
        source: &'static str,
        runner: Runner,
    ) -> Self {
        Self {
            id,
            name,
            category,
            difficulty,
            kind,
            source,
            runner,
        }
    }

    pub fn algorithm_id(&self) -> AlgorithmId {
        AlgorithmId::new(self.id)
    }

    /// Number of lines in the displayed source text
    pub fn source_lines(&self) -> usize {
        self.source.lines().count()
    }

    /// Translation key of the long-form "about" paragraph
    pub fn about_key(&self) -> String {
        format!("about.{}", self.id)
    }

    /// Execute the runner
    pub fn run(&self, narrator: &Narrator<'_>) -> Vec<Step> {
        (self.runner)(narrator)
    }
}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("difficulty", &self.difficulty)
            .field("kind", &self.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_is_fixed() {
        assert_eq!(Category::ALL.len(), 8);
        assert_eq!(Category::ALL[0], Category::Concepts);
        assert_eq!(Category::ALL[7], Category::DivideAndConquer);
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }

    #[test]
    fn test_category_serializes_as_slug() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.slug()));
        }
    }

    #[test]
    fn test_node_id_transparent() {
        assert_eq!(serde_json::to_string(&NodeId(3)).unwrap(), "3");
        assert_eq!(NodeId(7).as_usize(), 7);
    }
}
