//! Algorithm catalog
//!
//! The registry is a statically known list of [`Algorithm`] entries grouped
//! into the eight fixed categories. It resolves an id to its entry and runs
//! the entry's runner in isolation: a runner that panics yields a
//! [`CatalogError`] for that algorithm only, the rest of the catalog stays
//! usable.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

use log::{debug, error};
use serde::Serialize;
use thiserror::Error;

use crate::algorithm::state::Step;
use crate::algorithm::traits::{Algorithm, Category};
use crate::algorithm::{backtracking, concepts, divide, dynamic, graph, searching, sorting, structures};
use crate::config::EngineConfig;
use crate::i18n::{Locale, MessageCatalog, Narrator};

/// Catalog lookup and generation failures
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Runner for {id} panicked: {message}")]
    RunnerPanicked { id: String, message: String },

    #[error("Runner for {0} produced no steps")]
    EmptyTrace(String),

    #[error("Runner for {id} produced {len} steps, limit is {limit}")]
    TooManySteps { id: String, len: usize, limit: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Entries of one category, in catalog order
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub label: &'static str,
    pub algorithms: Vec<&'a Algorithm>,
}

/// Static table backing a category
fn table(category: Category) -> &'static [Algorithm] {
    match category {
        Category::Concepts => &concepts::ALGORITHMS,
        Category::DataStructures => &structures::ALGORITHMS,
        Category::Sorting => &sorting::ALGORITHMS,
        Category::Searching => &searching::ALGORITHMS,
        Category::Graphs => &graph::ALGORITHMS,
        Category::DynamicProgramming => &dynamic::ALGORITHMS,
        Category::Backtracking => &backtracking::ALGORITHMS,
        Category::DivideAndConquer => &divide::ALGORITHMS,
    }
}

/// Registry of every algorithm, plus the message tables used to narrate them
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<&'static Algorithm>,
    messages: &'static MessageCatalog,
    config: EngineConfig,
}

impl Catalog {
    /// Catalog over the bundled tables
    pub fn new(messages: &'static MessageCatalog, config: EngineConfig) -> Self {
        let entries = Category::ALL
            .into_iter()
            .flat_map(|category| table(category).iter())
            .collect();
        Self {
            entries,
            messages,
            config,
        }
    }

    /// Process-wide instance with the builtin messages and default config
    pub fn global() -> &'static Catalog {
        static GLOBAL: OnceLock<Catalog> = OnceLock::new();
        GLOBAL.get_or_init(|| Catalog::new(MessageCatalog::builtin(), EngineConfig::default()))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn messages(&self) -> &'static MessageCatalog {
        self.messages
    }

    /// Every entry in fixed order: by category, then by position in the category
    pub fn list(&self) -> &[&'static Algorithm] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries grouped by category without losing order
    pub fn by_category(&self) -> Vec<CategoryGroup<'static>> {
        Category::ALL
            .into_iter()
            .map(|category| CategoryGroup {
                category,
                label: category.label(),
                algorithms: self
                    .entries
                    .iter()
                    .copied()
                    .filter(|algorithm| algorithm.category == category)
                    .collect(),
            })
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&'static Algorithm> {
        self.entries.iter().copied().find(|algorithm| algorithm.id == id)
    }

    fn require(&self, id: &str) -> Result<&'static Algorithm, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::UnknownAlgorithm(id.to_owned()))
    }

    /// Run the algorithm's runner and return its full trace
    pub fn generate(&self, id: &str, locale: Locale) -> Result<Vec<Step>, CatalogError> {
        let algorithm = self.require(id)?;
        let narrator = Narrator::new(self.messages, locale);

        let steps = panic::catch_unwind(AssertUnwindSafe(|| algorithm.run(&narrator))).map_err(|payload| {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_owned())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_owned());
            error!("runner {} panicked: {}", id, message);
            CatalogError::RunnerPanicked {
                id: id.to_owned(),
                message,
            }
        })?;

        if steps.is_empty() {
            return Err(CatalogError::EmptyTrace(id.to_owned()));
        }
        if steps.len() > self.config.max_steps {
            error!("runner {} exceeded the step limit: {} > {}", id, steps.len(), self.config.max_steps);
            return Err(CatalogError::TooManySteps {
                id: id.to_owned(),
                len: steps.len(),
                limit: self.config.max_steps,
            });
        }
        debug!("generated {} steps for {} ({})", steps.len(), id, locale);
        Ok(steps)
    }

    /// [`generate`](Self::generate) in the configured default locale
    pub fn generate_default(&self, id: &str) -> Result<Vec<Step>, CatalogError> {
        self.generate(id, self.config.default_locale)
    }

    /// [`generate`](Self::generate) with a locale tag such as `"es-MX"`
    pub fn generate_for_tag(&self, id: &str, tag: &str) -> Result<Vec<Step>, CatalogError> {
        let locale = Locale::from_tag(tag).ok_or_else(|| CatalogError::UnknownLocale(tag.to_owned()))?;
        self.generate(id, locale)
    }

    /// Trace as a JSON array for the browser renderer
    pub fn generate_json(&self, id: &str, locale: Locale) -> Result<String, CatalogError> {
        let steps = self.generate(id, locale)?;
        Ok(serde_json::to_string(&steps)?)
    }

    /// Long-form localized description shown in the "about" panel
    pub fn about(&self, id: &str, locale: Locale) -> Result<String, CatalogError> {
        let algorithm = self.require(id)?;
        Ok(self.messages.format(locale, &algorithm.about_key(), &[]))
    }

    /// Displayed source text; step `codeLine`s index into it
    pub fn source(&self, id: &str) -> Result<&'static str, CatalogError> {
        Ok(self.require(id)?.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Narration that failed to resolve renders as `[some.key]`
    fn is_unresolved(description: &str) -> bool {
        description.len() > 2
            && description.starts_with('[')
            && description.ends_with(']')
            && description[1..description.len() - 1]
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '.' || c == '_' || c == '-')
    }

    #[test]
    fn test_catalog_shape() {
        let catalog = Catalog::global();
        assert_eq!(catalog.len(), 36);

        let ids: HashSet<&str> = catalog.list().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), catalog.len(), "duplicate ids");

        let categories: Vec<Category> = catalog.list().iter().map(|a| a.category).collect();
        assert!(categories.windows(2).all(|w| w[0] <= w[1]));

        let groups = catalog.by_category();
        assert_eq!(groups.len(), 8);
        assert!(groups.iter().all(|g| !g.algorithms.is_empty()));
        let flattened: Vec<&str> = groups.iter().flat_map(|g| g.algorithms.iter().map(|a| a.id)).collect();
        let listed: Vec<&str> = catalog.list().iter().map(|a| a.id).collect();
        assert_eq!(flattened, listed);
    }

    #[test]
    fn test_unknown_lookups() {
        let catalog = Catalog::global();
        assert!(catalog.find("bogo-sort").is_none());
        assert!(matches!(
            catalog.generate("bogo-sort", Locale::En),
            Err(CatalogError::UnknownAlgorithm(id)) if id == "bogo-sort"
        ));
        assert!(matches!(
            catalog.generate_for_tag("bfs", "fr"),
            Err(CatalogError::UnknownLocale(_))
        ));
        assert!(catalog.generate_for_tag("bfs", "es-MX").is_ok());
    }

    #[test]
    fn test_every_runner_is_bounded_and_deterministic() {
        init();
        let catalog = Catalog::global();
        for algorithm in catalog.list() {
            let en = catalog.generate(algorithm.id, Locale::En).unwrap();
            let again = catalog.generate(algorithm.id, Locale::En).unwrap();
            let es = catalog.generate(algorithm.id, Locale::Es).unwrap();

            assert!((1..=200).contains(&en.len()), "{}: {} steps", algorithm.id, en.len());
            assert_eq!(en, again, "{} is not deterministic", algorithm.id);
            assert_eq!(en.len(), es.len(), "{}", algorithm.id);
            for (a, b) in en.iter().zip(&es) {
                assert_eq!(a.structural(), b.structural(), "{}", algorithm.id);
            }
            for step in en.iter().chain(&es) {
                assert_eq!(step.payload.kind(), algorithm.kind, "{}", algorithm.id);
            }
        }
    }

    #[test]
    fn test_narration_is_fully_resolved() {
        let catalog = Catalog::global();
        for algorithm in catalog.list() {
            for locale in Locale::ALL {
                for step in catalog.generate(algorithm.id, locale).unwrap() {
                    assert!(!step.description.is_empty(), "{}", algorithm.id);
                    assert!(!is_unresolved(&step.description), "{}: {}", algorithm.id, step.description);
                    assert!(!step.description.contains('{'), "{}: {}", algorithm.id, step.description);
                }
                let about = catalog.about(algorithm.id, locale).unwrap();
                assert!(!is_unresolved(&about), "{} has no about text", algorithm.id);
            }
        }
    }

    #[test]
    fn test_json_export_round_trips() {
        let catalog = Catalog::global();
        for id in ["bubble-sort", "dijkstra", "n-queens", "hash-table"] {
            let json = catalog.generate_json(id, Locale::En).unwrap();
            let parsed: Vec<Step> = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, catalog.generate(id, Locale::En).unwrap(), "{}", id);
        }
        let json = catalog.generate_json("bubble-sort", Locale::En).unwrap();
        assert!(json.contains("\"codeLine\""));
    }

    #[test]
    fn test_panicking_runner_is_isolated() {
        fn broken(_: &Narrator<'_>) -> Vec<Step> {
            panic!("boom")
        }
        static BROKEN: Algorithm = Algorithm::new(
            "broken",
            "Broken",
            Category::Sorting,
            crate::algorithm::Difficulty::Beginner,
            crate::algorithm::VisualizationKind::Array,
            "",
            broken,
        );

        let mut catalog = Catalog::new(MessageCatalog::builtin(), EngineConfig::default());
        catalog.entries.push(&BROKEN);
        assert!(matches!(
            catalog.generate("broken", Locale::En),
            Err(CatalogError::RunnerPanicked { message, .. }) if message == "boom"
        ));
        assert!(catalog.generate("bubble-sort", Locale::En).is_ok());
    }

    #[test]
    fn test_engine_config_drives_generation() {
        let spanish = Catalog::new(
            MessageCatalog::builtin(),
            EngineConfig {
                default_locale: Locale::Es,
                ..EngineConfig::default()
            },
        );
        assert_eq!(
            spanish.generate_default("bfs").unwrap(),
            spanish.generate("bfs", Locale::Es).unwrap()
        );
        assert_eq!(
            Catalog::global().generate_default("bfs").unwrap(),
            Catalog::global().generate("bfs", Locale::En).unwrap()
        );

        let tight = Catalog::new(
            MessageCatalog::builtin(),
            EngineConfig {
                max_steps: 5,
                ..EngineConfig::default()
            },
        );
        assert!(matches!(
            tight.generate("n-queens", Locale::En),
            Err(CatalogError::TooManySteps { len, limit: 5, .. }) if len > 5
        ));
        assert!(matches!(
            tight.generate_json("n-queens", Locale::En),
            Err(CatalogError::TooManySteps { .. })
        ));
    }

    #[test]
    fn test_source_and_code_lines() {
        let catalog = Catalog::global();
        for algorithm in catalog.list() {
            let lines = catalog.source(algorithm.id).unwrap().lines().count();
            assert!(lines > 0);
            for step in catalog.generate(algorithm.id, Locale::En).unwrap() {
                if let Some(line) = step.code_line {
                    assert!((1..=lines).contains(&line), "{}: line {} of {}", algorithm.id, line, lines);
                }
            }
        }
    }
}
