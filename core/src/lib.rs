//! AlgoViz core: the step-generation engine behind the visualizer
//!
//! Every catalog algorithm is a deterministic runner that replays a fixed
//! demo input and returns the full ordered list of [`Step`] snapshots. The
//! browser renderer and the [`Sequencer`] treat that list as an immutable,
//! random-access array.
//!
//! ```no_run
//! use algoviz_core::{Catalog, Locale};
//!
//! let steps = Catalog::global().generate("bubble-sort", Locale::Es)?;
//! println!("{} steps", steps.len());
//! # Ok::<(), algoviz_core::CatalogError>(())
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod catalog;
pub mod config;
pub mod data_structures;
pub mod execution;
pub mod i18n;
pub mod validation;

pub use algorithm::{Algorithm, Category, Difficulty, Payload, Step, VisualizationKind};
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, EngineConfig, PlaybackConfig};
pub use execution::history::{Sequencer, Speed};
pub use execution::ticker::PlaybackTicker;
pub use i18n::{Locale, MessageCatalog, Narrator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
