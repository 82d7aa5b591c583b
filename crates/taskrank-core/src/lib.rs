//! # Taskrank Core Library
//!
//! This library provides the core business logic for taskrank, a to-do
//! prioritizer that ranks tasks by computed priority and suggests the
//! next best ones with a textual rationale. It implements a CLI-first
//! philosophy where all operations are available via a standalone CLI
//! binary that is a thin shell over this library.
//!
//! ## Architecture
//!
//! - **Scoring**: a pure additive point system over a task batch, with
//!   an injected "today" so urgency classification is reproducible
//! - **Explainer**: derives a short rationale from scored tasks
//! - **Intake**: one normalization routine with strict and lenient modes
//! - **Storage**: SQLite-based task storage and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`compute_score`] / [`analyze_tasks`]: the scoring engine
//! - [`build_explanation`]: rationale for the top suggestions
//! - [`Engine`]: analyze/suggest operations over the store
//! - [`TaskDb`] and [`Config`]: persistence and configuration

pub mod engine;
pub mod error;
pub mod explain;
pub mod intake;
pub mod scoring;
pub mod storage;
pub mod task;

pub use engine::{Engine, Suggestion};
pub use error::{ConfigError, CoreError, DatabaseError, Result};
pub use explain::build_explanation;
pub use intake::{sanitize_batch, ValidationMode};
pub use scoring::{analyze_tasks, compute_score, ScoreWeights, ScoringConfig};
pub use storage::{Config, SuggestConfig, TaskDb};
pub use task::{ScoredTask, StoredTask, TaskRecord};
