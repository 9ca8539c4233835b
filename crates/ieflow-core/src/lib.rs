//! # ieflow Core Library
//!
//! Best-model selection over molecular-modeling score files and batch driving of an
//! external interaction-energy workflow, one subprocess per selected model.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same three-layer split throughout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`ScoreRecord`, `BestModelEntry`,
//!   `ModelTarget`) and the readers/writers for score files and summary tables.
//!
//! - **[`engine`]: The Logic Core.** Configuration, folder discovery, invocation
//!   construction, the `CommandRunner` seam that executes external processes, and the
//!   `RunSummary` that aggregates their outcomes.
//!
//! - **[`workflows`]: The Public API.** `select::run` and `drive::run` tie the engine and
//!   core together into the two batch procedures an operator runs in sequence.

pub mod core;
pub mod engine;
pub mod workflows;
