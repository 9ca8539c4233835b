//! # Engine Module
//!
//! The stateful layer between the plain data in [`crate::core`] and the public
//! [`crate::workflows`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Selection and driver parameters with validating builders
//! - **Discovery** ([`discovery`]) - Deterministic enumeration of model folders and score files
//! - **Invocation** ([`invocation`]) - Construction of one external workflow command per model
//! - **Execution** ([`runner`]) - The `CommandRunner` seam: real processes or a dry run
//! - **Outcomes** ([`outcome`]) - Per-invocation results aggregated into a `RunSummary`
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for front ends
//! - **Error Handling** ([`error`]) - Engine-level error taxonomy
//!
//! Everything here runs sequentially; an external process is always waited on before the
//! next one is started.

pub mod config;
pub mod discovery;
pub mod error;
pub mod invocation;
pub mod outcome;
pub mod progress;
pub mod runner;
