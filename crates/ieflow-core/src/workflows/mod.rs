//! # Workflows Module
//!
//! Top-level entry points that an operator runs one after another:
//!
//! - **Selection Workflow** ([`select`]) - scans `root/*/*` folders and writes the summary
//!   table of best (lowest-score) models.
//! - **Driver Workflow** ([`drive`]) - reads a summary table and runs the external
//!   interaction-energy workflow once per row, collecting a [`RunSummary`](crate::engine::outcome::RunSummary).
//!
//! Neither workflow depends on the other at runtime; they only share the table format.

pub mod drive;
pub mod select;
