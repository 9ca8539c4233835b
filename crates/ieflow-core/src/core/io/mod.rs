//! Readers and writers for the two tabular formats the workflows exchange.
//!
//! Score files are headerless tab-separated `identifier<TAB>score` listings produced by the
//! modeling runs. Summary tables are comma-separated with a `folder,best_model,molpdf`
//! header and carry one selected model per folder. Score files and the driver's view of a
//! summary table are read through [`traits::TableReader`]; the selector writes its table
//! through [`traits::TableWriter`].

pub mod error;
pub mod score_file;
pub mod summary;
pub mod traits;
