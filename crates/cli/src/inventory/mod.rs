//! Inventory pipeline: fetch targets, extract fields, write the CSV.

pub mod extract;
pub mod lookup;
pub mod orchestrator;
pub mod row;
pub mod writer;

pub use orchestrator::run_batch;
pub use writer::{WriteOutcome, write_report};
