pub mod dataset;
pub mod filter;
pub mod operations;
pub mod reorganizer;

pub use reorganizer::{reorganize_dataset, ReorganizeSummary};
