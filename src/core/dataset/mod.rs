mod dataset;
mod layout;

pub use dataset::DatasetSplit;
pub use layout::{SplitLayout, SplitState};
