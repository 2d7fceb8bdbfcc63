mod searching;
mod sorting;
mod traversal;

pub use searching::SearchAlgorithm;
pub use sorting::SortAlgorithm;
pub use traversal::{final_distances, visit_order, GraphAlgorithm};
