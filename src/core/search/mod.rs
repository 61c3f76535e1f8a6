pub mod filter;

pub use filter::{contains_exact, filter, filter_indices};
