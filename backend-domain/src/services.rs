// Pure domain services
pub mod stats;

pub use stats::*;
