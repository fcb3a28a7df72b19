pub mod context;
pub mod lifecycle;

pub use lifecycle::{add_token, run_standalone};
