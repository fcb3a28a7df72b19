pub mod kill_schema;
pub mod sqlite_kill_store;

pub use sqlite_kill_store::*;
