pub mod auth_handlers;
pub mod ingest_handlers;
pub mod ops_handlers;
pub mod player_handlers;

pub use auth_handlers::*;
pub use ingest_handlers::*;
pub use ops_handlers::*;
pub use player_handlers::*;
