// Domain value objects
pub mod server_scope;

pub use server_scope::*;
