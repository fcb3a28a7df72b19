pub mod ingest_commands;
pub mod token_commands;
