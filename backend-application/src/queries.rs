pub mod player_stats_queries;
pub mod token_queries;
