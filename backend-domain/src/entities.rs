// Domain entities

pub mod kill_event;
pub mod model;
pub mod player_stats;
pub mod token;

pub use kill_event::*;
pub use model::*;
pub use player_stats::*;
pub use token::*;
