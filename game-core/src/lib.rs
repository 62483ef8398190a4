pub mod achievements;
pub mod config;
pub mod content;
pub mod game_desk;
pub mod game_events;
pub mod game_state;
pub mod games;
pub mod input_validation;
pub mod scoring;
pub mod stats;
pub mod storage;

// Re-export main components
pub use achievements::*;
pub use config::*;
pub use content::*;
pub use game_desk::*;
pub use game_events::*;
pub use game_state::*;
pub use games::*;
pub use input_validation::*;
pub use scoring::*;
pub use stats::*;
pub use storage::*;
