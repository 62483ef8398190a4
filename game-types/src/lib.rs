pub mod content;
pub mod errors;
pub mod game;
pub mod stats;

// Re-export all types
pub use content::*;
pub use errors::*;
pub use game::*;
pub use stats::*;
