//! Creature templates and leveled creature generation.

pub mod generation;
pub mod templates;
pub mod types;

pub use generation::*;
pub use templates::*;
pub use types::*;
