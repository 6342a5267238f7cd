// Animal Registry - Core Library
// Exposes the entity model for use in tests and downstream crates

pub mod entities;

// Re-export commonly used types
pub use entities::{Animal, AnimalRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
