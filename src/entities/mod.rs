// Entity Models
// "Identity persists, values change"
//
// Each entity has:
// - Stable identity (UUID) that NEVER changes
// - A current value for each attribute (last write wins, no history)
// - Registry for synchronized in-memory lookups

pub mod animal;

pub use animal::{Animal, AnimalRegistry};
