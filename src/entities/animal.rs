// 🐾 Animal Entity - Stable identity + single mutable name
//
// "Animal name is a VALUE (can change), Animal UUID is IDENTITY (never changes)"
//
// Problem solved:
// - An animal starts life unnamed; the name arrives (and may change) later
// - Renaming never breaks identity: the UUID is the stable handle
// - "Never named" and "named with the empty string" stay distinguishable
// - Last write wins: the holder keeps exactly the most recent name, no history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

// ============================================================================
// ANIMAL ENTITY
// ============================================================================

/// Animal Entity - a named subject with exactly one mutable textual attribute
///
/// Identity: UUID (never changes)
/// Value: name (can change over time, `None` until first set)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    // ========================================================================
    // IDENTITY (never changes)
    // ========================================================================
    /// Stable identity (UUID) - NEVER changes
    pub id: String,

    // ========================================================================
    // VALUE (can change over time)
    // ========================================================================
    /// The one textual attribute. `None` = never set (the absent default),
    /// which is not the same thing as `Some("")`.
    pub name: Option<String>,

    // ========================================================================
    // METADATA
    // ========================================================================
    /// When this entity was created in our system
    pub created_at: DateTime<Utc>,
}

impl Animal {
    /// Create a new animal with an unset name
    pub fn new() -> Self {
        Animal {
            id: uuid::Uuid::new_v4().to_string(),
            name: None,
            created_at: Utc::now(),
        }
    }

    /// Accessor: current name, or `None` if never set
    ///
    /// No side effects, callable at any time, cannot fail.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Mutator: replace the current name with `new_name`
    ///
    /// Accepts any string including the empty string. No validation, no
    /// error conditions. Last write wins; the previous value is dropped.
    ///
    /// Note: the snippet this entity descends from assigned the field to
    /// itself and ignored its parameter. The intended behavior (store the
    /// incoming value) is implemented here; see DESIGN.md.
    pub fn set_name(&mut self, new_name: String) {
        self.name = Some(new_name);
    }

    /// Whether the name has ever been set
    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }

    /// Return the name to its absent default
    pub fn clear_name(&mut self) {
        self.name = None;
    }
}

impl Default for Animal {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ANIMAL REGISTRY
// ============================================================================

/// Registry of all known animals
///
/// This holds all Animal entities in memory behind a RwLock, so shared
/// access to an instance always goes through explicit synchronization.
/// Exactly one version per animal is stored: renames overwrite in place.
pub struct AnimalRegistry {
    animals: Arc<RwLock<Vec<Animal>>>,
}

impl AnimalRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        AnimalRegistry {
            animals: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register an animal
    pub fn register(&mut self, animal: Animal) {
        let mut animals = self.animals.write().unwrap();
        animals.push(animal);
    }

    /// Get an animal by UUID
    pub fn get(&self, id: &str) -> Option<Animal> {
        let animals = self.animals.read().unwrap();
        animals.iter().find(|a| a.id == id).cloned()
    }

    /// Rename an animal in place
    ///
    /// The mutator itself cannot fail; the only error is an unknown id.
    pub fn rename(&mut self, id: &str, new_name: String) -> anyhow::Result<()> {
        let mut animals = self.animals.write().unwrap();
        let animal = animals
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| anyhow::anyhow!("Animal not found: {}", id))?;
        animal.set_name(new_name);
        Ok(())
    }

    /// Find an animal by its current name (exact match, first wins)
    ///
    /// Names carry no uniqueness constraint, so duplicates are possible and
    /// the first registered match is returned. Unnamed animals never match.
    pub fn find_by_name(&self, name: &str) -> Option<Animal> {
        let animals = self.animals.read().unwrap();
        animals
            .iter()
            .find(|a| a.name() == Some(name))
            .cloned()
    }

    /// Get all animals
    pub fn all_animals(&self) -> Vec<Animal> {
        let animals = self.animals.read().unwrap();
        animals.clone()
    }

    /// Count registered animals
    pub fn count(&self) -> usize {
        let animals = self.animals.read().unwrap();
        animals.len()
    }
}

impl Default for AnimalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
