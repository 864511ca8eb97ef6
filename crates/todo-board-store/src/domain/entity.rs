//! Domain Layer - Core Entity Trait
//!
//! Projects and todos are both looked up by id inside ordered vectors.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Position of the entity with `id` in an ordered collection.
pub fn find_index<T: Entity>(entities: &[T], id: T::Id) -> Option<usize> {
    entities.iter().position(|entity| entity.id() == id)
}
