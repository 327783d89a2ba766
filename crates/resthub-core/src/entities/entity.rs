//! Entity trait - what every persisted record exposes to the generic layers

use crate::value_objects::EntityId;

/// A persisted record with a store-assigned identifier
///
/// The identifier is absent until the first save and never changes
/// afterwards. Only the persistence store calls [`Entity::with_id`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Short lowercase name of the entity kind (`"hotel"`, `"role"`, ...)
    const KIND: &'static str;

    /// Fields the search query language may reference
    const SEARCH_FIELDS: &'static [&'static str];

    /// Identifier, if the entity has been persisted
    fn id(&self) -> Option<EntityId>;

    /// Return a copy carrying the given identifier
    fn with_id(self, id: EntityId) -> Self;

    /// Textual value of a searchable field
    fn field_value(&self, field: &str) -> Option<String>;

    /// Unique key values share one namespace: a value taken under any key
    /// of one entity may not appear under any key of another
    const UNIQUE_KEYS_SHARED: bool = false;

    /// Values that must be unique across all entities of this kind
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}
