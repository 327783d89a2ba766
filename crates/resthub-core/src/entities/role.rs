//! Role entity - a named role of the identity module

use serde::{Deserialize, Serialize};

use super::Entity;
use crate::value_objects::EntityId;

/// Role entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
}

impl Role {
    /// Create a new, not yet persisted Role
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Rename the role
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Entity for Role {
    const KIND: &'static str = "role";
    const SEARCH_FIELDS: &'static [&'static str] = &["name"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    fn field_value(&self, field: &str) -> Option<String> {
        (field == "name").then(|| self.name.clone())
    }
}
