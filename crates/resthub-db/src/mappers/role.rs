//! Role entity <-> model mapper

use resthub_core::entities::Role;
use resthub_core::value_objects::EntityId;

use crate::models::RoleModel;

/// Convert RoleModel to Role entity
impl From<RoleModel> for Role {
    fn from(model: RoleModel) -> Self {
        Role {
            id: Some(EntityId::new(model.id)),
            name: model.name,
        }
    }
}

/// Role columns bound by INSERT and UPDATE
pub struct RoleValues<'a> {
    pub name: &'a str,
}

impl<'a> RoleValues<'a> {
    pub fn new(role: &'a Role) -> Self {
        Self { name: &role.name }
    }
}
