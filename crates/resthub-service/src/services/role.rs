//! Role service

use resthub_core::entities::Role;
use resthub_core::traits::GenericDao;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::generic::GenericService;

/// Role service
pub struct RoleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoleService<'a> {
    /// Create a new RoleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }
}

impl GenericService<Role> for RoleService<'_> {
    fn dao(&self) -> &dyn GenericDao<Role> {
        self.ctx.role_dao()
    }

    fn validate(&self, role: &Role) -> ServiceResult<()> {
        if role.name.trim().is_empty() {
            return Err(ServiceError::validation("Role name must not be empty"));
        }
        Ok(())
    }
}
