use super::ExecutionContext;
use super::command::Modifier;
use crate::core::Result;

use async_trait::async_trait;
use tracing::{Level, event};

/// Raises the permission scope to elevated when the author is an admin.
pub struct Rise;

#[async_trait]
impl Modifier for Rise {
    fn name(&self) -> &'static str {
        "rise"
    }

    fn summary(&self) -> &'static str {
        "run the command with admin permissions (admins only)"
    }

    async fn apply(&self, ctx: &mut ExecutionContext<'_>) -> Result<()> {
        if ctx.session().is_admin() {
            ctx.elevate();
            event!(Level::DEBUG, author = ctx.author(), "permission scope elevated");
        }
        Ok(())
    }
}
