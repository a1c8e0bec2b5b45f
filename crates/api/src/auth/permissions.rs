use async_graphql::{Context, Error, ErrorExtensions, Result};
use uuid::Uuid;

use crate::auth::Claims;
use crate::gql::types::Role;

/// Authenticated user id and role, if the request carried a valid token.
pub fn current_user(ctx: &Context<'_>) -> Result<Option<(Uuid, Role)>> {
    let Some(claims) = ctx.data_opt::<Claims>() else {
        return Ok(None);
    };

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|e| Error::new(format!("Invalid user ID: {}", e)))?;

    Ok(Some((user_id, Role::from(claims.role.clone()))))
}

/// Check that the authenticated user is an admin, returning their id
pub fn require_admin(ctx: &Context<'_>) -> Result<Uuid> {
    let (user_id, role) = current_user(ctx)?.ok_or_else(|| {
        Error::new("Authentication required").extend_with(|_, e| e.set("code", "UNAUTHENTICATED"))
    })?;

    if role != Role::Admin {
        return Err(Error::new("Insufficient permissions. Required role: Admin")
            .extend_with(|_, e| e.set("code", "FORBIDDEN")));
    }

    Ok(user_id)
}
