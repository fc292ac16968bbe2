use surrealdb::sql::Thing;
use tracing::warn;

use crate::database::table_names::USER_TABLE_NAME;
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxResult};
use crate::middleware::utils::string_utils::get_table_thing;

/// Path alias for the user of the current login token.
pub const SELF_ALIAS: &str = "self";

/// User reference as sent by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorRef {
    SelfAlias,
    Id(String),
}

impl ActorRef {
    pub fn parse(value: &str) -> Self {
        if value == SELF_ALIAS {
            ActorRef::SelfAlias
        } else {
            ActorRef::Id(value.to_string())
        }
    }

    /// Resolves to a concrete user record id. `self` without a valid login fails with
    /// `AuthenticationFail` and nothing else is touched.
    pub fn resolve(&self, ctx: &Ctx) -> CtxResult<Thing> {
        let raw = match self {
            ActorRef::SelfAlias => ctx.user_id().map_err(|err| {
                warn!(req_id = %ctx.req_id(), "'{SELF_ALIAS}' requested without login");
                err
            })?,
            ActorRef::Id(id) => id.clone(),
        };
        get_table_thing(USER_TABLE_NAME, &raw).map_err(|err| ctx.to_ctx_error(err))
    }
}

impl From<&str> for ActorRef {
    fn from(value: &str) -> Self {
        ActorRef::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_alias_resolves_to_logged_in_user() {
        let ctx = Ctx::new(Ok("local_user:ann".to_string()));
        let user = ActorRef::parse("self").resolve(&ctx).unwrap();
        assert_eq!(user.to_raw(), "local_user:ann");
    }

    #[test]
    fn self_alias_without_login_is_unauthenticated() {
        let ctx = Ctx::new(Err(AppError::AuthenticationFail));
        let err = ActorRef::parse("self").resolve(&ctx).unwrap_err();
        assert_eq!(err.error, AppError::AuthenticationFail);
        assert_eq!(err.req_id, ctx.req_id());
    }

    #[test]
    fn explicit_id_does_not_need_login() {
        let ctx = Ctx::new(Err(AppError::AuthenticationFail));
        let user = ActorRef::from("bob").resolve(&ctx).unwrap();
        assert_eq!(user, Thing::from((USER_TABLE_NAME, "bob")));
    }
}
