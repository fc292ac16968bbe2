pub mod dislike_helpers;
pub mod test_with_server;

use fake::faker::internet::en::Username;
use fake::Fake;
use tuiter_server::entities::tuit::Tuit;
use tuiter_server::entities::user::LocalUser;
use tuiter_server::middleware::mw_ctx::CtxState;

#[allow(dead_code)]
pub async fn create_fake_user(ctx_state: &CtxState) -> LocalUser {
    let username: String = Username().fake();
    let username = format!("{username}_{}", uuid::Uuid::new_v4().simple());
    ctx_state
        .db
        .users
        .create(&username, None)
        .await
        .expect("create user")
}

#[allow(dead_code)]
pub async fn create_fake_tuit(ctx_state: &CtxState, user: &LocalUser) -> Tuit {
    ctx_state
        .db
        .tuits
        .create(&user.id, "tuits are not always liked")
        .await
        .expect("create tuit")
}

/// `Authorization` header value for a logged in `user`.
#[allow(dead_code)]
pub fn login_bearer(ctx_state: &CtxState, user: &LocalUser) -> String {
    let token = ctx_state
        .jwt
        .create_by_login(&user.id.to_raw())
        .expect("login token");
    format!("Bearer {token}")
}
