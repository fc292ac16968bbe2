use axum_test::{TestResponse, TestServer};

#[allow(dead_code)]
pub async fn toggle_dislike(
    server: &TestServer,
    bearer: Option<&str>,
    user_ref: &str,
    tuit_id: &str,
) -> TestResponse {
    let request = server.put(&format!("/api/users/{user_ref}/dislikes/{tuit_id}"));
    match bearer {
        Some(bearer) => request.add_header("Authorization", bearer).await,
        None => request.await,
    }
}

#[allow(dead_code)]
pub async fn get_dislike_status(
    server: &TestServer,
    bearer: Option<&str>,
    user_ref: &str,
    tuit_id: &str,
) -> TestResponse {
    let request = server.get(&format!("/api/users/{user_ref}/dislikes/{tuit_id}"));
    match bearer {
        Some(bearer) => request.add_header("Authorization", bearer).await,
        None => request.await,
    }
}

#[allow(dead_code)]
pub async fn get_user_disliked_tuits(
    server: &TestServer,
    bearer: Option<&str>,
    user_ref: &str,
) -> TestResponse {
    let request = server.get(&format!("/api/users/{user_ref}/dislikes"));
    match bearer {
        Some(bearer) => request.add_header("Authorization", bearer).await,
        None => request.await,
    }
}

#[allow(dead_code)]
pub async fn get_tuit_dislikers(server: &TestServer, tuit_id: &str) -> TestResponse {
    server.get(&format!("/api/tuits/{tuit_id}/dislikes")).await
}
