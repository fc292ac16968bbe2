mod helpers;

use helpers::dislike_helpers::{get_tuit_dislikers, get_user_disliked_tuits, toggle_dislike};
use helpers::{create_fake_tuit, create_fake_user, login_bearer};
use tuiter_server::entities::tuit::TuitView;
use tuiter_server::entities::user::LocalUser;

test_with_server!(user_disliked_tuits_with_poster, |server, ctx_state, config| {
    let poster = create_fake_user(&ctx_state).await;
    let user = create_fake_user(&ctx_state).await;
    let tuit_1 = create_fake_tuit(&ctx_state, &poster).await;
    let tuit_2 = create_fake_tuit(&ctx_state, &poster).await;
    let bearer = login_bearer(&ctx_state, &user);

    toggle_dislike(&server, Some(bearer.as_str()), "self", &tuit_1.id.to_raw())
        .await
        .assert_status_ok();
    toggle_dislike(&server, Some(bearer.as_str()), "self", &tuit_2.id.to_raw())
        .await
        .assert_status_ok();

    let response = get_user_disliked_tuits(&server, Some(bearer.as_str()), "self").await;
    response.assert_status_ok();
    let tuits = response.json::<Vec<TuitView>>();
    assert_eq!(tuits.len(), 2);
    assert_eq!(tuits[0].id, tuit_1.id);
    assert_eq!(tuits[1].id, tuit_2.id);
    let posted_by = tuits[0].posted_by.as_ref().expect("poster fetched");
    assert_eq!(posted_by.username, poster.username);
    assert_eq!(tuits[0].dislikes_nr, 1);

    // same list by explicit id, no login needed
    let response = get_user_disliked_tuits(&server, None, &user.id.to_raw()).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<TuitView>>().len(), 2);
});

test_with_server!(disliked_tuits_skip_deleted_tuit, |server, ctx_state, config| {
    let poster = create_fake_user(&ctx_state).await;
    let user = create_fake_user(&ctx_state).await;
    let tuit_1 = create_fake_tuit(&ctx_state, &poster).await;
    let tuit_2 = create_fake_tuit(&ctx_state, &poster).await;
    let bearer = login_bearer(&ctx_state, &user);

    toggle_dislike(&server, Some(bearer.as_str()), "self", &tuit_1.id.to_raw())
        .await
        .assert_status_ok();
    toggle_dislike(&server, Some(bearer.as_str()), "self", &tuit_2.id.to_raw())
        .await
        .assert_status_ok();

    ctx_state.db.tuits.delete(&tuit_1.id).await.unwrap();

    let response = get_user_disliked_tuits(&server, Some(bearer.as_str()), "self").await;
    response.assert_status_ok();
    let tuits = response.json::<Vec<TuitView>>();
    assert_eq!(tuits.len(), 1);
    assert_eq!(tuits[0].id, tuit_2.id);
});

test_with_server!(lists_are_empty_without_dislikes, |server, ctx_state, config| {
    let poster = create_fake_user(&ctx_state).await;
    let tuit = create_fake_tuit(&ctx_state, &poster).await;

    let response = get_tuit_dislikers(&server, &tuit.id.to_raw()).await;
    response.assert_status_ok();
    assert!(response.json::<Vec<LocalUser>>().is_empty());

    let response = get_user_disliked_tuits(&server, None, &poster.id.to_raw()).await;
    response.assert_status_ok();
    assert!(response.json::<Vec<TuitView>>().is_empty());
});

test_with_server!(disliked_tuits_of_self_needs_login, |server, ctx_state, config| {
    let response = get_user_disliked_tuits(&server, None, "self").await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
});
