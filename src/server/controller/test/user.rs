use super::*;
use crate::{
    model::{
        role::Role,
        user::{RoleChangeDto, UserDto},
    },
    server::controller::user::{get_users, grant_role, revoke_role},
};

/// Tests role grants through the endpoint.
///
/// Verifies that an `administrateur` can grant `moderateur` but not
/// `administrateur`, and that a `moderateur` cannot reach the endpoint at all.
///
/// Expected: 200, then 403, then 403
#[tokio::test]
async fn grant_role_respects_rank() -> Result<(), AppError> {
    let admin = with_role("administrateur");
    let moderator = with_role("moderateur");
    let player = with_role("joueur");
    let test = TestBuilder::new()
        .with_users([admin.clone(), moderator.clone(), player.clone()])
        .build()
        .unwrap();
    let (state, _receiver) = app_state(store(&test));

    let admin_session = new_session();
    login_as(&admin_session, &admin).await?;

    let response = respond(
        grant_role(
            State(state.clone()),
            admin_session.clone(),
            client_ip(),
            Path(player.id.clone()),
            Json(RoleChangeDto {
                role: Role::Moderateur,
            }),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::OK);
    let user: UserDto = body_json(response).await;
    assert_eq!(user.effective_role, Role::Moderateur);

    let response = respond(
        grant_role(
            State(state.clone()),
            admin_session.clone(),
            client_ip(),
            Path(player.id.clone()),
            Json(RoleChangeDto {
                role: Role::Administrateur,
            }),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let moderator_session = new_session();
    login_as(&moderator_session, &moderator).await?;
    let response = respond(
        grant_role(
            State(state.clone()),
            moderator_session.clone(),
            client_ip(),
            Path(player.id.clone()),
            Json(RoleChangeDto {
                role: Role::Capitaine,
            }),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests revoking a role that was never held.
///
/// Expected: 200 OK, roles unchanged
#[tokio::test]
async fn revoke_missing_role_is_noop() -> Result<(), AppError> {
    let admin = with_role("administrateur");
    let player = with_role("joueur");
    let test = TestBuilder::new()
        .with_users([admin.clone(), player.clone()])
        .build()
        .unwrap();
    let (state, _receiver) = app_state(store(&test));
    let session = new_session();
    login_as(&session, &admin).await?;

    let response = respond(
        revoke_role(
            State(state.clone()),
            session.clone(),
            client_ip(),
            Path((player.id.clone(), Role::Capitaine)),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let user: UserDto = body_json(response).await;
    assert_eq!(user.roles, vec![Role::Joueur]);

    Ok(())
}

/// Tests the user listing for a `joueur`.
///
/// Expected: 403 Forbidden
#[tokio::test]
async fn user_listing_needs_moderateur() -> Result<(), AppError> {
    let player = with_role("joueur");
    let test = TestBuilder::new().with_user(player.clone()).build().unwrap();
    let (state, _receiver) = app_state(store(&test));
    let session = new_session();
    login_as(&session, &player).await?;

    let response = respond(get_users(State(state.clone()), session.clone()).await);

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}
