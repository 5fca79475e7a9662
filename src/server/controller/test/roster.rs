use super::*;
use test_utils::factory::player::player;

use crate::{
    model::roster::{AddPlayerDto, PlayerDto},
    server::controller::roster::{add_player, get_roster, remove_player},
};

fn recruit() -> AddPlayerDto {
    AddPlayerDto {
        pseudo: "Nova".to_string(),
        position: "Remplaçant".to_string(),
        discord_id: None,
    }
}

/// Tests a `manager` adding then removing a player.
///
/// Verifies that both changes are audited and visible in the roster listing.
///
/// Expected: 201 Created then 204 No Content, two roster entries in the log
#[tokio::test]
async fn manager_adds_and_removes_player() -> Result<(), AppError> {
    let manager = with_role("manager");
    let test = TestBuilder::new()
        .with_user(manager.clone())
        .with_player(player("Alpha"))
        .build()
        .unwrap();
    let (state, _receiver) = app_state(store(&test));
    let session = new_session();
    login_as(&session, &manager).await?;

    let response = respond(
        add_player(
            State(state.clone()),
            session.clone(),
            client_ip(),
            Json(recruit()),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::CREATED);
    let added: PlayerDto = body_json(response).await;

    let response = respond(get_roster(State(state.clone()), session.clone()).await);
    let roster: Vec<PlayerDto> = body_json(response).await;
    let pseudos: Vec<&str> = roster.iter().map(|player| player.pseudo.as_str()).collect();
    assert_eq!(pseudos, vec!["Alpha", "Nova"]);

    let response = respond(
        remove_player(
            State(state.clone()),
            session.clone(),
            client_ip(),
            Path(added.id.clone()),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let document = test.read_document().unwrap();
    assert_eq!(document.roster.len(), 1);
    let actions: Vec<&str> = document.logs.iter().map(|log| log.action.as_str()).collect();
    assert_eq!(actions, vec!["roster_remove", "roster_add"]);

    Ok(())
}

/// Tests roster changes below the `manager` rank.
///
/// Verifies that an `administrateur` can read the roster but neither add nor
/// remove players.
///
/// Expected: 200 OK for the listing, 403 Forbidden for both changes, roster unchanged
#[tokio::test]
async fn administrateur_cannot_change_roster() -> Result<(), AppError> {
    let admin = with_role("administrateur");
    let starter = player("Alpha");
    let test = TestBuilder::new()
        .with_user(admin.clone())
        .with_player(starter.clone())
        .build()
        .unwrap();
    let before = test.read_document().unwrap();
    let (state, _receiver) = app_state(store(&test));
    let session = new_session();
    login_as(&session, &admin).await?;

    let response = respond(get_roster(State(state.clone()), session.clone()).await);
    assert_eq!(response.status(), StatusCode::OK);

    let response = respond(
        add_player(
            State(state.clone()),
            session.clone(),
            client_ip(),
            Json(recruit()),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = respond(
        remove_player(
            State(state.clone()),
            session.clone(),
            client_ip(),
            Path(starter.id.clone()),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    assert_eq!(test.read_document().unwrap(), before);

    Ok(())
}

/// Tests removing a player that is not on the roster.
///
/// Expected: 404 Not Found, nothing logged
#[tokio::test]
async fn removing_unknown_player_is_not_found() -> Result<(), AppError> {
    let manager = with_role("manager");
    let test = TestBuilder::new().with_user(manager.clone()).build().unwrap();
    let (state, _receiver) = app_state(store(&test));
    let session = new_session();
    login_as(&session, &manager).await?;

    let response = respond(
        remove_player(
            State(state.clone()),
            session.clone(),
            client_ip(),
            Path("player-missing".to_string()),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(test.read_document().unwrap().logs.is_empty());

    Ok(())
}
