use super::*;

use crate::{
    model::settings::{SettingsDto, UpdateSettingsDto},
    server::controller::settings::{get_settings, update_settings},
};

/// Tests a `manager` renaming the club.
///
/// Verifies that only the provided fields change and the update is audited.
///
/// Expected: 200 OK with the new name, tag untouched, `settings_update` entry
#[tokio::test]
async fn manager_updates_settings() -> Result<(), AppError> {
    let manager = with_role("manager");
    let test = TestBuilder::new().with_user(manager.clone()).build().unwrap();
    let (state, _receiver) = app_state(store(&test));
    let session = new_session();
    login_as(&session, &manager).await?;

    let response = respond(
        update_settings(
            State(state.clone()),
            session.clone(),
            client_ip(),
            Json(UpdateSettingsDto {
                club_name: Some(" Les Aigles ".to_string()),
                recruitment_open: Some(true),
                ..Default::default()
            }),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::OK);
    let settings: SettingsDto = body_json(response).await;
    assert_eq!(settings.club_name, "Les Aigles");
    assert_eq!(settings.club_tag, "CLUB");
    assert!(settings.recruitment_open);
    assert!(settings.updated_at.is_some());

    let response = respond(get_settings(State(state.clone()), session.clone()).await);
    assert_eq!(body_json::<SettingsDto>(response).await, settings);

    let document = test.read_document().unwrap();
    assert_eq!(document.logs[0].action, "settings_update");
    assert_eq!(document.logs[0].ip, CLIENT_IP);

    Ok(())
}

/// Tests the settings gates for an `administrateur`.
///
/// Verifies that reading is allowed while updating requires `manager`.
///
/// Expected: 200 OK for the read, 403 Forbidden for the update, settings unchanged
#[tokio::test]
async fn administrateur_reads_but_cannot_update() -> Result<(), AppError> {
    let admin = with_role("administrateur");
    let test = TestBuilder::new().with_user(admin.clone()).build().unwrap();
    let before = test.read_document().unwrap();
    let (state, _receiver) = app_state(store(&test));
    let session = new_session();
    login_as(&session, &admin).await?;

    let response = respond(get_settings(State(state.clone()), session.clone()).await);
    assert_eq!(response.status(), StatusCode::OK);

    let response = respond(
        update_settings(
            State(state.clone()),
            session.clone(),
            client_ip(),
            Json(UpdateSettingsDto {
                club_tag: Some("AIG".to_string()),
                ..Default::default()
            }),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(test.read_document().unwrap(), before);

    Ok(())
}

/// Tests reading the settings below `administrateur`.
///
/// Expected: 403 Forbidden
#[tokio::test]
async fn moderateur_cannot_read_settings() -> Result<(), AppError> {
    let moderator = with_role("moderateur");
    let test = TestBuilder::new().with_user(moderator.clone()).build().unwrap();
    let (state, _receiver) = app_state(store(&test));
    let session = new_session();
    login_as(&session, &moderator).await?;

    let response = respond(get_settings(State(state.clone()), session.clone()).await);

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests clearing the club tag.
///
/// Expected: 400 Bad Request, nothing logged
#[tokio::test]
async fn blank_tag_is_rejected() -> Result<(), AppError> {
    let manager = with_role("manager");
    let test = TestBuilder::new().with_user(manager.clone()).build().unwrap();
    let (state, _receiver) = app_state(store(&test));
    let session = new_session();
    login_as(&session, &manager).await?;

    let response = respond(
        update_settings(
            State(state.clone()),
            session.clone(),
            client_ip(),
            Json(UpdateSettingsDto {
                club_tag: Some(" ".to_string()),
                ..Default::default()
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(test.read_document().unwrap().logs.is_empty());

    Ok(())
}
