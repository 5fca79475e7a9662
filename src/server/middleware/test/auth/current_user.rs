use super::*;

/// Tests resolving the user of an anonymous session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn anonymous_session_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().unwrap();
    let store = store(&test);
    let session = test.session().clone();

    let result = AuthGuard::new(&store, &session, None).current_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user missing from the store.
///
/// Verifies that the stale session is cleared so the next request is
/// treated as anonymous.
///
/// Expected: Err(AuthError::UserNotInStore), session emptied
#[tokio::test]
async fn unknown_user_clears_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().unwrap();
    let store = store(&test);
    let session = test.session().clone();
    AuthSession::new(&session).set_user_id("123").await?;

    let result = AuthGuard::new(&store, &session, None).current_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInStore(id))) if id == "123"
    ));
    assert!(AuthSession::new(&session).get_user_id().await?.is_none());

    Ok(())
}

/// Tests that sanctioned users can still identify themselves.
///
/// Expected: Ok(User) with the suspended flag set
#[tokio::test]
async fn suspended_user_is_still_resolved() -> Result<(), AppError> {
    let user = UserFactory::new().suspended(true).build();
    let mut test = TestBuilder::new().with_user(user.clone()).build().unwrap();
    let store = store(&test);
    let session = test.session().clone();
    login_as(&session, &user).await?;

    let resolved = AuthGuard::new(&store, &session, None).current_user().await?;

    assert_eq!(resolved.id, user.id);
    assert!(resolved.suspended);

    Ok(())
}
