use super::*;

/// Tests every pair of effective role and required minimum role.
///
/// Verifies that access is granted exactly when the user's rank is at least
/// the required rank.
///
/// Expected: Ok(User) iff rank(user) >= rank(minimum), AccessDenied otherwise
#[tokio::test]
async fn minimum_role_follows_rank_order() -> Result<(), AppError> {
    let users: Vec<_> = Role::iter()
        .map(|role| (role, with_role(&role.to_string())))
        .collect();
    let test = TestBuilder::new()
        .with_users(users.iter().map(|(_, user)| user.clone()))
        .build()
        .unwrap();
    let store = store(&test);

    for (held, user) in &users {
        let session = test_utils::context::new_session();
        login_as(&session, user).await?;
        let guard = AuthGuard::new(&store, &session, None);

        for minimum in Role::iter() {
            let result = guard.require(&[Permission::MinimumRole(minimum)]).await;

            if held.rank() >= minimum.rank() {
                assert_eq!(result?.id, user.id, "{held} should satisfy {minimum}");
            } else {
                assert!(
                    matches!(result, Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))),
                    "{held} should not satisfy {minimum}"
                );
            }
        }
    }

    Ok(())
}

/// Tests that the highest of several roles is the one checked.
///
/// Expected: Ok(User) for `moderateur`, AccessDenied for `administrateur`
#[tokio::test]
async fn effective_role_is_highest_held() -> Result<(), AppError> {
    let user = UserFactory::new()
        .roles(&["joueur", "moderateur", "capitaine"])
        .build();
    let mut test = TestBuilder::new().with_user(user.clone()).build().unwrap();
    let store = store(&test);
    let session = test.session().clone();
    login_as(&session, &user).await?;
    let guard = AuthGuard::new(&store, &session, None);

    let allowed = guard
        .require(&[Permission::MinimumRole(Role::Moderateur)])
        .await?;
    assert_eq!(allowed.effective_role, Role::Moderateur);

    let denied = guard
        .require(&[Permission::MinimumRole(Role::Administrateur)])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests owner management for owners and non-owners.
///
/// Verifies that only the `owner` role passes; `fondateur` is one rank below
/// and is refused.
///
/// Expected: Ok(User) for owner, AccessDenied for fondateur
#[tokio::test]
async fn owner_management_requires_owner_role() -> Result<(), AppError> {
    let owner = with_role("owner");
    let fondateur = with_role("fondateur");
    let test = TestBuilder::new()
        .with_users([owner.clone(), fondateur.clone()])
        .build()
        .unwrap();
    let store = store(&test);

    let owner_session = test_utils::context::new_session();
    login_as(&owner_session, &owner).await?;
    let result = AuthGuard::new(&store, &owner_session, None)
        .require(&[Permission::OwnerManagement])
        .await;
    assert!(result.is_ok());

    let fondateur_session = test_utils::context::new_session();
    login_as(&fondateur_session, &fondateur).await?;
    let result = AuthGuard::new(&store, &fondateur_session, None)
        .require(&[Permission::OwnerManagement])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests the super admin override.
///
/// Verifies that the configured identity passes owner management while only
/// holding `joueur`, and that it also bypasses its own sanction flags.
///
/// Expected: Ok(User) for OwnerManagement
#[tokio::test]
async fn super_admin_manages_owners_without_owner_role() -> Result<(), AppError> {
    let super_admin = UserFactory::new()
        .id(SUPER_ADMIN_ID)
        .discord_id(Some(SUPER_ADMIN_ID))
        .suspended(true)
        .build();
    let mut test = TestBuilder::new()
        .with_user(super_admin.clone())
        .build()
        .unwrap();
    let store = store(&test);
    let session = test.session().clone();
    login_as(&session, &super_admin).await?;
    let guard = AuthGuard::new(&store, &session, Some(SUPER_ADMIN_ID));

    let user = guard.require(&[Permission::OwnerManagement]).await?;

    assert_eq!(user.effective_role, Role::Joueur);
    assert!(guard.is_super_admin(&user));
    assert!(guard.actor(&user, "127.0.0.1".to_string()).super_admin);

    Ok(())
}

/// Tests that the override is tied to the configured id only.
///
/// Expected: AccessDenied when no super admin is configured
#[tokio::test]
async fn super_admin_override_needs_configuration() -> Result<(), AppError> {
    let user = UserFactory::new()
        .id(SUPER_ADMIN_ID)
        .discord_id(Some(SUPER_ADMIN_ID))
        .build();
    let mut test = TestBuilder::new().with_user(user.clone()).build().unwrap();
    let store = store(&test);
    let session = test.session().clone();
    login_as(&session, &user).await?;

    let result = AuthGuard::new(&store, &session, None)
        .require(&[Permission::OwnerManagement])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that sanctioned accounts are refused before any role check.
///
/// Expected: AccountBanned for a banned owner, AccountSuspended for a
/// suspended owner, even with no permission required
#[tokio::test]
async fn sanctioned_users_are_refused() -> Result<(), AppError> {
    let banned = UserFactory::new().roles(&["owner"]).banned(true).build();
    let suspended = UserFactory::new().roles(&["owner"]).suspended(true).build();
    let test = TestBuilder::new()
        .with_users([banned.clone(), suspended.clone()])
        .build()
        .unwrap();
    let store = store(&test);

    let session = test_utils::context::new_session();
    login_as(&session, &banned).await?;
    let result = AuthGuard::new(&store, &session, None).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountBanned(_)))
    ));

    let session = test_utils::context::new_session();
    login_as(&session, &suspended).await?;
    let result = AuthGuard::new(&store, &session, None).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountSuspended(_)))
    ));

    Ok(())
}

/// Tests that a role granted after login applies on the next check.
///
/// Expected: AccessDenied before the grant, Ok(User) after
#[tokio::test]
async fn role_changes_apply_immediately() -> Result<(), AppError> {
    let user = with_role("joueur");
    let mut test = TestBuilder::new().with_user(user.clone()).build().unwrap();
    let store = store(&test);
    let session = test.session().clone();
    login_as(&session, &user).await?;
    let guard = AuthGuard::new(&store, &session, None);
    let permission = [Permission::MinimumRole(Role::Support)];

    assert!(guard.require(&permission).await.is_err());

    store
        .mutate(|document| {
            if let Some(stored) = document.users.iter_mut().find(|u| u.id == user.id) {
                stored.roles.push("support".to_string());
            }
            Ok(())
        })
        .await?;

    assert!(guard.require(&permission).await.is_ok());

    Ok(())
}
