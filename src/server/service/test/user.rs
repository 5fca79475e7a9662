use super::*;
use crate::server::service::{audit::AuditService, user::UserService};

/// Tests granting a role below the actor's rank.
///
/// Verifies that the role is stored and an audit entry names the actor,
/// the target and the role.
///
/// Expected: Ok(User) holding the new role, one `role_grant` entry
#[tokio::test]
async fn grants_role_below_actor() -> Result<(), AppError> {
    let admin = with_role("administrateur");
    let player = with_role("joueur");
    let test = TestBuilder::new()
        .with_users([admin.clone(), player.clone()])
        .build()
        .unwrap();
    let store = store(&test);

    let user = UserService::new(&store)
        .grant_role(
            &actor(&admin),
            RoleChangeParam {
                user_id: player.id.clone(),
                role: Role::Moderateur,
            },
        )
        .await?;

    assert_eq!(user.effective_role, Role::Moderateur);

    let logs = AuditService::new(&store).get_logs(None).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, "role_grant");
    assert_eq!(logs[0].executor, admin.username);
    assert_eq!(logs[0].target.as_deref(), Some(player.id.as_str()));
    assert_eq!(logs[0].details.as_deref(), Some("moderateur"));

    Ok(())
}

/// Tests granting a role equal to or above the actor's rank.
///
/// Expected: Err(AuthError::AccessDenied), nothing stored or logged
#[tokio::test]
async fn refuses_role_at_or_above_actor() -> Result<(), AppError> {
    let admin = with_role("administrateur");
    let player = with_role("joueur");
    let test = TestBuilder::new()
        .with_users([admin.clone(), player.clone()])
        .build()
        .unwrap();
    let store = store(&test);
    let service = UserService::new(&store);

    for role in [Role::Administrateur, Role::Manager, Role::Fondateur] {
        let result = service
            .grant_role(
                &actor(&admin),
                RoleChangeParam {
                    user_id: player.id.clone(),
                    role,
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }

    assert_eq!(service.get_user(&player.id).await?.effective_role, Role::Joueur);
    assert!(AuditService::new(&store).get_logs(None).await?.is_empty());

    Ok(())
}

/// Tests that the owner role cannot be handed out as a regular role.
///
/// Expected: Err(AppError::BadRequest) even for an owner
#[tokio::test]
async fn owner_role_goes_through_owner_operations() -> Result<(), AppError> {
    let owner = with_role("owner");
    let player = with_role("joueur");
    let test = TestBuilder::new()
        .with_users([owner.clone(), player.clone()])
        .build()
        .unwrap();
    let store = store(&test);

    let result = UserService::new(&store)
        .grant_role(
            &actor(&owner),
            RoleChangeParam {
                user_id: player.id.clone(),
                role: Role::Owner,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests revoking a role held by the target.
///
/// Expected: Ok(User) without the role, `role_revoke` entry recorded
#[tokio::test]
async fn revokes_role() -> Result<(), AppError> {
    let manager = with_role("manager");
    let captain = UserFactory::new().roles(&["joueur", "capitaine"]).build();
    let test = TestBuilder::new()
        .with_users([manager.clone(), captain.clone()])
        .build()
        .unwrap();
    let store = store(&test);

    let user = UserService::new(&store)
        .revoke_role(
            &actor(&manager),
            RoleChangeParam {
                user_id: captain.id.clone(),
                role: Role::Capitaine,
            },
        )
        .await?;

    assert_eq!(user.roles, vec![Role::Joueur]);
    let logs = AuditService::new(&store).get_logs(None).await?;
    assert_eq!(logs[0].action, "role_revoke");

    Ok(())
}

/// Tests adding then removing owners.
///
/// Verifies that the listing follows each change and that the last remaining
/// owner cannot be removed.
///
/// Expected: added owner listed, removed owner gone, last removal BadRequest
#[tokio::test]
async fn owner_lifecycle_keeps_one_owner() -> Result<(), AppError> {
    let owner = with_role("owner");
    let manager = with_role("manager");
    let test = TestBuilder::new()
        .with_users([owner.clone(), manager.clone()])
        .build()
        .unwrap();
    let store = store(&test);
    let service = UserService::new(&store);
    let acting = actor(&owner);

    service.add_owner(&acting, &manager.id).await?;
    let owners: Vec<_> = service.get_owners().await?.into_iter().map(|u| u.id).collect();
    assert!(owners.contains(&manager.id));
    assert_eq!(owners.len(), 2);

    service.remove_owner(&acting, &owner.id).await?;
    let owners: Vec<_> = service.get_owners().await?.into_iter().map(|u| u.id).collect();
    assert_eq!(owners, vec![manager.id.clone()]);

    let result = service.remove_owner(&acting, &manager.id).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get_owners().await?.len(), 1);

    let actions: Vec<_> = AuditService::new(&store)
        .get_logs(None)
        .await?
        .into_iter()
        .map(|entry| entry.action)
        .collect();
    assert_eq!(actions, vec!["owner_remove", "owner_add"]);

    Ok(())
}
