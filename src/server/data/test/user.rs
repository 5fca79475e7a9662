use chrono::Utc;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

use crate::{
    model::role::Role,
    server::{
        data::{test::entry, user::UserRepository},
        error::AppError,
        model::user::{RoleChangeParam, UpsertDiscordUserParam},
        testing::store,
    },
};

fn discord_profile(id: &str, username: &str) -> UpsertDiscordUserParam {
    UpsertDiscordUserParam {
        discord_id: id.to_string(),
        username: username.to_string(),
        avatar: Some("abc".to_string()),
    }
}

/// Tests first login of an unknown Discord account.
///
/// Expected: user created with the default role and flagged as new
#[tokio::test]
async fn upsert_creates_user_with_default_role() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = store(&test);
    let repo = UserRepository::new(&store);

    let (user, created) = repo
        .upsert_discord(discord_profile("123456789", "Rookie"), Utc::now())
        .await?;

    assert!(created);
    assert_eq!(user.id, "123456789");
    assert_eq!(user.roles, vec![Role::Joueur]);
    assert_eq!(user.effective_role, Role::Joueur);
    assert!(user.last_login_at.is_none());

    let logged_in = repo.record_login(&user.id, Utc::now(), entry).await?;
    assert!(logged_in.last_login_at.is_some());
    assert_eq!(test.read_document().unwrap().logs.len(), 1);

    Ok(())
}

/// Tests login of an existing account.
///
/// Verifies that profile fields are refreshed and roles are left untouched.
///
/// Expected: same user, new username, roles unchanged
#[tokio::test]
async fn upsert_refreshes_profile_keeps_roles() -> Result<(), AppError> {
    let existing = UserFactory::new()
        .username("Old")
        .roles(&["manager"])
        .build();
    let test = TestBuilder::new().with_user(existing.clone()).build().unwrap();
    let store = store(&test);
    let repo = UserRepository::new(&store);

    let (user, created) = repo
        .upsert_discord(discord_profile(&existing.id, "New"), Utc::now())
        .await?;

    assert!(!created);
    assert_eq!(user.username, "New");
    assert_eq!(user.effective_role, Role::Manager);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests granting then revoking a role.
///
/// Expected: role present after grant, absent after revoke, grant idempotent
#[tokio::test]
async fn add_and_remove_role() -> Result<(), AppError> {
    let user = UserFactory::new().build();
    let test = TestBuilder::new().with_user(user.clone()).build().unwrap();
    let store = store(&test);
    let repo = UserRepository::new(&store);
    let change = RoleChangeParam {
        user_id: user.id.clone(),
        role: Role::Support,
    };

    repo.add_role(change.clone(), Utc::now(), entry).await?;
    let granted = repo.add_role(change.clone(), Utc::now(), entry).await?;
    assert_eq!(granted.roles, vec![Role::Joueur, Role::Support]);
    assert_eq!(test.read_document().unwrap().users[0].roles.len(), 2);

    let revoked = repo.remove_role(change, Utc::now(), entry).await?;
    assert_eq!(revoked.roles, vec![Role::Joueur]);
    assert_eq!(test.read_document().unwrap().logs.len(), 3);

    Ok(())
}

/// Tests granting a role to an unknown user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn add_role_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = store(&test);
    let repo = UserRepository::new(&store);

    let result = repo
        .add_role(
            RoleChangeParam {
                user_id: "missing".to_string(),
                role: Role::Support,
            },
            Utc::now(),
            entry,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(test.read_document().unwrap().logs.is_empty());

    Ok(())
}

/// Tests removing owners down to the last one.
///
/// Expected: first removal succeeds, removing the remaining owner is rejected
#[tokio::test]
async fn remove_owner_keeps_last_owner() -> Result<(), AppError> {
    let first = UserFactory::new().roles(&["owner"]).build();
    let second = UserFactory::new().roles(&["joueur"]).account_type("owner").build();
    let test = TestBuilder::new()
        .with_users([first.clone(), second.clone()])
        .build()
        .unwrap();
    let store = store(&test);
    let repo = UserRepository::new(&store);

    assert_eq!(repo.get_owners().await?.len(), 2);

    let removed = repo.remove_owner(&second.id, Utc::now(), entry).await?;
    assert_eq!(removed.effective_role, Role::Joueur);

    let result = repo.remove_owner(&first.id, Utc::now(), entry).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(test.read_document().unwrap().logs.len(), 1);
    assert_eq!(repo.get_owners().await?.len(), 1);

    Ok(())
}
