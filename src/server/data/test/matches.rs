use chrono::{Duration, Utc};
use entity::prelude::MatchStatus;
use test_utils::{builder::TestBuilder, factory::matches::MatchFactory};

use crate::server::{
    data::{matches::MatchRepository, test::entry},
    error::AppError,
    model::matches::UpdateMatchParam,
    testing::store,
};

/// Tests a partial match update.
///
/// Expected: only the provided fields change
#[tokio::test]
async fn update_applies_present_fields() -> Result<(), AppError> {
    let record = MatchFactory::new().opponent("Rivals").build();
    let test = TestBuilder::new().with_match(record.clone()).build().unwrap();
    let store = store(&test);
    let repo = MatchRepository::new(&store);

    let updated = repo
        .update(
            &record.id,
            UpdateMatchParam {
                status: Some(MatchStatus::Played),
                score: Some("3-1".to_string()),
                ..Default::default()
            },
            Utc::now(),
            entry,
        )
        .await?;

    assert_eq!(updated.opponent, "Rivals");
    assert_eq!(updated.status, MatchStatus::Played);
    assert_eq!(updated.score.as_deref(), Some("3-1"));
    assert_eq!(updated.scheduled_at, record.scheduled_at);

    Ok(())
}

/// Tests listing order and deletion.
///
/// Expected: earliest match first; deleted match gone; unknown id is NotFound
#[tokio::test]
async fn list_sorted_and_delete() -> Result<(), AppError> {
    let mut later = MatchFactory::new().build();
    later.scheduled_at = Utc::now() + Duration::days(7);
    let sooner = MatchFactory::new().build();
    let test = TestBuilder::new()
        .with_match(later.clone())
        .with_match(sooner.clone())
        .build()
        .unwrap();
    let store = store(&test);
    let repo = MatchRepository::new(&store);

    let all = repo.get_all().await?;
    assert_eq!(all[0].id, sooner.id);
    assert_eq!(all[1].id, later.id);

    repo.delete(&sooner.id, Utc::now(), entry).await?;
    assert_eq!(repo.get_all().await?.len(), 1);
    assert!(matches!(
        repo.delete(&sooner.id, Utc::now(), entry).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(test.read_document().unwrap().logs.len(), 1);

    Ok(())
}
