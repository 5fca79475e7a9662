use super::*;

use crate::server::{
    model::{bot::BotNotification, communique::CreateCommuniqueParam},
    service::{bot::BotBridge, communique::CommuniqueService},
};

fn announcement() -> CreateCommuniqueParam {
    CreateCommuniqueParam {
        title: "Recrutement".to_string(),
        content: "Les essais ouvrent samedi.".to_string(),
    }
}

/// Tests publishing a communiqué.
///
/// Verifies that the communiqué and its audit entry are stored together and
/// that one notification for the communiqué webhook reaches the bot queue.
///
/// Expected: Ok(Communique), one `BotNotification::Communique`
#[tokio::test]
async fn publish_stores_and_notifies_bot() -> Result<(), AppError> {
    let moderator = with_role("moderateur");
    let test = TestBuilder::new().with_user(moderator.clone()).build().unwrap();
    let store = store(&test);
    let (bridge, mut receiver) = BotBridge::channel();
    let service = CommuniqueService::new(&store, &bridge);

    let communique = service.publish(&actor(&moderator), announcement()).await?;

    assert_eq!(communique.author, moderator.username);
    let document = test.read_document().unwrap();
    assert_eq!(document.communiques.len(), 1);
    assert_eq!(document.logs[0].action, "communique_publish");
    assert_eq!(document.logs[0].details.as_deref(), Some("Recrutement"));

    let notification = receiver.try_recv().unwrap();
    assert_eq!(notification.path(), "communiques");
    assert_eq!(
        notification,
        BotNotification::Communique {
            title: "Recrutement".to_string(),
            content: "Les essais ouvrent samedi.".to_string(),
        }
    );
    assert!(receiver.try_recv().is_err());

    Ok(())
}

/// Tests publishing with an empty title or an empty body.
///
/// Expected: Err(AppError::BadRequest) for both, nothing stored, logged or sent
#[tokio::test]
async fn publish_requires_title_and_content() -> Result<(), AppError> {
    let moderator = with_role("moderateur");
    let test = TestBuilder::new().with_user(moderator.clone()).build().unwrap();
    let store = store(&test);
    let (bridge, mut receiver) = BotBridge::channel();
    let service = CommuniqueService::new(&store, &bridge);

    let untitled = CreateCommuniqueParam {
        title: String::new(),
        ..announcement()
    };
    let empty = CreateCommuniqueParam {
        content: String::new(),
        ..announcement()
    };

    for param in [untitled, empty] {
        let result = service.publish(&actor(&moderator), param).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    let document = test.read_document().unwrap();
    assert!(document.communiques.is_empty());
    assert!(document.logs.is_empty());
    assert!(receiver.try_recv().is_err());

    Ok(())
}
