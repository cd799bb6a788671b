use test_utils::{builder::TestBuilder, factory};

use crate::{data::command::CommandRepository, error::AppError, model::command::Role};

/// Tests that find excludes soft-deleted records while find_any sees them.
#[tokio::test]
async fn find_excludes_soft_deleted_records() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::command::CommandFactory::new(db)
        .channel("somechannel")
        .name("greet")
        .deleted_at(chrono::Utc::now())
        .build()
        .await?;

    let repo = CommandRepository::new(db);

    assert!(repo.find("somechannel", "greet").await?.is_none());
    assert!(repo.find_any("somechannel", "greet").await?.is_some());

    Ok(())
}

/// Tests that JSON columns round-trip through the entity boundary.
///
/// Expected: response components and restrictions come back decoded
/// exactly as stored
#[tokio::test]
async fn json_columns_round_trip() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::command::CommandFactory::new(db)
        .channel("somechannel")
        .name("greet")
        .response(serde_json::json!([
            { "type": "text", "data": "Hello, " },
            { "type": "tag", "data": "somebody" }
        ]))
        .services(serde_json::json!(["twitch"]))
        .role("moderator")
        .build()
        .await?;

    let command = CommandRepository::new(db)
        .find("somechannel", "greet")
        .await?
        .unwrap();

    assert_eq!(command.response.len(), 2);
    assert_eq!(command.response[0].kind, "text");
    assert_eq!(command.response[1].data, "somebody");
    assert_eq!(command.restrictions.service, vec!["twitch"]);
    assert_eq!(command.restrictions.role, Role::Moderator);

    Ok(())
}

/// Tests that replace matches nothing once the record is soft-deleted.
///
/// This is the "exactly one record matched" signal the mutation engine
/// relies on: a record deleted between its read and its write makes the
/// write report zero matched rows instead of resurrecting the record.
#[tokio::test]
async fn replace_after_soft_delete_matches_nothing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::command::CommandFactory::new(db)
        .channel("somechannel")
        .name("greet")
        .build()
        .await?;

    let repo = CommandRepository::new(db);
    let mut command = repo.find("somechannel", "greet").await?.unwrap();

    assert!(repo.soft_delete("somechannel", "greet").await?);

    command.count = 99;
    let matched = repo.replace(&command).await?;

    assert_eq!(matched, 0);
    assert!(repo.find("somechannel", "greet").await?.is_none());

    Ok(())
}

/// Tests that a stored record with an undecodable role surfaces an
/// internal error instead of a panic.
#[tokio::test]
async fn malformed_stored_role_is_an_internal_error() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::command::CommandFactory::new(db)
        .channel("somechannel")
        .name("greet")
        .role("emperor")
        .build()
        .await?;

    let result = CommandRepository::new(db).find("somechannel", "greet").await;

    assert!(matches!(result, Err(AppError::Internal(_))));

    Ok(())
}
