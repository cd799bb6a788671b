use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::AppError,
    model::{
        command::{CommandUpdate, CreateCommandParams, Role},
        message::MessageComponent,
    },
    service::command::CommandService,
};

fn sample_params(channel: &str, name: &str) -> CreateCommandParams {
    CreateCommandParams {
        channel: channel.to_string(),
        name: name.to_string(),
        response: vec![MessageComponent {
            kind: "text".to_string(),
            data: "Hello!".to_string(),
        }],
        services: Vec::new(),
        role: Role::User,
    }
}

/// Tests the absolute-set form of a counter update.
///
/// Expected: count 10 with value "5" becomes 5, reported as applied
#[tokio::test]
async fn counter_update_sets_absolute_value() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::command::CommandFactory::new(db)
        .channel("somechannel")
        .name("greet")
        .count(10)
        .build()
        .await?;

    let service = CommandService::new(db);
    let applied = service
        .update_attribute(
            "somechannel",
            "greet",
            CommandUpdate::AdjustCount("5".to_string()),
        )
        .await?;

    assert!(applied);
    assert_eq!(service.get("somechannel", "greet").await?.count, 5);

    Ok(())
}

/// Tests the increment form of a counter update.
///
/// Expected: count 10 with value "+3" becomes 13
#[tokio::test]
async fn counter_update_increments() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::command::CommandFactory::new(db)
        .channel("somechannel")
        .name("greet")
        .count(10)
        .build()
        .await?;

    let service = CommandService::new(db);
    let applied = service
        .update_attribute(
            "somechannel",
            "greet",
            CommandUpdate::AdjustCount("+3".to_string()),
        )
        .await?;

    assert!(applied);
    assert_eq!(service.get("somechannel", "greet").await?.count, 13);

    Ok(())
}

/// Tests the decrement form of a counter update.
///
/// Expected: count 10 with value "-4" becomes 6
#[tokio::test]
async fn counter_update_decrements() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::command::CommandFactory::new(db)
        .channel("somechannel")
        .name("greet")
        .count(10)
        .build()
        .await?;

    let service = CommandService::new(db);
    let applied = service
        .update_attribute(
            "somechannel",
            "greet",
            CommandUpdate::AdjustCount("-4".to_string()),
        )
        .await?;

    assert!(applied);
    assert_eq!(service.get("somechannel", "greet").await?.count, 6);

    Ok(())
}

/// Tests the accepted-no-op policy for malformed counter values.
///
/// The parser rejects "abc", but the engine reports the update as applied
/// and leaves the stored count untouched. This mirrors the platform's
/// historical behavior and is preserved as documented policy.
///
/// Expected: applied true, count unchanged
#[tokio::test]
async fn malformed_counter_value_is_accepted_noop() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::command::CommandFactory::new(db)
        .channel("somechannel")
        .name("greet")
        .count(10)
        .build()
        .await?;

    let service = CommandService::new(db);
    let applied = service
        .update_attribute(
            "somechannel",
            "greet",
            CommandUpdate::AdjustCount("abc".to_string()),
        )
        .await?;

    assert!(applied);
    assert_eq!(service.get("somechannel", "greet").await?.count, 10);

    Ok(())
}

/// Tests that updating a nonexistent command reports not found.
///
/// Expected: Err(NotFound), storage untouched
#[tokio::test]
async fn update_of_missing_command_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let service = CommandService::new(db);
    let result = service
        .update_attribute(
            "somechannel",
            "ghost",
            CommandUpdate::SetEnabled(false),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.list("somechannel").await?.is_empty());

    Ok(())
}

/// Tests that a soft-deleted command is invisible to the engine.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn update_of_soft_deleted_command_is_not_found() -> Result<(), AppError> {
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

    let result = CommandService::new(db)
        .update_attribute(
            "somechannel",
            "greet",
            CommandUpdate::AdjustCount("+1".to_string()),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a role update replaces only the role restriction.
///
/// Expected: restrictions.role changed, restrictions.service untouched
#[tokio::test]
async fn role_update_leaves_service_restriction_untouched() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::command::CommandFactory::new(db)
        .channel("somechannel")
        .name("greet")
        .services(serde_json::json!(["twitch", "mixer"]))
        .role("user")
        .build()
        .await?;

    let service = CommandService::new(db);
    let applied = service
        .update_attribute(
            "somechannel",
            "greet",
            CommandUpdate::SetRole(Role::Moderator),
        )
        .await?;
    assert!(applied);

    let command = service.get("somechannel", "greet").await?;
    assert_eq!(command.restrictions.role, Role::Moderator);
    assert_eq!(command.restrictions.service, vec!["twitch", "mixer"]);

    Ok(())
}

/// Tests that a service update replaces only the service restriction.
///
/// Expected: restrictions.service changed, restrictions.role untouched
#[tokio::test]
async fn service_update_leaves_role_restriction_untouched() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::command::CommandFactory::new(db)
        .channel("somechannel")
        .name("greet")
        .role("owner")
        .build()
        .await?;

    let service = CommandService::new(db);
    service
        .update_attribute(
            "somechannel",
            "greet",
            CommandUpdate::SetService(vec!["twitch".to_string()]),
        )
        .await?;

    let command = service.get("somechannel", "greet").await?;
    assert_eq!(command.restrictions.service, vec!["twitch"]);
    assert_eq!(command.restrictions.role, Role::Owner);

    Ok(())
}

/// Tests renaming a command within its channel.
///
/// Expected: reachable under the new name, gone under the old
#[tokio::test]
async fn rename_moves_command_to_new_name() -> Result<(), AppError> {
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

    let service = CommandService::new(db);
    let applied = service
        .update_attribute(
            "somechannel",
            "greet",
            CommandUpdate::SetName("welcome".to_string()),
        )
        .await?;
    assert!(applied);

    assert!(service.get("somechannel", "welcome").await.is_ok());
    assert!(matches!(
        service.get("somechannel", "greet").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests replacing the response components wholesale.
#[tokio::test]
async fn response_update_replaces_components() -> Result<(), AppError> {
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

    let replacement = vec![
        MessageComponent {
            kind: "text".to_string(),
            data: "Welcome to the channel, ".to_string(),
        },
        MessageComponent {
            kind: "variable".to_string(),
            data: "USER".to_string(),
        },
    ];

    let service = CommandService::new(db);
    service
        .update_attribute(
            "somechannel",
            "greet",
            CommandUpdate::SetResponse(replacement.clone()),
        )
        .await?;

    assert_eq!(
        service.get("somechannel", "greet").await?.response,
        replacement
    );

    Ok(())
}

/// Tests that creating a command then reading it back round-trips.
///
/// Expected: identical records, including the storage-assigned id
#[tokio::test]
async fn create_then_read_round_trips() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let service = CommandService::new(db);
    let created = service.create(sample_params("somechannel", "greet")).await?;
    let fetched = service.get("somechannel", "greet").await?;

    assert_eq!(created, fetched);
    assert_eq!(fetched.count, 0);
    assert!(fetched.enabled);

    Ok(())
}

/// Tests that creating over an active command conflicts.
///
/// Expected: Err(Conflict), original record intact
#[tokio::test]
async fn create_conflicts_with_active_command() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let service = CommandService::new(db);
    service.create(sample_params("somechannel", "greet")).await?;

    let result = service.create(sample_params("somechannel", "greet")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.list("somechannel").await?.len(), 1);

    Ok(())
}

/// Tests that the same name in another channel is no conflict.
#[tokio::test]
async fn same_name_in_other_channel_does_not_conflict() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let service = CommandService::new(db);
    service.create(sample_params("somechannel", "greet")).await?;
    service.create(sample_params("otherchannel", "greet")).await?;

    assert_eq!(service.list("somechannel").await?.len(), 1);
    assert_eq!(service.list("otherchannel").await?.len(), 1);

    Ok(())
}

/// Tests that creation replaces a soft-deleted remnant under the key.
///
/// Expected: fresh record with a zero counter, exactly one record listed
#[tokio::test]
async fn create_replaces_soft_deleted_remnant() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::command::CommandFactory::new(db)
        .channel("somechannel")
        .name("greet")
        .count(42)
        .deleted_at(chrono::Utc::now())
        .build()
        .await?;

    let service = CommandService::new(db);
    let created = service.create(sample_params("somechannel", "greet")).await?;

    assert_eq!(created.count, 0);
    assert_eq!(service.list("somechannel").await?.len(), 1);

    Ok(())
}

/// Tests that deletion hides a command and is reported once.
///
/// Expected: get returns NotFound after deletion, second delete too
#[tokio::test]
async fn delete_hides_command() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let service = CommandService::new(db);
    service.create(sample_params("somechannel", "greet")).await?;

    service.delete("somechannel", "greet").await?;

    assert!(matches!(
        service.get("somechannel", "greet").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete("somechannel", "greet").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
