use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::{auth::AuthError, AppError},
    service::user::UserService,
    session::scopes,
};

/// Tests that user creation hashes the password and grants default scopes.
///
/// Expected: stored hash differs from the cleartext, scopes are the
/// standard set
#[tokio::test]
async fn create_hashes_password_and_defaults_scopes() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let service = UserService::new(db);
    let user = service.create("somebody", "hunter2", None).await?;

    assert_ne!(user.password_hash, "hunter2");
    assert_eq!(user.scopes, scopes::default_scopes());

    Ok(())
}

/// Tests that explicitly requested scopes are stored verbatim.
#[tokio::test]
async fn create_stores_requested_scopes() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let requested = vec![scopes::COMMAND_EDIT.to_string()];
    let user = UserService::new(db)
        .create("somebody", "hunter2", Some(requested.clone()))
        .await?;

    assert_eq!(user.scopes, requested);

    Ok(())
}

/// Tests that creating a user over an existing username conflicts.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn create_conflicts_with_existing_username() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let service = UserService::new(db);
    service.create("somebody", "hunter2", None).await?;

    let result = service.create("somebody", "other", None).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a soft-deleted username stays reserved.
///
/// Expected: Err(Conflict) even though the account is deleted
#[tokio::test]
async fn soft_deleted_username_stays_reserved() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::user::UserFactory::new(db)
        .username("somebody")
        .deleted_at(chrono::Utc::now())
        .build()
        .await?;

    let result = UserService::new(db).create("somebody", "hunter2", None).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a successful login verification.
///
/// Expected: Ok with the stored account
#[tokio::test]
async fn verify_login_accepts_correct_password() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let service = UserService::new(db);
    service.create("somebody", "hunter2", None).await?;

    let user = service.verify_login("somebody", "hunter2").await?;

    assert_eq!(user.username, "somebody");

    Ok(())
}

/// Tests that a wrong password fails login verification.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn verify_login_rejects_wrong_password() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let service = UserService::new(db);
    service.create("somebody", "hunter2", None).await?;

    let result = service.verify_login("somebody", "hunter3").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that an unknown username fails the same way as a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials), not a NotFound leak
#[tokio::test]
async fn verify_login_does_not_leak_unknown_usernames() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let result = UserService::new(db).verify_login("nobody", "hunter2").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that a deleted account can no longer log in or be fetched.
///
/// Expected: InvalidCredentials on login, NotFound on get
#[tokio::test]
async fn deleted_account_cannot_log_in() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let service = UserService::new(db);
    service.create("somebody", "hunter2", None).await?;
    service.delete("somebody").await?;

    assert!(matches!(
        service.verify_login("somebody", "hunter2").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.get("somebody").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that deleting a missing user reports not found.
#[tokio::test]
async fn delete_of_missing_user_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let result = UserService::new(db).delete("nobody").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
