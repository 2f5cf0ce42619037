//! Tests for UserService::register method.

use holonet::server::util::password::verify_password;

use super::*;

/// Tests registering a new user.
///
/// Verifies that the stored password column holds a bcrypt hash of the supplied password
/// rather than the plaintext.
///
/// Expected: Ok with a hashed password that verifies
#[tokio::test]
async fn stores_hashed_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let service = UserService::new(&test.db, TEST_PASSWORD_HASH_COST);
    let result = service.register(new_user_dto("rey", TEST_PASSWORD)).await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.username, "rey");
    assert_ne!(user.password, TEST_PASSWORD);
    assert!(user.password.starts_with("$2"));
    assert!(verify_password(TEST_PASSWORD, &user.password).unwrap());

    Ok(())
}

/// Tests registering a username that is already taken.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn fails_for_duplicate_username() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    test.user().insert_user("rey").await?;

    let service = UserService::new(&test.db, TEST_PASSWORD_HASH_COST);
    let mut duplicate = new_user_dto("rey", TEST_PASSWORD);
    duplicate.email = "another@holonet.test".to_string();
    let result = service.register(duplicate).await;

    assert!(result.is_err());

    Ok(())
}
