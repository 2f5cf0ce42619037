//! Tests for FollowerRepository::follow method.

use super::*;

/// Expect the edge to be stored with both user IDs
#[tokio::test]
async fn creates_follow_edge() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let luke = test.user().insert_user("luke").await?;
    let leia = test.user().insert_user("leia").await?;

    let repo = FollowerRepository::new(&test.db);
    let result = repo.follow(luke.id, leia.id).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let edge = result.unwrap();
    assert_eq!(edge.user_from_id, luke.id);
    assert_eq!(edge.user_to_id, leia.id);

    Ok(())
}

/// Expect Error when the identical pair is inserted twice
#[tokio::test]
async fn fails_for_duplicate_edge() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let luke = test.user().insert_user("luke").await?;
    let leia = test.user().insert_user("leia").await?;

    let repo = FollowerRepository::new(&test.db);
    repo.follow(luke.id, leia.id).await?;
    let result = repo.follow(luke.id, leia.id).await;

    assert!(result.is_err());

    Ok(())
}

/// Expect the reverse edge to be a distinct row
#[tokio::test]
async fn allows_reverse_edge() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let luke = test.user().insert_user("luke").await?;
    let leia = test.user().insert_user("leia").await?;

    let repo = FollowerRepository::new(&test.db);
    repo.follow(luke.id, leia.id).await?;
    let result = repo.follow(leia.id, luke.id).await;

    assert!(result.is_ok());

    Ok(())
}

/// Expect Error when following a user that does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let luke = test.user().insert_user("luke").await?;

    let repo = FollowerRepository::new(&test.db);
    let result = repo.follow(luke.id, luke.id + 1).await;

    assert!(result.is_err());

    Ok(())
}
