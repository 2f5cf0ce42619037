//! Tests for FollowerRepository::get_followers and FollowerRepository::get_following methods.

use super::*;

/// Expect followers and followed users to resolve in the correct direction
#[tokio::test]
async fn resolves_both_directions() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let luke = test.user().insert_user("luke").await?;
    let leia = test.user().insert_user("leia").await?;
    let han = test.user().insert_user("han").await?;
    // luke -> leia, han -> leia, leia -> han
    test.social().insert_follow(luke.id, leia.id).await?;
    test.social().insert_follow(han.id, leia.id).await?;
    test.social().insert_follow(leia.id, han.id).await?;

    let repo = FollowerRepository::new(&test.db);

    let mut followers: Vec<String> = repo
        .get_followers(leia.id)
        .await?
        .into_iter()
        .map(|user| user.username)
        .collect();
    followers.sort();
    assert_eq!(followers, vec!["han".to_string(), "luke".to_string()]);

    let following: Vec<String> = repo
        .get_following(leia.id)
        .await?
        .into_iter()
        .map(|user| user.username)
        .collect();
    assert_eq!(following, vec!["han".to_string()]);

    let luke_followers = repo.get_followers(luke.id).await?;
    assert!(luke_followers.is_empty());

    Ok(())
}

/// Expect an empty list for a user that does not exist
#[tokio::test]
async fn returns_empty_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let repo = FollowerRepository::new(&test.db);

    assert!(repo.get_followers(1).await?.is_empty());
    assert!(repo.get_following(1).await?.is_empty());

    Ok(())
}
