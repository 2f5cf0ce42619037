//! Tests for PostRepository::create method.

use chrono::{TimeZone, Utc};

use super::*;

/// Expect a planet post to carry the planet type and only a planet reference
#[tokio::test]
async fn creates_planet_post() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user_model = test.user().insert_user("luke").await?;
    let planet_model = test.universe().insert_planet("Dagobah").await?;

    let repo = PostRepository::new(&test.db);
    let post = repo
        .create(
            user_model.id,
            "Swampy".to_string(),
            Subject::Planet(planet_model.id),
            None,
        )
        .await?;

    assert_eq!(post.post_type, PostType::Planet);
    assert_eq!(post.planet_id, Some(planet_model.id));
    assert_eq!(post.character_id, None);
    assert_eq!(post.user_id, user_model.id);

    Ok(())
}

/// Expect a character post to carry the character type and only a character reference
#[tokio::test]
async fn creates_character_post() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user_model = test.user().insert_user("luke").await?;
    let character_model = test.universe().insert_character("Yoda").await?;

    let repo = PostRepository::new(&test.db);
    let post = repo
        .create(
            user_model.id,
            "Do or do not".to_string(),
            Subject::Character(character_model.id),
            None,
        )
        .await?;

    assert_eq!(post.post_type, PostType::Character);
    assert_eq!(post.planet_id, None);
    assert_eq!(post.character_id, Some(character_model.id));

    Ok(())
}

/// Expect the creation date to default to the current UTC time
#[tokio::test]
async fn defaults_creation_date_to_now() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user_model = test.user().insert_user("luke").await?;
    let planet_model = test.universe().insert_planet("Dagobah").await?;

    let before = Utc::now();
    let repo = PostRepository::new(&test.db);
    let post = repo
        .create(
            user_model.id,
            "Swampy".to_string(),
            Subject::Planet(planet_model.id),
            None,
        )
        .await?;
    let after = Utc::now();

    assert!(post.creation_date >= before);
    assert!(post.creation_date <= after);

    Ok(())
}

/// Expect an explicit creation date to be kept
#[tokio::test]
async fn keeps_explicit_creation_date() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user_model = test.user().insert_user("luke").await?;
    let planet_model = test.universe().insert_planet("Yavin 4").await?;

    let creation_date = Utc.with_ymd_and_hms(1977, 5, 25, 0, 0, 0).unwrap();
    let repo = PostRepository::new(&test.db);
    let post = repo
        .create(
            user_model.id,
            "Medal ceremony".to_string(),
            Subject::Planet(planet_model.id),
            Some(creation_date),
        )
        .await?;

    assert_eq!(post.creation_date, creation_date);

    Ok(())
}

/// Expect Error when the author does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let planet_model = test.universe().insert_planet("Dagobah").await?;

    let repo = PostRepository::new(&test.db);
    let result = repo
        .create(1, "Orphan".to_string(), Subject::Planet(planet_model.id), None)
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Expect Error when the referenced planet does not exist
#[tokio::test]
async fn fails_for_nonexistent_planet() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user_model = test.user().insert_user("luke").await?;

    let repo = PostRepository::new(&test.db);
    let result = repo
        .create(user_model.id, "Nowhere".to_string(), Subject::Planet(1), None)
        .await;

    assert!(result.is_err());

    Ok(())
}
