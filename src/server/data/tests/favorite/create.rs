//! Tests for FavoriteRepository::create and FavoriteRepository::delete methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};

use super::*;

/// Expect a planet favorite to reference only the planet
#[tokio::test]
async fn creates_planet_favorite() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user_model = test.user().insert_user("han").await?;
    let planet_model = test.universe().insert_planet("Corellia").await?;

    let repo = FavoriteRepository::new(&test.db);
    let favorite = repo
        .create(user_model.id, Subject::Planet(planet_model.id))
        .await?;

    assert_eq!(favorite.user_id, user_model.id);
    assert_eq!(favorite.planet_id, Some(planet_model.id));
    assert_eq!(favorite.character_id, None);

    Ok(())
}

/// Expect Error when a favorite references nothing
#[tokio::test]
async fn rejects_missing_subject() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user_model = test.user().insert_user("han").await?;

    let favorite = entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_model.id),
        planet_id: ActiveValue::Set(None),
        character_id: ActiveValue::Set(None),
        ..Default::default()
    };
    let result = favorite.insert(&test.db).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

/// Expect Error when the user does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let planet_model = test.universe().insert_planet("Corellia").await?;

    let repo = FavoriteRepository::new(&test.db);
    let result = repo.create(1, Subject::Planet(planet_model.id)).await;

    assert!(result.is_err());

    Ok(())
}

/// Expect the favorite to be removed
#[tokio::test]
async fn deletes_favorite() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user_model = test.user().insert_user("han").await?;
    let character_model = test.universe().insert_character("Chewbacca").await?;
    let favorite_model = test
        .social()
        .insert_favorite(user_model.id, Subject::Character(character_model.id))
        .await?;

    let repo = FavoriteRepository::new(&test.db);
    let result = repo.delete(favorite_model.id).await?;

    assert_eq!(result.rows_affected, 1);
    assert!(repo.get(favorite_model.id).await?.is_none());

    Ok(())
}
