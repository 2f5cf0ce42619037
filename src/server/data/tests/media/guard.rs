//! Tests for the single-subject guard on partial media updates.

use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};

use super::*;

/// Expect a partial update that only sets the url to succeed
#[tokio::test]
async fn accepts_partial_url_update() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let planet_model = test.universe().insert_planet("Mustafar").await?;
    let media_model = test
        .social()
        .insert_media(Subject::Planet(planet_model.id))
        .await?;

    let media = entity::media::ActiveModel {
        id: ActiveValue::Unchanged(media_model.id),
        url: ActiveValue::Set("https://images.holonet.test/lava.png".to_string()),
        ..Default::default()
    };
    let updated = media.update(&test.db).await?;

    assert_eq!(updated.url, "https://images.holonet.test/lava.png");
    assert_eq!(updated.planet_id, Some(planet_model.id));

    Ok(())
}

/// Expect Error when a partial update adds a character to planet media
#[tokio::test]
async fn rejects_partial_update_adding_second_subject() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let planet_model = test.universe().insert_planet("Mustafar").await?;
    let character_model = test.universe().insert_character("Obi-Wan Kenobi").await?;
    let media_model = test
        .social()
        .insert_media(Subject::Planet(planet_model.id))
        .await?;

    let media = entity::media::ActiveModel {
        id: ActiveValue::Unchanged(media_model.id),
        character_id: ActiveValue::Set(Some(character_model.id)),
        ..Default::default()
    };
    let result = media.update(&test.db).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    let repo = MediaRepository::new(&test.db);
    let stored = repo.get(media_model.id).await?.expect("media should exist");
    assert_eq!(stored.character_id, None);

    Ok(())
}
