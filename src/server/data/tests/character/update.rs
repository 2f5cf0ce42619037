//! Tests for CharacterRepository::update and CharacterRepository::delete methods.

use super::*;

/// Expect faction and role changes to persist
#[tokio::test]
async fn updates_existing_character() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let character_model = test
        .universe()
        .insert_character_with("Anakin Skywalker", Faction::Republic, Role::Hero)
        .await?;

    let repo = CharacterRepository::new(&test.db);
    let result = repo
        .update(
            character_model.id,
            new_character("Anakin Skywalker", Faction::Empire, Role::Villain),
        )
        .await?;

    let updated = result.expect("character should exist");
    assert_eq!(updated.faction, Faction::Empire);
    assert_eq!(updated.role, Role::Villain);

    Ok(())
}

/// Expect Ok(None) for a character that does not exist
#[tokio::test]
async fn returns_none_for_nonexistent_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let repo = CharacterRepository::new(&test.db);
    let result = repo
        .update(1, new_character("Rey", Faction::Resistance, Role::Hero))
        .await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect the character to be removed
#[tokio::test]
async fn deletes_existing_character() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let character_model = test.universe().insert_character("Rey").await?;

    let repo = CharacterRepository::new(&test.db);
    let result = repo.delete(character_model.id).await?;

    assert_eq!(result.rows_affected, 1);
    assert!(repo.get(character_model.id).await?.is_none());

    Ok(())
}
