//! Character table access.

use entity::sea_orm_active_enums::{Faction, Role};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

/// Column values for creating or replacing a character.
pub struct NewCharacter {
    /// Unique full name.
    pub fullname: String,
    /// Age in standard years.
    pub age: i32,
    /// Allegiance, stored as its label.
    pub faction: Faction,
    /// Narrative role, stored in the `type` column.
    pub role: Role,
}

/// Repository for the `character` table.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new character, failing if the full name is already taken
    pub async fn create(&self, character: NewCharacter) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            fullname: ActiveValue::Set(character.fullname),
            age: ActiveValue::Set(character.age),
            faction: ActiveValue::Set(character.faction),
            role: ActiveValue::Set(character.role),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Gets a character by ID
    pub async fn get(&self, character_id: i32) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// All characters ordered by full name
    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Fullname)
            .all(self.db)
            .await
    }

    /// Characters belonging to a faction, ordered by full name
    pub async fn get_by_faction(
        &self,
        faction: Faction,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::Faction.eq(faction))
            .order_by_asc(entity::character::Column::Fullname)
            .all(self.db)
            .await
    }

    /// Replaces every column of an existing character
    ///
    /// Returns `Ok(None)` when the character does not exist.
    pub async fn update(
        &self,
        character_id: i32,
        character: NewCharacter,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        let existing = match self.get(character_id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut character_am = existing.into_active_model();
        character_am.fullname = ActiveValue::Set(character.fullname);
        character_am.age = ActiveValue::Set(character.age);
        character_am.faction = ActiveValue::Set(character.faction);
        character_am.role = ActiveValue::Set(character.role);

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character
    ///
    /// Returns OK regardless of the character existing, check
    /// [`DeleteResult::rows_affected`]. Fails while posts, media or favorites reference it.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
