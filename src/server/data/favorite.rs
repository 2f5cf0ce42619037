//! Favorite table access.

use std::collections::HashMap;

use entity::subject::Subject;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

/// A favorite row with its planet and character loaded, each `None` when unset.
pub type FavoriteWithRelated = (
    entity::favorite::Model,
    Option<entity::planet::Model>,
    Option<entity::character::Model>,
);

/// Repository for the `favorite` table.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Bookmarks a planet or character for a user
    pub async fn create(
        &self,
        user_id: i32,
        subject: Subject,
    ) -> Result<entity::favorite::Model, DbErr> {
        let (planet_id, character_id) = subject.columns();

        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets a favorite by ID
    pub async fn get(&self, favorite_id: i32) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Gets a favorite together with the planet and character it references
    pub async fn get_with_related(
        &self,
        favorite_id: i32,
    ) -> Result<Option<FavoriteWithRelated>, DbErr> {
        let favorite = match self.get(favorite_id).await? {
            Some(favorite) => favorite,
            None => return Ok(None),
        };

        let (planet, character) = self.load_related(&favorite).await?;

        Ok(Some((favorite, planet, character)))
    }

    /// Gets all of a user's favorites with their planets and characters, in insertion order
    pub async fn get_by_user_with_related(
        &self,
        user_id: i32,
    ) -> Result<Vec<FavoriteWithRelated>, DbErr> {
        let favorites = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .find_also_related(entity::prelude::Planet)
            .all(self.db)
            .await?;

        let character_ids: Vec<i32> = favorites
            .iter()
            .filter_map(|(favorite, _)| favorite.character_id)
            .collect();
        let characters: HashMap<i32, entity::character::Model> = if character_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Character::find()
                .filter(entity::character::Column::Id.is_in(character_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|character| (character.id, character))
                .collect()
        };

        let results = favorites
            .into_iter()
            .map(|(favorite, planet)| {
                let character = favorite
                    .character_id
                    .and_then(|id| characters.get(&id).cloned());
                (favorite, planet, character)
            })
            .collect();

        Ok(results)
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    async fn load_related(
        &self,
        favorite: &entity::favorite::Model,
    ) -> Result<(Option<entity::planet::Model>, Option<entity::character::Model>), DbErr> {
        let planet = match favorite.planet_id {
            Some(planet_id) => {
                entity::prelude::Planet::find_by_id(planet_id)
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        let character = match favorite.character_id {
            Some(character_id) => {
                entity::prelude::Character::find_by_id(character_id)
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        Ok((planet, character))
    }
}
