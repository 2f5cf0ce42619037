//! Media table access.

use entity::subject::Subject;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

/// Repository for the `media` table.
pub struct MediaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MediaRepository<'a, C> {
    /// Creates a new instance of [`MediaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Attaches a media URL to a planet or character
    pub async fn create(&self, url: String, subject: Subject) -> Result<entity::media::Model, DbErr> {
        let (planet_id, character_id) = subject.columns();

        let media = entity::media::ActiveModel {
            url: ActiveValue::Set(url),
            planet_id: ActiveValue::Set(planet_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        media.insert(self.db).await
    }

    /// Gets a media attachment by ID
    pub async fn get(&self, media_id: i32) -> Result<Option<entity::media::Model>, DbErr> {
        entity::prelude::Media::find_by_id(media_id)
            .one(self.db)
            .await
    }

    /// Media attached to a planet or character, in insertion order
    pub async fn get_by_subject(
        &self,
        subject: Subject,
    ) -> Result<Vec<entity::media::Model>, DbErr> {
        let condition = match subject {
            Subject::Planet(id) => entity::media::Column::PlanetId.eq(id),
            Subject::Character(id) => entity::media::Column::CharacterId.eq(id),
        };

        entity::prelude::Media::find()
            .filter(condition)
            .order_by_asc(entity::media::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a media attachment
    ///
    /// Returns OK regardless of the row existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, media_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Media::delete_by_id(media_id)
            .exec(self.db)
            .await
    }
}
