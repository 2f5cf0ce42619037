//! Post table access.

use chrono::{DateTime, Utc};
use entity::subject::Subject;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

/// Repository for the `post` table.
pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    /// Creates a new instance of [`PostRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a post about `subject`
    ///
    /// The post type is derived from the subject. When `creation_date` is `None` the
    /// current UTC time is used.
    pub async fn create(
        &self,
        user_id: i32,
        description: String,
        subject: Subject,
        creation_date: Option<DateTime<Utc>>,
    ) -> Result<entity::post::Model, DbErr> {
        let (planet_id, character_id) = subject.columns();

        let post = entity::post::ActiveModel {
            description: ActiveValue::Set(description),
            post_type: ActiveValue::Set(subject.post_type()),
            creation_date: ActiveValue::Set(creation_date.unwrap_or_else(Utc::now)),
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        post.insert(self.db).await
    }

    /// Gets a post by ID
    pub async fn get(&self, post_id: i32) -> Result<Option<entity::post::Model>, DbErr> {
        entity::prelude::Post::find_by_id(post_id)
            .one(self.db)
            .await
    }

    /// Posts written by a user, newest first
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<entity::post::Model>, DbErr> {
        entity::prelude::Post::find()
            .filter(entity::post::Column::UserId.eq(user_id))
            .order_by_desc(entity::post::Column::CreationDate)
            .order_by_desc(entity::post::Column::Id)
            .all(self.db)
            .await
    }

    /// Posts about a planet or character, newest first
    pub async fn get_by_subject(&self, subject: Subject) -> Result<Vec<entity::post::Model>, DbErr> {
        let condition = match subject {
            Subject::Planet(id) => entity::post::Column::PlanetId.eq(id),
            Subject::Character(id) => entity::post::Column::CharacterId.eq(id),
        };

        entity::prelude::Post::find()
            .filter(condition)
            .order_by_desc(entity::post::Column::CreationDate)
            .order_by_desc(entity::post::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the description of a post
    ///
    /// Returns `Ok(None)` when the post does not exist.
    pub async fn update_description(
        &self,
        post_id: i32,
        description: String,
    ) -> Result<Option<entity::post::Model>, DbErr> {
        let post = match self.get(post_id).await? {
            Some(post) => post,
            None => return Ok(None),
        };

        let mut post_am = post.into_active_model();
        post_am.description = ActiveValue::Set(description);

        let post = post_am.update(self.db).await?;

        Ok(Some(post))
    }

    /// Deletes a post
    ///
    /// Returns OK regardless of post existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, post_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Post::delete_by_id(post_id)
            .exec(self.db)
            .await
    }
}
