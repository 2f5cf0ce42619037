//! Post, media, favorite and follower fixture utilities.
//!
//! Every helper takes an [`Subject`], so fixtures always satisfy the single-subject guard.

use chrono::Utc;
use entity::subject::Subject;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

impl TestContext {
    /// Access post, media, favorite and follower fixture helpers.
    pub fn social<'a>(&'a mut self) -> SocialFixtures<'a> {
        SocialFixtures { setup: self }
    }
}

pub struct SocialFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> SocialFixtures<'a> {
    /// Insert a post by `user_id` about `subject`, created now.
    pub async fn insert_post(
        &self,
        user_id: i32,
        subject: Subject,
    ) -> Result<entity::post::Model, TestError> {
        let (planet_id, character_id) = subject.columns();

        let post = entity::post::ActiveModel {
            description: ActiveValue::Set("Test post".to_string()),
            post_type: ActiveValue::Set(subject.post_type()),
            creation_date: ActiveValue::Set(Utc::now()),
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        Ok(post.insert(&self.setup.db).await?)
    }

    pub async fn insert_media(&self, subject: Subject) -> Result<entity::media::Model, TestError> {
        let (planet_id, character_id) = subject.columns();

        let media = entity::media::ActiveModel {
            url: ActiveValue::Set("https://images.holonet.test/test.png".to_string()),
            planet_id: ActiveValue::Set(planet_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        Ok(media.insert(&self.setup.db).await?)
    }

    pub async fn insert_favorite(
        &self,
        user_id: i32,
        subject: Subject,
    ) -> Result<entity::favorite::Model, TestError> {
        let (planet_id, character_id) = subject.columns();

        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        Ok(favorite.insert(&self.setup.db).await?)
    }

    /// Insert a follow edge from `user_from_id` to `user_to_id`.
    pub async fn insert_follow(
        &self,
        user_from_id: i32,
        user_to_id: i32,
    ) -> Result<entity::follower::Model, TestError> {
        let follower = entity::follower::ActiveModel {
            user_from_id: ActiveValue::Set(user_from_id),
            user_to_id: ActiveValue::Set(user_to_id),
        };

        Ok(follower.insert(&self.setup.db).await?)
    }
}
