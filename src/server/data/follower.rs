//! Follower edge access.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    ModelTrait,
};

/// Repository for the `follower` edge table.
pub struct FollowerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FollowerRepository<'a, C> {
    /// Creates a new instance of [`FollowerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records that `user_from_id` follows `user_to_id`
    ///
    /// Following the same user twice fails with a primary key violation.
    pub async fn follow(
        &self,
        user_from_id: i32,
        user_to_id: i32,
    ) -> Result<entity::follower::Model, DbErr> {
        let follower = entity::follower::ActiveModel {
            user_from_id: ActiveValue::Set(user_from_id),
            user_to_id: ActiveValue::Set(user_to_id),
        };

        follower.insert(self.db).await
    }

    /// Removes a follow edge
    ///
    /// Returns OK regardless of the edge existing, check [`DeleteResult::rows_affected`].
    pub async fn unfollow(&self, user_from_id: i32, user_to_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Follower::delete_by_id((user_from_id, user_to_id))
            .exec(self.db)
            .await
    }

    /// Users who follow `user_id`
    pub async fn get_followers(&self, user_id: i32) -> Result<Vec<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id).one(self.db).await? {
            Some(user) => user,
            None => return Ok(Vec::new()),
        };

        user.find_linked(entity::user::Followers).all(self.db).await
    }

    /// Users that `user_id` follows
    pub async fn get_following(&self, user_id: i32) -> Result<Vec<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id).one(self.db).await? {
            Some(user) => user,
            None => return Ok(Vec::new()),
        };

        user.find_linked(entity::user::Following).all(self.db).await
    }
}
