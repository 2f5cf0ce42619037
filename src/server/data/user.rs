//! User table access.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

/// Column values for a new user. `password_hash` must already be hashed.
pub struct NewUser {
    /// Unique login name.
    pub username: String,
    /// bcrypt hash of the password.
    pub password_hash: String,
    /// Optional given name.
    pub firstname: Option<String>,
    /// Optional family name.
    pub lastname: Option<String>,
    /// Unique email address.
    pub email: String,
}

/// Editable profile fields of an existing user.
pub struct UserProfile {
    /// Replacement given name.
    pub firstname: Option<String>,
    /// Replacement family name.
    pub lastname: Option<String>,
    /// Replacement email, still unique across users.
    pub email: String,
}

/// Repository for the `user` table.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// Fails with a unique constraint violation when the username or email is taken.
    pub async fn create(&self, new_user: NewUser) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(new_user.username),
            password: ActiveValue::Set(new_user.password_hash),
            firstname: ActiveValue::Set(new_user.firstname),
            lastname: ActiveValue::Set(new_user.lastname),
            email: ActiveValue::Set(new_user.email),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user by ID
    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets a user by exact username
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Replaces a user's profile fields
    ///
    /// Returns `Ok(None)` when the user does not exist.
    pub async fn update_profile(
        &self,
        user_id: i32,
        profile: UserProfile,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match self.get(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.firstname = ActiveValue::Set(profile.firstname);
        user_am.lastname = ActiveValue::Set(profile.lastname);
        user_am.email = ActiveValue::Set(profile.email);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Stores a new password hash for a user
    ///
    /// Returns `Ok(None)` when the user does not exist.
    pub async fn update_password(
        &self,
        user_id: i32,
        password_hash: String,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match self.get(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.password = ActiveValue::Set(password_hash);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
