//! User fixture utilities.

use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    constant::{TEST_EMAIL_DOMAIN, TEST_PASSWORD, TEST_PASSWORD_HASH_COST},
    error::TestError,
    TestContext,
};

impl TestContext {
    /// Access user fixture helpers.
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password is [`TEST_PASSWORD`].
    ///
    /// The email is derived from the username, so distinct usernames never collide.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted user
    /// - `Err(TestError::DbErr)` - The user table is missing or the username is taken
    pub async fn insert_user(&self, username: &str) -> Result<entity::user::Model, TestError> {
        let password_hash = bcrypt::hash(TEST_PASSWORD, TEST_PASSWORD_HASH_COST)?;

        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password: ActiveValue::Set(password_hash),
            firstname: ActiveValue::Set(Some("Test".to_string())),
            lastname: ActiveValue::Set(Some(username.to_string())),
            email: ActiveValue::Set(format!("{username}@{TEST_EMAIL_DOMAIN}")),
            ..Default::default()
        };

        Ok(user.insert(&self.setup.db).await?)
    }
}
