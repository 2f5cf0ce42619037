//! User account service.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::NewUserDto,
    server::{
        data::user::{NewUser, UserRepository},
        error::{auth::AuthError, Error},
        util::password::{hash_password, verify_password},
    },
};

/// Account operations that involve password hashing.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    password_hash_cost: u32,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection, password_hash_cost: u32) -> Self {
        Self {
            db,
            password_hash_cost,
        }
    }

    /// Registers a user, storing a bcrypt hash of the supplied password
    pub async fn register(&self, new_user: NewUserDto) -> Result<entity::user::Model, Error> {
        let user_repo = UserRepository::new(self.db);

        let password_hash = hash_password(&new_user.password, self.password_hash_cost)?;
        let user = user_repo
            .create(NewUser {
                username: new_user.username,
                password_hash,
                firstname: new_user.firstname,
                lastname: new_user.lastname,
                email: new_user.email,
            })
            .await?;

        tracing::info!(user_id = user.id, "Registered user {}", user.username);

        Ok(user)
    }

    /// Returns the user when `password` matches the stored hash
    ///
    /// # Errors
    /// - [`AuthError::InvalidCredentials`] for an unknown username or a wrong password
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::user::Model, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            // Unknown usernames pay for one bcrypt hash at the configured cost, like a verify
            let _ = hash_password(password, self.password_hash_cost);

            tracing::debug!("Authentication failed for unknown username {}", username);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password)? {
            tracing::debug!(user_id = user.id, "Authentication failed: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Replaces a user's password after verifying the current one
    ///
    /// # Errors
    /// - [`AuthError::UserNotFound`] if the user does not exist
    /// - [`AuthError::InvalidCredentials`] if `current_password` does not verify
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<entity::user::Model, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .get(user_id)
            .await?
            .ok_or(AuthError::UserNotFound(user_id))?;

        if !verify_password(current_password, &user.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let password_hash = hash_password(new_password, self.password_hash_cost)?;
        let user = user_repo
            .update_password(user_id, password_hash)
            .await?
            .ok_or(AuthError::UserNotFound(user_id))?;

        tracing::info!(user_id, "Changed password");

        Ok(user)
    }
}
