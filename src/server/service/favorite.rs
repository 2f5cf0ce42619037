//! Favorite expansion service.

use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::FavoriteDto,
    server::{data::favorite::FavoriteRepository, error::Error},
};

/// Builds favorite DTOs with their planet or character expanded.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a favorite with its planet or character expanded
    pub async fn get_favorite(&self, favorite_id: i32) -> Result<Option<FavoriteDto>, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let favorite = favorite_repo
            .get_with_related(favorite_id)
            .await?
            .map(|(favorite, planet, character)| {
                FavoriteDto::from_models(favorite, planet, character)
            });

        Ok(favorite)
    }

    /// Gets every favorite of a user with planets and characters expanded
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let favorites = favorite_repo
            .get_by_user_with_related(user_id)
            .await?
            .into_iter()
            .map(|(favorite, planet, character)| {
                FavoriteDto::from_models(favorite, planet, character)
            })
            .collect();

        Ok(favorites)
    }
}
