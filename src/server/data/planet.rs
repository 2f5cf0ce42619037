//! Planet table access.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

/// Column values for creating or replacing a planet.
pub struct NewPlanet {
    /// Unique planet name.
    pub name: String,
    /// Diameter.
    pub size: f64,
    /// Whether the planet has inhabitants.
    pub inhabited: bool,
    /// Distance from the galactic core.
    pub distance: f64,
}

/// Repository for the `planet` table.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet, failing if the name is already taken
    pub async fn create(&self, planet: NewPlanet) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            size: ActiveValue::Set(planet.size),
            inhabited: ActiveValue::Set(planet.inhabited),
            distance: ActiveValue::Set(planet.distance),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Gets a planet by ID
    pub async fn get(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// All planets ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Name)
            .all(self.db)
            .await
    }

    /// Replaces every column of an existing planet
    ///
    /// Returns `Ok(None)` when the planet does not exist.
    pub async fn update(
        &self,
        planet_id: i32,
        planet: NewPlanet,
    ) -> Result<Option<entity::planet::Model>, DbErr> {
        let existing = match self.get(planet_id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut planet_am = existing.into_active_model();
        planet_am.name = ActiveValue::Set(planet.name);
        planet_am.size = ActiveValue::Set(planet.size);
        planet_am.inhabited = ActiveValue::Set(planet.inhabited);
        planet_am.distance = ActiveValue::Set(planet.distance);

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Dependent posts, media and favorites are not removed; while any exist the delete
    /// fails with a foreign key violation.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
