//! Planet and character fixture utilities.

use entity::sea_orm_active_enums::{Faction, Role};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

impl TestContext {
    /// Access planet and character fixture helpers.
    pub fn universe<'a>(&'a mut self) -> UniverseFixtures<'a> {
        UniverseFixtures { setup: self }
    }
}

pub struct UniverseFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UniverseFixtures<'a> {
    /// Insert an inhabited planet with standard test measurements.
    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            size: ActiveValue::Set(10465.0),
            inhabited: ActiveValue::Set(true),
            distance: ActiveValue::Set(43000.0),
            ..Default::default()
        };

        Ok(planet.insert(&self.setup.db).await?)
    }

    /// Insert a Rebel Alliance hero.
    pub async fn insert_character(
        &self,
        fullname: &str,
    ) -> Result<entity::character::Model, TestError> {
        self.insert_character_with(fullname, Faction::Rebels, Role::Hero)
            .await
    }

    /// Insert a character with a specific faction and role.
    pub async fn insert_character_with(
        &self,
        fullname: &str,
        faction: Faction,
        role: Role,
    ) -> Result<entity::character::Model, TestError> {
        let character = entity::character::ActiveModel {
            fullname: ActiveValue::Set(fullname.to_string()),
            age: ActiveValue::Set(19),
            faction: ActiveValue::Set(faction),
            role: ActiveValue::Set(role),
            ..Default::default()
        };

        Ok(character.insert(&self.setup.db).await?)
    }
}
