use serde::{Deserialize, Serialize};

use crate::model::{character::CharacterDto, planet::PlanetDto};

/// A favorite with its planet and character expanded in place.
///
/// Unlike the other DTOs this one nests related rows instead of exposing raw foreign keys.
/// Whichever association is unset serializes as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub planet: Option<PlanetDto>,
    pub character: Option<CharacterDto>,
}

impl FavoriteDto {
    /// Builds the DTO from a favorite row and its already-loaded associations.
    pub fn from_models(
        favorite: entity::favorite::Model,
        planet: Option<entity::planet::Model>,
        character: Option<entity::character::Model>,
    ) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet: planet.map(PlanetDto::from),
            character: character.map(CharacterDto::from),
        }
    }
}
