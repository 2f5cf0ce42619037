use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub size: f64,
    pub inhabited: bool,
    pub distance: f64,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            size: planet.size,
            inhabited: planet.inhabited,
            distance: planet.distance,
        }
    }
}
