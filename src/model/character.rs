use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: i32,
    pub fullname: String,
    pub age: i32,
    pub faction: String,
    #[serde(rename = "type")]
    pub role: String,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            fullname: character.fullname,
            age: character.age,
            faction: character.faction.to_value(),
            role: character.role.to_value(),
        }
    }
}
