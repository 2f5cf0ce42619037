use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDto {
    pub id: i32,
    pub url: String,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

impl From<entity::media::Model> for MediaDto {
    fn from(media: entity::media::Model) -> Self {
        Self {
            id: media.id,
            url: media.url,
            planet_id: media.planet_id,
            character_id: media.character_id,
        }
    }
}
