use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i32,
    pub description: String,
    #[serde(rename = "type")]
    pub post_type: String,
    pub creation_date: DateTime<Utc>,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

impl From<entity::post::Model> for PostDto {
    fn from(post: entity::post::Model) -> Self {
        Self {
            id: post.id,
            description: post.description,
            post_type: post.post_type.to_value(),
            creation_date: post.creation_date,
            user_id: post.user_id,
            planet_id: post.planet_id,
            character_id: post.character_id,
        }
    }
}
