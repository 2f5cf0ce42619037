use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerDto {
    pub user_from_id: i32,
    pub user_to_id: i32,
}

impl From<entity::follower::Model> for FollowerDto {
    fn from(follower: entity::follower::Model) -> Self {
        Self {
            user_from_id: follower.user_from_id,
            user_to_id: follower.user_to_id,
        }
    }
}
