pub use super::character::Entity as Character;
pub use super::favorite::Entity as Favorite;
pub use super::follower::Entity as Follower;
pub use super::media::Entity as Media;
pub use super::planet::Entity as Planet;
pub use super::post::Entity as Post;
pub use super::user::Entity as User;
