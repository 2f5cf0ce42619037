//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating database models with standard test values. These are
//! in-memory model instances that don't require database interaction, suitable for unit tests
//! of serialization.

use chrono::{DateTime, TimeZone, Utc};
use entity::{
    sea_orm_active_enums::{Faction, PostType, Role},
    subject::Subject,
};

/// Fixed timestamp used by factory models: 2024-05-04T12:00:00Z.
pub fn mock_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap()
}

/// Create a mock user model. The stored password is an opaque placeholder hash.
pub fn mock_user_model(id: i32, username: &str) -> entity::user::Model {
    entity::user::Model {
        id,
        username: username.to_string(),
        password: "$2b$04$placeholderplaceholderplaceholderplaceholderplacehold".to_string(),
        firstname: Some("Test".to_string()),
        lastname: Some(username.to_string()),
        email: format!("{username}@holonet.test"),
    }
}

pub fn mock_follower_model(user_from_id: i32, user_to_id: i32) -> entity::follower::Model {
    entity::follower::Model {
        user_from_id,
        user_to_id,
    }
}

pub fn mock_planet_model(id: i32, name: &str) -> entity::planet::Model {
    entity::planet::Model {
        id,
        name: name.to_string(),
        size: 10465.0,
        inhabited: true,
        distance: 43000.0,
    }
}

pub fn mock_character_model(
    id: i32,
    fullname: &str,
    faction: Faction,
    role: Role,
) -> entity::character::Model {
    entity::character::Model {
        id,
        fullname: fullname.to_string(),
        age: 19,
        faction,
        role,
    }
}

/// Create a mock post about `subject`, with the post type matching the subject.
pub fn mock_post_model(id: i32, user_id: i32, subject: Subject) -> entity::post::Model {
    let (planet_id, character_id) = subject.columns();
    let post_type: PostType = subject.post_type();

    entity::post::Model {
        id,
        description: "Test post".to_string(),
        post_type,
        creation_date: mock_timestamp(),
        user_id,
        planet_id,
        character_id,
    }
}

pub fn mock_media_model(id: i32, subject: Subject) -> entity::media::Model {
    let (planet_id, character_id) = subject.columns();

    entity::media::Model {
        id,
        url: "https://images.holonet.test/test.png".to_string(),
        planet_id,
        character_id,
    }
}

/// Create a mock favorite. Both references may be `None` to model an unset favorite.
pub fn mock_favorite_model(
    id: i32,
    user_id: i32,
    planet_id: Option<i32>,
    character_id: Option<i32>,
) -> entity::favorite::Model {
    entity::favorite::Model {
        id,
        user_id,
        planet_id,
        character_id,
    }
}
