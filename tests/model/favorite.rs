use entity::sea_orm_active_enums::{Faction, Role};
use holonet::model::favorite::FavoriteDto;
use holonet_test_utils::prelude::*;
use serde_json::json;

/// Expect the planet nested in place and the character null
#[test]
fn nests_planet() {
    let favorite = factory::mock_favorite_model(1, 2, Some(3), None);
    let planet = factory::mock_planet_model(3, "Hoth");

    let value = serde_json::to_value(FavoriteDto::from_models(favorite, Some(planet), None)).unwrap();

    assert_eq!(
        value,
        json!({
            "id": 1,
            "user_id": 2,
            "planet": {
                "id": 3,
                "name": "Hoth",
                "size": 10465.0,
                "inhabited": true,
                "distance": 43000.0,
            },
            "character": null,
        })
    );
}

#[test]
fn nests_character() {
    let favorite = factory::mock_favorite_model(1, 2, None, Some(4));
    let character = factory::mock_character_model(4, "Darth Vader", Faction::Empire, Role::Villain);

    let value =
        serde_json::to_value(FavoriteDto::from_models(favorite, None, Some(character))).unwrap();

    assert_eq!(value["planet"], serde_json::Value::Null);
    assert_eq!(value["character"]["faction"], "Galactic Empire");
    assert_eq!(value["character"]["type"], "Villain");
}

/// Expect both associations null when neither is set
#[test]
fn unset_favorite_has_null_associations() {
    let favorite = factory::mock_favorite_model(1, 2, None, None);

    let value = serde_json::to_value(FavoriteDto::from_models(favorite, None, None)).unwrap();

    assert_eq!(
        value,
        json!({ "id": 1, "user_id": 2, "planet": null, "character": null })
    );
}
