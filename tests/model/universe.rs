use entity::sea_orm_active_enums::{Faction, Role};
use holonet::model::{character::CharacterDto, planet::PlanetDto};
use holonet_test_utils::prelude::*;
use serde_json::json;

/// Expect faction and role rendered as labels, role under `type`
#[test]
fn character_uses_labels() {
    let character = factory::mock_character_model(1, "Boba Fett", Faction::Separatists, Role::Antihero);

    let value = serde_json::to_value(CharacterDto::from(character)).unwrap();

    assert_eq!(
        value,
        json!({
            "id": 1,
            "fullname": "Boba Fett",
            "age": 19,
            "faction": "Separatists (CIS)",
            "type": "Anti-hero",
        })
    );
}

/// Expect every faction label to survive serialization verbatim
#[test]
fn character_faction_labels() {
    let cases = [
        (Faction::Republic, "Galactic Republic"),
        (Faction::Separatists, "Separatists (CIS)"),
        (Faction::Empire, "Galactic Empire"),
        (Faction::Rebels, "Rebel Alliance"),
        (Faction::FirstOrder, "First Order"),
        (Faction::Resistance, "Resistance"),
    ];

    for (faction, label) in cases {
        let character = factory::mock_character_model(1, "Someone", faction, Role::Neutral);
        let dto = CharacterDto::from(character);
        assert_eq!(dto.faction, label);
    }
}

#[test]
fn planet_serializes_all_fields() {
    let planet = factory::mock_planet_model(1, "Tatooine");

    let value = serde_json::to_value(PlanetDto::from(planet)).unwrap();

    assert_eq!(
        value,
        json!({
            "id": 1,
            "name": "Tatooine",
            "size": 10465.0,
            "inhabited": true,
            "distance": 43000.0,
        })
    );
}
