//! Tests for PlanetRepository::create and PlanetRepository::get_all methods.

use super::*;

/// Expect every column to round-trip through the database
#[tokio::test]
async fn creates_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let repo = PlanetRepository::new(&test.db);
    let planet = repo.create(new_planet("Hoth")).await?;

    let stored = repo.get(planet.id).await?.expect("planet should exist");
    assert_eq!(stored.name, "Hoth");
    assert_eq!(stored.size, 7200.0);
    assert!(!stored.inhabited);
    assert_eq!(stored.distance, 1250.5);

    Ok(())
}

/// Expect Error when a planet name is reused
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_planet("Hoth")
        .build()
        .await?;

    let repo = PlanetRepository::new(&test.db);
    let result = repo.create(new_planet("Hoth")).await;

    assert!(result.is_err());

    Ok(())
}

/// Expect planets ordered by name
#[tokio::test]
async fn lists_planets_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_planet("Tatooine")
        .with_mock_planet("Dagobah")
        .with_mock_planet("Naboo")
        .build()
        .await?;

    let repo = PlanetRepository::new(&test.db);
    let names: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|planet| planet.name)
        .collect();

    assert_eq!(names, vec!["Dagobah", "Naboo", "Tatooine"]);

    Ok(())
}
