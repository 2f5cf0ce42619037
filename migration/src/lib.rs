pub use sea_orm_migration::prelude::*;

mod m20261019_000001_user;
mod m20261019_000002_follower;
mod m20261019_000003_planet;
mod m20261019_000004_character;
mod m20261019_000005_post;
mod m20261019_000006_media;
mod m20261019_000007_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_user::Migration),
            Box::new(m20261019_000002_follower::Migration),
            Box::new(m20261019_000003_planet::Migration),
            Box::new(m20261019_000004_character::Migration),
            Box::new(m20261019_000005_post::Migration),
            Box::new(m20261019_000006_media::Migration),
            Box::new(m20261019_000007_favorite::Migration),
        ]
    }
}
