use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000003_planet::Planet, m20261019_000004_character::Character};

static FK_MEDIA_PLANET_ID: &str = "fk_media_planet_id";
static FK_MEDIA_CHARACTER_ID: &str = "fk_media_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(pk_auto(Media::Id))
                    .col(string(Media::Url))
                    .col(integer_null(Media::PlanetId))
                    .col(integer_null(Media::CharacterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MEDIA_PLANET_ID)
                            .from(Media::Table, Media::PlanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MEDIA_CHARACTER_ID)
                            .from(Media::Table, Media::CharacterId)
                            .to(Character::Table, Character::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
    Url,
    PlanetId,
    CharacterId,
}
