use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000001_user::User, m20261019_000003_planet::Planet,
    m20261019_000004_character::Character,
};

static POST_TYPES: [&str; 2] = ["Character Post", "Planet Post"];

static IDX_POST_USER_ID: &str = "idx_post_user_id";
static FK_POST_USER_ID: &str = "fk_post_user_id";
static FK_POST_PLANET_ID: &str = "fk_post_planet_id";
static FK_POST_CHARACTER_ID: &str = "fk_post_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk_auto(Post::Id))
                    .col(string(Post::Description))
                    .col(string(Post::Type).check(Expr::col(Post::Type).is_in(POST_TYPES)))
                    .col(
                        timestamp_with_time_zone(Post::CreationDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(integer(Post::UserId))
                    .col(integer_null(Post::PlanetId))
                    .col(integer_null(Post::CharacterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POST_USER_ID)
                            .from(Post::Table, Post::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POST_PLANET_ID)
                            .from(Post::Table, Post::PlanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POST_CHARACTER_ID)
                            .from(Post::Table, Post::CharacterId)
                            .to(Character::Table, Character::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POST_USER_ID)
                    .table(Post::Table)
                    .col(Post::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Post {
    Table,
    Id,
    Description,
    Type,
    CreationDate,
    UserId,
    PlanetId,
    CharacterId,
}
