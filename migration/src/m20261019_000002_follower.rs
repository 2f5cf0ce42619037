use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_user::User;

static IDX_FOLLOWER_USER_TO_ID: &str = "idx_follower_user_to_id";
static FK_FOLLOWER_USER_FROM_ID: &str = "fk_follower_user_from_id";
static FK_FOLLOWER_USER_TO_ID: &str = "fk_follower_user_to_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Follower::Table)
                    .if_not_exists()
                    .col(integer(Follower::UserFromId))
                    .col(integer(Follower::UserToId))
                    .primary_key(
                        Index::create()
                            .col(Follower::UserFromId)
                            .col(Follower::UserToId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FOLLOWER_USER_FROM_ID)
                            .from(Follower::Table, Follower::UserFromId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FOLLOWER_USER_TO_ID)
                            .from(Follower::Table, Follower::UserToId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // The primary key already covers lookups by user_from_id
        manager
            .create_index(
                Index::create()
                    .name(IDX_FOLLOWER_USER_TO_ID)
                    .table(Follower::Table)
                    .col(Follower::UserToId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dropping the table drops its index and foreign keys
        manager
            .drop_table(Table::drop().table(Follower::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Follower {
    Table,
    UserFromId,
    UserToId,
}
