use sea_orm_migration::{prelude::*, schema::*};

static FACTIONS: [&str; 6] = [
    "Galactic Republic",
    "Separatists (CIS)",
    "Galactic Empire",
    "Rebel Alliance",
    "First Order",
    "Resistance",
];
static ROLES: [&str; 4] = ["Villain", "Anti-hero", "Hero", "Neutral"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_uniq(Character::Fullname))
                    .col(integer(Character::Age))
                    .col(
                        string(Character::Faction)
                            .check(Expr::col(Character::Faction).is_in(FACTIONS)),
                    )
                    .col(string(Character::Type).check(Expr::col(Character::Type).is_in(ROLES)))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Fullname,
    Age,
    Faction,
    Type,
}
