//! Enumerated columns. Each variant is persisted as its string label.

use sea_orm::entity::prelude::*;

/// Discriminator of a post, matching the subject it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PostType {
    #[sea_orm(string_value = "Character Post")]
    Character,
    #[sea_orm(string_value = "Planet Post")]
    Planet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Faction {
    #[sea_orm(string_value = "Galactic Republic")]
    Republic,
    #[sea_orm(string_value = "Separatists (CIS)")]
    Separatists,
    #[sea_orm(string_value = "Galactic Empire")]
    Empire,
    #[sea_orm(string_value = "Rebel Alliance")]
    Rebels,
    #[sea_orm(string_value = "First Order")]
    FirstOrder,
    #[sea_orm(string_value = "Resistance")]
    Resistance,
}

/// Narrative role of a character, stored in the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Role {
    #[sea_orm(string_value = "Villain")]
    Villain,
    #[sea_orm(string_value = "Anti-hero")]
    Antihero,
    #[sea_orm(string_value = "Hero")]
    Hero,
    #[sea_orm(string_value = "Neutral")]
    Neutral,
}
