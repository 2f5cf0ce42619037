use sea_orm::{entity::prelude::*, ActiveValue};

use super::subject::{current, ensure_single_subject, resolve};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub url: String,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::character::Entity",
        from = "Column::CharacterId",
        to = "super::character::Column::Id"
    )]
    Character,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let partial = matches!(self.planet_id, ActiveValue::NotSet)
            || matches!(self.character_id, ActiveValue::NotSet);
        let stored = match current(&self.id) {
            Some(id) if !insert && partial => Entity::find_by_id(id).one(db).await?,
            _ => None,
        };

        let planet_id = resolve(&self.planet_id, stored.as_ref().map(|row| row.planet_id));
        let character_id = resolve(&self.character_id, stored.map(|row| row.character_id));
        ensure_single_subject("media", planet_id.flatten(), character_id.flatten())?;

        Ok(self)
    }
}
