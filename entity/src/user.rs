use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    /// bcrypt hash of the user's password, never the plaintext.
    pub password: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

/// Users following a given user, joined through `follower.user_to_id`.
#[derive(Debug)]
pub struct Followers;

impl Linked for Followers {
    type FromEntity = Entity;
    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::follower::Relation::UserTo.def().rev(),
            super::follower::Relation::UserFrom.def(),
        ]
    }
}

/// Users a given user follows, joined through `follower.user_from_id`.
#[derive(Debug)]
pub struct Following;

impl Linked for Following {
    type FromEntity = Entity;
    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::follower::Relation::UserFrom.def().rev(),
            super::follower::Relation::UserTo.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}
