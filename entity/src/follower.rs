use sea_orm::entity::prelude::*;

/// Directed "follows" edge from `user_from_id` to `user_to_id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "follower")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_from_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_to_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserFromId",
        to = "super::user::Column::Id"
    )]
    UserFrom,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserToId",
        to = "super::user::Column::Id"
    )]
    UserTo,
}

impl ActiveModelBehavior for ActiveModel {}
