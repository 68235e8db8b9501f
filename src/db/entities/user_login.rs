use sea_orm::entity::prelude::*;

/// Login credentials owning zero or more alarms.
///
/// `password` is persisted exactly as submitted. It is not hashed.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_login")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
    pub password: String,
    #[sea_orm(has_many)]
    pub alarms: HasMany<super::alarm::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
