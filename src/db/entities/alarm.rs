use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "alarm")]
pub struct Model {
    /// UUID v4 text, assigned by `AlarmDao` on insert.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub time: Option<DateTimeWithTimeZone>,
    pub alarm_time: Option<DateTimeWithTimeZone>,
    pub enabled: Option<bool>,
    pub sound: Option<String>,
    pub label: Option<String>,
    pub repeat_days: Option<Date>,
    pub snooze_enabled: Option<bool>,
    pub snooze_duration: Option<i32>,
    #[sea_orm(indexed)]
    pub user_login_id: Option<i64>,
    #[sea_orm(belongs_to, from = "user_login_id", to = "id", on_delete = "SetNull")]
    pub user_login: HasOne<super::user_login::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
