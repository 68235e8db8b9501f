use sea_orm::Order;

use crate::{
    db::dao::AlarmDao,
    db::entities::alarm,
    dto::AlarmDto,
    error::AppError,
    services::{
        crud_service::{CrudColumn, CrudErrors, CrudService},
        user_login_service::UserLoginService,
    },
};

pub const ENTITY_NAME: &str = "alarm";

#[derive(Clone)]
pub struct AlarmService {
    alarm_dao: AlarmDao,
    user_logins: UserLoginService,
}

impl CrudService for AlarmService {
    type Dao = AlarmDao;

    fn dao(&self) -> &Self::Dao {
        &self.alarm_dao
    }

    fn entity_name(&self) -> &'static str {
        ENTITY_NAME
    }

    fn errors(&self) -> CrudErrors {
        CrudErrors {
            create_failed: "Alarm create failed",
            find_failed: "Alarm lookup failed",
            not_found: "Alarm not found",
            update_failed: "Alarm update failed",
            delete_failed: "Alarm delete failed",
        }
    }
}

impl AlarmService {
    pub fn new(alarm_dao: AlarmDao, user_logins: UserLoginService) -> Self {
        Self {
            alarm_dao,
            user_logins,
        }
    }

    /// A referenced login must exist before the alarm row is written.
    async fn require_owner(&self, owner: Option<i64>) -> Result<(), AppError> {
        let Some(owner) = owner else {
            return Ok(());
        };

        if !self.user_logins.exists(owner).await? {
            return Err(AppError::validation(
                format!("UserLogin not found (id={owner})"),
                ENTITY_NAME,
                "userloginnotfound",
            ));
        }
        Ok(())
    }

    pub async fn create_alarm(&self, dto: AlarmDto) -> Result<alarm::Model, AppError> {
        self.require_owner(dto.owner_id()).await?;
        CrudService::create(self, dto.into_active_model()).await
    }

    pub async fn list_alarms(
        &self,
        order: Vec<(CrudColumn<AlarmDao>, Order)>,
    ) -> Result<Vec<alarm::Model>, AppError> {
        CrudService::find_all(self, order).await
    }

    pub async fn get_alarm(&self, id: String) -> Result<alarm::Model, AppError> {
        CrudService::find_by_id(self, id).await
    }

    pub async fn update_alarm(&self, id: String, dto: AlarmDto) -> Result<alarm::Model, AppError> {
        self.require_owner(dto.owner_id()).await?;
        CrudService::replace(self, id, move |active| dto.overwrite(active)).await
    }

    pub async fn partial_update_alarm(
        &self,
        id: String,
        dto: AlarmDto,
    ) -> Result<alarm::Model, AppError> {
        CrudService::update(self, id, move |active| dto.merge_into(active)).await
    }

    pub async fn delete_alarm(&self, id: String) -> Result<(), AppError> {
        CrudService::delete(self, id).await
    }
}
