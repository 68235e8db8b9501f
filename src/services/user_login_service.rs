use sea_orm::Order;

use crate::{
    db::dao::{AlarmDao, UserLoginDao},
    db::entities::{alarm, user_login},
    dto::{UserLoginDto, UserLoginFields},
    error::AppError,
    services::crud_service::{CrudColumn, CrudErrors, CrudOp, CrudService},
};

pub const ENTITY_NAME: &str = "userLogin";

#[derive(Clone)]
pub struct UserLoginService {
    user_login_dao: UserLoginDao,
    alarm_dao: AlarmDao,
}

impl CrudService for UserLoginService {
    type Dao = UserLoginDao;

    fn dao(&self) -> &Self::Dao {
        &self.user_login_dao
    }

    fn entity_name(&self) -> &'static str {
        ENTITY_NAME
    }

    fn errors(&self) -> CrudErrors {
        CrudErrors {
            create_failed: "UserLogin create failed",
            find_failed: "UserLogin lookup failed",
            not_found: "UserLogin not found",
            update_failed: "UserLogin update failed",
            delete_failed: "UserLogin delete failed",
        }
    }
}

impl UserLoginService {
    pub fn new(user_login_dao: UserLoginDao, alarm_dao: AlarmDao) -> Self {
        Self {
            user_login_dao,
            alarm_dao,
        }
    }

    pub async fn create_user_login(
        &self,
        fields: UserLoginFields,
    ) -> Result<user_login::Model, AppError> {
        CrudService::create(self, fields.into_active_model()).await
    }

    pub async fn list_user_logins(
        &self,
        order: Vec<(CrudColumn<UserLoginDao>, Order)>,
    ) -> Result<Vec<user_login::Model>, AppError> {
        CrudService::find_all(self, order).await
    }

    pub async fn get_user_login(&self, id: i64) -> Result<user_login::Model, AppError> {
        CrudService::find_by_id(self, id).await
    }

    pub async fn update_user_login(
        &self,
        id: i64,
        fields: UserLoginFields,
    ) -> Result<user_login::Model, AppError> {
        CrudService::replace(self, id, move |active| fields.overwrite(active)).await
    }

    pub async fn partial_update_user_login(
        &self,
        id: i64,
        dto: UserLoginDto,
    ) -> Result<user_login::Model, AppError> {
        CrudService::update(self, id, move |active| dto.merge_into(active)).await
    }

    /// Owned alarms survive the delete with their owner cleared.
    pub async fn delete_user_login(&self, id: i64) -> Result<(), AppError> {
        self.user_login_dao
            .delete_detaching(id)
            .await
            .map(|_| ())
            .map_err(|err| self.map_error(CrudOp::Delete, err))
    }

    pub async fn alarms_of(&self, id: i64) -> Result<Vec<alarm::Model>, AppError> {
        CrudService::find_by_id(self, id).await?;
        self.alarm_dao
            .find_by_owner(id)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))
    }

    /// Replaces the login's alarm set with `alarm_ids` and returns the new set.
    pub async fn replace_alarms(
        &self,
        id: i64,
        alarm_ids: Vec<String>,
    ) -> Result<Vec<alarm::Model>, AppError> {
        CrudService::find_by_id(self, id).await?;
        self.alarm_dao
            .replace_owner_alarms(id, alarm_ids)
            .await
            .map_err(|err| self.map_error(CrudOp::Update, err))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;
    use crate::db::dao::DaoBase;

    fn service(mock: MockDatabase) -> UserLoginService {
        let db = mock.into_connection();
        UserLoginService::new(UserLoginDao::new(&db), AlarmDao::new(&db))
    }

    fn login(id: i64) -> user_login::Model {
        user_login::Model {
            id,
            username: "alice".to_string(),
            password: "p1".to_string(),
        }
    }

    #[tokio::test]
    async fn alarms_of_unknown_login_is_not_found() {
        let svc = service(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<user_login::Model>::new()]),
        );

        let err = svc.alarms_of(3).await.expect_err("login does not exist");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn replace_with_unknown_alarm_is_keyed_validation_error() {
        let svc = service(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[login(3)]])
                .append_query_results([Vec::<alarm::Model>::new()]),
        );

        let err = svc
            .replace_alarms(3, vec!["nope".to_string()])
            .await
            .expect_err("alarm does not exist");
        assert_eq!(err.error_key(), Some("alarmnotfound"));
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
