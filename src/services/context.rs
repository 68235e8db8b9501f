use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{alarm_service::AlarmService, user_login_service::UserLoginService},
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn alarm(&self) -> AlarmService {
        AlarmService::new(self.daos.alarm(), self.user_login())
    }

    pub fn user_login(&self) -> UserLoginService {
        UserLoginService::new(self.daos.user_login(), self.daos.alarm())
    }
}
