use sea_orm::DatabaseConnection;

use super::{AlarmDao, DaoBase, UserLoginDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn alarm(&self) -> AlarmDao {
        DaoBase::new(&self.db)
    }

    pub fn user_login(&self) -> UserLoginDao {
        DaoBase::new(&self.db)
    }
}
