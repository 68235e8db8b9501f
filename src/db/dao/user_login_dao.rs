use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};

use super::alarm_dao::detach_owner;
use super::{DaoBase, DaoResult};
use crate::db::entities::prelude::UserLogin;
use crate::db::entities::user_login;

#[derive(Clone)]
pub struct UserLoginDao {
    db: DatabaseConnection,
}

impl DaoBase for UserLoginDao {
    type Entity = UserLogin;
    type Model = user_login::Model;
    type ActiveModel = user_login::ActiveModel;
    type Id = i64;

    const ENTITY_NAME: &'static str = "UserLogin";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserLoginDao {
    /// Deletes the login after releasing its alarms, in one transaction.
    pub async fn delete_detaching(&self, id: i64) -> DaoResult<u64> {
        let txn = self.db.begin().await?;
        detach_owner(&txn, id).await?;
        let result = UserLogin::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(result.rows_affected)
    }
}
