use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::alarm;
use crate::db::entities::prelude::Alarm;

#[derive(Clone)]
pub struct AlarmDao {
    db: DatabaseConnection,
}

impl DaoBase for AlarmDao {
    type Entity = Alarm;
    type Model = alarm::Model;
    type ActiveModel = alarm::ActiveModel;
    type Id = String;

    const ENTITY_NAME: &'static str = "Alarm";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn assign_id(active: &mut alarm::ActiveModel) {
        if matches!(active.id, ActiveValue::NotSet) {
            active.id = Set(Uuid::new_v4().to_string());
        }
    }
}

impl AlarmDao {
    pub async fn find_by_owner(&self, user_login_id: i64) -> DaoResult<Vec<alarm::Model>> {
        Alarm::find()
            .filter(alarm::Column::UserLoginId.eq(user_login_id))
            .all(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    /// Makes `alarm_ids` the complete alarm set of `user_login_id`.
    ///
    /// Alarms previously owned by the login and not listed lose their owner.
    /// Nothing changes when any listed alarm is unknown.
    pub async fn replace_owner_alarms(
        &self,
        user_login_id: i64,
        alarm_ids: Vec<String>,
    ) -> DaoResult<Vec<alarm::Model>> {
        let mut alarm_ids = alarm_ids;
        alarm_ids.sort();
        alarm_ids.dedup();

        let txn = self.db.begin().await?;

        let found = Alarm::find()
            .filter(alarm::Column::Id.is_in(alarm_ids.clone()))
            .all(&txn)
            .await?;
        if let Some(missing) = alarm_ids
            .iter()
            .find(|id| !found.iter().any(|alarm| &alarm.id == *id))
        {
            return Err(DaoLayerError::missing_reference(Self::ENTITY_NAME, missing));
        }

        detach_owner(&txn, user_login_id).await?;
        if !alarm_ids.is_empty() {
            Alarm::update_many()
                .col_expr(alarm::Column::UserLoginId, Expr::value(user_login_id))
                .filter(alarm::Column::Id.is_in(alarm_ids))
                .exec(&txn)
                .await?;
        }

        let alarms = Alarm::find()
            .filter(alarm::Column::UserLoginId.eq(user_login_id))
            .all(&txn)
            .await?;

        txn.commit().await?;
        Ok(alarms)
    }
}

/// Clears the owner of every alarm held by `user_login_id`.
pub(crate) async fn detach_owner<C>(conn: &C, user_login_id: i64) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let result = Alarm::update_many()
        .col_expr(alarm::Column::UserLoginId, Expr::value(Option::<i64>::None))
        .filter(alarm::Column::UserLoginId.eq(user_login_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;

    fn alarm_model(id: &str, owner: Option<i64>) -> alarm::Model {
        alarm::Model {
            id: id.to_string(),
            time: None,
            alarm_time: None,
            enabled: Some(true),
            sound: Some("chime".to_string()),
            label: None,
            repeat_days: None,
            snooze_enabled: None,
            snooze_duration: Some(5),
            user_login_id: owner,
        }
    }

    #[test]
    fn assign_id_generates_uuid_only_when_missing() {
        let mut active = alarm::ActiveModel::default();
        AlarmDao::assign_id(&mut active);
        let ActiveValue::Set(generated) = &active.id else {
            panic!("id should be set");
        };
        assert!(Uuid::parse_str(generated).is_ok());

        let mut active = alarm::ActiveModel {
            id: Set("fixed".to_string()),
            ..Default::default()
        };
        AlarmDao::assign_id(&mut active);
        assert_eq!(active.id, Set("fixed".to_string()));
    }

    #[tokio::test]
    async fn find_by_id_reports_missing_alarm() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<alarm::Model>::new()])
            .into_connection();
        let dao = AlarmDao::new(&db);

        let err = dao
            .find_by_id("missing".to_string())
            .await
            .expect_err("alarm should be missing");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { entity: "Alarm", ref id } if id == "missing"
        ));
    }

    #[tokio::test]
    async fn find_by_owner_returns_owned_alarms() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[alarm_model("a1", Some(7)), alarm_model("a2", Some(7))]])
            .into_connection();
        let dao = AlarmDao::new(&db);

        let alarms = dao.find_by_owner(7).await.expect("query should succeed");
        assert_eq!(alarms.len(), 2);
        assert!(alarms.iter().all(|alarm| alarm.user_login_id == Some(7)));
    }

    #[tokio::test]
    async fn replace_rejects_unknown_alarm_before_writing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[alarm_model("a1", None)]])
            .into_connection();
        let dao = AlarmDao::new(&db);

        let err = dao
            .replace_owner_alarms(7, vec!["a1".to_string(), "a2".to_string()])
            .await
            .expect_err("a2 does not exist");
        assert!(matches!(
            err,
            DaoLayerError::MissingReference { entity: "Alarm", ref id } if id == "a2"
        ));
    }

    #[tokio::test]
    async fn replace_detaches_then_attaches() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[alarm_model("a1", None)]])
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .append_query_results([[alarm_model("a1", Some(7))]])
            .into_connection();
        let dao = AlarmDao::new(&db);

        let alarms = dao
            .replace_owner_alarms(7, vec!["a1".to_string(), "a1".to_string()])
            .await
            .expect("replace should succeed");
        assert_eq!(alarms, vec![alarm_model("a1", Some(7))]);
    }
}
