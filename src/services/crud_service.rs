use sea_orm::{EntityTrait, IntoActiveModel, Order};

use crate::db::dao::{DaoBase, DaoLayerError};
use crate::error::AppError;

type CrudModel<D> = <D as DaoBase>::Model;
type CrudActiveModel<D> = <D as DaoBase>::ActiveModel;
type CrudId<D> = <D as DaoBase>::Id;
pub type CrudColumn<D> = <<D as DaoBase>::Entity as EntityTrait>::Column;

#[derive(Clone, Copy)]
pub struct CrudErrors {
    pub create_failed: &'static str,
    pub find_failed: &'static str,
    pub not_found: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
}

impl Default for CrudErrors {
    fn default() -> Self {
        Self {
            create_failed: "Create failed",
            find_failed: "Find failed",
            not_found: "Resource not found",
            update_failed: "Update failed",
            delete_failed: "Delete failed",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum CrudOp {
    Create,
    Find,
    List,
    Update,
    Delete,
}

/// CRUD over one DAO with DAO failures translated into `AppError`.
#[allow(async_fn_in_trait)]
pub trait CrudService {
    type Dao: DaoBase;

    fn dao(&self) -> &Self::Dao;

    /// Name reported in validation error bodies and alert headers.
    fn entity_name(&self) -> &'static str;

    fn errors(&self) -> CrudErrors {
        CrudErrors::default()
    }

    fn map_error(&self, op: CrudOp, err: DaoLayerError) -> AppError {
        let errors = self.errors();
        match err {
            DaoLayerError::Db(db_err) => {
                let context = match op {
                    CrudOp::Create => errors.create_failed,
                    CrudOp::Find | CrudOp::List => errors.find_failed,
                    CrudOp::Update => errors.update_failed,
                    CrudOp::Delete => errors.delete_failed,
                };
                tracing::error!(?op, entity = self.entity_name(), error = %db_err, "{context}");
                AppError::internal(format!("{context}. Please check the logs for more details"))
            }
            DaoLayerError::NotFound { .. } => AppError::not_found(errors.not_found),
            DaoLayerError::MissingReference { entity, .. } => AppError::validation(
                err.to_string(),
                self.entity_name(),
                format!("{}notfound", entity.to_ascii_lowercase()),
            ),
        }
    }

    async fn create<T>(&self, data: T) -> Result<CrudModel<Self::Dao>, AppError>
    where
        T: IntoActiveModel<CrudActiveModel<Self::Dao>>,
    {
        self.dao()
            .create(data)
            .await
            .map_err(|err| self.map_error(CrudOp::Create, err))
    }

    async fn find_by_id(&self, id: CrudId<Self::Dao>) -> Result<CrudModel<Self::Dao>, AppError> {
        self.dao()
            .find_by_id(id)
            .await
            .map_err(|err| self.map_error(CrudOp::Find, err))
    }

    async fn exists(&self, id: CrudId<Self::Dao>) -> Result<bool, AppError> {
        self.dao()
            .exists(id)
            .await
            .map_err(|err| self.map_error(CrudOp::Find, err))
    }

    async fn find_all(
        &self,
        order: Vec<(CrudColumn<Self::Dao>, Order)>,
    ) -> Result<Vec<CrudModel<Self::Dao>>, AppError> {
        self.dao()
            .find_all(order)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))
    }

    async fn update<F>(&self, id: CrudId<Self::Dao>, apply: F) -> Result<CrudModel<Self::Dao>, AppError>
    where
        F: FnOnce(&mut CrudActiveModel<Self::Dao>) + Send,
    {
        self.dao()
            .update(id, apply)
            .await
            .map_err(|err| self.map_error(CrudOp::Update, err))
    }

    /// Full replacement of an existing row. An unknown id is a client error
    /// (`idnotfound`) rather than a 404.
    async fn replace<F>(&self, id: CrudId<Self::Dao>, apply: F) -> Result<CrudModel<Self::Dao>, AppError>
    where
        F: FnOnce(&mut CrudActiveModel<Self::Dao>) + Send,
    {
        match self.dao().update(id, apply).await {
            Ok(model) => Ok(model),
            Err(DaoLayerError::NotFound { .. }) => Err(AppError::validation(
                "Entity not found",
                self.entity_name(),
                "idnotfound",
            )),
            Err(err) => Err(self.map_error(CrudOp::Update, err)),
        }
    }

    /// Idempotent: removing an unknown id succeeds.
    async fn delete(&self, id: CrudId<Self::Dao>) -> Result<(), AppError> {
        self.dao()
            .delete(id)
            .await
            .map(|_| ())
            .map_err(|err| self.map_error(CrudOp::Delete, err))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Set};

    use super::*;
    use crate::db::dao::UserLoginDao;
    use crate::db::entities::user_login;

    struct TestCrudService {
        dao: UserLoginDao,
        errors: CrudErrors,
    }

    impl CrudService for TestCrudService {
        type Dao = UserLoginDao;

        fn dao(&self) -> &Self::Dao {
            &self.dao
        }

        fn entity_name(&self) -> &'static str {
            "userLogin"
        }

        fn errors(&self) -> CrudErrors {
            self.errors
        }
    }

    fn service(mock: MockDatabase) -> TestCrudService {
        let db = mock.into_connection();
        TestCrudService {
            dao: UserLoginDao::new(&db),
            errors: CrudErrors {
                not_found: "UserLogin not found",
                ..CrudErrors::default()
            },
        }
    }

    fn login(id: i64) -> user_login::Model {
        user_login::Model {
            id,
            username: "alice".to_string(),
            password: "p1".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_row_maps_to_not_found() {
        let svc = service(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<user_login::Model>::new()]),
        );

        let err = svc.find_by_id(9).await.expect_err("row is missing");
        assert!(matches!(err, AppError::NotFound(ref message) if message == "UserLogin not found"));
    }

    #[tokio::test]
    async fn db_failures_hide_details() {
        let svc = service(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_errors([DbErr::Custom("connection reset".to_string())]),
        );

        let err = svc.find_all(Vec::new()).await.expect_err("query fails");
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.message(), "Find failed. Please check the logs for more details");
    }

    #[tokio::test]
    async fn replace_of_unknown_id_is_a_validation_error() {
        let svc = service(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<user_login::Model>::new()]),
        );

        let err = svc
            .replace(9, |active| active.username = Set("bob".to_string()))
            .await
            .expect_err("row is missing");
        assert_eq!(err.error_key(), Some("idnotfound"));
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_succeeds() {
        let svc = service(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]));

        svc.delete(9).await.expect("delete is idempotent");
    }

    #[tokio::test]
    async fn exists_reflects_lookup() {
        let svc = service(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results([[login(1)]]),
        );

        assert!(svc.exists(1).await.expect("lookup succeeds"));
    }

    #[test]
    fn missing_reference_becomes_keyed_validation_error() {
        let svc = service(MockDatabase::new(DatabaseBackend::Postgres));
        let err = svc.map_error(
            CrudOp::Update,
            DaoLayerError::missing_reference("Alarm", "a9"),
        );

        assert_eq!(err.error_key(), Some("alarmnotfound"));
        assert_eq!(err.message(), "Alarm not found (id=a9)");
    }
}
