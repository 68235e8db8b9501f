use std::fmt::Display;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    Order, PrimaryKeyTrait, QueryOrder, TransactionTrait,
};

use super::error::{DaoLayerError, DaoResult};

pub type IdValueOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Generic single-table access shared by every DAO.
#[allow(async_fn_in_trait)]
pub trait DaoBase: Clone + Send + Sync + Sized {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::ActiveModel>;
    type Model: IntoActiveModel<Self::ActiveModel> + Clone + Send + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send;
    type Id: Into<IdValueOf<Self::Entity>> + Clone + Display + Send + Sync;

    /// Entity name used in `NotFound` errors.
    const ENTITY_NAME: &'static str;

    fn new(db: &DatabaseConnection) -> Self;

    fn db(&self) -> &DatabaseConnection;

    /// Fills in the primary key before insert when the datastore does not generate one.
    fn assign_id(_active: &mut Self::ActiveModel) {}

    async fn create(&self, data: impl IntoActiveModel<Self::ActiveModel>) -> DaoResult<Self::Model> {
        let mut active = data.into_active_model();
        Self::assign_id(&mut active);
        active.insert(self.db()).await.map_err(DaoLayerError::Db)
    }

    async fn find_by_id(&self, id: Self::Id) -> DaoResult<Self::Model> {
        Self::Entity::find_by_id(id.clone())
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)?
            .ok_or_else(|| DaoLayerError::not_found(Self::ENTITY_NAME, id))
    }

    async fn exists(&self, id: Self::Id) -> DaoResult<bool> {
        let model = Self::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(model.is_some())
    }

    /// Whole table, in datastore order unless `order` names columns.
    async fn find_all(
        &self,
        order: Vec<(<Self::Entity as EntityTrait>::Column, Order)>,
    ) -> DaoResult<Vec<Self::Model>> {
        let select = order
            .into_iter()
            .fold(Self::Entity::find(), |select, (column, order)| {
                select.order_by(column, order)
            });
        select.all(self.db()).await.map_err(DaoLayerError::Db)
    }

    /// Read-modify-write in one transaction.
    async fn update<F>(&self, id: Self::Id, apply: F) -> DaoResult<Self::Model>
    where
        F: FnOnce(&mut Self::ActiveModel) + Send,
    {
        let txn = self.db().begin().await?;

        let model = Self::Entity::find_by_id(id.clone())
            .one(&txn)
            .await?
            .ok_or_else(|| DaoLayerError::not_found(Self::ENTITY_NAME, id))?;

        let mut active = model.clone().into_active_model();
        apply(&mut active);
        if !active.is_changed() {
            txn.commit().await?;
            return Ok(model);
        }
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Returns the number of rows removed; zero when the id was unknown.
    async fn delete(&self, id: Self::Id) -> DaoResult<u64> {
        let result = Self::Entity::delete_by_id(id)
            .exec(self.db())
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(result.rows_affected)
    }
}
