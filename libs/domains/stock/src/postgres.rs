use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{StockError, StockResult},
    models::{ProductCategory, StockItem},
    pagination::Pagination,
    repository::StockRepository,
};

/// PostgreSQL implementation of StockRepository backed by SeaORM
pub struct PgStockRepository {
    db: DatabaseConnection,
}

impl PgStockRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn apply_pagination<Q: QuerySelect>(query: Q, pagination: Option<Pagination>) -> Q {
        match pagination {
            Some(p) => query
                .offset(p.offset().max(0) as u64)
                .limit(p.limit.max(0) as u64),
            None => query,
        }
    }
}

#[async_trait]
impl StockRepository for PgStockRepository {
    async fn create(&self, item: StockItem) -> StockResult<Uuid> {
        let id = Uuid::now_v7();
        let model = entity::active_model(&item, id);

        entity::Entity::insert(model).exec(&self.db).await?;

        tracing::info!(item_id = %id, "Created stock item");
        Ok(id)
    }

    async fn update(&self, item: StockItem) -> StockResult<()> {
        let id = item
            .id()
            .ok_or_else(|| StockError::Validation("id is required".to_string()))?;
        let model = entity::active_model(&item, id);

        match entity::Entity::update(model).exec(&self.db).await {
            Ok(_) => {
                tracing::info!(item_id = %id, "Updated stock item");
                Ok(())
            }
            Err(DbErr::RecordNotUpdated) => Err(StockError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn get_all(&self, pagination: Option<Pagination>) -> StockResult<Vec<StockItem>> {
        let query = Self::apply_pagination(
            entity::Entity::find().order_by_asc(entity::Column::Name),
            pagination,
        );

        let models = query.all(&self.db).await?;
        models.into_iter().map(StockItem::try_from).collect()
    }

    async fn get_one_by_id(&self, id: Uuid) -> StockResult<Option<StockItem>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        model.map(StockItem::try_from).transpose()
    }

    async fn get_by_category(
        &self,
        category: ProductCategory,
        pagination: Option<Pagination>,
    ) -> StockResult<Vec<StockItem>> {
        let query = Self::apply_pagination(
            entity::Entity::find()
                .filter(entity::Column::Category.eq(category))
                .order_by_asc(entity::Column::Name),
            pagination,
        );

        let models = query.all(&self.db).await?;
        models.into_iter().map(StockItem::try_from).collect()
    }

    async fn delete(&self, id: Uuid) -> StockResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(item_id = %id, "Deleted stock item");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
