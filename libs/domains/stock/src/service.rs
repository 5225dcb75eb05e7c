use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{StockError, StockResult};
use crate::models::{
    CreateStockItem, CriticalityLevel, ProductCategory, StockItem, UpdateStockItem,
};
use crate::pagination::{Pagination, PaginationConfig, paginate};
use crate::priority::{PriorityRecord, rank};
use crate::repository::StockRepository;

/// Service layer for stock business logic
pub struct StockService<R: StockRepository> {
    repository: Arc<R>,
    pagination: PaginationConfig,
}

// Manual Clone: R itself need not be Clone, only the Arc is cloned.
impl<R: StockRepository> Clone for StockService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            pagination: self.pagination,
        }
    }
}

impl<R: StockRepository> StockService<R> {
    pub fn new(repository: R, pagination: PaginationConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            pagination,
        }
    }

    /// Create a new stock item from its wire representation.
    ///
    /// Category and criticality are converted through the typed enums, then
    /// the domain constructor runs the full rule set.
    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: CreateStockItem) -> StockResult<Uuid> {
        let category = ProductCategory::parse(&input.category)?;
        let criticality = CriticalityLevel::try_from(input.criticality_level)?;

        let item = StockItem::new(
            None,
            input.name,
            category,
            input.current_stock,
            input.minimum_stock,
            input.average_daily_sales,
            input.lead_time_days,
            input.unit_cost,
            criticality,
        )?;

        self.repository.create(item).await
    }

    /// Get a stock item by id
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Uuid) -> StockResult<StockItem> {
        self.repository
            .get_one_by_id(id)
            .await?
            .ok_or(StockError::NotFound(id))
    }

    /// List stock items, paged
    #[instrument(skip(self))]
    pub async fn list_items(&self, pagination: Pagination) -> StockResult<Vec<StockItem>> {
        let pagination = pagination.normalized(&self.pagination);
        self.repository.get_all(Some(pagination)).await
    }

    /// List stock items of one category, paged
    #[instrument(skip(self))]
    pub async fn list_by_category(
        &self,
        category: &str,
        pagination: Pagination,
    ) -> StockResult<Vec<StockItem>> {
        let category = ProductCategory::parse(category)?;
        let pagination = pagination.normalized(&self.pagination);
        self.repository.get_by_category(category, Some(pagination)).await
    }

    /// Update an item's operational figures.
    ///
    /// The current item is fetched first so an unknown id surfaces as
    /// NotFound, then the overlay re-runs the full rule set.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: Uuid, input: UpdateStockItem) -> StockResult<()> {
        let current = self.get_item(id).await?;
        let updated = current.updated(input)?;
        self.repository.update(updated).await
    }

    /// Delete a stock item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: Uuid) -> StockResult<()> {
        // Read first so a missing id reports NotFound consistently
        self.get_item(id).await?;

        self.repository.delete(id).await?;
        Ok(())
    }

    /// Rank the whole stock population by restock urgency, then page.
    ///
    /// The ranking always sees the full population; pagination applies to
    /// the sorted result. Repository errors propagate unchanged, never a
    /// partial ranking.
    #[instrument(skip(self))]
    pub async fn restock_priorities(
        &self,
        pagination: Pagination,
    ) -> StockResult<Vec<PriorityRecord>> {
        let items = self.repository.get_all(None).await?;
        let ranked = rank(items);

        let pagination = pagination.normalized(&self.pagination);
        Ok(paginate(ranked, &pagination))
    }
}
