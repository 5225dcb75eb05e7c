use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{StockError, StockResult};
use crate::models::{ProductCategory, StockItem};
use crate::pagination::Pagination;

/// Repository trait for StockItem persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Persist a new item and return its assigned id
    async fn create(&self, item: StockItem) -> StockResult<Uuid>;

    /// Update an existing item; NotFound when no row matches its id
    async fn update(&self, item: StockItem) -> StockResult<()>;

    /// List items ordered by name; `None` returns the whole population
    async fn get_all(&self, pagination: Option<Pagination>) -> StockResult<Vec<StockItem>>;

    /// Get a single item by id
    async fn get_one_by_id(&self, id: Uuid) -> StockResult<Option<StockItem>>;

    /// List items of one category ordered by name
    async fn get_by_category(
        &self,
        category: ProductCategory,
        pagination: Option<Pagination>,
    ) -> StockResult<Vec<StockItem>>;

    /// Delete an item by id; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> StockResult<bool>;
}

/// In-memory implementation of StockRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryStockRepository {
    items: Arc<RwLock<HashMap<Uuid, StockItem>>>,
}

impl InMemoryStockRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn sorted_by_name(mut items: Vec<StockItem>) -> Vec<StockItem> {
        items.sort_by(|a, b| {
            a.name()
                .to_ascii_lowercase()
                .cmp(&b.name().to_ascii_lowercase())
        });
        items
    }

    fn window(items: Vec<StockItem>, pagination: Option<Pagination>) -> Vec<StockItem> {
        match pagination {
            Some(p) => crate::pagination::paginate(items, &p),
            None => items,
        }
    }
}

#[async_trait]
impl StockRepository for InMemoryStockRepository {
    async fn create(&self, item: StockItem) -> StockResult<Uuid> {
        let mut items = self.items.write().await;

        let id = Uuid::now_v7();
        items.insert(id, item.with_id(id));

        tracing::info!(item_id = %id, "Created stock item");
        Ok(id)
    }

    async fn update(&self, item: StockItem) -> StockResult<()> {
        let id = item
            .id()
            .ok_or_else(|| StockError::Validation("id is required".to_string()))?;

        let mut items = self.items.write().await;
        if !items.contains_key(&id) {
            return Err(StockError::NotFound(id));
        }

        items.insert(id, item);
        tracing::info!(item_id = %id, "Updated stock item");
        Ok(())
    }

    async fn get_all(&self, pagination: Option<Pagination>) -> StockResult<Vec<StockItem>> {
        let items = self.items.read().await;
        let all = Self::sorted_by_name(items.values().cloned().collect());
        Ok(Self::window(all, pagination))
    }

    async fn get_one_by_id(&self, id: Uuid) -> StockResult<Option<StockItem>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn get_by_category(
        &self,
        category: ProductCategory,
        pagination: Option<Pagination>,
    ) -> StockResult<Vec<StockItem>> {
        let items = self.items.read().await;
        let matching = Self::sorted_by_name(
            items
                .values()
                .filter(|item| item.category() == category)
                .cloned()
                .collect(),
        );
        Ok(Self::window(matching, pagination))
    }

    async fn delete(&self, id: Uuid) -> StockResult<bool> {
        let mut items = self.items.write().await;

        if items.remove(&id).is_some() {
            tracing::info!(item_id = %id, "Deleted stock item");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CriticalityLevel;

    fn item(name: &str, category: ProductCategory) -> StockItem {
        StockItem::new(
            None,
            name,
            category,
            100,
            50,
            5,
            7,
            25.0,
            CriticalityLevel::High,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_item() {
        let repo = InMemoryStockRepository::new();

        let id = repo
            .create(item("Brake Pad", ProductCategory::Engine))
            .await
            .unwrap();

        let fetched = repo.get_one_by_id(id).await.unwrap();
        assert!(fetched.is_some());
        let fetched = fetched.unwrap();
        assert_eq!(fetched.id(), Some(id));
        assert_eq!(fetched.name(), "Brake Pad");
    }

    #[tokio::test]
    async fn test_get_all_is_name_ordered() {
        let repo = InMemoryStockRepository::new();
        repo.create(item("zeta", ProductCategory::Engine))
            .await
            .unwrap();
        repo.create(item("Alpha", ProductCategory::Oil))
            .await
            .unwrap();
        repo.create(item("mid", ProductCategory::Engine))
            .await
            .unwrap();

        let all = repo.get_all(None).await.unwrap();
        let names: Vec<&str> = all.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Alpha", "mid", "zeta"]);
    }

    #[tokio::test]
    async fn test_get_by_category_filters() {
        let repo = InMemoryStockRepository::new();
        repo.create(item("Piston", ProductCategory::Engine))
            .await
            .unwrap();
        repo.create(item("Oil Filter", ProductCategory::Oil))
            .await
            .unwrap();

        let oil = repo
            .get_by_category(ProductCategory::Oil, None)
            .await
            .unwrap();
        assert_eq!(oil.len(), 1);
        assert_eq!(oil[0].name(), "Oil Filter");
    }

    #[tokio::test]
    async fn test_update_missing_item_is_not_found() {
        let repo = InMemoryStockRepository::new();
        let ghost = item("Ghost", ProductCategory::Engine).with_id(Uuid::now_v7());

        let result = repo.update(ghost).await;
        assert!(matches!(result, Err(StockError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryStockRepository::new();
        let id = repo
            .create(item("Gasket", ProductCategory::Engine))
            .await
            .unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.delete(id).await.unwrap());
        assert!(repo.get_one_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all_paginated() {
        let repo = InMemoryStockRepository::new();
        for name in ["a", "b", "c", "d", "e"] {
            repo.create(item(name, ProductCategory::Engine))
                .await
                .unwrap();
        }

        let page = repo
            .get_all(Some(Pagination::new(2, 2)))
            .await
            .unwrap();
        let names: Vec<&str> = page.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["c", "d"]);
    }
}
