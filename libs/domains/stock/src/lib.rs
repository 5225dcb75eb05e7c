//! Stock Domain
//!
//! This module provides a complete domain implementation for managing
//! automotive-parts stock and computing restock priorities.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, priority ranking
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_stock::{
//!     handlers,
//!     pagination::PaginationConfig,
//!     repository::InMemoryStockRepository,
//!     service::StockService,
//! };
//!
//! let repository = InMemoryStockRepository::new();
//! let pagination = PaginationConfig::new(20, 100).unwrap();
//! let service = StockService::new(repository, pagination);
//!
//! let router = handlers::stock_router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod postgres;
pub mod priority;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{StockError, StockResult};
pub use models::{CreateStockItem, CriticalityLevel, ProductCategory, StockItem, UpdateStockItem};
pub use pagination::{PageQuery, Pagination, PaginationConfig};
pub use postgres::PgStockRepository;
pub use priority::PriorityRecord;
pub use repository::{InMemoryStockRepository, StockRepository};
pub use service::StockService;
