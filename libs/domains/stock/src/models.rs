use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{StockError, StockResult};

/// Product category for automotive parts
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "product_category")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProductCategory {
    #[sea_orm(string_value = "engine")]
    Engine,
    #[sea_orm(string_value = "oil")]
    Oil,
}

impl ProductCategory {
    /// Parse a category from its wire representation ("engine", "oil").
    pub fn parse(value: &str) -> StockResult<Self> {
        value
            .parse()
            .map_err(|_| StockError::Validation("invalid product category".to_string()))
    }
}

/// How critical a part is to operations, on a 1-5 scale.
///
/// Serialized as its integer level; out-of-range values are rejected
/// on deserialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, DeriveActiveEnum,
    EnumIter,
)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(try_from = "i64", into = "i64")]
pub enum CriticalityLevel {
    #[sea_orm(num_value = 1)]
    Low,
    #[sea_orm(num_value = 2)]
    Moderate,
    #[sea_orm(num_value = 3)]
    High,
    #[sea_orm(num_value = 4)]
    VeryHigh,
    #[sea_orm(num_value = 5)]
    Critical,
}

impl CriticalityLevel {
    /// The integer level (1-5) used in arithmetic and on the wire.
    pub fn level(&self) -> i64 {
        match self {
            Self::Low => 1,
            Self::Moderate => 2,
            Self::High => 3,
            Self::VeryHigh => 4,
            Self::Critical => 5,
        }
    }
}

impl TryFrom<i64> for CriticalityLevel {
    type Error = StockError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::High),
            4 => Ok(Self::VeryHigh),
            5 => Ok(Self::Critical),
            _ => Err(StockError::Validation(
                "criticality level must be between 1 and 5".to_string(),
            )),
        }
    }
}

impl From<CriticalityLevel> for i64 {
    fn from(level: CriticalityLevel) -> Self {
        level.level()
    }
}

/// A stock item for one automotive part.
///
/// Fields are private; the only way to obtain a `StockItem` is through
/// [`StockItem::new`], which enforces the domain rules. An item therefore
/// never exists in an invalid state.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StockItem {
    /// Unique identifier, absent until the item is persisted
    id: Option<Uuid>,
    /// Part name
    name: String,
    /// Product category
    category: ProductCategory,
    /// Units currently on hand
    current_stock: i64,
    /// Minimum desired stock level
    minimum_stock: i64,
    /// Average units sold per day
    average_daily_sales: i64,
    /// Supplier lead time in days
    lead_time_days: i64,
    /// Cost per unit
    unit_cost: f64,
    /// Criticality on a 1-5 scale
    #[schema(value_type = i64, minimum = 1, maximum = 5)]
    criticality_level: CriticalityLevel,
}

impl StockItem {
    /// Create a validated stock item.
    ///
    /// Rules are checked in order and the first violation is returned:
    /// 1. `name` must be non-empty
    /// 2. stock counters must be non-negative
    /// 3. `unit_cost` must be greater than zero
    ///
    /// Category and criticality are already typed, so no further checks apply.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Option<Uuid>,
        name: impl Into<String>,
        category: ProductCategory,
        current_stock: i64,
        minimum_stock: i64,
        average_daily_sales: i64,
        lead_time_days: i64,
        unit_cost: f64,
        criticality_level: CriticalityLevel,
    ) -> StockResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(StockError::Validation("name is required".to_string()));
        }

        if current_stock < 0 || minimum_stock < 0 || average_daily_sales < 0 || lead_time_days < 0 {
            return Err(StockError::Validation(
                "numeric fields must be non-negative".to_string(),
            ));
        }

        if unit_cost <= 0.0 {
            return Err(StockError::Validation(
                "unit cost must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            id,
            name,
            category,
            current_stock,
            minimum_stock,
            average_daily_sales,
            lead_time_days,
            unit_cost,
            criticality_level,
        })
    }

    /// Return a copy of this item carrying the given persisted id.
    pub(crate) fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Produce a new item with the update overlay applied.
    ///
    /// Absent fields keep their current values. The full rule set is
    /// re-run, so an update can never produce an invalid item.
    pub fn updated(&self, input: UpdateStockItem) -> StockResult<Self> {
        let criticality_level = match input.criticality_level {
            Some(level) => CriticalityLevel::try_from(level)?,
            None => self.criticality_level,
        };

        Self::new(
            self.id,
            self.name.clone(),
            self.category,
            input.current_stock.unwrap_or(self.current_stock),
            input.minimum_stock.unwrap_or(self.minimum_stock),
            input.average_daily_sales.unwrap_or(self.average_daily_sales),
            input.lead_time_days.unwrap_or(self.lead_time_days),
            input.unit_cost.unwrap_or(self.unit_cost),
            criticality_level,
        )
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ProductCategory {
        self.category
    }

    pub fn current_stock(&self) -> i64 {
        self.current_stock
    }

    pub fn minimum_stock(&self) -> i64 {
        self.minimum_stock
    }

    pub fn average_daily_sales(&self) -> i64 {
        self.average_daily_sales
    }

    pub fn lead_time_days(&self) -> i64 {
        self.lead_time_days
    }

    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    pub fn criticality_level(&self) -> CriticalityLevel {
        self.criticality_level
    }
}

/// DTO for creating a new stock item
///
/// Category and criticality arrive in their raw wire form and are
/// converted through the typed enums by the service.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateStockItem {
    pub name: String,
    /// Product category ("engine" or "oil")
    pub category: String,
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default)]
    pub minimum_stock: i64,
    #[serde(default)]
    pub average_daily_sales: i64,
    #[serde(default)]
    pub lead_time_days: i64,
    pub unit_cost: f64,
    /// Criticality on a 1-5 scale
    pub criticality_level: i64,
}

/// DTO for updating an existing stock item
///
/// Identity fields (id, name, category) are immutable; only operational
/// figures can change.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateStockItem {
    pub current_stock: Option<i64>,
    pub minimum_stock: Option<i64>,
    pub average_daily_sales: Option<i64>,
    pub lead_time_days: Option<i64>,
    pub unit_cost: Option<f64>,
    /// Criticality on a 1-5 scale
    pub criticality_level: Option<i64>,
}
