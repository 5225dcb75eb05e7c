use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::StockError;
use crate::models::{CriticalityLevel, ProductCategory, StockItem};

/// Sea-ORM Entity for the product_stock table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_stock")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub category: ProductCategory,
    pub current_stock: i64,
    pub minimum_stock: i64,
    pub average_daily_sales: i64,
    pub lead_time_days: i64,
    #[sea_orm(column_type = "Double")]
    pub unit_cost: f64,
    pub criticality_level: CriticalityLevel,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to the domain item. Rows are validated on
// the way out; a row that fails the domain rules is reported as corrupt.
impl TryFrom<Model> for StockItem {
    type Error = StockError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let id = model.id;
        StockItem::new(
            Some(id),
            model.name,
            model.category,
            model.current_stock,
            model.minimum_stock,
            model.average_daily_sales,
            model.lead_time_days,
            model.unit_cost,
            model.criticality_level,
        )
        .map_err(|e| StockError::Internal(format!("corrupt stock row {}: {}", id, e)))
    }
}

/// Build an ActiveModel carrying all columns for insert or update.
pub(crate) fn active_model(item: &StockItem, id: Uuid) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        name: Set(item.name().to_string()),
        category: Set(item.category()),
        current_stock: Set(item.current_stock()),
        minimum_stock: Set(item.minimum_stock()),
        average_daily_sales: Set(item.average_daily_sales()),
        lead_time_days: Set(item.lead_time_days()),
        unit_cost: Set(item.unit_cost()),
        criticality_level: Set(item.criticality_level()),
    }
}
