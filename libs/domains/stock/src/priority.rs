use serde::Serialize;
use utoipa::ToSchema;

use crate::models::StockItem;

/// Restock evaluation for one stock item.
///
/// Computed on demand from the current stock population; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PriorityRecord {
    /// The evaluated item
    pub item: StockItem,
    /// Units expected to be consumed while a replenishment is in flight
    pub expected_consumption: i64,
    /// Stock remaining after the expected consumption; may be negative
    pub projected_stock: i64,
    /// How urgently the item needs restocking; higher means sooner
    pub urgency_score: i64,
    /// Whether the projected stock falls below the minimum
    pub is_reposition_needed: bool,
}

impl PriorityRecord {
    /// Evaluate one item.
    ///
    /// All arithmetic is in i64. Stock figures are bounded well below 10^6,
    /// so the products here cannot overflow.
    pub fn evaluate(item: StockItem) -> Self {
        let expected_consumption = item.average_daily_sales() * item.lead_time_days();
        let projected_stock = item.current_stock() - expected_consumption;
        let is_reposition_needed = projected_stock < item.minimum_stock();
        let urgency_score =
            (item.minimum_stock() - projected_stock) * item.criticality_level().level();

        Self {
            item,
            expected_consumption,
            projected_stock,
            urgency_score,
            is_reposition_needed,
        }
    }
}

/// Rank the stock population by restock urgency.
///
/// Evaluates every item, keeps only those needing restock, and sorts by
/// urgency score descending, then criticality descending, then average
/// daily sales descending, then name ascending. The name comparison uses
/// ASCII lowercasing, so ordering does not depend on locale.
///
/// The result depends only on the set of inputs, not their order.
pub fn rank(items: Vec<StockItem>) -> Vec<PriorityRecord> {
    let mut records: Vec<PriorityRecord> = items
        .into_iter()
        .map(PriorityRecord::evaluate)
        .filter(|record| record.is_reposition_needed)
        .collect();

    records.sort_by(|a, b| {
        b.urgency_score
            .cmp(&a.urgency_score)
            .then_with(|| {
                b.item
                    .criticality_level()
                    .cmp(&a.item.criticality_level())
            })
            .then_with(|| {
                b.item
                    .average_daily_sales()
                    .cmp(&a.item.average_daily_sales())
            })
            .then_with(|| {
                a.item
                    .name()
                    .to_ascii_lowercase()
                    .cmp(&b.item.name().to_ascii_lowercase())
            })
    });

    records
}
