use crate::currency::{format_count, format_currency};
use crate::schema::OrderRecord;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Scalar aggregates over a filtered record subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KpiSummary {
    /// Sum of `order_total` over the subset.
    pub total_revenue: f64,
    /// Count of distinct order identifiers, never raw rows.
    pub order_count: u64,
    /// `total_revenue / order_count`, or 0 for an orderless subset.
    pub average_order_value: f64,
    /// Count of distinct customer identifiers. `None` when a non-empty
    /// subset carries no customer ids at all, meaning the dataset has no
    /// usable customer column rather than zero customers.
    pub unique_customers: Option<u64>,
}

impl KpiSummary {
    pub fn total_revenue_display(&self) -> String {
        format_currency(self.total_revenue)
    }

    pub fn order_count_display(&self) -> String {
        format_count(self.order_count)
    }

    pub fn average_order_value_display(&self) -> String {
        format_currency(self.average_order_value)
    }

    pub fn unique_customers_display(&self) -> String {
        match self.unique_customers {
            Some(count) => format_count(count),
            None => "N/A".to_string(),
        }
    }
}

/// Computes the KPI aggregates for a record subset.
///
/// An empty subset yields all-zero KPIs with `unique_customers = Some(0)`.
/// The zero-order case pins the average order value to 0 rather than
/// dividing.
pub fn compute_kpis(records: &[OrderRecord]) -> KpiSummary {
    let total_revenue: f64 = records.iter().map(|r| r.order_total).sum();

    let order_count = records
        .iter()
        .map(|r| r.order_id.as_str())
        .collect::<HashSet<_>>()
        .len() as u64;

    let average_order_value = if order_count > 0 {
        total_revenue / order_count as f64
    } else {
        0.0
    };

    let customer_ids: HashSet<&str> = records
        .iter()
        .filter_map(|r| r.customer_id.as_deref())
        .collect();
    let unique_customers = if records.is_empty() {
        Some(0)
    } else if customer_ids.is_empty() {
        None
    } else {
        Some(customer_ids.len() as u64)
    };

    KpiSummary {
        total_revenue,
        order_count,
        average_order_value,
        unique_customers,
    }
}
