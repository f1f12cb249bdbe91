use crate::schema::OrderRecord;
use crate::utils::month_label;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MonthlyRevenue {
    pub month: NaiveDate,
    pub label: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MonthlyOrders {
    pub month: NaiveDate,
    pub label: String,
    pub orders: u64,
}

/// The two calendar-month series of a filtered subset, each in ascending
/// month order. Only months present in the data appear; gaps are not filled
/// in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct MonthlySeries {
    pub revenue: Vec<MonthlyRevenue>,
    pub orders: Vec<MonthlyOrders>,
}

/// Sums `order_total` per `order_month`. BTreeMap keys keep the months in
/// ascending order for every consumer.
pub fn monthly_revenue_totals(records: &[OrderRecord]) -> BTreeMap<NaiveDate, f64> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.order_month).or_default() += record.order_total;
    }
    totals
}

/// Counts distinct order ids per `order_month`.
pub fn monthly_order_counts(records: &[OrderRecord]) -> BTreeMap<NaiveDate, u64> {
    let mut ids_per_month: BTreeMap<NaiveDate, HashSet<&str>> = BTreeMap::new();
    for record in records {
        ids_per_month
            .entry(record.order_month)
            .or_default()
            .insert(record.order_id.as_str());
    }
    ids_per_month
        .into_iter()
        .map(|(month, ids)| (month, ids.len() as u64))
        .collect()
}

/// Builds the ordered monthly revenue and order-count series for charting.
pub fn bucket_by_month(records: &[OrderRecord]) -> MonthlySeries {
    let revenue = monthly_revenue_totals(records)
        .into_iter()
        .map(|(month, revenue)| MonthlyRevenue {
            month,
            label: month_label(month),
            revenue,
        })
        .collect();

    let orders = monthly_order_counts(records)
        .into_iter()
        .map(|(month, orders)| MonthlyOrders {
            month,
            label: month_label(month),
            orders,
        })
        .collect();

    MonthlySeries { revenue, orders }
}
