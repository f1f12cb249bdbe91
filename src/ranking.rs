use crate::schema::OrderRecord;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chart-sized default for ranked category listings.
pub const DEFAULT_TOP_CATEGORIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}

/// Ranks categories by summed revenue, descending, truncated to `top_n`.
/// Equal revenues order by category name ascending so the ranking is
/// deterministic.
pub fn rank_categories(records: &[OrderRecord], top_n: usize) -> Vec<CategoryRevenue> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.category.as_str()).or_default() += record.order_total;
    }

    let mut ranked: Vec<CategoryRevenue> = totals
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue {
            category: category.to_string(),
            revenue,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.category.cmp(&b.category))
    });
    ranked.truncate(top_n);
    ranked
}
