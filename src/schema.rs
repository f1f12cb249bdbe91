use crate::error::{AnalyticsError, Result};
use crate::utils::month_start;
use chrono::{NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sentinel category assigned to records whose source row carried no
/// category value.
pub const UNKNOWN_CATEGORY: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OrderRecord {
    #[schemars(
        description = "Order identifier. Shared by every line item of the same order, so it is not unique per record."
    )]
    pub order_id: String,

    #[schemars(
        description = "Customer identifier, when the source dataset carries one. Absent ids leave the unique-customer KPI unavailable rather than zero."
    )]
    pub customer_id: Option<String>,

    #[schemars(description = "Moment the order was placed. Required for every time-based operation.")]
    pub purchase_timestamp: NaiveDateTime,

    #[schemars(description = "Product category. Rows without one normalize to the sentinel 'unknown'.")]
    pub category: String,

    #[schemars(
        description = "Monetary amount of this line item. Non-negative; derived from price + freight when not supplied directly."
    )]
    pub order_total: f64,

    #[schemars(description = "Purchase timestamp truncated to the first day of its calendar month.")]
    pub order_month: NaiveDate,

    #[schemars(description = "Purchase timestamp truncated to its calendar day.")]
    pub order_date: NaiveDate,
}

impl OrderRecord {
    /// Builds a record from already-parsed fields, computing the derived
    /// `order_month` and `order_date` columns once, at construction time.
    pub fn new(
        order_id: impl Into<String>,
        customer_id: Option<String>,
        purchase_timestamp: NaiveDateTime,
        category: Option<String>,
        order_total: f64,
    ) -> Self {
        let order_date = purchase_timestamp.date();
        Self {
            order_id: order_id.into(),
            customer_id: customer_id.filter(|id| !id.is_empty()),
            purchase_timestamp,
            category: category
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
            order_total,
            order_month: month_start(order_date),
            order_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FilterSpec {
    #[schemars(description = "First calendar day of the query window, inclusive.")]
    pub start_date: NaiveDate,

    #[schemars(
        description = "Last calendar day of the query window, inclusive through 23:59:59 of that day."
    )]
    pub end_date: NaiveDate,

    #[serde(default)]
    #[schemars(
        description = "Categories to keep. An empty set applies no category restriction at all."
    )]
    pub categories: BTreeSet<String>,
}

impl FilterSpec {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            categories: BTreeSet::new(),
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// A reversed range is rejected outright. Bounds are never swapped on the
    /// caller's behalf.
    pub fn validate(&self) -> Result<()> {
        if self.start_date > self.end_date {
            return Err(AnalyticsError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(FilterSpec)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}
