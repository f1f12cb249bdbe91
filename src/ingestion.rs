use crate::error::{AnalyticsError, Result};
use crate::schema::OrderRecord;
use crate::utils::day_start;
use chrono::{NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One row as it arrives from an external dataset export, before any
/// normalization. Every field is optional so a partially-populated CSV or
/// JSON dump still deserializes; [`into_record`](RawOrderRow::into_record)
/// decides what is recoverable and what is fatal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RawOrderRow {
    #[schemars(description = "Order identifier column. Required; a row without one is rejected.")]
    pub order_id: Option<String>,

    #[schemars(
        description = "Customer identifier column. Optional; absent or empty values carry through as no customer."
    )]
    pub customer_id: Option<String>,

    #[schemars(
        description = "Purchase timestamp text. Required; accepts '2017-10-02 10:56:33', the ISO 'T' variant, or a bare date."
    )]
    pub order_purchase_timestamp: Option<String>,

    #[schemars(description = "Product category column. Absent values normalize to the sentinel 'unknown'.")]
    pub product_category_name: Option<String>,

    #[schemars(
        description = "Line item price component. Summed with freight_value when no explicit order_total is present."
    )]
    pub price: Option<f64>,

    #[schemars(
        description = "Freight cost component. Summed with price when no explicit order_total is present."
    )]
    pub freight_value: Option<f64>,

    #[schemars(description = "Explicit monetary total for the line item. Takes precedence over price + freight_value.")]
    pub order_total: Option<f64>,
}

impl RawOrderRow {
    /// Normalizes the raw row into an [`OrderRecord`].
    ///
    /// `order_id` and a parseable purchase timestamp are mandatory. The
    /// monetary amount prefers an explicit `order_total`, falling back to
    /// `price + freight_value` with absent components read as zero. Missing
    /// category and customer id are recoverable and handled downstream.
    pub fn into_record(self) -> Result<OrderRecord> {
        let order_id = self
            .order_id
            .filter(|id| !id.is_empty())
            .ok_or(AnalyticsError::MissingField("order_id"))?;

        let raw_timestamp = self
            .order_purchase_timestamp
            .filter(|ts| !ts.is_empty())
            .ok_or(AnalyticsError::MissingField("order_purchase_timestamp"))?;
        let purchase_timestamp = parse_timestamp(&raw_timestamp)?;

        let order_total = match self.order_total {
            Some(total) => total,
            None => self.price.unwrap_or(0.0) + self.freight_value.unwrap_or(0.0),
        };

        Ok(OrderRecord::new(
            order_id,
            self.customer_id,
            purchase_timestamp,
            self.product_category_name,
            order_total,
        ))
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(RawOrderRow)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

/// Parses the timestamp layouts seen in the wild: the dataset's native
/// `2017-10-02 10:56:33`, the ISO-8601 `T` variant, and a bare date which
/// resolves to midnight.
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    for layout in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, layout) {
            return Ok(parsed);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(day_start(date));
    }
    Err(AnalyticsError::DateError(format!(
        "Unrecognized timestamp format: '{}'",
        raw
    )))
}

/// Converts a batch of raw rows, failing on the first row with a fatal
/// defect.
pub fn normalize_rows(rows: &[RawOrderRow]) -> Result<Vec<OrderRecord>> {
    rows.iter().cloned().map(RawOrderRow::into_record).collect()
}

/// Converts a batch of raw rows, dropping rows with fatal defects and
/// reporting how many were skipped. Mirrors how a dataset cleanup pass
/// drops unusable rows instead of aborting the load.
pub fn normalize_rows_lossy(rows: &[RawOrderRow]) -> (Vec<OrderRecord>, usize) {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0;
    for row in rows {
        match row.clone().into_record() {
            Ok(record) => records.push(record),
            Err(err) => {
                log::warn!("Skipping unusable row: {}", err);
                skipped += 1;
            }
        }
    }
    (records, skipped)
}

/// Sorted, deduplicated category names across a record set. What a category
/// picker lists.
pub fn distinct_categories(records: &[OrderRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Earliest and latest purchase timestamps in a record set. What a date
/// picker bounds itself with. `None` for an empty set.
pub fn timestamp_extent(records: &[OrderRecord]) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let first = records.first()?;
    let mut min = first.purchase_timestamp;
    let mut max = first.purchase_timestamp;
    for record in &records[1..] {
        if record.purchase_timestamp < min {
            min = record.purchase_timestamp;
        }
        if record.purchase_timestamp > max {
            max = record.purchase_timestamp;
        }
    }
    Some((min, max))
}
