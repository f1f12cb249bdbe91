use crate::error::Result;
use crate::schema::{FilterSpec, OrderRecord};
use crate::utils::{day_end, day_start};

/// Reduces a record set to the subset matching the filter.
///
/// A record passes when its purchase timestamp lies within the date range
/// (`end_date` counts through 23:59:59 of that day) and, if the filter names
/// any categories, its category is one of them. An empty category set applies
/// no category restriction.
///
/// A reversed date range is an error, surfaced before any filtering runs.
pub fn filter_records(records: &[OrderRecord], spec: &FilterSpec) -> Result<Vec<OrderRecord>> {
    spec.validate()?;

    let window_start = day_start(spec.start_date);
    let window_end = day_end(spec.end_date);

    Ok(records
        .iter()
        .filter(|record| {
            record.purchase_timestamp >= window_start && record.purchase_timestamp <= window_end
        })
        .filter(|record| spec.categories.is_empty() || spec.categories.contains(&record.category))
        .cloned()
        .collect())
}
