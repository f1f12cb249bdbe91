use crate::schema::OrderRecord;
use crate::series::monthly_revenue_totals;
use chrono::{Duration, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Length of the trailing comparison windows, in calendar days.
pub const ROLLING_WINDOW_DAYS: i64 = 30;

/// Percentage change of `current` against a baseline. A zero baseline has no
/// defined change; the division is never attempted.
pub fn pct_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        None
    } else {
        Some((current - previous) / previous * 100.0)
    }
}

/// Wording rule for a signed percentage change. Only a strictly positive
/// change counts as an increase; zero narrates as "decreased 0.0%".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Increased,
    Decreased,
}

impl ChangeDirection {
    pub fn from_pct(pct: f64) -> Self {
        if pct > 0.0 {
            ChangeDirection::Increased
        } else {
            ChangeDirection::Decreased
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeDirection::Increased => "increased",
            ChangeDirection::Decreased => "decreased",
        }
    }
}

/// Revenue of the two most recent months present in the subset. The months
/// need not be calendar-adjacent; a gap between them is not treated
/// specially.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MonthComparison {
    pub month: NaiveDate,
    pub previous_month: NaiveDate,
    pub revenue: f64,
    pub previous_revenue: f64,
    /// `None` when the previous month's revenue is zero, leaving no valid
    /// baseline.
    pub pct_change: Option<f64>,
}

/// Distinct order counts in the trailing 30-day window against the 30 days
/// before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RollingComparison {
    pub recent_orders: u64,
    pub previous_orders: u64,
    /// `None` when the prior window holds no orders.
    pub pct_change: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PeriodComparisons {
    pub month_over_month: Option<MonthComparison>,
    pub rolling_30_day: Option<RollingComparison>,
}

/// Compares the two most recent months present in the subset by summed
/// revenue. Fewer than two distinct months produce no comparison.
pub fn month_over_month(records: &[OrderRecord]) -> Option<MonthComparison> {
    let totals = monthly_revenue_totals(records);
    if totals.len() < 2 {
        return None;
    }

    let mut recent = totals.iter().rev();
    let (&month, &revenue) = recent.next()?;
    let (&previous_month, &previous_revenue) = recent.next()?;

    Some(MonthComparison {
        month,
        previous_month,
        revenue,
        previous_revenue,
        pct_change: pct_change(revenue, previous_revenue),
    })
}

/// Compares distinct order counts between the trailing 30-day window and the
/// 30 days preceding it.
///
/// Windows anchor at the latest purchase timestamp in the subset, not at the
/// wall clock: recent is `[latest - 29 days, latest]`, previous is the
/// half-open 30 days immediately before, so a boundary timestamp is never
/// counted twice. An empty subset anchors nothing and produces no
/// comparison.
pub fn rolling_30_day(records: &[OrderRecord]) -> Option<RollingComparison> {
    let latest = records.iter().map(|r| r.purchase_timestamp).max()?;
    let recent_start = latest - Duration::days(ROLLING_WINDOW_DAYS - 1);
    let previous_start = recent_start - Duration::days(ROLLING_WINDOW_DAYS);

    let mut recent_ids: HashSet<&str> = HashSet::new();
    let mut previous_ids: HashSet<&str> = HashSet::new();
    for record in records {
        if record.purchase_timestamp >= recent_start {
            recent_ids.insert(record.order_id.as_str());
        } else if record.purchase_timestamp >= previous_start {
            previous_ids.insert(record.order_id.as_str());
        }
    }

    let recent_orders = recent_ids.len() as u64;
    let previous_orders = previous_ids.len() as u64;
    Some(RollingComparison {
        recent_orders,
        previous_orders,
        pct_change: pct_change(recent_orders as f64, previous_orders as f64),
    })
}

/// Runs both comparison policies over an already-filtered subset.
pub fn compare_periods(records: &[OrderRecord]) -> PeriodComparisons {
    PeriodComparisons {
        month_over_month: month_over_month(records),
        rolling_30_day: rolling_30_day(records),
    }
}
