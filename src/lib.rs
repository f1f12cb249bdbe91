//! # Ecommerce Insights
//!
//! A library for slicing a time-stamped e-commerce order dataset into
//! filtered KPIs, monthly series, category rankings, and short
//! natural-language insight statements.
//!
//! ## Core Concepts
//!
//! - **OrderRecord**: one parsed line item with derived month and day columns
//! - **FilterSpec**: inclusive date range (end date counts through 23:59:59)
//!   plus an optional category set
//! - **KpiSummary**: total revenue, distinct order count, average order
//!   value, unique customers
//! - **Period comparisons**: month-over-month revenue and trailing 30-day
//!   order counts, each with an explicit zero-baseline fallback instead of a
//!   division
//! - **Insights**: sentences narrating the comparisons in a fixed order,
//!   skipping whatever is unavailable
//!
//! ## Example
//!
//! ```rust,ignore
//! use ecommerce_insights::*;
//! use chrono::NaiveDate;
//!
//! let rows: Vec<RawOrderRow> = load_rows_from_somewhere();
//! let records = normalize_rows(&rows)?;
//!
//! let filter = FilterSpec::new(
//!     NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2018, 8, 31).unwrap(),
//! )
//! .with_categories(["toys", "health_beauty"]);
//!
//! let report = analyze_orders(&records, &filter)?;
//! println!("{}", report.to_markdown());
//! ```

pub mod compare;
pub mod currency;
pub mod error;
pub mod filter;
pub mod ingestion;
pub mod insights;
pub mod kpi;
pub mod ranking;
pub mod schema;
pub mod series;
pub mod utils;

#[cfg(feature = "synthetic")]
pub mod synthetic;

pub use compare::{
    compare_periods, month_over_month, pct_change, rolling_30_day, ChangeDirection,
    MonthComparison, PeriodComparisons, RollingComparison, ROLLING_WINDOW_DAYS,
};
pub use currency::{format_count, format_currency};
pub use error::{AnalyticsError, Result};
pub use filter::filter_records;
pub use ingestion::*;
pub use insights::{generate_insights, narrate};
pub use kpi::{compute_kpis, KpiSummary};
pub use ranking::{rank_categories, CategoryRevenue, DEFAULT_TOP_CATEGORIES};
pub use schema::*;
pub use series::{
    bucket_by_month, monthly_order_counts, monthly_revenue_totals, MonthlyOrders, MonthlyRevenue,
    MonthlySeries,
};
pub use utils::*;

#[cfg(feature = "synthetic")]
pub use synthetic::OrderGenerator;

use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Everything one query produces: the echoed filter, scalar KPIs, monthly
/// series, ranked categories, period comparisons, and the narrated insight
/// lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalyticsReport {
    pub filter: FilterSpec,
    pub kpis: KpiSummary,
    pub monthly: MonthlySeries,
    pub top_categories: Vec<CategoryRevenue>,
    pub comparisons: PeriodComparisons,
    pub insights: Vec<String>,
}

impl AnalyticsReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-markdown rendering of the report: KPI table, monthly table,
    /// ranked categories, insight bullets. Writing it anywhere is the
    /// caller's business.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("# Ecommerce Analytics Report\n\n");
        out.push_str(&format!(
            "Window: {} to {}\n",
            self.filter.start_date, self.filter.end_date
        ));
        if self.filter.categories.is_empty() {
            out.push_str("Categories: all\n\n");
        } else {
            let names: Vec<&str> = self.filter.categories.iter().map(String::as_str).collect();
            out.push_str(&format!("Categories: {}\n\n", names.join(", ")));
        }

        out.push_str("## KPIs\n\n");
        out.push_str("| Metric | Value |\n| --- | --- |\n");
        out.push_str(&format!(
            "| Total Revenue | {} |\n",
            self.kpis.total_revenue_display()
        ));
        out.push_str(&format!("| Orders | {} |\n", self.kpis.order_count_display()));
        out.push_str(&format!(
            "| Avg Order Value (AOV) | {} |\n",
            self.kpis.average_order_value_display()
        ));
        out.push_str(&format!(
            "| Unique Customers | {} |\n\n",
            self.kpis.unique_customers_display()
        ));

        if !self.monthly.revenue.is_empty() {
            out.push_str("## Monthly Revenue and Orders\n\n");
            out.push_str("| Month | Revenue | Orders |\n| --- | --- | --- |\n");
            for (revenue, orders) in self.monthly.revenue.iter().zip(self.monthly.orders.iter()) {
                out.push_str(&format!(
                    "| {} | {} | {} |\n",
                    revenue.label,
                    format_currency(revenue.revenue),
                    orders.orders
                ));
            }
            out.push('\n');
        }

        if !self.top_categories.is_empty() {
            out.push_str("## Top Categories by Revenue\n\n");
            for (rank, entry) in self.top_categories.iter().enumerate() {
                out.push_str(&format!(
                    "{}. {} — {}\n",
                    rank + 1,
                    entry.category,
                    format_currency(entry.revenue)
                ));
            }
            out.push('\n');
        }

        out.push_str("## Automated Insights\n\n");
        if self.insights.is_empty() {
            out.push_str("No data for selected filters.\n");
        } else {
            for line in &self.insights {
                out.push_str(&format!("- {}\n", line));
            }
        }
        out
    }
}

pub struct AnalyticsProcessor;

impl AnalyticsProcessor {
    /// Runs the full pipeline for one query: filter, KPIs, monthly series,
    /// category ranking, period comparisons, insight narration.
    pub fn run(records: &[OrderRecord], filter: &FilterSpec) -> Result<AnalyticsReport> {
        Self::run_with_top_n(records, filter, DEFAULT_TOP_CATEGORIES)
    }

    pub fn run_with_top_n(
        records: &[OrderRecord],
        filter: &FilterSpec,
        top_n: usize,
    ) -> Result<AnalyticsReport> {
        let subset = filter_records(records, filter)?;
        info!(
            "Analyzing {} of {} records between {} and {}",
            subset.len(),
            records.len(),
            filter.start_date,
            filter.end_date
        );

        let kpis = compute_kpis(&subset);
        let monthly = bucket_by_month(&subset);
        let top_categories = rank_categories(&subset, top_n);
        let comparisons = compare_periods(&subset);
        let insights = narrate(&comparisons, &top_categories);

        debug!(
            "Report spans {} months, {} ranked categories, {} insight lines",
            monthly.revenue.len(),
            top_categories.len(),
            insights.len()
        );

        Ok(AnalyticsReport {
            filter: filter.clone(),
            kpis,
            monthly,
            top_categories,
            comparisons,
            insights,
        })
    }
}

pub fn analyze_orders(records: &[OrderRecord], filter: &FilterSpec) -> Result<AnalyticsReport> {
    AnalyticsProcessor::run(records, filter)
}

pub fn analyze_orders_with_top_n(
    records: &[OrderRecord],
    filter: &FilterSpec,
    top_n: usize,
) -> Result<AnalyticsReport> {
    AnalyticsProcessor::run_with_top_n(records, filter, top_n)
}
